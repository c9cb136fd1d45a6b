//! # Templates Maud: Fragmentos HTMX do Chat
//!
//! O endpoint `/chat` devolve um fragmento HTML com a mensagem do usuário
//! e a resposta do assistente. O Markdown vai cru dentro de um
//! `<pre class="advice-markdown">` e a UI decide como renderizá-lo.
//!
//! ```text
//! div.message.user-message       ← texto do usuário
//! div.message.assistant-message  ← tópico/espécie + Markdown
//! ```

use maud::{html, Markup};

use crate::advice::{Advice, AdviceOrigin};

/// Rótulo exibido acima da resposta.
fn origin_label(origin: AdviceOrigin) -> &'static str {
    match origin {
        AdviceOrigin::Template => "Assistente",
        AdviceOrigin::Backend => "Assistente (IA)",
        AdviceOrigin::Fallback => "Assistente (fallback)",
    }
}

/// Fragmento de uma troca no chat: pergunta do usuário + conselho.
pub fn chat_exchange(user_text: &str, advice: &Advice) -> Markup {
    html! {
        div class="message user-message" {
            div class="message-role" { "Você" }
            div class="message-content" { (user_text) }
        }
        div class=(format!("message assistant-message topic-{}", advice.topic)) {
            div class="message-role" { (origin_label(advice.origin)) }
            div class="message-meta" {
                span class="advice-topic" { (advice.topic.as_str()) }
                " · "
                span class="advice-species" { (advice.species.as_str()) }
            }
            pre class="advice-markdown" { (advice.text) }
        }
    }
}
