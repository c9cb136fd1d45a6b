//! # Requisição de Prompt
//!
//! [`PromptRequest`] é a única entrada do motor de respostas. Não tem
//! identidade nem é persistida: vive apenas durante a chamada.

use serde::Deserialize;

/// Temperatura usada pelos quatro pontos de entrada do assistente.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Entrada do [`ResponseEngine`](crate::engine::ResponseEngine).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PromptRequest {
    /// Texto livre do prompt. Pode ser vazio (cai em `general`/`pet`).
    #[serde(default)]
    pub text: String,
    /// Espécie declarada pelo chamador. Só é consultada quando o texto
    /// não menciona nenhuma espécie.
    #[serde(default)]
    pub species: Option<String>,
    /// Knob de temperatura, inerte no modo mock.
    #[serde(default)]
    pub temperature_hint: Option<f32>,
}

impl PromptRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            species: None,
            temperature_hint: None,
        }
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature_hint = Some(temperature);
        self
    }

    /// Opções repassadas à fonte de conselhos.
    pub fn options(&self) -> GenerationOptions {
        GenerationOptions {
            temperature: self.temperature_hint,
        }
    }

    /// Primeiros 100 caracteres do texto, para logs.
    pub fn preview(&self) -> &str {
        match self.text.char_indices().nth(100) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }
}

/// Opções de geração levadas até o backend.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GenerationOptions {
    pub temperature: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_fields() {
        let req = PromptRequest::new("my dog").with_species("dog").with_temperature(0.3);
        assert_eq!(req.species.as_deref(), Some("dog"));
        assert_eq!(req.options().temperature, Some(0.3));
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        let long = "é".repeat(150);
        let req = PromptRequest::new(long);
        assert_eq!(req.preview().chars().count(), 100);

        let short = PromptRequest::new("oi");
        assert_eq!(short.preview(), "oi");
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let req: PromptRequest = serde_json::from_str(r#"{"text":"hello"}"#).unwrap();
        assert_eq!(req.text, "hello");
        assert!(req.species.is_none());
        assert!(req.temperature_hint.is_none());

        let empty: PromptRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.text, "");
    }
}
