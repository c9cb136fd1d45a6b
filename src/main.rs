#![allow(dead_code)]
#![allow(rustdoc::broken_intra_doc_links)]
//! # Pet Health Hub: Assistente de Conselhos
//!
//! **Ponto de entrada** do serviço de conselhos do Pet Health Hub: a UI
//! (sinais vitais, atividade, dieta, prontuário) chama este serviço para
//! obter textos Markdown de orientação sobre o pet.
//!
//! Não há inferência real: no modo padrão (`MockOnly`) cada prompt é
//! classificado por palavras-chave e respondido com um template fixo.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging
//!   ├── Cria EngineState (não inicializado) + ResponseEngine
//!   ├── Monta AppState e Router
//!   ├── Inicia servidor TCP (porta 3000)
//!   └── Spawn background:
//!       └── engine.ensure_initialized()
//! ```
//!
//! Requisições que chegam antes do setup em background disparam a
//! inicialização lazy; a guarda garante um único setup efetivo.
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! cargo run
//! RUST_LOG=debug cargo run
//! cargo run --features hybrid   # backend simulado + fallback
//!
//! curl -s localhost:3000/generate -H 'content-type: application/json' \
//!      -d '{"text":"What diet for my cat?"}'
//! ```

/// Módulo `core`: tipos do domínio (Topic, Species, PromptRequest, EngineError).
mod core;

/// Módulo `nlu`: classificador de prompts por palavras-chave.
mod nlu;

/// Módulo `advice`: banco de templates Markdown e o tipo Advice.
mod advice;

/// Módulo `lifecycle`: guarda de inicialização única (EngineState).
mod lifecycle;

/// Módulo `backend`: fontes de conselho (mock e backend simulado).
mod backend;

/// Módulo `config`: Mode e EngineConfig estáticos.
mod config;

/// Módulo `engine`: o motor de respostas com fallback garantido.
mod engine;

/// Módulo `assistant`: os quatro pontos de entrada usados pela UI.
mod assistant;

/// Módulo `web`: servidor axum e handlers HTTP.
mod web;

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::{EngineConfig, BIND_ADDR};
use crate::engine::ResponseEngine;
use crate::lifecycle::EngineState;
use crate::web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG controla o nível; default "info".
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = EngineConfig::default();
    tracing::info!(mode = %config.mode, "🐾 Pet Health Hub: Starting...");

    let engine = Arc::new(ResponseEngine::new(config, Arc::new(EngineState::new())));
    let app = web::create_router(AppState::new(engine.clone()));

    let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;
    tracing::info!("🚀 Server running at http://{}", BIND_ADDR);

    // Setup em background; o servidor já aceita conexões.
    tokio::task::spawn_blocking(move || {
        let result = engine.ensure_initialized();
        if result.initialized {
            tracing::info!(used_fallback_mode = result.used_fallback_mode, "✅ Advice service ready!");
        } else {
            tracing::warn!(error = ?result.error, "Inicialização falhou, respostas mock até o próximo retry");
        }
    });

    axum::serve(listener, app).await?;

    Ok(())
}
