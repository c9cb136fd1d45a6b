//! # Estado da Aplicação Web
//!
//! ```text
//! AppState
//!  ├── engine    → Arc<ResponseEngine>     (motor + EngineState)
//!  └── assistant → PetHealthAssistant      (os quatro pontos de entrada)
//! ```
//!
//! O servidor aceita conexões antes do setup do motor terminar: quem
//! chegar antes dispara a inicialização lazy dentro do próprio motor.

use std::sync::Arc;

use crate::assistant::PetHealthAssistant;
use crate::engine::ResponseEngine;

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// Motor de respostas compartilhado.
    pub engine: Arc<ResponseEngine>,
    /// Fachada dos pontos de entrada, sobre o mesmo motor.
    pub assistant: PetHealthAssistant,
}

impl AppState {
    pub fn new(engine: Arc<ResponseEngine>) -> Self {
        Self {
            assistant: PetHealthAssistant::new(engine.clone()),
            engine,
        }
    }
}
