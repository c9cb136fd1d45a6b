//! Erros internos do motor. Nenhum deles atravessa a fronteira de
//! [`ResponseEngine::respond`](crate::engine::ResponseEngine::respond):
//! lá são convertidos no documento de fallback genérico.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Setup failed: {0}")]
    Setup(String),

    #[error("Template render error: {0}")]
    Render(String),

    #[error("Advice source returned an empty response")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, EngineError>;
