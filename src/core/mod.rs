//! # Módulo Core: Tipos Fundamentais do Domínio
//!
//! Tipos compartilhados por todas as camadas do assistente de saúde pet:
//!
//! - [`Topic`]: categoria de conselho (sintomas, comportamento, dieta, médico, geral)
//! - [`Species`]: espécie para a qual o texto é redigido (cão, gato, pet genérico)
//! - [`Classification`]: o par `(Topic, Species)` produzido pelo classificador
//! - [`PromptRequest`]: a entrada do motor de respostas
//! - [`GenerationOptions`]: knobs repassados à fonte de conselhos
//! - [`EngineError`]: erros internos, nunca propagados ao chamador
//!
//! ## Fluxo
//!
//! ```text
//! PromptRequest ──► Classification ──► Template ──► String (Markdown)
//! ```

/// Sub-módulo com [`Topic`], [`Species`] e [`Classification`].
pub mod topic;

/// Sub-módulo com [`PromptRequest`] e [`GenerationOptions`].
pub mod request;

/// Sub-módulo com [`EngineError`].
pub mod error;

pub use error::EngineError;
pub use request::{GenerationOptions, PromptRequest, DEFAULT_TEMPERATURE};
pub use topic::{Classification, Species, Topic};
