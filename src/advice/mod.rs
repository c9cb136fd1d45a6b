//! # Módulo Advice: Documentos de Conselho
//!
//! Agrupa o [`TemplateBank`] (um documento Markdown por tópico) e o tipo
//! [`Advice`], o resultado detalhado devolvido pelo motor.

/// Sub-módulo com os templates Markdown e o [`TemplateBank`].
pub mod templates;

use serde::Serialize;

use crate::core::{Classification, Species, Topic};

pub use templates::TemplateBank;

/// De onde veio o texto de um [`Advice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceOrigin {
    /// Template do tópico classificado (modo mock ou fallback de backend).
    Template,
    /// Backend de geração (modo hybrid).
    Backend,
    /// Documento genérico após falha interna.
    Fallback,
}

/// Resposta detalhada do motor: texto Markdown + metadados da classificação.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Advice {
    pub topic: Topic,
    pub species: Species,
    pub text: String,
    pub origin: AdviceOrigin,
}

impl Advice {
    pub fn new(classification: Classification, text: String, origin: AdviceOrigin) -> Self {
        Self {
            topic: classification.topic,
            species: classification.species,
            text,
            origin,
        }
    }
}
