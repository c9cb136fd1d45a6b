//! # Tópicos e Espécies: As Duas Dimensões da Classificação
//!
//! Todo prompt recebido pelo assistente é reduzido a um par fechado
//! `(Topic, Species)`. O par decide **qual** documento de conselho é
//! devolvido e **como** ele é redigido.
//!
//! | Tipo | Valores | Default |
//! |------|---------|---------|
//! | [`Topic`] | `symptoms`, `behavior`, `diet`, `medical`, `general` | `general` |
//! | [`Species`] | `dog`, `cat`, `pet` | `pet` |
//!
//! Ambos os enums são fechados: não existe "tópico desconhecido". A
//! ausência de palavras-chave cai no default, nunca em erro.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categoria de conselho pedida pelo prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    /// Análise de sintomas (causas prováveis, ações, urgência).
    Symptoms,
    /// Análise de comportamento.
    Behavior,
    /// Recomendações de dieta e nutrição.
    Diet,
    /// Análise de histórico médico e cuidados preventivos.
    Medical,
    /// Aviso genérico: o default quando nada casa.
    General,
}

impl Topic {
    /// Todos os tópicos, na ordem de precedência da classificação.
    pub const ALL: [Topic; 5] = [
        Topic::Symptoms,
        Topic::Behavior,
        Topic::Diet,
        Topic::Medical,
        Topic::General,
    ];

    /// Tag lowercase usada em logs e na API JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Symptoms => "symptoms",
            Topic::Behavior => "behavior",
            Topic::Diet => "diet",
            Topic::Medical => "medical",
            Topic::General => "general",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Espécie para a qual o conselho é redigido.
///
/// `Pet` é o fallback genérico quando o texto não menciona cão nem gato.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Pet,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Dog, Species::Cat, Species::Pet];

    /// Nome da espécie como aparece dentro dos templates ("dog", "cat", "pet").
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Pet => "pet",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resultado do classificador: exatamente um tópico e uma espécie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub topic: Topic,
    pub species: Species,
}

impl Classification {
    /// Par usado pelo documento de fallback genérico.
    pub const GENERIC: Classification = Classification {
        topic: Topic::General,
        species: Species::Pet,
    };
}
