//! # Classificador de Prompts: Tópico e Espécie
//!
//! O [`PromptClassifier`] reduz um texto livre a um par
//! [`Classification`] `(Topic, Species)` por **substring matching**
//! case-insensitive contra tabelas fixas de palavras-chave.
//!
//! ## Tabelas de Regras (primeira que casa vence)
//!
//! | Ordem | Palavras-chave | Resultado |
//! |-------|----------------|-----------|
//! | Espécie 1 | `cat` | `Species::Cat` |
//! | Espécie 2 | `dog` | `Species::Dog` |
//! | - | (nenhuma) | `Species::Pet` |
//! | Tópico 1 | `symptoms` | `Topic::Symptoms` |
//! | Tópico 2 | `behavior`, `behaviour` | `Topic::Behavior` |
//! | Tópico 3 | `diet`, `nutrition` | `Topic::Diet` |
//! | Tópico 4 | `medical`, `health` | `Topic::Medical` |
//! | - | (nenhuma) | `Topic::General` |
//!
//! ## Propriedades
//!
//! - **Total**: todo texto (inclusive `""`) recebe exatamente um par
//! - **Determinístico**: mesma entrada, mesmo par
//! - **Sem combinação**: "symptoms and diet" é `symptoms`, ponto
//!
//! A espécie é detectada antes e independentemente do tópico. Como o
//! matching é por substring, palavras como "medication" contêm `cat`.

use crate::core::{Classification, Species, Topic};

/// Regras de espécie em ordem de precedência.
const SPECIES_RULES: &[(Species, &[&str])] = &[
    (Species::Cat, &["cat"]),
    (Species::Dog, &["dog"]),
];

/// Regras de tópico em ordem de precedência.
const TOPIC_RULES: &[(Topic, &[&str])] = &[
    (Topic::Symptoms, &["symptoms"]),
    (Topic::Behavior, &["behavior", "behaviour"]),
    (Topic::Diet, &["diet", "nutrition"]),
    (Topic::Medical, &["medical", "health"]),
];

/// Primeira regra cuja lista de palavras-chave aparece em `text_lower`.
fn first_match<T: Copy>(rules: &[(T, &[&str])], text_lower: &str) -> Option<T> {
    rules
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| text_lower.contains(*kw)))
        .map(|(value, _)| *value)
}

/// Classificador de prompts por palavras-chave.
///
/// Struct sem estado: as tabelas são `const`. Existe como tipo para
/// que o motor o receba por composição, como os demais componentes.
#[derive(Clone, Copy, Debug, Default)]
pub struct PromptClassifier;

impl PromptClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classifica o texto. Nunca falha.
    pub fn classify(&self, text: &str) -> Classification {
        let text_lower = text.to_lowercase();

        let species = first_match(SPECIES_RULES, &text_lower).unwrap_or(Species::Pet);
        let topic = first_match(TOPIC_RULES, &text_lower).unwrap_or(Topic::General);

        tracing::debug!(%topic, %species, "Prompt classificado");
        Classification { topic, species }
    }

    /// Classifica usando a espécie declarada como segunda opção.
    ///
    /// O texto sempre vence: a declaração só é consultada quando o texto
    /// cai no fallback `pet`, e passa pela mesma tabela de espécies.
    pub fn classify_with_hint(&self, text: &str, declared_species: Option<&str>) -> Classification {
        let mut classification = self.classify(text);
        if classification.species == Species::Pet {
            if let Some(declared) = declared_species {
                let declared_lower = declared.to_lowercase();
                if let Some(species) = first_match(SPECIES_RULES, &declared_lower) {
                    classification.species = species;
                }
            }
        }
        classification
    }
}
