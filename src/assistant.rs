//! # Assistente de Saúde Pet: Os Quatro Pontos de Entrada
//!
//! Adaptadores finos chamados pela UI (sinais vitais, atividade, dieta,
//! prontuário). Cada um monta um prompt em linguagem natural e delega
//! ao [`ResponseEngine::respond`].
//!
//! | Entrada | Tela de origem | Palavra-chave garantida no prompt |
//! |---------|----------------|-----------------------------------|
//! | [`PetHealthAssistant::analyze_symptoms`] | Sinais vitais | `symptoms` |
//! | [`PetHealthAssistant::analyze_behavior`] | Atividade | `behavior` |
//! | [`PetHealthAssistant::recommend_diet`] | Dieta | `dietary` |
//! | [`PetHealthAssistant::analyze_medical_history`] | Prontuário | `medical` |
//!
//! A espécie entra no prompt pelo texto (`for a dog`). O texto livre do
//! usuário também entra no prompt e participa da classificação: um
//! "Health Issues: symptoms of..." na dieta classifica como sintomas.

use std::sync::Arc;

use serde::Deserialize;

use crate::advice::Advice;
use crate::core::{PromptRequest, DEFAULT_TEMPERATURE};
use crate::engine::ResponseEngine;

/// Perfil do pet usado para recomendações de dieta.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PetProfile {
    /// Espécie em texto livre ("dog", "cat", ...).
    pub species: String,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub activity_level: Option<String>,
    #[serde(default)]
    pub health_issues: Option<String>,
}

/// Um registro do prontuário do pet.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MedicalRecord {
    pub date: String,
    pub record_type: String,
    pub details: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Campo opcional não vazio, ou o texto padrão.
fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}

/// Prompt de análise de sintomas.
pub fn symptoms_prompt(species: &str, symptoms: &str) -> PromptRequest {
    let text = format!(
        "You are a veterinary assistant AI. Analyze the following symptoms for a {species} and provide:
1. Possible causes
2. Recommendations for care
3. When to seek veterinary attention
4. Level of urgency (low, moderate, high)

Symptoms: {symptoms}

Format your response in Markdown with clear headings and bullet points. Remind the pet owner that this is not a substitute for professional veterinary care."
    );
    PromptRequest::new(text)
        .with_species(species)
        .with_temperature(DEFAULT_TEMPERATURE)
}

/// Prompt de análise de comportamento.
pub fn behavior_prompt(species: &str, behavior: &str) -> PromptRequest {
    let text = format!(
        "You are a pet behavior specialist AI. Analyze the following behavior for a {species} and provide:
1. An assessment of the behavior
2. Recommendations for addressing it
3. Whether the behavior is concerning

Behavior description: {behavior}

Format your response in Markdown with clear headings and bullet points."
    );
    PromptRequest::new(text)
        .with_species(species)
        .with_temperature(DEFAULT_TEMPERATURE)
}

/// Prompt de recomendação de dieta.
pub fn diet_prompt(profile: &PetProfile) -> PromptRequest {
    let text = format!(
        "You are a pet nutrition specialist AI. Provide dietary recommendations for a {species} with the following characteristics:
- Age: {age}
- Weight: {weight}
- Activity Level: {activity}
- Health Issues: {issues}

Include:
1. Daily caloric intake
2. Ideal food composition (protein, fat, carbs)
3. Specific recommendations
4. Foods to avoid

Format your response in Markdown with clear headings and bullet points.",
        species = profile.species,
        age = or_default(&profile.age, "Not specified"),
        weight = or_default(&profile.weight, "Not specified"),
        activity = or_default(&profile.activity_level, "Not specified"),
        issues = or_default(&profile.health_issues, "None specified"),
    );
    PromptRequest::new(text)
        .with_species(profile.species.clone())
        .with_temperature(DEFAULT_TEMPERATURE)
}

/// Prompt de análise do histórico médico.
///
/// Cada registro vira um bloco `Date/Type/Details/Notes`, separados por `---`.
pub fn medical_history_prompt(records: &[MedicalRecord]) -> PromptRequest {
    let formatted = records
        .iter()
        .map(|r| {
            format!(
                "Date: {}\nType: {}\nDetails: {}\nNotes: {}\n",
                r.date,
                r.record_type,
                r.details,
                or_default(&r.notes, "None")
            )
        })
        .collect::<Vec<_>>()
        .join("\n---\n");

    let text = format!(
        "You are a veterinary health AI assistant. Analyze the following medical history records and provide:
1. Key observations
2. Recommendations for follow-up care
3. Preventive care suggestions

Medical Records:
{formatted}

Format your response in Markdown with clear headings and bullet points. Be concise but thorough."
    );
    PromptRequest::new(text).with_temperature(DEFAULT_TEMPERATURE)
}

/// Fachada com os quatro pontos de entrada da UI.
#[derive(Clone)]
pub struct PetHealthAssistant {
    engine: Arc<ResponseEngine>,
}

impl PetHealthAssistant {
    pub fn new(engine: Arc<ResponseEngine>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Arc<ResponseEngine> {
        &self.engine
    }

    /// Prompt livre, sem montagem: vai direto ao motor.
    pub fn ask(&self, request: &PromptRequest) -> Advice {
        self.engine.respond_detailed(request)
    }

    pub fn analyze_symptoms(&self, species: &str, symptoms: &str) -> String {
        self.symptoms_advice(species, symptoms).text
    }

    pub fn analyze_behavior(&self, species: &str, behavior: &str) -> String {
        self.behavior_advice(species, behavior).text
    }

    pub fn recommend_diet(&self, profile: &PetProfile) -> String {
        self.diet_advice(profile).text
    }

    pub fn analyze_medical_history(&self, records: &[MedicalRecord]) -> String {
        self.medical_history_advice(records).text
    }

    // Variantes com tópico, espécie e origem, usadas pela camada web.

    pub fn symptoms_advice(&self, species: &str, symptoms: &str) -> Advice {
        self.ask(&symptoms_prompt(species, symptoms))
    }

    pub fn behavior_advice(&self, species: &str, behavior: &str) -> Advice {
        self.ask(&behavior_prompt(species, behavior))
    }

    pub fn diet_advice(&self, profile: &PetProfile) -> Advice {
        self.ask(&diet_prompt(profile))
    }

    pub fn medical_history_advice(&self, records: &[MedicalRecord]) -> Advice {
        self.ask(&medical_history_prompt(records))
    }
}
