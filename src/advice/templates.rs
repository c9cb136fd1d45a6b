//! # Banco de Templates: Os Documentos de Conselho
//!
//! Um documento Markdown fixo por [`Topic`], com pontos de substituição
//! para a espécie. Os templates são `&'static str` definidos em tempo
//! de compilação e nunca mudam em runtime.
//!
//! ## Placeholders
//!
//! | Placeholder | Valor |
//! |-------------|-------|
//! | `{species}` | `dog`, `cat` ou `pet` |
//! | `{calories}` | faixa calórica diária (só em `diet`) |
//!
//! ## Faixas Calóricas
//!
//! | Espécie | Faixa |
//! |---------|-------|
//! | `cat` | 250-300 |
//! | `dog`, `pet` | 400-900 |

use crate::core::error::{EngineError, Result};
use crate::core::{Species, Topic};

const SYMPTOMS_TEMPLATE: &str = "## Analysis of {species}'s Symptoms

### Possible Causes:
1. Respiratory infection (most likely)
2. Allergic reaction
3. Heart condition

### Recommended Actions:
1. Ensure your {species} is getting plenty of rest
2. Make sure fresh water is available
3. Monitor breathing rate and energy levels
4. Schedule a veterinary appointment within 48 hours

### Urgency Level: Moderate

**Important:** This is not a substitute for professional veterinary care. If symptoms worsen, seek immediate veterinary attention.";

const BEHAVIOR_TEMPLATE: &str = "## Behavior Analysis

### Assessment:
This behavior is common in {species}s and typically indicates territorial protection instinct.

### Recommendations:
1. Gradual desensitization training
2. Positive reinforcement when calm around triggers
3. Consistent daily exercise to reduce anxiety
4. Consider a calming vest or supplement

### Is this concerning?
Mildly concerning if increasing in frequency or intensity, but generally manageable with proper training.";

const DIET_TEMPLATE: &str = "## Dietary Recommendations for your {species}

### Daily Caloric Intake:
{calories} calories based on weight, age and activity level

### Ideal Food Composition:
- Protein: 25-30%
- Fats: 15-20%
- Carbohydrates: Limited amounts

### Specific Recommendations:
1. High-quality {species} food with real meat as first ingredient
2. Avoid fillers like corn and wheat
3. Add omega-3 supplements for coat health
4. Ensure adequate hydration

### Foods to Avoid:
- Chocolate
- Onions/Garlic
- Grapes/Raisins
- Xylitol (artificial sweetener)
- Alcohol";

const MEDICAL_TEMPLATE: &str = "## Medical History Analysis for your {species}

### Key Observations:
1. Consistent vaccination schedule (good)
2. Recent increase in mild symptoms
3. Weight has been stable over time

### Recommendations:
1. Continue regular check-ups
2. Consider blood work at next appointment
3. Monitor for any changes in eating/drinking habits
4. Dental cleaning recommended within next 6 months

### Preventive Care Suggestions:
1. Monthly parasite prevention
2. Regular dental care
3. Age-appropriate screening tests
4. Maintain healthy weight through diet and exercise";

const GENERAL_TEMPLATE: &str = "I've analyzed the information and have several recommendations for your {species}'s health and wellbeing. Please consult with your veterinarian for personalized advice.";

/// Faixa calórica diária declarada no template de dieta.
pub fn caloric_range(species: Species) -> &'static str {
    match species {
        Species::Cat => "250-300",
        Species::Dog | Species::Pet => "400-900",
    }
}

/// Banco de templates: mapeamento total `Topic → documento`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateBank;

impl TemplateBank {
    pub fn new() -> Self {
        Self
    }

    /// Template cru (com placeholders) de um tópico.
    pub fn template(&self, topic: Topic) -> &'static str {
        match topic {
            Topic::Symptoms => SYMPTOMS_TEMPLATE,
            Topic::Behavior => BEHAVIOR_TEMPLATE,
            Topic::Diet => DIET_TEMPLATE,
            Topic::Medical => MEDICAL_TEMPLATE,
            Topic::General => GENERAL_TEMPLATE,
        }
    }

    /// Renderiza o documento do tópico para a espécie. Nunca falha.
    pub fn render(&self, topic: Topic, species: Species) -> String {
        self.template(topic)
            .replace("{species}", species.as_str())
            .replace("{calories}", caloric_range(species))
    }

    /// Como [`render`](Self::render), mas confere que nenhum placeholder
    /// sobreviveu à substituição.
    pub fn try_render(&self, topic: Topic, species: Species) -> Result<String> {
        let text = self.render(topic, species);
        if let Some(start) = text.find('{') {
            let end = text[start..].find('}').map_or(text.len(), |e| start + e + 1);
            return Err(EngineError::Render(format!(
                "unresolved placeholder {} in {} template",
                &text[start..end],
                topic
            )));
        }
        Ok(text)
    }

    /// Documento de fallback genérico (`general` para `pet`).
    pub fn fallback(&self) -> String {
        self.render(Topic::General, Species::Pet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_renders_without_placeholders() {
        let bank = TemplateBank::new();
        for topic in Topic::ALL {
            for species in Species::ALL {
                let text = bank.try_render(topic, species).unwrap();
                assert!(!text.is_empty());
                assert!(!text.contains('{') && !text.contains('}'), "{topic}/{species}: {text}");
            }
        }
    }

    #[test]
    fn every_template_has_a_species_slot() {
        let bank = TemplateBank::new();
        for topic in Topic::ALL {
            assert!(bank.template(topic).contains("{species}"), "{topic}");
        }
    }

    #[test]
    fn species_produce_distinct_text() {
        let bank = TemplateBank::new();
        for topic in Topic::ALL {
            let dog = bank.render(topic, Species::Dog);
            let cat = bank.render(topic, Species::Cat);
            let pet = bank.render(topic, Species::Pet);
            assert_ne!(dog, cat, "{topic}");
            assert_ne!(dog, pet, "{topic}");
            assert_ne!(cat, pet, "{topic}");
        }
    }

    #[test]
    fn diet_caloric_range_differs_by_species() {
        let bank = TemplateBank::new();
        let dog = bank.render(Topic::Diet, Species::Dog);
        let cat = bank.render(Topic::Diet, Species::Cat);
        assert!(dog.contains("400-900 calories"));
        assert!(cat.contains("250-300 calories"));
        assert!(!cat.contains("400-900"));
    }

    #[test]
    fn diet_lists_foods_to_avoid() {
        let text = TemplateBank::new().render(Topic::Diet, Species::Cat);
        assert!(text.contains("### Foods to Avoid:"));
        assert!(text.contains("Chocolate"));
        assert!(text.contains("Grapes/Raisins"));
    }

    #[test]
    fn symptoms_template_has_sections_and_urgency() {
        let text = TemplateBank::new().render(Topic::Symptoms, Species::Dog);
        assert!(text.starts_with("## Analysis of dog's Symptoms"));
        assert!(text.contains("Possible Causes"));
        assert!(text.contains("Recommended Actions"));
        assert!(text.contains("Urgency Level: Moderate"));
    }

    #[test]
    fn fallback_is_general_for_pet() {
        let bank = TemplateBank::new();
        assert_eq!(bank.fallback(), bank.render(Topic::General, Species::Pet));
        assert!(bank.fallback().contains("your pet's health"));
    }
}
