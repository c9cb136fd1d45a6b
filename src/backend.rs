//! # Fontes de Conselho: Templates e o Ponto de Extensão de Backend
//!
//! [`AdviceSource`] é a costura entre o motor e quem produz o texto.
//! O motor classifica o prompt e pede o texto à fonte; trocar a fonte
//! não muda nem o classificador, nem o banco de templates, nem o
//! contrato externo.
//!
//! | Fonte | Mode | Bloqueia? |
//! |-------|------|-----------|
//! | [`MockSource`] | `MockOnly` (e fallback do `Hybrid`) | não |
//! | [`SimulatedBackend`] | `Hybrid` | sim, `latency` |
//!
//! Um backend de geração real (chamada de rede) entraria como mais uma
//! implementação do trait.

use std::time::Duration;

use crate::advice::TemplateBank;
use crate::core::error::Result;
use crate::core::{Classification, GenerationOptions};

/// Produz o texto de conselho para um prompt já classificado.
pub trait AdviceSource: Send + Sync {
    /// Nome curto, usado em logs.
    fn name(&self) -> &'static str;

    /// Setup único, chamado pela guarda de ciclo de vida.
    fn warm_up(&self) -> Result<()> {
        Ok(())
    }

    fn generate(
        &self,
        prompt: &str,
        classification: Classification,
        options: &GenerationOptions,
    ) -> Result<String>;
}

/// Fonte mock: renderiza o template do tópico classificado.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockSource {
    bank: TemplateBank,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdviceSource for MockSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn generate(
        &self,
        _prompt: &str,
        classification: Classification,
        _options: &GenerationOptions,
    ) -> Result<String> {
        self.bank.try_render(classification.topic, classification.species)
    }
}

/// Backend simulado do modo `Hybrid`.
///
/// Finge uma chamada de rede dormindo `latency` e devolve o mesmo texto
/// dos templates. Só deve ser chamado fora do runtime async
/// (`spawn_blocking`).
#[derive(Clone, Debug)]
pub struct SimulatedBackend {
    bank: TemplateBank,
    latency: Duration,
}

impl SimulatedBackend {
    pub fn new(latency: Duration) -> Self {
        Self {
            bank: TemplateBank::new(),
            latency,
        }
    }
}

impl AdviceSource for SimulatedBackend {
    fn name(&self) -> &'static str {
        "simulated-backend"
    }

    fn generate(
        &self,
        _prompt: &str,
        classification: Classification,
        options: &GenerationOptions,
    ) -> Result<String> {
        tracing::debug!(
            latency_ms = self.latency.as_millis() as u64,
            temperature = ?options.temperature,
            "Gerando conteúdo via backend simulado..."
        );
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        let text = self.bank.try_render(classification.topic, classification.species)?;
        tracing::debug!("Conteúdo gerado pelo backend simulado");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Species, Topic};

    #[test]
    fn mock_source_renders_template() {
        let source = MockSource::new();
        let c = Classification {
            topic: Topic::Diet,
            species: Species::Cat,
        };
        let text = source.generate("", c, &GenerationOptions::default()).unwrap();
        assert_eq!(text, TemplateBank::new().render(Topic::Diet, Species::Cat));
        assert!(source.warm_up().is_ok());
    }

    #[test]
    fn simulated_backend_matches_mock_text() {
        let backend = SimulatedBackend::new(Duration::ZERO);
        let c = Classification {
            topic: Topic::Behavior,
            species: Species::Dog,
        };
        let options = GenerationOptions { temperature: Some(0.3) };
        let text = backend.generate("dog behavior", c, &options).unwrap();
        assert!(text.contains("common in dogs"));
    }
}
