//! # Motor de Respostas: Do Prompt ao Markdown
//!
//! O [`ResponseEngine`] é o coração do assistente: recebe um
//! [`PromptRequest`] e **sempre** devolve um documento Markdown não vazio.
//!
//! ## Fluxo de `respond`
//!
//! ```text
//! PromptRequest
//!   │
//!   ├── 1. Guarda de ciclo de vida (setup lazy, idempotente)
//!   │   └── falha → modo degradado (só templates), retry na próxima chamada
//!   │
//!   ├── 2. PromptClassifier → (Topic, Species)
//!   │
//!   ├── 3. AdviceSource::generate
//!   │   ├── MockOnly → MockSource (templates)
//!   │   └── Hybrid   → backend; falha + mock_fallback → template do tópico
//!   │
//!   └── 4. Texto devolvido ao chamador
//!
//! Qualquer erro ou pânico em 2 e 3 → documento genérico (general/pet). Nunca propaga.
//! ```
//!
//! ## Concorrência
//!
//! O motor é `Send + Sync` e compartilhado via `Arc`. O único estado
//! mutável é o [`EngineState`], serializado pela própria guarda.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::advice::{Advice, AdviceOrigin, TemplateBank};
use crate::backend::{AdviceSource, MockSource, SimulatedBackend};
use crate::config::{EngineConfig, Mode};
use crate::core::error::Result;
use crate::core::{Classification, EngineError, PromptRequest};
use crate::lifecycle::{EngineState, InitResult};
use crate::nlu::PromptClassifier;

/// Motor de respostas com fallback garantido.
pub struct ResponseEngine {
    config: EngineConfig,
    state: Arc<EngineState>,
    classifier: PromptClassifier,
    bank: TemplateBank,
    /// Fonte principal, escolhida pelo [`Mode`].
    source: Box<dyn AdviceSource>,
    /// Fonte de templates usada no modo degradado e no fallback do backend.
    mock: MockSource,
}

impl ResponseEngine {
    /// Cria o motor com a fonte padrão do modo configurado.
    pub fn new(config: EngineConfig, state: Arc<EngineState>) -> Self {
        let source: Box<dyn AdviceSource> = match config.mode {
            Mode::MockOnly => Box::new(MockSource::new()),
            Mode::Hybrid => Box::new(SimulatedBackend::new(config.backend_latency)),
        };
        Self::with_source(config, state, source)
    }

    /// Cria o motor com uma fonte arbitrária.
    pub fn with_source(
        config: EngineConfig,
        state: Arc<EngineState>,
        source: Box<dyn AdviceSource>,
    ) -> Self {
        Self {
            config,
            state,
            classifier: PromptClassifier::new(),
            bank: TemplateBank::new(),
            source,
            mock: MockSource::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn state(&self) -> &Arc<EngineState> {
        &self.state
    }

    /// Roda o setup da fonte uma única vez. Nunca falha.
    pub fn ensure_initialized(&self) -> InitResult {
        self.state
            .ensure_initialized(self.config.mode, || self.source.warm_up())
    }

    /// Contrato externo: prompt → Markdown não vazio.
    pub fn respond(&self, request: &PromptRequest) -> String {
        self.respond_detailed(request).text
    }

    /// Como [`respond`](Self::respond), com tópico, espécie e origem do texto.
    pub fn respond_detailed(&self, request: &PromptRequest) -> Advice {
        tracing::info!(prompt = %request.preview(), "Processando prompt");

        let degraded = if self.state.is_initialized() {
            false
        } else {
            tracing::info!("Serviço não inicializado, inicializando agora...");
            !self.ensure_initialized().initialized
        };

        let classification = self
            .classifier
            .classify_with_hint(&request.text, request.species.as_deref());

        // Uma fonte que entra em pânico não pode derrubar o chamador
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.generate(request, classification, degraded)
        }));

        match outcome {
            Ok(Ok(advice)) => {
                tracing::info!(
                    topic = %advice.topic,
                    species = %advice.species,
                    origin = ?advice.origin,
                    "Resposta gerada"
                );
                advice
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, source = self.source.name(), "Erro ao gerar resposta, usando fallback genérico");
                self.generic_fallback()
            }
            Err(payload) => {
                tracing::error!(
                    panic = panic_message(payload.as_ref()),
                    source = self.source.name(),
                    "Pânico na fonte de conselhos, usando fallback genérico"
                );
                self.generic_fallback()
            }
        }
    }

    fn generic_fallback(&self) -> Advice {
        Advice::new(
            Classification::GENERIC,
            self.bank.fallback(),
            AdviceOrigin::Fallback,
        )
    }

    fn generate(
        &self,
        request: &PromptRequest,
        classification: Classification,
        degraded: bool,
    ) -> Result<Advice> {
        let options = request.options();

        if degraded {
            tracing::warn!("Modo degradado: usando templates");
            let text = non_empty(self.mock.generate(&request.text, classification, &options)?)?;
            return Ok(Advice::new(classification, text, AdviceOrigin::Template));
        }

        let origin = if self.config.mode.uses_backend() {
            AdviceOrigin::Backend
        } else {
            AdviceOrigin::Template
        };

        match self
            .source
            .generate(&request.text, classification, &options)
            .and_then(non_empty)
        {
            Ok(text) => Ok(Advice::new(classification, text, origin)),
            Err(e) if self.config.mode.uses_backend() && self.config.mock_fallback => {
                tracing::warn!(error = %e, source = self.source.name(), "Falha no backend, usando template do tópico");
                let text = non_empty(self.mock.generate(&request.text, classification, &options)?)?;
                Ok(Advice::new(classification, text, AdviceOrigin::Template))
            }
            Err(e) => Err(e),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic"
    }
}

fn non_empty(text: String) -> Result<String> {
    if text.trim().is_empty() {
        Err(EngineError::EmptyResponse)
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GenerationOptions, Species, Topic};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    /// Fonte que sempre falha: injeção de falha na etapa de render.
    struct FailingSource {
        warm_up_fails: bool,
        warm_ups: AtomicU32,
    }

    impl FailingSource {
        fn new(warm_up_fails: bool) -> Self {
            Self {
                warm_up_fails,
                warm_ups: AtomicU32::new(0),
            }
        }
    }

    impl AdviceSource for FailingSource {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn warm_up(&self) -> Result<()> {
            self.warm_ups.fetch_add(1, Ordering::SeqCst);
            if self.warm_up_fails {
                Err(EngineError::Setup("backend unreachable".to_string()))
            } else {
                Ok(())
            }
        }

        fn generate(&self, _: &str, _: Classification, _: &GenerationOptions) -> Result<String> {
            Err(EngineError::Render("injected fault".to_string()))
        }
    }

    struct PanickingSource;

    impl AdviceSource for PanickingSource {
        fn name(&self) -> &'static str {
            "panicking"
        }

        fn generate(&self, _: &str, _: Classification, _: &GenerationOptions) -> Result<String> {
            panic!("backend exploded")
        }
    }

    struct EmptySource;

    impl AdviceSource for EmptySource {
        fn name(&self) -> &'static str {
            "empty"
        }

        fn generate(&self, _: &str, _: Classification, _: &GenerationOptions) -> Result<String> {
            Ok("   ".to_string())
        }
    }

    fn mock_engine() -> ResponseEngine {
        ResponseEngine::new(EngineConfig::mock_only(), Arc::new(EngineState::new()))
    }

    fn generic_text() -> String {
        TemplateBank::new().fallback()
    }

    #[test]
    fn respond_initializes_lazily_once() {
        let engine = mock_engine();
        assert!(!engine.state().is_initialized());

        engine.respond(&PromptRequest::new("hello"));
        engine.respond(&PromptRequest::new("hello again"));

        assert!(engine.state().is_initialized());
        assert_eq!(engine.state().setup_runs(), 1);
    }

    #[test]
    fn ensure_initialized_is_idempotent() {
        let engine = mock_engine();
        let first = engine.ensure_initialized();
        let second = engine.ensure_initialized();
        assert!(first.initialized && second.initialized);
        assert!(first.used_fallback_mode);
        assert_eq!(engine.state().setup_runs(), 1);
    }

    #[test]
    fn empty_prompt_returns_generic_disclaimer() {
        let advice = mock_engine().respond_detailed(&PromptRequest::new(""));
        assert_eq!(advice.topic, Topic::General);
        assert_eq!(advice.species, Species::Pet);
        assert_eq!(advice.origin, AdviceOrigin::Template);
        assert_eq!(advice.text, generic_text());
    }

    #[test]
    fn symptoms_prompt_for_dog() {
        let advice = mock_engine()
            .respond_detailed(&PromptRequest::new("My dog shows these symptoms: coughing"));
        assert_eq!(advice.topic, Topic::Symptoms);
        assert_eq!(advice.species, Species::Dog);
        assert!(advice.text.contains("Possible Causes"));
        assert!(advice.text.contains("Recommended Actions"));
    }

    #[test]
    fn declared_species_reaches_template() {
        let request = PromptRequest::new("nutrition advice").with_species("cat");
        let advice = mock_engine().respond_detailed(&request);
        assert_eq!(advice.topic, Topic::Diet);
        assert!(advice.text.contains("250-300"));
    }

    #[test]
    fn render_fault_returns_generic_fallback() {
        let engine = ResponseEngine::with_source(
            EngineConfig::mock_only(),
            Arc::new(EngineState::new()),
            Box::new(FailingSource::new(false)),
        );
        let advice = engine.respond_detailed(&PromptRequest::new("my cat diet"));
        assert_eq!(advice.origin, AdviceOrigin::Fallback);
        assert_eq!(advice.topic, Topic::General);
        assert_eq!(advice.species, Species::Pet);
        assert!(!advice.text.is_empty());
        assert_eq!(advice.text, generic_text());
    }

    #[test]
    fn panicking_source_returns_generic_fallback() {
        let engine = ResponseEngine::with_source(
            EngineConfig::mock_only(),
            Arc::new(EngineState::new()),
            Box::new(PanickingSource),
        );
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            engine.respond_detailed(&PromptRequest::new("dog diet"))
        }));
        let advice = outcome.expect("panic escaped the engine");
        assert_eq!(advice.origin, AdviceOrigin::Fallback);
        assert_eq!(advice.topic, Topic::General);
        assert_eq!(advice.text, generic_text());

        // o motor continua utilizável depois do pânico
        assert_eq!(engine.respond(&PromptRequest::new("dog diet")), generic_text());
    }

    #[test]
    fn hybrid_backend_failure_falls_back_to_topic_template() {
        let engine = ResponseEngine::with_source(
            EngineConfig::hybrid(),
            Arc::new(EngineState::new()),
            Box::new(FailingSource::new(false)),
        );
        let advice = engine.respond_detailed(&PromptRequest::new("my cat diet"));
        assert_eq!(advice.origin, AdviceOrigin::Template);
        assert_eq!(advice.topic, Topic::Diet);
        assert!(advice.text.contains("250-300"));
    }

    #[test]
    fn hybrid_without_mock_fallback_uses_generic_document() {
        let config = EngineConfig {
            mock_fallback: false,
            ..EngineConfig::hybrid()
        };
        let engine = ResponseEngine::with_source(
            config,
            Arc::new(EngineState::new()),
            Box::new(FailingSource::new(false)),
        );
        let text = engine.respond(&PromptRequest::new("my cat diet"));
        assert_eq!(text, generic_text());
    }

    #[test]
    fn failed_setup_degrades_and_retries() {
        let state = Arc::new(EngineState::new());
        let engine = ResponseEngine::with_source(
            EngineConfig::hybrid(),
            state.clone(),
            Box::new(FailingSource::new(true)),
        );

        let first = engine.respond_detailed(&PromptRequest::new("dog behavior"));
        assert_eq!(first.origin, AdviceOrigin::Template);
        assert_eq!(first.topic, Topic::Behavior);
        assert!(!state.is_initialized());

        engine.respond(&PromptRequest::new("dog behavior"));
        assert_eq!(state.setup_runs(), 2);
        assert!(state.last_result().unwrap().used_fallback_mode);
    }

    #[test]
    fn empty_source_output_is_treated_as_failure() {
        let engine = ResponseEngine::with_source(
            EngineConfig::mock_only(),
            Arc::new(EngineState::new()),
            Box::new(EmptySource),
        );
        let advice = engine.respond_detailed(&PromptRequest::new("dog diet"));
        assert_eq!(advice.origin, AdviceOrigin::Fallback);
        assert!(!advice.text.trim().is_empty());
    }

    #[test]
    fn hybrid_simulated_backend_marks_origin() {
        let engine = ResponseEngine::new(
            EngineConfig::hybrid().with_latency(Duration::ZERO),
            Arc::new(EngineState::new()),
        );
        let advice = engine.respond_detailed(&PromptRequest::new("cat medical history"));
        assert_eq!(advice.origin, AdviceOrigin::Backend);
        assert_eq!(advice.topic, Topic::Medical);
        assert_eq!(advice.species, Species::Cat);
        assert!(!engine.ensure_initialized().used_fallback_mode);
    }
}
