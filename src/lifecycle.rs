//! # Guarda de Ciclo de Vida: Inicialização Única do Motor
//!
//! [`EngineState`] registra se o setup do motor já foi concluído. É um
//! objeto explícito, compartilhado via `Arc` e injetado no motor na
//! construção: não existe singleton estático.
//!
//! ## Máquina de Estados
//!
//! ```text
//!                 ensure_initialized (ok)
//! Uninitialized ─────────────────────────► Initialized ──┐
//!   │     ▲                                      ▲       │ ensure_initialized
//!   └─────┘ ensure_initialized (falha)           └───────┘ (no-op)
//!           → modo degradado, retry na próxima chamada
//! ```
//!
//! ## Concorrência
//!
//! - Fast path: `AtomicBool` lido com `Acquire`, sem lock
//! - Slow path: `parking_lot::Mutex` mantido **durante** o setup, então
//!   chamadores concorrentes esperam e observam o mesmo estado final
//!
//! Resultado: no máximo um setup efetivo por processo no caminho de sucesso.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;

use crate::config::Mode;
use crate::core::EngineError;

/// Resultado de [`EngineState::ensure_initialized`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InitResult {
    /// `true` quando o estado está em `Initialized`.
    pub initialized: bool,
    /// `true` quando o motor responde só com templates, por configuração
    /// (`MockOnly`) ou porque o setup falhou.
    pub used_fallback_mode: bool,
    /// Mensagem do último erro de setup, se houve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Default)]
struct GuardInner {
    setup_runs: u32,
    last_result: Option<InitResult>,
}

/// Estado de ciclo de vida do motor, com check-and-set atômico.
#[derive(Default)]
pub struct EngineState {
    initialized: AtomicBool,
    inner: Mutex<GuardInner>,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Quantas vezes o setup foi de fato executado (sucessos + falhas).
    pub fn setup_runs(&self) -> u32 {
        self.inner.lock().setup_runs
    }

    /// Último resultado de inicialização, se alguma já foi tentada.
    pub fn last_result(&self) -> Option<InitResult> {
        self.inner.lock().last_result.clone()
    }

    /// Garante que o setup rodou. Idempotente e nunca falha.
    ///
    /// - Já inicializado → devolve o último resultado sem rodar `setup`
    /// - Não inicializado → roda `setup` sob o lock:
    ///   - `Ok` → `Initialized`, `used_fallback_mode = !mode.uses_backend()`
    ///   - `Err` → continua `Uninitialized`, `used_fallback_mode = true`
    pub fn ensure_initialized<F>(&self, mode: Mode, setup: F) -> InitResult
    where
        F: FnOnce() -> Result<(), EngineError>,
    {
        if self.is_initialized() {
            tracing::debug!("AI service already initialized");
            return self.already_initialized(mode);
        }

        let mut inner = self.inner.lock();

        // Outro chamador pode ter concluído o setup enquanto esperávamos o lock
        if self.is_initialized() {
            return inner
                .last_result
                .clone()
                .unwrap_or_else(|| initialized_result(mode));
        }

        inner.setup_runs += 1;
        tracing::info!(%mode, attempt = inner.setup_runs, "Inicializando serviço de conselhos...");

        let result = match setup() {
            Ok(()) => {
                let result = initialized_result(mode);
                self.initialized.store(true, Ordering::Release);
                tracing::info!(
                    %mode,
                    used_fallback_mode = result.used_fallback_mode,
                    "Serviço de conselhos inicializado"
                );
                result
            }
            Err(e) => {
                tracing::warn!(error = %e, "Falha ao inicializar, usando respostas mock");
                InitResult {
                    initialized: false,
                    used_fallback_mode: true,
                    error: Some(e.to_string()),
                    timestamp: Utc::now(),
                }
            }
        };

        inner.last_result = Some(result.clone());
        result
    }

    fn already_initialized(&self, mode: Mode) -> InitResult {
        let last = self.inner.lock().last_result.clone();
        match last {
            Some(last) => InitResult {
                timestamp: Utc::now(),
                ..last
            },
            None => initialized_result(mode),
        }
    }
}

fn initialized_result(mode: Mode) -> InitResult {
    InitResult {
        initialized: true,
        used_fallback_mode: !mode.uses_backend(),
        error: None,
        timestamp: Utc::now(),
    }
}
