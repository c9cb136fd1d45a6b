//! # Configuração Estática do Motor
//!
//! O único ponto de configuração do motor é o [`Mode`], escolhido em
//! tempo de compilação: sem variáveis de ambiente, sem arquivo.
//!
//! | Mode | Fonte de conselhos | Fallback |
//! |------|-------------------|----------|
//! | `MockOnly` | [`MockSource`](crate::backend::MockSource) | documento genérico |
//! | `Hybrid` | [`SimulatedBackend`](crate::backend::SimulatedBackend) | template do tópico, depois genérico |
//!
//! A feature cargo `hybrid` troca o default para `Hybrid`.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Endereço de bind do servidor HTTP.
pub const BIND_ADDR: &str = "0.0.0.0:3000";

/// Latência do backend simulado (a chamada de rede fingida).
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(800);

/// Modo de operação do motor de respostas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Todas as respostas vêm dos templates estáticos.
    MockOnly,
    /// Backend de geração com templates como fallback.
    Hybrid,
}

impl Mode {
    #[cfg(not(feature = "hybrid"))]
    pub const DEFAULT: Mode = Mode::MockOnly;
    #[cfg(feature = "hybrid")]
    pub const DEFAULT: Mode = Mode::Hybrid;

    pub fn uses_backend(&self) -> bool {
        matches!(self, Mode::Hybrid)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::DEFAULT
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::MockOnly => f.write_str("mock-only"),
            Mode::Hybrid => f.write_str("hybrid"),
        }
    }
}

/// Configuração do [`ResponseEngine`](crate::engine::ResponseEngine).
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub mode: Mode,
    /// Se falhas do backend caem no template do tópico. Desligado, qualquer
    /// falha vai direto ao documento genérico.
    pub mock_fallback: bool,
    /// Latência do [`SimulatedBackend`](crate::backend::SimulatedBackend).
    pub backend_latency: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: Mode::DEFAULT,
            mock_fallback: true,
            backend_latency: SIMULATED_LATENCY,
        }
    }
}

impl EngineConfig {
    pub fn mock_only() -> Self {
        Self {
            mode: Mode::MockOnly,
            ..Self::default()
        }
    }

    pub fn hybrid() -> Self {
        Self {
            mode: Mode::Hybrid,
            ..Self::default()
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.backend_latency = latency;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_fallback_enabled() {
        let config = EngineConfig::default();
        assert_eq!(config.mode, Mode::DEFAULT);
        assert!(config.mock_fallback);
        assert_eq!(config.backend_latency, SIMULATED_LATENCY);
    }

    #[cfg(not(feature = "hybrid"))]
    #[test]
    fn default_mode_is_mock_only() {
        assert_eq!(Mode::default(), Mode::MockOnly);
        assert!(!Mode::default().uses_backend());
    }

    #[test]
    fn mode_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Mode::MockOnly).unwrap(), "\"mock_only\"");
        assert_eq!(Mode::Hybrid.to_string(), "hybrid");
    }
}
