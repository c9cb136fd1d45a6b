//! # Módulo Web: A Superfície HTTP do Assistente
//!
//! Camada fina em **Axum** por onde a UI do Pet Health Hub chama o motor.
//!
//! ## Rotas
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ UI (SPA em outra origem → CORS liberado)                 │
//! ├──────────────────────────────────────────────────────────┤
//! │ Axum Router (este módulo)                                │
//! │  ├── GET  /status            → JSON: modo + init         │
//! │  ├── POST /generate          → JSON Advice (prompt livre)│
//! │  ├── POST /analyze/symptoms  → JSON Advice               │
//! │  ├── POST /analyze/behavior  → JSON Advice               │
//! │  ├── POST /recommend/diet    → JSON Advice               │
//! │  ├── POST /analyze/medical   → JSON Advice               │
//! │  └── POST /chat              → HTMX fragment (Maud)      │
//! ├──────────────────────────────────────────────────────────┤
//! │ tower_http: CorsLayer + TraceLayer                       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submódulos
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`templates`] | Fragmentos Maud do chat |

pub mod handlers;
pub mod state;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // ── API JSON ──────────────────────────────────────────
        .route("/status", get(handlers::model_status))
        .route("/generate", post(handlers::generate))
        .route("/analyze/symptoms", post(handlers::analyze_symptoms))
        .route("/analyze/behavior", post(handlers::analyze_behavior))
        .route("/recommend/diet", post(handlers::recommend_diet))
        .route("/analyze/medical", post(handlers::analyze_medical))
        // ── HTMX fragments ───────────────────────────────────
        .route("/chat", post(handlers::chat))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
