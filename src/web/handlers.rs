//! # Handlers HTTP: Os Endpoints do Assistente
//!
//! Cada função pública é um handler Axum mapeado em
//! [`super::create_router()`].
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `model_status` | GET | JSON | Modo e estado de inicialização |
//! | `generate` | POST | JSON | Prompt livre (`PromptRequest`) |
//! | `analyze_symptoms` | POST | JSON | Tela de sinais vitais |
//! | `analyze_behavior` | POST | JSON | Tela de atividade |
//! | `recommend_diet` | POST | JSON | Tela de dieta |
//! | `analyze_medical` | POST | JSON | Tela de prontuário |
//! | `chat` | POST | HTMX fragment | Chat livre |
//!
//! ## Execução Bloqueante
//!
//! O motor é síncrono e, no modo `Hybrid`, o backend simulado dorme.
//! Toda chamada passa pelo [`PetHealthAssistant`] dentro de
//! `spawn_blocking`; se a task falhar, o handler responde com o
//! documento genérico.

use axum::extract::State;
use axum::response::Html;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::state::AppState;
use super::templates;
use crate::advice::{Advice, AdviceOrigin, TemplateBank};
use crate::assistant::{MedicalRecord, PetHealthAssistant, PetProfile};
use crate::config::Mode;
use crate::core::{Classification, PromptRequest};
use crate::lifecycle::InitResult;

/// Resposta do endpoint `/status`.
#[derive(Serialize)]
pub struct StatusResponse {
    /// `true` quando o setup do motor já concluiu.
    pub ready: bool,
    pub mode: Mode,
    /// Último resultado de inicialização, se houve tentativa.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init: Option<InitResult>,
}

/// Corpo de `/analyze/symptoms` e `/analyze/behavior`.
#[derive(Deserialize)]
pub struct DescriptionForm {
    pub species: String,
    pub description: String,
}

/// Corpo de `/analyze/medical`.
#[derive(Deserialize)]
pub struct MedicalHistoryForm {
    #[serde(default)]
    pub records: Vec<MedicalRecord>,
}

/// Dados do formulário de chat (campo `message`).
#[derive(Deserialize)]
pub struct ChatForm {
    pub message: String,
}

fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

/// Roda o assistente fora do executor async, com um request id no span.
async fn run_assistant<F>(state: &AppState, call: F) -> Advice
where
    F: FnOnce(&PetHealthAssistant) -> Advice + Send + 'static,
{
    let assistant = state.assistant.clone();
    let request_id = Uuid::new_v4();

    let task = tokio::task::spawn_blocking(move || {
        let span = tracing::info_span!("advice", %request_id);
        span.in_scope(|| call(&assistant))
    });

    match task.await {
        Ok(advice) => advice,
        Err(e) => {
            tracing::error!(error = %e, %request_id, "Task do motor falhou, usando fallback genérico");
            Advice::new(
                Classification::GENERIC,
                TemplateBank::new().fallback(),
                AdviceOrigin::Fallback,
            )
        }
    }
}

/// GET `/status`: modo do motor e estado da inicialização.
pub async fn model_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        ready: state.engine.state().is_initialized(),
        mode: state.engine.mode(),
        init: state.engine.state().last_result(),
    })
}

/// POST `/generate`: prompt livre.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> Json<Advice> {
    Json(run_assistant(&state, move |a| a.ask(&request)).await)
}

/// POST `/analyze/symptoms`
pub async fn analyze_symptoms(
    State(state): State<AppState>,
    Json(form): Json<DescriptionForm>,
) -> Json<Advice> {
    Json(run_assistant(&state, move |a| a.symptoms_advice(&form.species, &form.description)).await)
}

/// POST `/analyze/behavior`
pub async fn analyze_behavior(
    State(state): State<AppState>,
    Json(form): Json<DescriptionForm>,
) -> Json<Advice> {
    Json(run_assistant(&state, move |a| a.behavior_advice(&form.species, &form.description)).await)
}

/// POST `/recommend/diet`
pub async fn recommend_diet(
    State(state): State<AppState>,
    Json(profile): Json<PetProfile>,
) -> Json<Advice> {
    Json(run_assistant(&state, move |a| a.diet_advice(&profile)).await)
}

/// POST `/analyze/medical`
pub async fn analyze_medical(
    State(state): State<AppState>,
    Json(form): Json<MedicalHistoryForm>,
) -> Json<Advice> {
    Json(run_assistant(&state, move |a| a.medical_history_advice(&form.records)).await)
}

/// POST `/chat`: mensagem livre, devolve fragmento HTMX.
///
/// Mensagem vazia devolve fragmento vazio (nada a exibir).
pub async fn chat(State(state): State<AppState>, Form(form): Form<ChatForm>) -> Html<String> {
    let user_text = form.message.trim().to_string();
    if user_text.is_empty() {
        return markup_to_html(maud::html! {});
    }

    let request = PromptRequest::new(user_text.clone());
    let advice = run_assistant(&state, move |a| a.ask(&request)).await;
    markup_to_html(templates::chat_exchange(&user_text, &advice))
}
