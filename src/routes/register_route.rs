use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use tracing::{info, warn};

use crate::structs::register_form::RegisterForm;
use crate::utils::app_error::{AppError, ValidationErrors};
use crate::utils::register::check_register_infos;
use crate::utils::render::{RegisterView, REGISTER_VIEW};
use crate::AppState;

fn render_register(
    app_state: &AppState,
    errors: Option<&ValidationErrors>,
    success: bool,
) -> Result<Html<String>, AppError> {
    app_state
        .renderer
        .render(REGISTER_VIEW, RegisterView { errors, success })
        .map(Html)
        .map_err(|e| {
            warn!("Error while rendering `{REGISTER_VIEW}` : {e}");
            AppError::InternalServerError
        })
}

pub async fn register_form_route(
    State(app_state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    render_register(&app_state, None, false)
}

// Validation failures are answered with 200, like a successful registration.
pub async fn register_route(
    State(app_state): State<Arc<AppState>>,
    Form(register_form): Form<RegisterForm>,
) -> Result<Html<String>, AppError> {
    match check_register_infos(&register_form) {
        Ok(submission) => {
            info!("Registration accepted for `{}`", submission.email);
            render_register(&app_state, None, true)
        }
        Err(errors) => {
            warn!("Registration rejected : {errors}");
            render_register(&app_state, Some(&errors), false)
        }
    }
}
