pub mod middleware;
pub mod routes;
pub mod structs;
pub mod utils;

use std::sync::Arc;

use axum::routing::get;
use axum::{middleware as axum_middleware, Router};

use middleware::logger_middleware::logger_middleware;
use routes::register_route::{register_form_route, register_route};
use utils::render::Renderer;

#[derive(Debug)]
pub struct AppState {
    renderer: Renderer,
}

impl AppState {
    pub fn new() -> Result<Self, minijinja::Error> {
        Ok(Self {
            renderer: Renderer::new()?,
        })
    }
}

pub fn app(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(register_form_route).post(register_route))
        .layer(axum_middleware::from_fn(logger_middleware))
        .with_state(Arc::new(app_state))
}
