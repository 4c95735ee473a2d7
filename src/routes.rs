mod absences;
mod holidays;
mod planning;
mod root;

use crate::state::AppState;
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn app() -> Router {
    // 前端是跑在 5173 的 Vite dev server
    let origins = [
        "http://localhost:5173".parse().unwrap(),
        "http://127.0.0.1:5173".parse().unwrap(),
    ];

    let state = AppState::new();

    Router::new()
        .route("/", get(root::index))
        .nest("/planning", planning::new())
        .nest("/absences", absences::new())
        .nest("/holidays", holidays::new())
        .fallback(root::handler_404)
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_origin(origins)
                .allow_headers([CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
