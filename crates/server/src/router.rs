use axum::{routing::get, Router};

use crate::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::podcast))
        .route("/feed.xml", get(handlers::podcast))
        .with_state(state)
}
