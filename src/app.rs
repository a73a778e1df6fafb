use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/auth", get(handlers::auth_page))
        .route("/auth/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/dashboard", get(handlers::dashboard))
        .route("/dashboard/sales", get(handlers::sales_overview))
        .route("/dashboard/:section", get(handlers::section))
        .route(
            "/api/session",
            get(handlers::get_session)
                .post(handlers::create_session)
                .delete(handlers::delete_session),
        )
        .route("/api/sales", get(handlers::get_sales))
        .with_state(state)
}
