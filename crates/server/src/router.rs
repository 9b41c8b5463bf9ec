use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/chat/ask", post(handlers::ask_handler))
        .route("/chat/history", get(handlers::chat_history_handler))
        .route("/feedback/submit", post(handlers::submit_feedback_handler))
        .route("/feedback/analyze", get(handlers::analyze_feedback_handler))
        .route("/concern/submit", post(handlers::submit_concern_handler))
        .route("/concern/list", get(handlers::list_concerns_handler))
        .route("/concern/{concern_id}", get(handlers::get_concern_handler))
        .route(
            "/services/categories",
            get(handlers::service_categories_handler),
        )
        .route("/services/help", get(handlers::quick_help_handler))
        .route("/auth/login", post(handlers::login_handler))
        .route(
            "/dashboard/summary",
            get(handlers::dashboard_summary_handler),
        )
        .route(
            "/dashboard/analytics",
            get(handlers::dashboard_analytics_handler),
        )
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
