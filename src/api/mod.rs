pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};
use std::sync::Arc;

use crate::{
    config::Settings,
    service::ServiceContext,
};
use state::AppState;

pub fn create_app(service_context: Arc<ServiceContext>, settings: Arc<Settings>) -> Router {
    let app_state = AppState::new(service_context, settings);

    Router::new()
        // Root and health endpoints
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::root::health_check))

        // Session routes
        .nest("/auth", auth_routes())

        // Public content
        .nest("/api", api_routes())

        // Admin area
        .nest("/admin", admin_routes(app_state.clone()))

        .with_state(app_state)

        // Middleware
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/signup", post(handlers::auth::signup))
        .route("/logout", post(handlers::auth::logout))
        .route("/reset-password", post(handlers::auth::reset_password))
        .route("/me", get(handlers::auth::me))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root::root))
        .route("/team", get(handlers::team::list))
        .route("/team/:id", get(handlers::team::get))
        .route("/events", get(handlers::events::list))
        .route("/events/:id", get(handlers::events::get))
        .route("/events/:id/related", get(handlers::events::related))
        .route("/events/:id/register", post(handlers::events::register))
        .route("/blogs", get(handlers::blogs::list))
        .route("/blogs/:id", get(handlers::blogs::get))
        .route("/blogs/:id/related", get(handlers::blogs::related))
        .route("/achievements", get(handlers::achievements::list))
        .route("/achievements/:id", get(handlers::achievements::get))
        .route("/notifications", get(handlers::notifications::list))
}

fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(handlers::admin::dashboard))
        .route("/team", post(handlers::team::create))
        .route(
            "/team/:id",
            axum::routing::put(handlers::team::update).delete(handlers::team::delete),
        )
        .route("/events", post(handlers::events::create))
        .route(
            "/events/:id",
            axum::routing::put(handlers::events::update).delete(handlers::events::delete),
        )
        .route("/blogs", post(handlers::blogs::create))
        .route(
            "/blogs/:id",
            axum::routing::put(handlers::blogs::update).delete(handlers::blogs::delete),
        )
        .route("/achievements", post(handlers::achievements::create))
        .route(
            "/achievements/:id",
            axum::routing::put(handlers::achievements::update).delete(handlers::achievements::delete),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::auth::require_admin,
        ))
}
