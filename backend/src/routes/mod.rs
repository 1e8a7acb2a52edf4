//! Route definitions for the DairySight cooperative platform

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes. Everything except login sits behind the session
/// token middleware.
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Auth routes (login public, session lookup protected)
        .nest("/auth", auth_routes(state.clone()))
        // Protected routes - farmer management
        .nest("/farmers", farmer_routes(state.clone()))
        // Protected routes - milk intake
        .nest("/milk-intake", intake_routes(state.clone()))
        // Protected routes - milk offtake
        .nest("/milk-offtake", offtake_routes(state.clone()))
        // Protected routes - farmer payments
        .nest("/payments", payment_routes(state.clone()))
        // Protected routes - employees
        .nest("/employees", employee_routes(state.clone()))
        // Protected routes - cooperative settings
        .nest("/settings", settings_routes(state.clone()))
        // Protected routes - dashboard statistics
        .nest("/dashboard", dashboard_routes(state.clone()))
        // Protected routes - in-app notifications
        .nest("/notifications", notification_routes(state))
}

fn auth_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::login))
        .nest("/session", session_routes(state))
}

fn session_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::me))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

fn farmer_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_farmers).post(handlers::register_farmer),
        )
        .route(
            "/:farmer_id",
            get(handlers::get_farmer).patch(handlers::update_farmer),
        )
        .route("/:farmer_id/approve", post(handlers::approve_farmer))
        .route("/:farmer_id/reject", post(handlers::reject_farmer))
        .route("/:farmer_id/activate", post(handlers::activate_farmer))
        .route("/:farmer_id/deactivate", post(handlers::deactivate_farmer))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

fn intake_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_intakes).post(handlers::record_intake),
        )
        .route("/stats", get(handlers::intake_stats))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

fn offtake_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_offtakes).post(handlers::record_offtake),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

fn payment_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_payments).post(handlers::create_payment),
        )
        .route("/:payment_id/cancel", post(handlers::cancel_payment))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

fn employee_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route("/:employee_id/status", put(handlers::set_employee_status))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

fn settings_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::get_settings).put(handlers::update_settings),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

fn dashboard_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/stats", get(handlers::dashboard_stats))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

fn notification_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_notifications).post(handlers::push_notification),
        )
        .route(
            "/:notification_id/dismiss",
            post(handlers::dismiss_notification),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
