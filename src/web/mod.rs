//! HTTP transport over the aggregate facade.
//!
//! Handlers trim and validate incoming drafts before anything reaches the
//! services, then map the discriminated service results onto status codes.

pub mod config;
pub mod error;
pub mod handlers;
pub mod normalize;
pub mod validate;

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::facade::Clinic;
use crate::storage::ClientStore;

#[derive(Clone)]
pub struct AppState {
    pub clinic: Clinic,
}

impl AppState {
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self {
            clinic: Clinic::new(store),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/clients",
            get(handlers::list_clients).post(handlers::create_client),
        )
        .route(
            "/api/clients/{id}",
            get(handlers::get_client)
                .put(handlers::update_client)
                .delete(handlers::delete_client),
        )
        .route("/api/clients/{id}/pets", post(handlers::create_pet))
        .route(
            "/api/clients/{id}/pets/{pet_id}",
            put(handlers::update_pet).delete(handlers::delete_pet),
        )
        .route(
            "/api/clients/{id}/address",
            post(handlers::create_address)
                .put(handlers::update_address)
                .delete(handlers::delete_address),
        )
        .route(
            "/api/clients/search/name/{fragment}",
            get(handlers::search_by_name),
        )
        .route(
            "/api/clients/search/lastname/{fragment}",
            get(handlers::search_by_lastname),
        )
        .route(
            "/api/clients/search/pet/{fragment}",
            get(handlers::search_by_pet_name),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
