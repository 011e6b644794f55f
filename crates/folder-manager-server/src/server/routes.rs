use crate::server::handler::{FolderService, create_folders, get_folders, health};
use axum::{
    Router,
    routing::{get, post},
};
use folder_manager::FileManagementApi;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the service router.
///
/// `POST` is accepted on both `/folders` and `/folders/`.
pub fn router<A>(service: FolderService<A>) -> Router
where
    A: FileManagementApi + Send + Sync + 'static,
{
    Router::new()
        .route("/folders", post(create_folders::<A>))
        .route("/folders/", post(create_folders::<A>))
        .route("/folders/{client_id}", get(get_folders::<A>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(service)
}
