use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use crate::docs::ApiDoc;
use axum::Router;
use crate::state::AppState;

use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};

pub fn configure_routes() -> Router<AppState> {
    // The proxy writes its own CORS headers, so the layer only wraps JSON routes.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let json_routes = api_routes()
        .merge(crate::modules::images::router())
        .layer(CompressionLayer::new())
        .layer(cors);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", json_routes.merge(crate::modules::proxy::router()))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", axum::routing::get(|| async { "ok" }))
}
