pub mod health;
pub mod quotes;

use std::sync::Arc;

use axum::{http::Method, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{NewQuote, Quote, QuoteMutationResponse, QuoteResponse, QuoteUpdate, QuotesResponse},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        quotes::list_quotes,
        quotes::get_quote,
        quotes::create_quote,
        quotes::update_quote,
        quotes::delete_quote,
    ),
    components(schemas(
        Quote,
        NewQuote,
        QuoteUpdate,
        QuotesResponse,
        QuoteResponse,
        QuoteMutationResponse
    )),
    tags((name = "quotes"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let allowed_methods = [Method::GET, Method::POST, Method::PATCH, Method::DELETE];
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(allowed_methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(allowed_methods)
            .allow_headers(Any)
    };

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .merge(quotes::router());

    Router::new()
        .nest("/api", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
