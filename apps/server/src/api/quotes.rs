use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{NewQuote, Quote, QuoteMutationResponse, QuoteResponse, QuoteUpdate, QuotesResponse},
};

#[utoipa::path(get, path = "/api/quotes", responses((status = 200, body = QuotesResponse)))]
pub async fn list_quotes(State(state): State<Arc<AppState>>) -> ApiResult<Json<QuotesResponse>> {
    let quotes = state.quote_service.get_quotes()?;
    Ok(Json(QuotesResponse {
        quotes: quotes.into_iter().map(Quote::from).collect(),
    }))
}

#[utoipa::path(get, path = "/api/quotes/{id}", params(("id" = String, Path, description = "Quote ID")), responses((status = 200, body = QuoteResponse), (status = 404, description = "Quote not found")))]
pub async fn get_quote(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<QuoteResponse>> {
    let quote = state.quote_service.get_quote(&id)?;
    Ok(Json(QuoteResponse {
        quote: vec![Quote::from(quote)],
    }))
}

#[utoipa::path(post, path = "/api/quotes", request_body = NewQuote, responses((status = 201, body = QuoteMutationResponse), (status = 400, description = "Author or content is missing")))]
pub async fn create_quote(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewQuote>,
) -> ApiResult<(StatusCode, Json<QuoteMutationResponse>)> {
    let created = state.quote_service.create_quote(payload.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(QuoteMutationResponse {
            data: vec![Quote::from(created)],
            message: "Success! A new quote was added".to_string(),
        }),
    ))
}

#[utoipa::path(patch, path = "/api/quotes/{id}", params(("id" = String, Path, description = "Quote ID")), request_body = QuoteUpdate, responses((status = 200, body = QuoteMutationResponse), (status = 400, description = "Author or content is required"), (status = 404, description = "Quote not found")))]
pub async fn update_quote(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<QuoteUpdate>,
) -> ApiResult<Json<QuoteMutationResponse>> {
    let updated = state.quote_service.update_quote(&id, payload.into()).await?;
    Ok(Json(QuoteMutationResponse {
        data: vec![Quote::from(updated)],
        message: "Success! Quote was updated".to_string(),
    }))
}

#[utoipa::path(delete, path = "/api/quotes/{id}", params(("id" = String, Path, description = "Quote ID")), responses((status = 204, description = "Quote deleted"), (status = 404, description = "Quote not found")))]
pub async fn delete_quote(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.quote_service.delete_quote(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quotes", get(list_quotes).post(create_quote))
        .route(
            "/quotes/{id}",
            get(get_quote).patch(update_quote).delete(delete_quote),
        )
}
