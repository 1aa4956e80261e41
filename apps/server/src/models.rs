use chrono::NaiveDateTime;
use quotable_core::quotes as core_quotes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct Quote {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

impl From<core_quotes::Quote> for Quote {
    fn from(q: core_quotes::Quote) -> Self {
        Self {
            id: q.id,
            author: q.author,
            content: q.content,
            created_at: q.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct NewQuote {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl From<NewQuote> for core_quotes::NewQuote {
    fn from(q: NewQuote) -> Self {
        Self {
            author: q.author,
            content: q.content,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct QuoteUpdate {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl From<QuoteUpdate> for core_quotes::QuoteUpdate {
    fn from(q: QuoteUpdate) -> Self {
        Self {
            author: q.author,
            content: q.content,
        }
    }
}

/// Body of `GET /api/quotes`.
#[derive(Serialize, ToSchema, Debug)]
pub struct QuotesResponse {
    pub quotes: Vec<Quote>,
}

/// Body of `GET /api/quotes/{id}`. Existing clients expect the quote
/// wrapped in a singleton list.
#[derive(Serialize, ToSchema, Debug)]
pub struct QuoteResponse {
    pub quote: Vec<Quote>,
}

/// Body of successful create/update mutations.
#[derive(Serialize, ToSchema, Debug)]
pub struct QuoteMutationResponse {
    pub data: Vec<Quote>,
    pub message: String,
}
