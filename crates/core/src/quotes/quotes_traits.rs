use async_trait::async_trait;

use crate::errors::Result;
use crate::quotes::quotes_model::{NewQuote, Quote, QuoteChangeset, QuoteInsert, QuoteUpdate};

/// Trait for quote repository operations
#[async_trait]
pub trait QuoteRepositoryTrait: Send + Sync {
    /// All quotes, most recently created first.
    fn load_quotes(&self) -> Result<Vec<Quote>>;
    fn find_quote_by_id(&self, quote_id: &str) -> Result<Option<Quote>>;
    async fn insert_quote(&self, quote: QuoteInsert) -> Result<Quote>;
    /// Applies the changeset to the row with the given id. Returns `None`
    /// when no such row exists.
    async fn update_quote(&self, quote_id: &str, changes: QuoteChangeset) -> Result<Option<Quote>>;
    /// Returns the number of rows deleted.
    async fn delete_quote(&self, quote_id: &str) -> Result<usize>;
}

/// Trait for quote service operations
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    fn get_quotes(&self) -> Result<Vec<Quote>>;
    fn get_quote(&self, quote_id: &str) -> Result<Quote>;
    async fn create_quote(&self, new_quote: NewQuote) -> Result<Quote>;
    async fn update_quote(&self, quote_id: &str, update: QuoteUpdate) -> Result<Quote>;
    async fn delete_quote(&self, quote_id: &str) -> Result<()>;
}
