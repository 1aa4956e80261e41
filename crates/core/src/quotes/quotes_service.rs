use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::errors::{Error, Result};
use crate::quotes::quotes_model::{NewQuote, Quote, QuoteUpdate};
use crate::quotes::quotes_traits::{QuoteRepositoryTrait, QuoteServiceTrait};

/// Service for managing quotes. All validation happens here; the repository
/// is trusted to be the single source of truth and performs none.
pub struct QuoteService<T: QuoteRepositoryTrait> {
    quote_repo: Arc<T>,
}

impl<T: QuoteRepositoryTrait> QuoteService<T> {
    pub fn new(quote_repo: Arc<T>) -> Self {
        QuoteService { quote_repo }
    }
}

#[async_trait]
impl<T: QuoteRepositoryTrait> QuoteServiceTrait for QuoteService<T> {
    fn get_quotes(&self) -> Result<Vec<Quote>> {
        self.quote_repo.load_quotes()
    }

    fn get_quote(&self, quote_id: &str) -> Result<Quote> {
        self.quote_repo
            .find_quote_by_id(quote_id)?
            .ok_or_else(|| Error::NotFound(quote_id.to_string()))
    }

    async fn create_quote(&self, new_quote: NewQuote) -> Result<Quote> {
        new_quote.validate()?;
        debug!("Creating quote");
        self.quote_repo.insert_quote(new_quote.into_insert()).await
    }

    async fn update_quote(&self, quote_id: &str, update: QuoteUpdate) -> Result<Quote> {
        update.validate()?;
        debug!("Updating quote {}", quote_id);
        // Conditional update in one store call; empty result = no such row.
        self.quote_repo
            .update_quote(quote_id, update.into_changeset())
            .await?
            .ok_or_else(|| Error::NotFound(quote_id.to_string()))
    }

    async fn delete_quote(&self, quote_id: &str) -> Result<()> {
        debug!("Deleting quote {}", quote_id);
        let affected = self.quote_repo.delete_quote(quote_id).await?;
        if affected == 0 {
            return Err(Error::NotFound(quote_id.to_string()));
        }
        Ok(())
    }
}
