use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::quotes::quotes_model::{Quote, QuoteChangeset, QuoteDB, QuoteInsert};
use crate::quotes::quotes_traits::QuoteRepositoryTrait;
use crate::schema::quotes;
use crate::schema::quotes::dsl::*;

pub struct QuoteRepository {
    pool: Arc<DbPool>,
}

impl QuoteRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        QuoteRepository { pool }
    }
}

#[async_trait]
impl QuoteRepositoryTrait for QuoteRepository {
    fn load_quotes(&self) -> Result<Vec<Quote>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = quotes
            .order(created_at.desc())
            .load::<QuoteDB>(&mut conn)?;
        Ok(rows.into_iter().map(Quote::from).collect())
    }

    fn find_quote_by_id(&self, quote_id: &str) -> Result<Option<Quote>> {
        let mut conn = get_connection(&self.pool)?;
        let row = quotes
            .find(quote_id)
            .first::<QuoteDB>(&mut conn)
            .optional()?;
        Ok(row.map(Quote::from))
    }

    async fn insert_quote(&self, mut quote: QuoteInsert) -> Result<Quote> {
        let mut conn = get_connection(&self.pool)?;

        quote.id = Some(Uuid::new_v4().to_string());

        let row = diesel::insert_into(quotes::table)
            .values(&quote)
            .returning(QuoteDB::as_returning())
            .get_result::<QuoteDB>(&mut conn)?;
        Ok(Quote::from(row))
    }

    async fn update_quote(
        &self,
        quote_id: &str,
        changes: QuoteChangeset,
    ) -> Result<Option<Quote>> {
        let mut conn = get_connection(&self.pool)?;
        let row = diesel::update(quotes.find(quote_id))
            .set(&changes)
            .returning(QuoteDB::as_returning())
            .get_result::<QuoteDB>(&mut conn)
            .optional()?;
        Ok(row.map(Quote::from))
    }

    async fn delete_quote(&self, quote_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(quotes.find(quote_id)).execute(&mut conn)?)
    }
}
