use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Domain model representing a stored quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

/// Database model for quotes
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::quotes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct QuoteDB {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

impl From<QuoteDB> for Quote {
    fn from(q: QuoteDB) -> Self {
        Quote {
            id: q.id,
            author: q.author,
            content: q.content,
            created_at: q.created_at,
        }
    }
}

/// Input model for creating a new quote. Both fields are required; the
/// service rejects the request before anything reaches the store otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuote {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NewQuote {
    /// Validates that author and content are present and non-blank.
    pub fn validate(&self) -> Result<()> {
        if !is_present(&self.author) {
            return Err(ValidationError::MissingField("Author".to_string()).into());
        }
        if !is_present(&self.content) {
            return Err(ValidationError::MissingField("Content".to_string()).into());
        }
        Ok(())
    }

    /// Trimmed column values to persist. Call after `validate`.
    pub fn into_insert(self) -> QuoteInsert {
        QuoteInsert {
            id: None,
            author: self.author.unwrap_or_default().trim().to_string(),
            content: self.content.unwrap_or_default().trim().to_string(),
        }
    }
}

/// Insertable row for a validated quote. The repository assigns the id;
/// the store assigns `created_at`.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::quotes)]
pub struct QuoteInsert {
    pub id: Option<String>,
    pub author: String,
    pub content: String,
}

/// Input model for partially updating a quote. Fields that are omitted or
/// blank leave the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteUpdate {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl QuoteUpdate {
    /// Validates that at least one updatable field is present and non-blank.
    pub fn validate(&self) -> Result<()> {
        if !is_present(&self.author) && !is_present(&self.content) {
            return Err(ValidationError::InvalidInput(
                "Must contain author or content".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// Builds the partial changeset: only supplied non-blank fields are
    /// included, in trimmed form.
    pub fn into_changeset(self) -> QuoteChangeset {
        QuoteChangeset {
            author: trimmed(self.author),
            content: trimmed(self.content),
        }
    }
}

/// Partial changeset applied by the store; `None` fields are left as-is.
#[derive(AsChangeset, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::quotes)]
pub struct QuoteChangeset {
    pub author: Option<String>,
    pub content: Option<String>,
}

fn is_present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

fn trimmed(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
