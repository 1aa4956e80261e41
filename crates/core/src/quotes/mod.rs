pub mod quotes_model;
pub mod quotes_repository;
pub mod quotes_service;
pub mod quotes_traits;


pub use quotes_model::{NewQuote, Quote, QuoteChangeset, QuoteInsert, QuoteUpdate};
pub use quotes_repository::QuoteRepository;
pub use quotes_service::QuoteService;
pub use quotes_traits::{QuoteRepositoryTrait, QuoteServiceTrait};
