pub mod quote_book;

pub use quote_book::{Quote, QuoteBook, CSV_HEADER};
