use crate::error::Result;

pub mod pages;
pub mod request;

pub use pages::PageFetcher;
pub use request::{build_headers, prepare_url};

pub type FetchResult<T> = Result<T>;
