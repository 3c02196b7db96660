//! Searching the volumes API and turning its responses into books.
pub mod client;
pub mod extract;
pub mod models;
pub mod outcome;
pub mod url;

pub use client::{BooksClient, fetch_books};
pub use extract::extract;
pub use models::{Book, UNKNOWN_AUTHOR};
pub use outcome::SearchOutcome;
pub use url::volumes_url;
