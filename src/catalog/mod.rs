//! Remote application catalog: discovery and the name-keyed selection index.

pub mod fetcher;
pub mod index;
pub mod types;

pub use fetcher::{CatalogFetcher, FetchDisposition, FetchReport};
pub use index::SelectionIndex;
pub use types::{AppEntry, Catalog, SessionHandle};
