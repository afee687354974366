pub mod fetcher;
pub mod filter;
pub mod item;
pub mod render;
pub mod source;

#[cfg(test)]
pub(crate) mod testutil;

pub use fetcher::{FormElements, RecommendationFetcher};
pub use filter::Filter;
pub use item::RecommendationItem;
pub use source::{FetchError, HttpSource, RecommendationSource};
