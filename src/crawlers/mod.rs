pub mod crawler;
pub mod http;
pub mod sitemap;
pub mod web;

#[cfg(test)]
pub(crate) mod mock;

pub use crawler::{FetchError, FetchResponse, Fetcher};
pub use http::HttpFetcher;
