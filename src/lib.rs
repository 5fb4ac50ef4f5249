//! Livedoc - per-page data loading for documentation sites with live examples.
//!
//! A "live example" page shows a rendered demo next to the source code that
//! produced it. Some demos also need an external dataset at page-load time.
//! This crate is the data-loading contract between the hosting framework and
//! those pages:
//!
//! 1. the framework builds a [`LoadContext`] around a fetch capability
//!    (usually [`HttpFetcher`]), one per navigation;
//! 2. it awaits the page's loader, e.g. [`pages::sketchy_globe::load`];
//! 3. the resolved [`PageData`] — the decoded dataset plus the embedded
//!    text of the companion demo — is handed to the renderer.
//!
//! Loading is all-or-nothing: a failed fetch or a non-JSON body fails the
//! whole page load with a [`DataFetchError`], with no retry, no fallback
//! dataset, and no partial result. Rendering, routing, and syntax
//! highlighting live elsewhere.

mod error;
mod fetch;
mod page;
pub mod pages;

pub use error::DataFetchError;
pub use fetch::{Fetch, FetchResponse, HttpFetcher};
pub use page::{GeoDataset, LoadContext, PageData, PageMeta};
