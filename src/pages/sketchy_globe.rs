//! Data loading for the "sketchy globe" example page.
//!
//! The demo renders world country outlines with a hand-drawn wobble; the
//! page also displays the demo's own source text next to the output.

use tracing::debug;

use crate::error::DataFetchError;
use crate::fetch::Fetch;
use crate::page::{LoadContext, PageData, PageMeta};

/// Versioned CDN copy of the world-countries topology (110m resolution).
pub const COUNTRIES_URL: &str = "https://cdn.jsdelivr.net/npm/world-atlas@2/countries-110m.json";

/// Companion demo source, embedded verbatim at build time.
pub const PAGE_SOURCE: &str = include_str!("../../demos/sketchy_globe.rs");

/// Load everything the page needs before it renders.
///
/// Issues exactly one request, to [`COUNTRIES_URL`]. Fetch and decode
/// failures propagate unchanged; no partial result is ever returned.
pub async fn load<F: Fetch>(ctx: &LoadContext<F>) -> Result<PageData, DataFetchError> {
    let geojson = ctx.fetch.fetch(COUNTRIES_URL).await?.json()?;
    debug!(page = "sketchy_globe", "page data loaded");

    Ok(PageData {
        geojson,
        meta: PageMeta {
            page_source: PAGE_SOURCE,
        },
    })
}
