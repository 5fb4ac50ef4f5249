//! Output records consumed by the rendering layer.
//!
//! These serialize to the wire shape the page renderer expects:
//! `{"geojson": ..., "meta": {"pageSource": ...}}`.

use serde::Serialize;

use crate::fetch::Fetch;

/// Decoded external dataset for one page view, e.g. a world-countries
/// topology. The schema is externally defined; the crate treats it as an
/// opaque JSON document.
pub type GeoDataset = serde_json::Value;

/// Everything one page needs before it renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageData {
    /// Decoded external dataset. Always present: a failed fetch or decode
    /// fails the whole load instead of producing a placeholder.
    pub geojson: GeoDataset,

    /// Descriptive metadata for the rendering layer.
    pub meta: PageMeta,
}

/// Metadata displayed alongside the rendered demo.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Verbatim text of the companion demo implementation, fixed at build
    /// time. Never derived from the network response.
    pub page_source: &'static str,
}

/// Request-scoped context supplied by the hosting framework.
///
/// The framework constructs one per navigation and awaits the page's
/// loader with it before rendering.
#[derive(Debug, Clone)]
pub struct LoadContext<F: Fetch> {
    pub fetch: F,
}

impl<F: Fetch> LoadContext<F> {
    pub fn new(fetch: F) -> Self {
        Self { fetch }
    }
}
