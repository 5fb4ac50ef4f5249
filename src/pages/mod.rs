//! One module per documentation example page.
//!
//! Each page module owns its loader: the fixed URL of any dataset the demo
//! needs, the embedded text of the companion demo source, and a `load`
//! function the hosting framework invokes once per navigation, awaiting the
//! result before rendering.

pub mod sketchy_globe;
