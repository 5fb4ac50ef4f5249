//! Sketchy globe: world country outlines drawn with a hand-sketched wobble,
//! orthographic projection, written to `sketchy_globe.svg`.

use std::fs;

use livedoc::{HttpFetcher, LoadContext, pages::sketchy_globe};

const WIDTH: f64 = 600.0;
const RADIUS: f64 = 280.0;
/// Rotation of the projection center, degrees east.
const LON_0: f64 = -20.0;
/// Amplitude of the sketchy jitter, in pixels.
const WOBBLE: f64 = 1.6;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = LoadContext::new(HttpFetcher::new()?);
    let data = sketchy_globe::load(&ctx).await?;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {w}">"#,
        w = WIDTH
    ));
    svg.push_str(&format!(
        r#"<circle cx="{c}" cy="{c}" r="{RADIUS}" fill="#eef6fb" stroke="#444"/>"#,
        c = WIDTH / 2.0
    ));

    let mut seed = 0x5eed_u32;
    for ring in country_rings(&data.geojson) {
        let mut path = String::new();
        for &(lon, lat) in &ring {
            let Some((x, y)) = project(lon, lat) else { continue };
            let (dx, dy) = (wobble(&mut seed), wobble(&mut seed));
            let op = if path.is_empty() { 'M' } else { 'L' };
            path.push_str(&format!("{op}{:.1} {:.1}", x + dx, y + dy));
        }
        if !path.is_empty() {
            svg.push_str(&format!(
                r#"<path d="{path}" fill="none" stroke="#333" stroke-width="0.8"/>"#
            ));
        }
    }
    svg.push_str("</svg>");

    fs::write("sketchy_globe.svg", svg)?;
    Ok(())
}

/// Orthographic projection; returns `None` for the far hemisphere.
fn project(lon: f64, lat: f64) -> Option<(f64, f64)> {
    let (lon, lat) = ((lon - LON_0).to_radians(), lat.to_radians());
    if lon.cos() * lat.cos() < 0.0 {
        return None;
    }
    let x = WIDTH / 2.0 + RADIUS * lat.cos() * lon.sin();
    let y = WIDTH / 2.0 - RADIUS * lat.sin();
    Some((x, y))
}

/// Decode the quantized topology arcs into boundary rings (lon, lat).
fn country_rings(topo: &serde_json::Value) -> Vec<Vec<(f64, f64)>> {
    let scale = |v: &serde_json::Value, i| v["transform"]["scale"][i].as_f64().unwrap_or(1.0);
    let translate = |v: &serde_json::Value, i| v["transform"]["translate"][i].as_f64().unwrap_or(0.0);
    let (sx, sy) = (scale(topo, 0), scale(topo, 1));
    let (tx, ty) = (translate(topo, 0), translate(topo, 1));

    let mut rings = Vec::new();
    for arc in topo["arcs"].as_array().into_iter().flatten() {
        let mut ring = Vec::new();
        let (mut x, mut y) = (0i64, 0i64);
        for pair in arc.as_array().into_iter().flatten() {
            x += pair[0].as_i64().unwrap_or(0);
            y += pair[1].as_i64().unwrap_or(0);
            ring.push((x as f64 * sx + tx, y as f64 * sy + ty));
        }
        rings.push(ring);
    }
    rings
}

/// Cheap deterministic jitter so the outline looks hand-drawn.
fn wobble(seed: &mut u32) -> f64 {
    *seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
    let unit = f64::from(*seed >> 8) / f64::from(1u32 << 24);
    (unit * 2.0 - 1.0) * WOBBLE
}
