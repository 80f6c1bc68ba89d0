use std::path::Path;

use anyhow::{Context, Result, bail};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;

use crate::hierarchy::HierarchyCode;
use crate::map::{Feature, FeatureSet, StyleHints};

/// Property key the source data uses for the hierarchy code.
pub const DEFAULT_CODE_KEY: &str = "jerarquia";

/// Read a feature set from a GeoJSON file. `code_key` names the property
/// holding each feature's hierarchy code.
pub fn read_geojson_file(path: &Path, code_key: &str) -> Result<FeatureSet> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read GeoJSON file {}", path.display()))?;
    read_geojson_bytes(&bytes, code_key)
        .with_context(|| format!("Failed to load features from {}", path.display()))
}

/// Read a feature set from GeoJSON bytes.
///
/// Features without the hierarchy property, or with a geometry that is not
/// a Polygon or MultiPolygon, are skipped with a warning. Codes deeper than
/// three levels are kept but reported.
pub fn read_geojson_bytes(bytes: &[u8], code_key: &str) -> Result<FeatureSet> {
    let value: Value = serde_json::from_slice(bytes).context("Failed to parse GeoJSON bytes")?;
    let Some(raw_features) = value["features"].as_array() else {
        bail!("Not a GeoJSON FeatureCollection: missing \"features\" array");
    };

    let mut features = Vec::with_capacity(raw_features.len());
    for (idx, raw) in raw_features.iter().enumerate() {
        let properties = &raw["properties"];
        let Some(code) = properties[code_key].as_str() else {
            log::warn!("feature {idx} has no \"{code_key}\" property, skipping");
            continue;
        };
        let Some(geometry) = parse_geometry(&raw["geometry"])? else {
            log::warn!("feature {idx} ({code}) has an unsupported geometry type, skipping");
            continue;
        };

        let code = HierarchyCode::new(code);
        if !code.is_canonical() {
            log::warn!("feature {idx} has a code deeper than 3 levels: {code}");
        }
        features.push(Feature::new(code, geometry, parse_style_hints(properties)));
    }
    Ok(FeatureSet::new(features))
}

/// Render hints from feature properties, with the conventional fallbacks.
fn parse_style_hints(properties: &Value) -> StyleHints {
    let defaults = StyleHints::default();
    StyleHints {
        fill: properties["fill"].as_str().map_or(defaults.fill, str::to_string),
        stroke: properties["stroke"].as_str().map_or(defaults.stroke, str::to_string),
        stroke_width: properties["stroke-width"].as_f64().unwrap_or(defaults.stroke_width),
        stroke_opacity: properties["stroke-opacity"].as_f64().unwrap_or(defaults.stroke_opacity),
    }
}

/// Parse a GeoJSON geometry object. Polygons are wrapped into a
/// single-member MultiPolygon; other geometry types yield `None`.
fn parse_geometry(geometry: &Value) -> Result<Option<MultiPolygon<f64>>> {
    let coords = &geometry["coordinates"];
    match geometry["type"].as_str() {
        Some("Polygon") => {
            let rings = coords.as_array().context("Invalid Polygon: coordinates must be an array")?;
            Ok(Some(MultiPolygon(vec![parse_polygon_rings(rings)?])))
        }
        Some("MultiPolygon") => {
            let polygons = coords
                .as_array()
                .context("Invalid MultiPolygon: coordinates must be an array")?
                .iter()
                .map(|rings| {
                    let rings = rings.as_array().context("Invalid MultiPolygon: member must be a ring array")?;
                    parse_polygon_rings(rings)
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(MultiPolygon(polygons)))
        }
        _ => Ok(None),
    }
}

/// Parse one polygon's ring arrays: the first ring is the exterior, the
/// rest are interiors.
fn parse_polygon_rings(rings: &[Value]) -> Result<Polygon<f64>> {
    let Some((exterior, interiors)) = rings.split_first() else {
        bail!("Invalid Polygon: missing exterior ring");
    };
    Ok(Polygon::new(
        parse_ring(exterior)?,
        interiors.iter().map(parse_ring).collect::<Result<Vec<_>>>()?,
    ))
}

/// Parse a ring from GeoJSON coordinates: [[x, y], [x, y], ...]
fn parse_ring(ring: &Value) -> Result<LineString<f64>> {
    let mut points = Vec::new();
    for pair in ring.as_array().context("Invalid ring: must be an array of positions")? {
        let pair = pair.as_array().context("Invalid position: must be an array")?;
        if pair.len() < 2 {
            bail!("Invalid position: need at least x and y");
        }
        let x = pair[0].as_f64().context("Invalid coordinate: x must be a number")?;
        let y = pair[1].as_f64().context("Invalid coordinate: y must be a number")?;
        points.push(Coord { x, y });
    }

    // Ensure ring is closed (first point == last point)
    if !points.is_empty() && points[0] != points[points.len() - 1] {
        points.push(points[0]);
    }

    Ok(LineString(points))
}
