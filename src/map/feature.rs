use geo::MultiPolygon;
use serde::Serialize;

use crate::hierarchy::{HierarchyCode, Levels};

/// Render hints carried through from the source file's properties. The
/// resolver never interprets them; they are echoed back into the resolved
/// per-feature style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleHints {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
}

impl Default for StyleHints {
    fn default() -> Self {
        Self {
            fill: "#cccccc".to_string(),
            stroke: "#000000".to_string(),
            stroke_width: 1.0,
            stroke_opacity: 1.0,
        }
    }
}

/// A geographic record: hierarchy code, the level values derived from it
/// once at load time, its geometry, and passthrough render hints.
#[derive(Debug, Clone)]
pub struct Feature {
    pub code: HierarchyCode,
    pub levels: Levels,
    pub geometry: MultiPolygon<f64>,
    pub style: StyleHints,
}

impl Feature {
    pub fn new(code: HierarchyCode, geometry: MultiPolygon<f64>, style: StyleHints) -> Self {
        let levels = code.decompose();
        Self { code, levels, geometry, style }
    }
}
