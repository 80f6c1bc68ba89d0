use serde::Serialize;

use crate::map::Feature;

use super::selection::{Pick, Selection};

/// Fill opacities used when dimming features outside the active picks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacities {
    pub full: f64,
    pub dimmed: f64,
}

impl Default for Opacities {
    fn default() -> Self {
        Self { full: 0.6, dimmed: 0.2 }
    }
}

/// Resolved render style for one feature under one selection. A dimmed
/// feature is still visible; only the unit gate hides outright.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureStyle {
    pub visible: bool,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub fill_opacity: f64,
    pub stroke_opacity: f64,
}

/// [`style_with`] using the default opacities.
pub fn style_for(feature: &Feature, selection: &Selection) -> FeatureStyle {
    style_with(feature, selection, Opacities::default())
}

/// Resolve the render style of `feature` under `selection`.
///
/// Outside a concrete unit pick the feature is hidden outright. Within it,
/// a concrete desk pick dims features whose code lacks the desk prefix, and
/// a concrete analyst pick overrides that with an exact-code test.
pub fn style_with(feature: &Feature, selection: &Selection, opacities: Opacities) -> FeatureStyle {
    if let Pick::Only(unit) = &selection.unit {
        if feature.levels.unit != *unit {
            return FeatureStyle {
                visible: false,
                fill: feature.style.fill.clone(),
                stroke: feature.style.stroke.clone(),
                stroke_width: feature.style.stroke_width,
                fill_opacity: 0.0,
                stroke_opacity: 0.0,
            };
        }
    }

    let code = feature.code.as_str();
    let mut fill_opacity = opacities.full;
    if let Pick::Only(desk) = &selection.desk {
        fill_opacity = if code.starts_with(desk.as_str()) { opacities.full } else { opacities.dimmed };
    }
    if let Pick::Only(analyst) = &selection.analyst {
        // Exact-match rule wins over the desk prefix rule.
        fill_opacity = if code == analyst { opacities.full } else { opacities.dimmed };
    }

    FeatureStyle {
        visible: true,
        fill: feature.style.fill.clone(),
        stroke: feature.style.stroke.clone(),
        stroke_width: feature.style.stroke_width,
        fill_opacity,
        stroke_opacity: feature.style.stroke_opacity,
    }
}
