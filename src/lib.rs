#![doc = "Territory map filtering core"]
mod filter;
mod hierarchy;
mod map;

pub mod cli;
pub mod commands;

#[doc(inline)]
pub use hierarchy::{HierarchyCode, Level, Levels};

#[doc(inline)]
pub use map::{DEFAULT_CODE_KEY, Feature, FeatureSet, StyleHints, read_geojson_bytes, read_geojson_file};

#[doc(inline)]
pub use filter::{
    EmptySubsetError, FeatureStyle, FitView, Opacities, Pick, Selection, options_for,
    resolve_active_subset, style_for, style_with,
};
