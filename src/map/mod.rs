mod feature;
mod io;
mod set;

pub use feature::{Feature, StyleHints};
pub use io::{DEFAULT_CODE_KEY, read_geojson_bytes, read_geojson_file};
pub use set::FeatureSet;
