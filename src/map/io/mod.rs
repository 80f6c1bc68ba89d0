mod geojson;

pub use geojson::{DEFAULT_CODE_KEY, read_geojson_bytes, read_geojson_file};
