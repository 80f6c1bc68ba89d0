mod resolve;
mod selection;
mod style;

pub use resolve::{EmptySubsetError, FitView, options_for, resolve_active_subset};
pub use selection::{Pick, Selection};
pub use style::{FeatureStyle, Opacities, style_for, style_with};
