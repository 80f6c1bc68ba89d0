mod code;
mod level;

pub use code::{HierarchyCode, Levels};
pub use level::Level;
