#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Unit,    // Highest-level entity, e.g. "NORTE"
    Desk,    // Desk -> Unit, e.g. "NORTE-2"
    Analyst, // Lowest-level entity, e.g. "NORTE-2-mgarcia"
}

impl Level {
    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Unit => "unit",
            Level::Desk => "desk",
            Level::Analyst => "analyst",
        }
    }

    /// Levels from broadest to narrowest.
    pub fn order() -> [Level; 3] {
        [Level::Unit, Level::Desk, Level::Analyst]
    }

    pub fn parent(&self) -> Option<Level> {
        match self {
            Level::Unit => None,
            Level::Desk => Some(Level::Unit),
            Level::Analyst => Some(Level::Desk),
        }
    }

    /// Map a 1-based depth (as exposed on the CLI) to a level.
    pub fn from_depth(depth: u8) -> Option<Level> {
        match depth {
            1 => Some(Level::Unit),
            2 => Some(Level::Desk),
            3 => Some(Level::Analyst),
            _ => None,
        }
    }
}
