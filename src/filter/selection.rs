use std::fmt;

use crate::hierarchy::Level;

/// One dropdown's value: the "all" sentinel (no restriction) or a concrete
/// level value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Pick {
    #[default]
    All,
    Only(String),
}

impl Pick {
    /// The sentinel as it appears in option lists.
    pub const ALL: &'static str = "all";

    pub fn parse(raw: &str) -> Pick {
        if raw == Self::ALL { Pick::All } else { Pick::Only(raw.to_string()) }
    }

    #[inline]
    pub fn is_all(&self) -> bool {
        matches!(self, Pick::All)
    }

    /// The concrete value, when this pick restricts anything.
    pub fn value(&self) -> Option<&str> {
        match self {
            Pick::All => None,
            Pick::Only(value) => Some(value),
        }
    }
}

impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value().unwrap_or(Self::ALL))
    }
}

impl From<&str> for Pick {
    fn from(raw: &str) -> Self {
        Pick::parse(raw)
    }
}

/// The three dropdown values driving the cascading filter. Re-derived from
/// user input on every interaction; never stored globally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub unit: Pick,
    pub desk: Pick,
    pub analyst: Pick,
}

impl Selection {
    pub fn get(&self, level: Level) -> &Pick {
        match level {
            Level::Unit => &self.unit,
            Level::Desk => &self.desk,
            Level::Analyst => &self.analyst,
        }
    }

    /// Set one level's pick. Every narrower level resets to `All`, so a
    /// broader change can never leave a stale, incompatible narrow pick
    /// behind.
    pub fn set(&mut self, level: Level, pick: Pick) {
        match level {
            Level::Unit => {
                self.unit = pick;
                self.desk = Pick::All;
                self.analyst = Pick::All;
            }
            Level::Desk => {
                self.desk = pick;
                self.analyst = Pick::All;
            }
            Level::Analyst => self.analyst = pick,
        }
    }

    /// The narrowest level with a concrete pick, with its value.
    pub fn most_specific(&self) -> Option<(Level, &str)> {
        Level::order()
            .into_iter()
            .rev()
            .find_map(|level| self.get(level).value().map(|value| (level, value)))
    }
}
