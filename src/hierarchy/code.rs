use std::fmt;
use std::sync::Arc;

use super::level::Level;

/// Stable key for a feature across levels.
/// Keep the original dash-delimited text (e.g. "NORTE-2-mgarcia"); derived
/// level values are prefixes of it and stay usable as starts-with filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HierarchyCode(Arc<str>);

impl HierarchyCode {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(Arc::from(raw.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of dash-separated segments (dash count + 1).
    pub fn depth(&self) -> usize {
        self.0.matches('-').count() + 1
    }

    /// A canonical code has at most three segments. Deeper codes are not
    /// rejected anywhere; loaders report them and `decompose` leaves the
    /// analyst value absent.
    pub fn is_canonical(&self) -> bool {
        self.depth() <= 3
    }

    /// Derive the per-level values of this code.
    ///
    /// - `unit`: segment 0, always present (possibly empty).
    /// - `desk`: `"unit-segment1"` iff segment 1 exists and is non-empty.
    /// - `analyst`: the full code iff it contains exactly two dashes.
    ///
    /// Malformed codes (empty, trailing dash, empty segments) never error;
    /// absence is structural.
    pub fn decompose(&self) -> Levels {
        let mut parts = self.0.splitn(3, '-');
        let unit = parts.next().unwrap_or("").to_string();
        let desk = parts
            .next()
            .filter(|segment| !segment.is_empty())
            .map(|segment| format!("{unit}-{segment}"));
        let analyst = (self.0.matches('-').count() == 2).then(|| self.0.to_string());
        Levels { unit, desk, analyst }
    }
}

impl fmt::Display for HierarchyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derived level values of a single code, computed once at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Levels {
    pub unit: String,
    pub desk: Option<String>,
    pub analyst: Option<String>,
}

impl Levels {
    /// The value at `level`, when present.
    pub fn get(&self, level: Level) -> Option<&str> {
        match level {
            Level::Unit => Some(&self.unit),
            Level::Desk => self.desk.as_deref(),
            Level::Analyst => self.analyst.as_deref(),
        }
    }
}
