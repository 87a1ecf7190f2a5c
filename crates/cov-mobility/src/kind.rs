//! Mobility model names.

use std::fmt;
use std::str::FromStr;

use crate::MobilityError;

/// Which movement rule a scenario uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelKind {
    RandomWaypoint,
    RandomDirection,
    Enterprise,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [
        ModelKind::RandomWaypoint,
        ModelKind::RandomDirection,
        ModelKind::Enterprise,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::RandomWaypoint  => "RandomWaypoint",
            ModelKind::RandomDirection => "RandomDirection",
            ModelKind::Enterprise      => "Enterprise",
        }
    }
}

impl FromStr for ModelKind {
    type Err = MobilityError;

    /// Accepts the canonical names, ignoring ASCII case and surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ModelKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| MobilityError::UnsupportedModel(name.to_owned()))
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
