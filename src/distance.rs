use std::fmt;

use crate::graph::Weight;

/// A tentative distance (Dijkstra) or attachment key (Prim).
///
/// Variant order matters: the derived `Ord` places every `Finite` value below
/// `Infinite`, which is what the relaxation comparisons rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Distance {
    Finite(Weight),
    #[default]
    Infinite,
}

impl Distance {
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(self) -> Option<Weight> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }
}

impl From<Weight> for Distance {
    fn from(value: Weight) -> Self {
        Distance::Finite(value)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Infinite => write!(f, "INF"),
        }
    }
}
