//! Connection weights.
//!
//! A [`Weight`] is stored exactly as the caller supplied it.  Nothing is
//! checked at insertion time; [`Weight::as_distance`] is consulted only when
//! shortest paths are computed, so a graph may legitimately hold weights
//! that would later be rejected.

use std::fmt::{self, Display, Formatter};

/// Weight used by [`Graph::connect`](crate::Graph::connect).
pub const DEFAULT_WEIGHT: Weight = Weight::Int(1);

/// The weight attached to a single directed connection.
#[derive(Debug, Clone)]
pub enum Weight {
    Int(i64),
    Real(f64),
    /// A textual weight.  Usable as a distance only if it parses as a number.
    Text(String),
}

impl Weight {
    /// Converts the weight to a distance usable by Dijkstra's algorithm.
    ///
    /// Returns `None` if the weight is not a number (text that does not parse,
    /// NaN) or is negative.
    pub fn as_distance(&self) -> Option<f64> {
        let value = match self {
            Weight::Int(i) => *i as f64,
            Weight::Real(r) => *r,
            Weight::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        (!value.is_nan() && value >= 0.0).then_some(value)
    }

    fn numeric(&self) -> Option<f64> {
        match self {
            Weight::Int(i) => Some(*i as f64),
            Weight::Real(r) => Some(*r),
            Weight::Text(_) => None,
        }
    }
}

impl Default for Weight {
    fn default() -> Self {
        DEFAULT_WEIGHT
    }
}

// `Int(1)` and `Real(1.0)` name the same weight.  NaN equals NaN so that
// adjacency sets still deduplicate it.
impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Weight::Int(a), Weight::Int(b)) => a == b,
            (Weight::Text(a), Weight::Text(b)) => a == b,
            _ => match (self.numeric(), other.numeric()) {
                (Some(a), Some(b)) => a == b || (a.is_nan() && b.is_nan()),
                _ => false,
            },
        }
    }
}

impl Display for Weight {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Int(i) => write!(f, "{i}"),
            Weight::Real(r) => write!(f, "{r:?}"),
            Weight::Text(s) => write!(f, "'{s}'"),
        }
    }
}

macro_rules! weight_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Weight {
                fn from(value: $t) -> Self {
                    Weight::Int(i64::from(value))
                }
            }
        )*
    };
}

weight_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Weight {
    fn from(value: f32) -> Self {
        Weight::Real(f64::from(value))
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Weight::Real(value)
    }
}

impl From<&str> for Weight {
    fn from(value: &str) -> Self {
        Weight::Text(value.to_string())
    }
}

impl From<String> for Weight {
    fn from(value: String) -> Self {
        Weight::Text(value)
    }
}
