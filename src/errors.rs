use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reasons an `AirfoilParams` can be rejected by validation. The generator itself never checks
/// these, it will happily produce degenerate geometry, so validation is up to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidAirfoil {
    /// Fewer than two chordwise stations were requested, which leaves no surface to tessellate.
    TooFewPoints(usize),

    /// The chord length was zero or negative.
    NonPositiveChord(f64),

    /// One of the two thickness fractions was negative.
    NegativeThickness { front: f64, end: f64 },

    /// A parameter was NaN or infinite. Carries the name of the offending field.
    NonFinite(&'static str),
}

impl Display for InvalidAirfoil {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidAirfoil::TooFewPoints(n) => {
                write!(f, "airfoil needs at least 2 points, got {}", n)
            }
            InvalidAirfoil::NonPositiveChord(c) => {
                write!(f, "airfoil chord must be positive, got {}", c)
            }
            InvalidAirfoil::NegativeThickness { front, end } => write!(
                f,
                "airfoil thickness must be non-negative, got front={} end={}",
                front, end
            ),
            InvalidAirfoil::NonFinite(field) => {
                write!(f, "airfoil parameter '{}' is not finite", field)
            }
        }
    }
}

impl Error for InvalidAirfoil {}
