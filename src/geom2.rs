//! Two-dimensional type aliases. The section curves live in the x-y plane, and their placement
//! (rotation by the angle of attack followed by a translation) is an `Iso2`.

pub type Point2 = parry2d_f64::na::Point2<f64>;
pub type Vector2 = parry2d_f64::na::Vector2<f64>;
pub type Iso2 = parry2d_f64::na::Isometry2<f64>;
