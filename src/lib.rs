//! Generation of tapered, cambered four-digit airfoil sections and their extrusion into
//! triangulated solids written as STL.
//!
//! The pipeline has two halves: [`airfoil::generate`] turns an [`AirfoilParams`] into a pair of
//! upper/lower surface curves, and [`geom3::extrusion::emit`] extrudes a batch of those curves
//! along the z axis into a single [`MeshDocument`], which the [`io`] module serializes.

pub mod airfoil;
pub mod common;
pub mod config;
pub mod errors;
pub mod geom2;
pub mod geom3;
pub mod io;

use std::error::Error;

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

pub use parry3d_f64::na;

pub use airfoil::{AirfoilParams, SurfaceCurve, generate};
pub use config::FoilBatch;
pub use errors::InvalidAirfoil;
pub use geom2::{Iso2, Point2, Vector2};
pub use geom3::extrusion::{
    CapMode, ExtrusionOptions, Facet, MeshDocument, SOLID_NAME, ShellSection, emit,
    emit_with_options,
};
pub use geom3::{Point3, UnitVec3, Vector3};
