//! This module contains the generator for parametric airfoil sections. The sections belong to
//! the symmetric four-digit family, with the constant thickness ratio replaced by a linear taper
//! from the leading to the trailing edge, and a parabolic camber line added on top.
//!
//! A section is produced as a [`SurfaceCurve`]: the upper and lower surfaces sampled at the same
//! cosine-spaced chordwise stations, then rotated by the angle of attack and translated into
//! place.

mod camber;
mod params;
mod section;
mod thickness;

use crate::Point2;
use crate::common::cosine_space;

pub use camber::parabolic_camber;
pub use params::AirfoilParams;
pub use section::SurfaceCurve;
pub use thickness::{
    NACA_A0, NACA_A1, NACA_A2, NACA_A3, NACA_A4, NACA_THICKNESS_SCALE, half_thickness,
    naca_polynomial, thickness_taper,
};

/// Generate the section described by `params` in its local frame, with the leading edge at the
/// origin and the chord lying along the positive x axis. No rotation or translation is applied.
///
/// Both surfaces share the same x values at every index. The upper surface is the camber line
/// plus the local half thickness, and the lower surface is the camber line minus it.
///
/// # Arguments
///
/// * `params`: the airfoil parameters
///
/// returns: SurfaceCurve
///
/// # Examples
///
/// ```
/// use foilmesh::airfoil::{AirfoilParams, generate_local};
/// let params = AirfoilParams { point_count: 20, chord: 3.0, ..Default::default() };
/// let curve = generate_local(&params);
/// assert_eq!(curve.len(), 20);
/// assert_eq!(curve.upper()[0].x, 0.0);
/// assert_eq!(curve.upper()[19].x, 3.0);
/// ```
pub fn generate_local(params: &AirfoilParams) -> SurfaceCurve {
    let stations = cosine_space(params.chord, params.point_count);
    let mut upper = Vec::with_capacity(stations.len());
    let mut lower = Vec::with_capacity(stations.len());

    for x in stations {
        let xi = x / params.chord;
        let t = thickness_taper(params.thickness_front, params.thickness_end, xi);
        let yt = half_thickness(t, params.chord, xi);
        let yc = parabolic_camber(params.bend_factor, xi);

        upper.push(Point2::new(x, yt + yc));
        lower.push(Point2::new(x, -yt + yc));
    }

    SurfaceCurve::new(upper, lower)
}

/// Generate the section described by `params` in world coordinates. This is the local section
/// from [`generate_local`] rotated counter-clockwise about the origin by the angle of attack and
/// then translated by the x/y offsets.
///
/// The function is pure and never fails. Parameters outside of a physically sensible range are
/// not rejected here; use [`AirfoilParams::validate`] beforehand if that matters.
///
/// # Arguments
///
/// * `params`: the airfoil parameters
///
/// returns: SurfaceCurve
pub fn generate(params: &AirfoilParams) -> SurfaceCurve {
    generate_local(params).transformed(&params.placement())
}
