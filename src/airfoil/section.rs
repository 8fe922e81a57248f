use crate::common::points::{dist, mid_point, transform_points};
use crate::{Iso2, Point2, Result};

/// The upper and lower surfaces of an airfoil section, sampled at matching chordwise stations.
/// Index 0 is the leading edge and the last index is the trailing edge on both surfaces, so
/// `upper()[i]` and `lower()[i]` always belong to the same station.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceCurve {
    upper: Vec<Point2>,
    lower: Vec<Point2>,
}

impl SurfaceCurve {
    pub(crate) fn new(upper: Vec<Point2>, lower: Vec<Point2>) -> Self {
        debug_assert_eq!(upper.len(), lower.len());
        Self { upper, lower }
    }

    /// Build a surface curve from externally produced surfaces. The two surfaces must have the
    /// same number of points, ordered from the leading edge to the trailing edge.
    ///
    /// # Arguments
    ///
    /// * `upper`: the upper surface points
    /// * `lower`: the lower surface points
    ///
    /// returns: Result<SurfaceCurve, Box<dyn Error, Global>>
    ///
    /// # Examples
    ///
    /// ```
    /// use foilmesh::{Point2, SurfaceCurve};
    /// let upper = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.1)];
    /// let lower = vec![Point2::new(0.0, 0.0), Point2::new(1.0, -0.1)];
    /// let curve = SurfaceCurve::from_surfaces(upper, lower).unwrap();
    /// assert_eq!(curve.len(), 2);
    /// ```
    pub fn from_surfaces(upper: Vec<Point2>, lower: Vec<Point2>) -> Result<Self> {
        if upper.len() != lower.len() {
            return Err(format!(
                "Upper and lower surfaces must have the same number of points ({} != {})",
                upper.len(),
                lower.len()
            )
            .into());
        }
        Ok(Self::new(upper, lower))
    }

    pub fn upper(&self) -> &[Point2] {
        &self.upper
    }

    pub fn lower(&self) -> &[Point2] {
        &self.lower
    }

    /// The number of stations, which is the length of each surface.
    pub fn len(&self) -> usize {
        self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }

    /// Returns a new surface curve with every point on both surfaces moved by `iso`.
    pub fn transformed(&self, iso: &Iso2) -> Self {
        Self::new(
            transform_points(&self.upper, iso),
            transform_points(&self.lower, iso),
        )
    }

    /// The points halfway between the upper and lower surface at each station. For a section
    /// generated from a bend factor of zero these lie on the (transformed) chord line.
    pub fn mid_line(&self) -> Vec<Point2> {
        self.upper
            .iter()
            .zip(self.lower.iter())
            .map(|(u, l)| mid_point(u, l))
            .collect()
    }

    /// The distance between the upper and lower surface at each station.
    pub fn thicknesses(&self) -> Vec<f64> {
        self.upper
            .iter()
            .zip(self.lower.iter())
            .map(|(u, l)| dist(u, l))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector2;
    use crate::airfoil::{AirfoilParams, generate};
    use approx::assert_relative_eq;

    #[test]
    fn mismatched_surfaces_are_rejected() {
        let upper = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let lower = vec![Point2::new(0.0, 0.0)];
        assert!(SurfaceCurve::from_surfaces(upper, lower).is_err());
    }

    #[test]
    fn unbent_mid_line_is_chord_line() {
        let p = AirfoilParams {
            point_count: 60,
            chord: 2.0,
            angle: 30.0,
            x_offset: 1.0,
            y_offset: -2.0,
            ..Default::default()
        };
        let curve = generate(&p);
        let dir = Vector2::new(30.0_f64.to_radians().cos(), 30.0_f64.to_radians().sin());
        let normal = Vector2::new(-dir.y, dir.x);
        for m in curve.mid_line() {
            let offset = m - Point2::new(1.0, -2.0);
            assert_relative_eq!(offset.dot(&normal), 0.0, epsilon = 1e-12);
            assert!(offset.dot(&dir) >= -1e-12);
            assert!(offset.dot(&dir) <= 2.0 + 1e-12);
        }
    }

    #[test]
    fn thicknesses_survive_transform() {
        let p = AirfoilParams::default();
        let local = crate::airfoil::generate_local(&p);
        let moved = local.transformed(&Iso2::new(Vector2::new(3.0, 4.0), 1.1));
        for (a, b) in local.thicknesses().iter().zip(moved.thicknesses()) {
            assert_relative_eq!(*a, b, epsilon = 1e-12);
        }
    }
}
