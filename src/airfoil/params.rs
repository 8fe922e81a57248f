use crate::Result;
use crate::errors::InvalidAirfoil;
use crate::geom2::{Iso2, Vector2};
use serde::{Deserialize, Serialize};

/// The full set of parameters describing one airfoil section and its placement in the plane.
///
/// The serialized names follow the Rust field names, but `n_points`, `chord_length` and
/// `angle_of_attack` are accepted as alternatives when deserializing. Any missing key takes its
/// value from `AirfoilParams::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirfoilParams {
    /// The number of chordwise stations on each surface, including both the leading and the
    /// trailing edge.
    #[serde(alias = "n_points")]
    pub point_count: usize,

    /// The chord length, i.e. the distance from the leading edge to the trailing edge.
    #[serde(alias = "chord_length")]
    pub chord: f64,

    /// Translation applied along x after rotation.
    pub x_offset: f64,

    /// Translation applied along y after rotation.
    pub y_offset: f64,

    /// The angle of attack in degrees. Positive values rotate the section counter-clockwise about
    /// its leading edge.
    #[serde(alias = "angle_of_attack")]
    pub angle: f64,

    /// Scales the parabolic camber line. Zero produces a symmetric section, and the peak camber
    /// at mid-chord is a quarter of this value.
    pub bend_factor: f64,

    /// The thickness ratio (fraction of chord) that the taper starts from at the leading edge.
    pub thickness_front: f64,

    /// The thickness ratio (fraction of chord) that the taper reaches at the trailing edge.
    pub thickness_end: f64,
}

impl Default for AirfoilParams {
    fn default() -> Self {
        Self {
            point_count: 100,
            chord: 1.0,
            x_offset: 0.0,
            y_offset: 0.0,
            angle: 0.0,
            bend_factor: 0.0,
            thickness_front: 0.18,
            thickness_end: 0.05,
        }
    }
}

impl AirfoilParams {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        point_count: usize,
        chord: f64,
        x_offset: f64,
        y_offset: f64,
        angle: f64,
        bend_factor: f64,
        thickness_front: f64,
        thickness_end: f64,
    ) -> Self {
        Self {
            point_count,
            chord,
            x_offset,
            y_offset,
            angle,
            bend_factor,
            thickness_front,
            thickness_end,
        }
    }

    /// Returns the rigid transformation which takes the section from its local frame (leading edge
    /// at the origin, chord along +x) into place: a counter-clockwise rotation by the angle of
    /// attack followed by a translation by the offsets.
    ///
    /// # Examples
    ///
    /// ```
    /// use foilmesh::{AirfoilParams, Point2};
    /// use approx::assert_relative_eq;
    /// let params = AirfoilParams { angle: 90.0, x_offset: 1.0, ..Default::default() };
    /// let p = params.placement() * Point2::new(1.0, 0.0);
    /// assert_relative_eq!(p, Point2::new(1.0, 1.0), epsilon = 1e-12);
    /// ```
    pub fn placement(&self) -> Iso2 {
        Iso2::new(
            Vector2::new(self.x_offset, self.y_offset),
            self.angle.to_radians(),
        )
    }

    /// Check that the parameters describe a physically sensible section: at least two points, a
    /// positive chord, non-negative thickness ratios, and only finite values. The generator does
    /// not call this itself, it will produce whatever geometry the arithmetic gives.
    ///
    /// returns: Result<(), Box<dyn Error, Global>>
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("chord", self.chord),
            ("x_offset", self.x_offset),
            ("y_offset", self.y_offset),
            ("angle", self.angle),
            ("bend_factor", self.bend_factor),
            ("thickness_front", self.thickness_front),
            ("thickness_end", self.thickness_end),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Box::new(InvalidAirfoil::NonFinite(*name)));
        }

        if self.point_count < 2 {
            return Err(Box::new(InvalidAirfoil::TooFewPoints(self.point_count)));
        }

        if self.chord <= 0.0 {
            return Err(Box::new(InvalidAirfoil::NonPositiveChord(self.chord)));
        }

        if self.thickness_front < 0.0 || self.thickness_end < 0.0 {
            return Err(Box::new(InvalidAirfoil::NegativeThickness {
                front: self.thickness_front,
                end: self.thickness_end,
            }));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn rejection(p: AirfoilParams) -> InvalidAirfoil {
        let err = p.validate().unwrap_err();
        err.downcast_ref::<InvalidAirfoil>().unwrap().clone()
    }

    #[test]
    fn default_is_valid() {
        assert!(AirfoilParams::default().validate().is_ok());
    }

    #[test_case(0)]
    #[test_case(1)]
    fn too_few_points(n: usize) {
        let p = AirfoilParams {
            point_count: n,
            ..Default::default()
        };
        assert_eq!(rejection(p), InvalidAirfoil::TooFewPoints(n));
    }

    #[test_case(0.0)]
    #[test_case(-1.5)]
    fn non_positive_chord(chord: f64) {
        let p = AirfoilParams {
            chord,
            ..Default::default()
        };
        assert_eq!(rejection(p), InvalidAirfoil::NonPositiveChord(chord));
    }

    #[test]
    fn negative_thickness() {
        let p = AirfoilParams {
            thickness_end: -0.01,
            ..Default::default()
        };
        assert!(matches!(
            rejection(p),
            InvalidAirfoil::NegativeThickness { .. }
        ));
    }

    #[test]
    fn non_finite_field_is_named() {
        let p = AirfoilParams {
            bend_factor: f64::NAN,
            ..Default::default()
        };
        assert_eq!(rejection(p), InvalidAirfoil::NonFinite("bend_factor"));
    }

    #[test]
    fn deserialize_accepts_alternate_keys() {
        let text = r#"{
            "chord": 0.9, "x_offset": 1.75, "y_offset": 0.5, "angle": 35.0,
            "n_points": 150, "bend_factor": -0.3,
            "thickness_front": 0.18, "thickness_end": 0.03
        }"#;
        let p: AirfoilParams = serde_json::from_str(text).unwrap();
        assert_eq!(p, AirfoilParams::new(150, 0.9, 1.75, 0.5, 35.0, -0.3, 0.18, 0.03));
    }

    #[test]
    fn deserialize_fills_defaults() {
        let p: AirfoilParams = serde_json::from_str(r#"{"chord": 2.0}"#).unwrap();
        assert_eq!(p.chord, 2.0);
        assert_eq!(p.point_count, 100);
        assert_eq!(p.thickness_front, 0.18);
    }
}
