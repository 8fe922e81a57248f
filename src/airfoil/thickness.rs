//! The thickness law of the section: the classic symmetric four-digit half-thickness polynomial,
//! scaled by a thickness ratio which varies linearly along the chord instead of being constant.

/// Leading factor of the four-digit half-thickness distribution. Together with the thickness
/// ratio it scales the polynomial so that a ratio of `t` gives a maximum thickness of roughly
/// `t * chord`.
pub const NACA_THICKNESS_SCALE: f64 = 5.0;

/// Coefficient of the square root term.
pub const NACA_A0: f64 = 0.2969;

/// Coefficient of the linear term (subtracted).
pub const NACA_A1: f64 = 0.1260;

/// Coefficient of the quadratic term (subtracted).
pub const NACA_A2: f64 = 0.3516;

/// Coefficient of the cubic term.
pub const NACA_A3: f64 = 0.2843;

/// Coefficient of the quartic term (subtracted). This is the open trailing edge variant, so the
/// polynomial does not reach zero at `xi = 1`.
pub const NACA_A4: f64 = 0.1015;

/// Linearly interpolate the thickness ratio between its leading edge and trailing edge values.
///
/// # Arguments
///
/// * `front`: thickness ratio at the leading edge (`xi = 0`)
/// * `end`: thickness ratio at the trailing edge (`xi = 1`)
/// * `xi`: chord fraction, `x / chord`
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use foilmesh::airfoil::thickness_taper;
/// assert_eq!(thickness_taper(0.2, 0.1, 0.0), 0.2);
/// assert_eq!(thickness_taper(0.2, 0.1, 1.0), 0.1);
/// ```
pub fn thickness_taper(front: f64, end: f64, xi: f64) -> f64 {
    front * (1.0 - xi) + end * xi
}

/// The unscaled four-digit half-thickness polynomial evaluated at chord fraction `xi`.
///
/// returns: f64
pub fn naca_polynomial(xi: f64) -> f64 {
    NACA_A0 * xi.sqrt() - NACA_A1 * xi - NACA_A2 * xi.powi(2) + NACA_A3 * xi.powi(3)
        - NACA_A4 * xi.powi(4)
}

/// Half thickness of the section at chord fraction `xi`, for the local thickness ratio `t` and
/// the given chord length. The upper surface sits this far above the camber line and the lower
/// surface this far below it.
///
/// # Arguments
///
/// * `t`: local thickness ratio, usually from `thickness_taper`
/// * `chord`: chord length
/// * `xi`: chord fraction, `x / chord`
///
/// returns: f64
pub fn half_thickness(t: f64, chord: f64, xi: f64) -> f64 {
    NACA_THICKNESS_SCALE * t * chord * naca_polynomial(xi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(0.0)]
    #[test_case(0.25)]
    #[test_case(0.5)]
    #[test_case(0.9)]
    #[test_case(1.0)]
    fn constant_taper(xi: f64) {
        assert_relative_eq!(thickness_taper(0.12, 0.12, xi), 0.12, epsilon = 1e-15);
    }

    #[test]
    fn polynomial_endpoints() {
        assert_eq!(naca_polynomial(0.0), 0.0);
        assert_relative_eq!(naca_polynomial(1.0), 0.0021, epsilon = 1e-12);
    }

    #[test]
    fn classic_maximum_thickness() {
        // A constant 12% ratio gives the familiar ~12% thick section, peaking near 30% chord
        let (mut best_x, mut best_t) = (0.0, 0.0);
        for i in 0..=1000 {
            let xi = i as f64 / 1000.0;
            let t = 2.0 * half_thickness(0.12, 1.0, xi);
            if t > best_t {
                best_t = t;
                best_x = xi;
            }
        }
        assert_relative_eq!(best_t, 0.12, epsilon = 1e-3);
        assert_relative_eq!(best_x, 0.3, epsilon = 0.01);
    }

    #[test]
    fn scales_with_chord() {
        let a = half_thickness(0.18, 1.0, 0.4);
        let b = half_thickness(0.18, 2.5, 0.4);
        assert_relative_eq!(b, 2.5 * a, epsilon = 1e-14);
    }
}
