//! This module contains the camber (bend) line used to curve the otherwise symmetric section.

/// Offset of the parabolic camber line at chord fraction `xi`. The parabola is zero at both the
/// leading and trailing edges and peaks at mid-chord with a value of `bend_factor / 4`. Negative
/// bend factors curve the section downwards.
///
/// # Arguments
///
/// * `bend_factor`: scale of the camber line, 0.0 for an unbent section
/// * `xi`: chord fraction, `x / chord`
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use foilmesh::airfoil::parabolic_camber;
/// assert_eq!(parabolic_camber(-0.4, 0.5), -0.1);
/// assert_eq!(parabolic_camber(0.0, 0.3), 0.0);
/// ```
pub fn parabolic_camber(bend_factor: f64, xi: f64) -> f64 {
    bend_factor * xi * (1.0 - xi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_at_edges() {
        assert_eq!(parabolic_camber(0.8, 0.0), 0.0);
        assert_eq!(parabolic_camber(0.8, 1.0), 0.0);
    }

    #[test]
    fn symmetric_about_mid_chord() {
        for i in 0..50 {
            let xi = i as f64 / 100.0;
            assert_relative_eq!(
                parabolic_camber(0.3, xi),
                parabolic_camber(0.3, 1.0 - xi),
                epsilon = 1e-15
            );
        }
    }
}
