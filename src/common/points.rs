//! Small point helpers shared by the section and extrusion code.

use parry3d_f64::na::{AbstractRotation, Isometry, Point};

/// Euclidean distance between two points, used for the local thickness between matching upper and
/// lower surface stations.
///
/// ```
/// use foilmesh::common::points::dist;
/// use foilmesh::Point2;
/// let upper = Point2::new(0.3, 0.09);
/// let lower = Point2::new(0.3, -0.09);
/// assert!((dist(&upper, &lower) - 0.18).abs() < 1e-12);
/// ```
pub fn dist<const D: usize>(a: &Point<f64, D>, b: &Point<f64, D>) -> f64 {
    (a - b).norm()
}

/// The point halfway between `a` and `b`. Applied to a matching pair of surface stations this
/// gives a point on the camber line.
pub fn mid_point<const D: usize>(a: &Point<f64, D>, b: &Point<f64, D>) -> Point<f64, D> {
    b + (a - b) * 0.5
}

/// Apply `transform` to every point in `points`, returning the moved points in the same order.
///
/// ```
/// use foilmesh::common::points::transform_points;
/// use foilmesh::{Iso2, Point2, Vector2};
/// // Leading and trailing edge of a unit chord, placed at (1, 2) with no rotation
/// let chord = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
/// let placed = transform_points(&chord, &Iso2::new(Vector2::new(1.0, 2.0), 0.0));
/// assert_eq!(placed, vec![Point2::new(1.0, 2.0), Point2::new(2.0, 2.0)]);
/// ```
pub fn transform_points<R, const D: usize>(
    points: &[Point<f64, D>],
    transform: &Isometry<f64, R, D>,
) -> Vec<Point<f64, D>>
where
    R: AbstractRotation<f64, D>,
{
    points.iter().map(|p| transform * p).collect()
}
