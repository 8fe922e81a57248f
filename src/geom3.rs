pub mod extrusion;

pub type Point3 = parry3d_f64::na::Point3<f64>;
pub type Vector3 = parry3d_f64::na::Vector3<f64>;
pub type UnitVec3 = parry3d_f64::na::Unit<Vector3>;

/// Lift a point in the x-y plane to three dimensions at the given z height.
///
/// # Arguments
///
/// * `p`: the planar point
/// * `z`: the height along the extrusion axis
///
/// returns: OPoint<f64, Const<3>>
///
/// # Examples
///
/// ```
/// use foilmesh::geom3::lift;
/// use foilmesh::{Point2, Point3};
/// let p = lift(&Point2::new(1.0, 2.0), 0.5);
/// assert_eq!(p, Point3::new(1.0, 2.0, 0.5));
/// ```
pub fn lift(p: &crate::Point2, z: f64) -> Point3 {
    Point3::new(p.x, p.y, z)
}
