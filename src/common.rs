pub mod points;

use std::f64::consts::PI;

/// Generate a vec of domain values which are linearly spaced between `start` and `end` and which
/// have a count of `count`. The first value will be `start` and the last value will be exactly
/// `end`, without accumulated rounding from the step. A count of one produces only `start`, and
/// a count of zero produces an empty vec.
///
/// # Arguments
///
/// * `start`: the starting value of the domain, inclusive
/// * `end`: the ending value of the domain, inclusive
/// * `count`: the total number of discrete, evenly spaced values in the domain
///
/// returns: Vec<f64, Global>
///
/// # Examples
///
/// ```
/// use foilmesh::common::linear_space;
/// let domain = linear_space(0.0, 1.0, 3);
/// assert_eq!(domain, vec![0.0, 0.5, 1.0]);
/// assert_eq!(linear_space(2.0, 5.0, 1), vec![2.0]);
/// ```
pub fn linear_space(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![start; count];
    }

    let mut result = Vec::with_capacity(count);
    let step = (end - start) / (count - 1) as f64;
    for i in 0..count - 1 {
        result.push(start + i as f64 * step);
    }
    result.push(end);
    result
}

/// Generate `count` values between 0 and `length` with cosine spacing, which clusters the values
/// towards both ends of the interval. Value `i` is `0.5 * length * (1 - cos(beta_i))` where the
/// angles `beta_i` are linearly spaced over [0, pi].
///
/// The first value is always exactly 0.0 and the last value is exactly `length`.
///
/// # Arguments
///
/// * `length`: the length of the interval
/// * `count`: the number of values to generate
///
/// returns: Vec<f64, Global>
///
/// # Examples
///
/// ```
/// use foilmesh::common::cosine_space;
/// use approx::assert_relative_eq;
/// let x = cosine_space(2.0, 3);
/// assert_eq!(x[0], 0.0);
/// assert_relative_eq!(x[1], 1.0, epsilon = 1e-12);
/// assert_eq!(x[2], 2.0);
/// ```
pub fn cosine_space(length: f64, count: usize) -> Vec<f64> {
    linear_space(0.0, PI, count)
        .into_iter()
        .map(|beta| 0.5 * length * (1.0 - beta.cos()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(2)]
    #[test_case(7)]
    #[test_case(150)]
    fn cosine_space_count(n: usize) {
        assert_eq!(cosine_space(1.0, n).len(), n);
    }

    #[test]
    fn cosine_space_single_is_origin() {
        assert_eq!(cosine_space(3.0, 1), vec![0.0]);
    }

    #[test]
    fn cosine_space_clusters_at_ends() {
        let x = cosine_space(1.0, 101);
        let first_gap = x[1] - x[0];
        let mid_gap = x[51] - x[50];
        let last_gap = x[100] - x[99];
        assert!(first_gap < mid_gap / 10.0);
        assert!(last_gap < mid_gap / 10.0);
    }

    #[test]
    fn cosine_space_is_symmetric() {
        let x = cosine_space(2.0, 50);
        for i in 0..50 {
            assert_relative_eq!(x[i] + x[49 - i], 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn linear_space_empty() {
        assert!(linear_space(0.0, 1.0, 0).is_empty());
    }
}
