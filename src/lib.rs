//! Dot-product demo: two random vectors, their scaled copies, and a
//! controller that classifies them and toggles which pair is drawn.

pub mod config;
pub mod controller;
pub mod error;
pub mod relation;
pub mod sampling;
pub mod sink;

pub mod library {
    use crate::error::{DemoError, Result};

    pub type Vec3 = [f32; 3];

    pub const ORIGIN: Vec3 = [0.0, 0.0, 0.0];

    pub fn dot(vec1: Vec3, vec2: Vec3) -> f32 {
        vec1[0] * vec2[0] + vec1[1] * vec2[1] + vec1[2] * vec2[2]
    }

    pub fn scale(vec: Vec3, scalar: f32) -> Vec3 {
        [vec[0] * scalar, vec[1] * scalar, vec[2] * scalar]
    }

    /// Length built from the two sides that are not the hypotenuse: the
    /// strictly greatest absolute component is dropped. Returns 1 when no
    /// component is strictly greatest.
    pub fn magnitude(vec: Vec3) -> f32 {
        let [x, y, z] = [vec[0].abs(), vec[1].abs(), vec[2].abs()];
        let (side1, side2) = if x > y && x > z {
            (y, z)
        } else if y > x && y > z {
            (x, z)
        } else if z > x && z > y {
            (x, y)
        } else {
            return 1.0;
        };
        (side1.powf(2.0) + side2.powf(2.0)).sqrt()
    }

    pub fn euclidean_magnitude(vec: Vec3) -> f32 {
        dot(vec, vec).sqrt()
    }

    /// How far a cosine may overshoot [-1, 1] from rounding alone.
    const COSINE_SLACK: f32 = 4.0 * f32::EPSILON;

    /// Smallest positive subnormal, the engine's `Epsilon`.
    const TINY: f32 = f32::from_bits(1);

    /// Angle in radians, `acos(dot / (|v1||v2|))`. A zero magnitude gives
    /// NaN, and so does a cosine outside [-1, 1] by more than rounding
    /// (common with the legacy magnitude).
    pub fn angle_between(vec1: Vec3, vec2: Vec3, mag: fn(Vec3) -> f32) -> f32 {
        let product = mag(vec1) * mag(vec2);
        if product == 0.0 {
            return f32::NAN;
        }
        let cosine = dot(vec1, vec2) / product;
        if cosine.abs() <= 1.0 + COSINE_SLACK {
            cosine.clamp(-1.0, 1.0).acos()
        } else {
            cosine.acos()
        }
    }

    pub fn try_angle_between(vec1: Vec3, vec2: Vec3, mag: fn(Vec3) -> f32) -> Result<f32> {
        let product = mag(vec1) * mag(vec2);
        if product == 0.0 {
            return Err(DemoError::ZeroMagnitude);
        }
        let angle = angle_between(vec1, vec2, mag);
        if angle.is_nan() {
            return Err(DemoError::CosineOutOfRange(dot(vec1, vec2) / product));
        }
        Ok(angle)
    }

    pub fn dot_geometric(vec1: Vec3, vec2: Vec3, mag: fn(Vec3) -> f32) -> f32 {
        mag(vec1) * mag(vec2) * angle_between(vec1, vec2, mag).cos()
    }

    /// Float comparison with the tolerance game engines use for
    /// `Approximately`: relative 1e-6, with a floor of eight times the
    /// smallest subnormal.
    pub fn approximately(a: f32, b: f32) -> bool {
        let tolerance = (1e-6 * a.abs().max(b.abs())).max(TINY * 8.0);
        (b - a).abs() < tolerance
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use approx::assert_relative_eq;

        #[test]
        fn dot_matches_componentwise_sum() {
            let a = [1.5, -2.0, 4.0];
            let b = [-3.0, 0.5, 2.25];
            assert_eq!(dot(a, b), 1.5 * -3.0 + -2.0 * 0.5 + 4.0 * 2.25);
        }

        #[test]
        fn self_dot_is_non_negative() {
            for v in [[0.0, 0.0, 0.0], [-7.0, 3.0, -1.0], [19.9, -19.9, 0.001]] {
                assert!(dot(v, v) >= 0.0);
            }
        }

        #[test]
        fn magnitude_drops_largest_component() {
            assert_eq!(magnitude([5.0, 1.0, 2.0]), 5.0_f32.sqrt());
            assert_eq!(magnitude([-1.0, -9.0, 2.0]), 5.0_f32.sqrt());
            assert_eq!(magnitude([3.0, 4.0, 12.0]), 5.0);
        }

        #[test]
        fn magnitude_ties_return_one() {
            assert_eq!(magnitude([3.0, 3.0, 3.0]), 1.0);
            assert_eq!(magnitude([4.0, -4.0, 1.0]), 1.0);
            assert_eq!(magnitude([0.0, 0.0, 0.0]), 1.0);
        }

        #[test]
        fn euclidean_is_true_length() {
            assert_relative_eq!(euclidean_magnitude([2.0, 3.0, 6.0]), 7.0);
        }

        #[test]
        fn geometric_dot_agrees_with_coordinates_for_euclidean_norm() {
            let a = [3.0, -4.0, 12.0];
            let b = [-1.0, 7.5, 2.0];
            assert_relative_eq!(
                dot_geometric(a, b, euclidean_magnitude),
                dot(a, b),
                epsilon = 1e-3
            );
        }

        #[test]
        fn angle_of_zero_vector_is_nan() {
            assert!(angle_between([0.0; 3], [1.0, 2.0, 3.0], euclidean_magnitude).is_nan());
        }

        #[test]
        fn try_angle_rejects_zero_vector() {
            assert_eq!(
                try_angle_between([1.0, 0.0, 0.0], [0.0; 3], euclidean_magnitude),
                Err(DemoError::ZeroMagnitude)
            );
            let right = try_angle_between([1.0, 0.0, 0.0], [0.0, 2.0, 0.0], euclidean_magnitude);
            assert_relative_eq!(right.unwrap(), std::f32::consts::FRAC_PI_2);
        }

        #[test]
        fn approximately_uses_relative_tolerance() {
            assert!(approximately(1000.0, 1000.0001));
            assert!(!approximately(1000.0, 1001.0));
            assert!(approximately(0.0, 0.0));
            assert!(!approximately(0.0, 1e-30));
        }

        #[test]
        fn approximately_floor_is_a_few_subnormals() {
            assert!(!approximately(0.0, 1e-40));
            assert!(approximately(0.0, f32::from_bits(7)));
            assert!(!approximately(0.0, f32::from_bits(8)));
        }

        #[test]
        fn legacy_geometric_dot_is_nan_outside_acos_domain() {
            let v = [5.0, 1.0, 2.0];
            // dot = 30 against a legacy product of 5
            assert!(angle_between(v, v, magnitude).is_nan());
            assert!(dot_geometric(v, v, magnitude).is_nan());
            assert!(matches!(
                try_angle_between(v, v, magnitude),
                Err(DemoError::CosineOutOfRange(c)) if (c - 6.0).abs() < 1e-4
            ));
        }

        #[test]
        fn legacy_geometric_dot_inside_domain() {
            // legacy magnitudes sqrt(5) and 0.2 against a dot of 0.4
            let a = [1.0, 2.0, 3.0];
            let b = [0.0, 0.5, -0.2];
            let product = magnitude(a) * magnitude(b);
            let expected = product * (dot(a, b) / product).acos().cos();
            assert_relative_eq!(dot_geometric(a, b, magnitude), expected);
        }

        #[test]
        fn collinear_euclidean_survives_rounding() {
            let a = [0.1, 0.7, -0.3];
            let b = scale(a, 3.0);
            assert!(!angle_between(a, b, euclidean_magnitude).is_nan());
            assert_relative_eq!(
                dot_geometric(a, b, euclidean_magnitude),
                dot(a, b),
                max_relative = 1e-5
            );
        }
    }
}
