//! Random ranges with game-engine semantics.

use rand::Rng;

/// Inclusive float range. The bounds may be given in either order; the
/// result is interpolated between them.
pub fn range_f32<R: Rng>(rng: &mut R, a: f32, b: f32) -> f32 {
    let t: f32 = rng.random_range(0.0..=1.0);
    a + (b - a) * t
}

/// Inclusive integer range, `min..=max`.
pub fn range_i32<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.random_range(min..=max)
}

/// One x or y component: the outer range's bounds are themselves random,
/// picked from [-20, -5] and [5, 20].
pub fn sample_axis<R: Rng>(rng: &mut R) -> f32 {
    let low = range_f32(rng, -20.0, -5.0);
    let high = range_f32(rng, 5.0, 20.0);
    range_f32(rng, low, high)
}

/// The z component draws its lower bound with the interval reversed.
pub fn sample_depth<R: Rng>(rng: &mut R) -> f32 {
    let low = range_f32(rng, -5.0, -20.0);
    let high = range_f32(rng, 5.0, 20.0);
    range_f32(rng, low, high)
}

pub fn sample_vector<R: Rng>(rng: &mut R) -> [f32; 3] {
    let x = sample_axis(rng);
    let y = sample_axis(rng);
    let z = sample_depth(rng);
    [x, y, z]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn reversed_float_range_stays_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = range_f32(&mut rng, -5.0, -20.0);
            assert!((-20.0..=-5.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn integer_range_is_inclusive() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 11];
        for _ in 0..2000 {
            let s = range_i32(&mut rng, 2, 10);
            assert!((2..=10).contains(&s));
            seen[s as usize] = true;
        }
        assert!(seen[2] && seen[10]);
    }

    #[test]
    fn vector_components_within_twenty() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            for c in sample_vector(&mut rng) {
                assert!((-20.0..=20.0).contains(&c), "{c}");
            }
        }
    }
}
