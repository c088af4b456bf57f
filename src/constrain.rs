use nalgebra::Vector2;
use num_traits::Float;

/// Vectors closer than this are treated as equal or zero.
const EPS: f32 = 1e-3;

/// Combine `v0` and `v1` into a vector with a magnitude of at most `max`, giving priority to `v0`.
///
/// `v0` is kept as is whenever it fits within `max` on its own, and the remaining magnitude
/// is filled with as much of `v1` (along its own direction) as fits.
/// If `v0` alone already exceeds `max` it is scaled down and `v1` is dropped.
pub fn constrain_xy(v0: Vector2<f32>, v1: Vector2<f32>, max: f32) -> Vector2<f32> {
    let v0_len = v0.norm();
    if v0_len >= max {
        // The magnitude along v0, which has priority, already exceeds the maximum
        return if v0_len > 0. {
            v0 * (max / v0_len)
        } else {
            Vector2::zeros()
        };
    }

    let sum = v0 + v1;
    if sum.norm() <= max {
        // The sum does not exceed the maximum magnitude
        return sum;
    }

    if (v1 - v0).norm() < EPS {
        // The two vectors are equal
        return v0 * (max / v0_len);
    }

    let v1_len = v1.norm();
    if v0_len < EPS {
        // The first vector is zero
        return v1 * (max / v1_len);
    }

    // Find the scale s of the unit vector u1 of v1 so that ||v0 + s * u1|| = max:
    //   s^2 + 2 * s * (u1 . v0) + (||v0||^2 - max^2) = 0
    // with m = u1 . v0 and c = ||v0||^2 - max^2 the positive root is
    //   s = -m + sqrt(m^2 - c)
    // c is negative here as v0 fits on its own, so s is positive.
    let u1 = v1 / v1_len;
    let m = u1.dot(&v0);
    let c = v0.norm_squared() - max * max;
    let s = (-m + (m * m - c).max(0.).sqrt()).max(0.).min(v1_len);

    v0 + u1 * s
}
