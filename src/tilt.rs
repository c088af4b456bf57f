use nalgebra::Vector3;
use num_traits::Float;

/// Limit the angle between `body` and the unit `reference` axis to `max_angle` (in radians, 0 ~ PI).
///
/// A `body` that is already within `max_angle` is returned unchanged, bit for bit.
/// Otherwise it is rotated towards `reference` in the plane spanned by the two vectors
/// and keeps its original length.
///
/// If `body` points exactly away from `reference` there is no such plane,
/// so the tilt is applied towards world X (or world Y if `reference` lies along X).
pub fn limit_tilt(body: Vector3<f32>, reference: Vector3<f32>, max_angle: f32) -> Vector3<f32> {
    // A zero vector has no tilt to limit
    let length = body.norm();
    if length < f32::EPSILON {
        return body;
    }
    let body_unit = body / length;

    // 1. Determine the current tilt
    let dot = body_unit.dot(&reference).max(-1.).min(1.);
    let angle = dot.acos();
    if angle <= max_angle {
        return body;
    }

    // 2. Find the direction to tilt towards, orthogonal to the reference
    let mut rejection = body_unit - reference * dot;
    if rejection.norm_squared() < f32::EPSILON {
        log::trace!("tilt limit on opposite vectors, using auxiliary axis");
        rejection = auxiliary_rejection(reference);
    }

    // 3. Rotate to exactly the maximum tilt and restore the length
    let (sin_angle, cos_angle) = max_angle.sin_cos();
    (reference * cos_angle + rejection.normalize() * sin_angle) * length
}

/// Limit the tilt of `body` in place (see [`limit_tilt`]).
pub fn limit_tilt_in_place(body: &mut Vector3<f32>, reference: Vector3<f32>, max_angle: f32) {
    *body = limit_tilt(*body, reference, max_angle);
}

// Part of a world axis orthogonal to the reference, used when the body vector gives no direction.
fn auxiliary_rejection(reference: Vector3<f32>) -> Vector3<f32> {
    let rejection = Vector3::x() - reference * reference.x;
    if rejection.norm_squared() < f32::EPSILON {
        Vector3::y() - reference * reference.y
    } else {
        rejection
    }
}

#[cfg(test)]
mod tests {
    use super::{limit_tilt, limit_tilt_in_place};
    use approx::assert_abs_diff_eq;
    use core::f32::consts::FRAC_1_SQRT_2;
    use nalgebra::Vector3;
    use num_traits::Float;

    const MAX_45: f32 = 45. * core::f32::consts::PI / 180.;

    fn up() -> Vector3<f32> {
        Vector3::new(0., 0., 1.)
    }

    fn angle_to_up(body: Vector3<f32>) -> f32 {
        (body.normalize().dot(&up())).acos()
    }

    #[test]
    fn within_limit_is_unchanged() {
        let body = up();
        assert_eq!(limit_tilt(body, up(), MAX_45), body);

        let body = Vector3::new(0., 0.1, 1.).normalize();
        assert_eq!(limit_tilt(body, up(), MAX_45), body);

        // Length is not used for the comparison
        let body = Vector3::new(0.3, -0.2, 4.);
        assert_eq!(limit_tilt(body, up(), MAX_45), body);
    }

    #[test]
    fn opposite() {
        let body = limit_tilt(Vector3::new(0., 0., -1.), up(), MAX_45);

        assert_abs_diff_eq!(angle_to_up(body).to_degrees(), 45., epsilon = 1e-4);
        assert_abs_diff_eq!(body.norm(), 1., epsilon = 1e-6);
        // The auxiliary axis is world X
        assert!(body.x > 0.);
        assert_eq!(body.y, 0.);
    }

    #[test]
    fn opposite_along_x() {
        let reference = Vector3::new(1., 0., 0.);
        let body = limit_tilt(Vector3::new(-2., 0., 0.), reference, MAX_45);

        assert_abs_diff_eq!(
            body.normalize().dot(&reference).acos(),
            MAX_45,
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(body.norm(), 2., epsilon = 1e-5);
        assert!(body.y > 0.);
    }

    #[test]
    fn almost_opposite() {
        // Close to the corner case but still has a direction
        let body = limit_tilt(Vector3::new(0.001, 0., -1.).normalize(), up(), MAX_45);

        assert_abs_diff_eq!(angle_to_up(body).to_degrees(), 45., epsilon = 1e-4);
        assert_abs_diff_eq!(body.norm(), 1., epsilon = 1e-6);
        assert!(body.x > 0.);
    }

    #[test]
    fn tilt_45_degrees() {
        let body = limit_tilt(Vector3::new(1., 0., 0.), up(), MAX_45);
        assert_abs_diff_eq!(
            body,
            Vector3::new(FRAC_1_SQRT_2, 0., FRAC_1_SQRT_2),
            epsilon = 1e-6
        );

        let body = limit_tilt(Vector3::new(0., 1., 0.), up(), MAX_45);
        assert_abs_diff_eq!(
            body,
            Vector3::new(0., FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            epsilon = 1e-6
        );
    }

    #[test]
    fn tilt_10_degrees() {
        let max = 10f32.to_radians();

        let body = limit_tilt(Vector3::new(1., 1., 0.1).normalize(), up(), max);
        assert_abs_diff_eq!(angle_to_up(body).to_degrees(), 10., epsilon = 1e-4);
        assert_abs_diff_eq!(body.norm(), 1., epsilon = 1e-6);
        assert_abs_diff_eq!(body.x, body.y, epsilon = 1e-6);

        let body = limit_tilt(Vector3::new(1., 2., 0.2), up(), max);
        assert_abs_diff_eq!(angle_to_up(body).to_degrees(), 10., epsilon = 1e-4);
        assert_abs_diff_eq!(body.norm(), Vector3::<f32>::new(1., 2., 0.2).norm(), epsilon = 1e-5);
        assert_abs_diff_eq!(2. * body.x, body.y, epsilon = 1e-5);
    }

    #[test]
    fn zero_body() {
        assert_eq!(limit_tilt(Vector3::zeros(), up(), MAX_45), Vector3::zeros());
    }

    #[test]
    fn in_place() {
        let mut body = Vector3::new(0., 3., 0.);
        limit_tilt_in_place(&mut body, up(), MAX_45);

        assert_abs_diff_eq!(
            body,
            Vector3::new(0., 3. * FRAC_1_SQRT_2, 3. * FRAC_1_SQRT_2),
            epsilon = 1e-5
        );
    }
}
