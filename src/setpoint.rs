//! Setpoint merging where a NaN component means "not set".
//!
//! Position, velocity and acceleration setpoints from different sources are combined with these
//! before running the position controller, so an unset component stays unset until something sets it.

use nalgebra::Vector3;

/// Add `addition` to `setpoint`, treating NaN (or infinity) as unset.
///
/// An unset `setpoint` takes the value of `addition` and an unset `addition` leaves `setpoint` untouched.
pub fn add_if_not_nan(setpoint: &mut f32, addition: f32) {
    if !addition.is_finite() {
        return;
    }

    if setpoint.is_finite() {
        *setpoint += addition;
    } else {
        *setpoint = addition;
    }
}

/// Component-wise [`add_if_not_nan`].
pub fn add_if_not_nan_vector3(setpoint: &mut Vector3<f32>, addition: &Vector3<f32>) {
    for (component, addition) in setpoint.iter_mut().zip(addition.iter()) {
        add_if_not_nan(component, *addition);
    }
}

/// Replace every unset (NaN or infinite) component with zero.
pub fn set_zero_if_nan_vector3(vector: &mut Vector3<f32>) {
    for component in vector.iter_mut() {
        if !component.is_finite() {
            *component = 0.;
        }
    }
}
