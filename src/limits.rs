use crate::{constrain_xy, cross_sphere_line, limit_tilt, Error, LineCrossing};
use core::f32::consts::PI;
use nalgebra::{Vector2, Vector3};

/// Limits used by the position controller and waypoint guidance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlLimits {
    max_tilt: f32,
    max_horizontal: f32,
    acceptance_radius: f32,
}

impl Default for ControlLimits {
    fn default() -> Self {
        Self {
            max_tilt: PI / 4.,
            max_horizontal: 12.,
            acceptance_radius: 2.,
        }
    }
}

impl ControlLimits {
    /// Create new limits from a maximum tilt (in radians), a maximum horizontal magnitude
    /// and an acceptance radius (in meters).
    pub fn new(max_tilt: f32, max_horizontal: f32, acceptance_radius: f32) -> Result<Self, Error> {
        if !(max_tilt.is_finite() && (0. ..PI).contains(&max_tilt)) {
            log::warn!("rejected tilt limit {}", max_tilt);
            return Err(Error::InvalidTiltAngle(max_tilt));
        }

        if !(max_horizontal.is_finite() && max_horizontal >= 0.) {
            log::warn!("rejected horizontal limit {}", max_horizontal);
            return Err(Error::InvalidMagnitude(max_horizontal));
        }

        if !(acceptance_radius.is_finite() && acceptance_radius > 0.) {
            log::warn!("rejected acceptance radius {}", acceptance_radius);
            return Err(Error::InvalidRadius(acceptance_radius));
        }

        Ok(Self {
            max_tilt,
            max_horizontal,
            acceptance_radius,
        })
    }

    pub fn builder() -> ControlLimitsBuilder {
        ControlLimitsBuilder::default()
    }

    pub fn max_tilt(&self) -> f32 {
        self.max_tilt
    }

    pub fn max_horizontal(&self) -> f32 {
        self.max_horizontal
    }

    pub fn acceptance_radius(&self) -> f32 {
        self.acceptance_radius
    }

    /// Limit the tilt of `body` from `reference` to the maximum tilt (see [`limit_tilt`]).
    pub fn limit_tilt(&self, body: Vector3<f32>, reference: Vector3<f32>) -> Vector3<f32> {
        limit_tilt(body, reference, self.max_tilt)
    }

    /// Combine `v0` and `v1` within the maximum horizontal magnitude (see [`constrain_xy`]).
    pub fn constrain_xy(&self, v0: Vector2<f32>, v1: Vector2<f32>) -> Vector2<f32> {
        constrain_xy(v0, v1, self.max_horizontal)
    }

    /// Find the next target between the waypoints `prev` and `curr` using the acceptance radius
    /// around `position` (see [`cross_sphere_line`]).
    pub fn cross_sphere_line(
        &self,
        position: Vector3<f32>,
        prev: Vector3<f32>,
        curr: Vector3<f32>,
    ) -> LineCrossing {
        cross_sphere_line(position, self.acceptance_radius, prev, curr)
    }
}

/// Builder for [`ControlLimits`], starting from the defaults.
pub struct ControlLimitsBuilder {
    max_tilt: f32,
    max_horizontal: f32,
    acceptance_radius: f32,
}

impl Default for ControlLimitsBuilder {
    fn default() -> Self {
        let limits = ControlLimits::default();

        Self {
            max_tilt: limits.max_tilt,
            max_horizontal: limits.max_horizontal,
            acceptance_radius: limits.acceptance_radius,
        }
    }
}

impl ControlLimitsBuilder {
    /// Maximum tilt in radians
    pub fn max_tilt(mut self, angle: f32) -> Self {
        self.max_tilt = angle;
        self
    }

    pub fn max_horizontal(mut self, magnitude: f32) -> Self {
        self.max_horizontal = magnitude;
        self
    }

    /// Acceptance radius in meters
    pub fn acceptance_radius(mut self, radius: f32) -> Self {
        self.acceptance_radius = radius;
        self
    }

    pub fn build(self) -> Result<ControlLimits, Error> {
        ControlLimits::new(self.max_tilt, self.max_horizontal, self.acceptance_radius)
    }
}
