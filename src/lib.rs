//! # embedded-flight-math
//! `#![no_std]` attitude and guidance math for multi-copter position control.
//!
//! Every function here is pure, allocation free and runs in constant time,
//! so it can be called from the fixed-rate control loop directly.
//!
//! # Attitude
//! [`thrust_to_attitude`] maps a desired thrust vector and yaw to an [`AttitudeSetpoint`]
//! for the attitude controller.
//! It is built on [`body_z_to_quaternion`], which turns a desired body Z axis and yaw into a quaternion.
//!
//! [`limit_tilt`] bounds the angle between a direction and a reference axis.
//!
//! # Horizontal limits
//! [`constrain_xy`] combines a priority and a secondary vector under a magnitude limit.
//!
//! # Guidance
//! [`cross_sphere_line`] finds where the travel line between two waypoints leaves the
//! acceptance sphere around the vehicle (see [`LineCrossing`]).
//!
//! # Setpoints
//! [`setpoint`] contains helpers to merge setpoints where NaN means "not set".
//!
//! [`ControlLimits`] bundles the limits above into one validated value.

#![no_std]

pub mod attitude;
pub use attitude::{body_z_to_attitude, body_z_to_quaternion, thrust_to_attitude, AttitudeSetpoint};

pub mod constrain;
pub use constrain::constrain_xy;

mod error;
pub use error::Error;

pub mod guidance;
pub use guidance::{cross_sphere_line, LineCrossing};

pub mod limits;
pub use limits::{ControlLimits, ControlLimitsBuilder};

pub mod setpoint;
pub use setpoint::{add_if_not_nan, add_if_not_nan_vector3, set_zero_if_nan_vector3};

pub mod tilt;
pub use tilt::{limit_tilt, limit_tilt_in_place};
