use nalgebra::{Matrix3, Rotation3, UnitQuaternion, Vector3};
use num_traits::Float;

/// Below this vertical component the desired body Z axis is treated as lying in the XY plane.
const HORIZONTAL_BODY_Z: f32 = 1e-6;

/// Attitude setpoint for the attitude controller.
///
/// All frames are NED: world Z points down and thrust acts along the negative body Z axis,
/// so `thrust_body` is always `(0, 0, -|thrust|)` rather than a copy of the world thrust vector.
/// Thrust pointing straight down, `(0, 0, 1)`, therefore also gives `thrust_body.z == -1`.
///
/// The Euler angles are in roll, pitch, yaw order (`R = Rz(yaw) * Ry(pitch) * Rx(roll)`)
/// and come from the same rotation as `q_d`. Control should use `q_d`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttitudeSetpoint {
    /// Desired attitude, rotating the body frame into the world frame.
    pub q_d: UnitQuaternion<f32>,
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
    /// Thrust in the body frame.
    pub thrust_body: Vector3<f32>,
}

impl Default for AttitudeSetpoint {
    fn default() -> Self {
        Self {
            q_d: UnitQuaternion::identity(),
            roll: 0.,
            pitch: 0.,
            yaw: 0.,
            thrust_body: Vector3::zeros(),
        }
    }
}

/// Calculate the attitude whose body Z axis points along `body_z` with a heading of `yaw` (in radians).
///
/// `body_z` should be a unit vector. A zero vector falls back to a level attitude.
/// If `body_z` lies in the XY plane the yaw can't be represented and is ignored.
pub fn body_z_to_quaternion(body_z: Vector3<f32>, yaw: f32) -> UnitQuaternion<f32> {
    quaternion_from_rotation(&body_z_to_rotation(body_z, yaw))
}

/// Calculate the full attitude setpoint (with zero thrust) for a desired body Z axis and yaw.
pub fn body_z_to_attitude(body_z: Vector3<f32>, yaw: f32) -> AttitudeSetpoint {
    let rotation = body_z_to_rotation(body_z, yaw);
    let (roll, pitch, yaw) = rotation.euler_angles();

    AttitudeSetpoint {
        q_d: quaternion_from_rotation(&rotation),
        roll,
        pitch,
        yaw,
        thrust_body: Vector3::zeros(),
    }
}

/// Map a desired thrust vector (in the NED world frame) and yaw to an attitude setpoint.
///
/// The body Z axis is aligned against the thrust, so upward thrust `(0, 0, -T)` gives a level attitude.
/// Thrust pointing straight down gives a roll of ±π: with the roll, pitch, yaw order that is
/// the only way to flip the vehicle.
/// A zero thrust vector gives a level attitude at the desired yaw.
pub fn thrust_to_attitude(thrust: Vector3<f32>, yaw: f32) -> AttitudeSetpoint {
    let mut setpoint = body_z_to_attitude(-thrust, yaw);
    setpoint.thrust_body = Vector3::new(0., 0., -thrust.norm());
    setpoint
}

fn body_z_to_rotation(mut body_z: Vector3<f32>, yaw: f32) -> Rotation3<f32> {
    // 1. A zero vector has no direction so use a safe level value
    if body_z.norm_squared() < f32::EPSILON {
        log::trace!("zero body z axis, falling back to level attitude");
        body_z = Vector3::z();
    }
    let body_z = body_z.normalize();

    // 2. Vector of the desired yaw direction in the XY plane, rotated by PI/2
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let y_c = Vector3::new(-sin_yaw, cos_yaw, 0.);

    // 3. Desired body X axis, orthogonal to body Z
    let mut body_x = y_c.cross(&body_z);

    // Keep the nose to the front while upside down
    if body_z.z < 0. {
        body_x = -body_x;
    }

    if body_z.z.abs() < HORIZONTAL_BODY_Z || body_x.norm_squared() < f32::EPSILON {
        // Thrust lies in the XY plane: point body X along world Z.
        // The yaw is not used in this case.
        log::trace!("horizontal body z axis {:?}, ignoring yaw", body_z);
        body_x = Vector3::z() - body_z * body_z.z;
    }
    let body_x = body_x.normalize();

    // 4. Desired body Y axis completes the right handed frame
    let body_y = body_z.cross(&body_x);

    Rotation3::from_matrix_unchecked(Matrix3::from_columns(&[body_x, body_y, body_z]))
}

fn quaternion_from_rotation(rotation: &Rotation3<f32>) -> UnitQuaternion<f32> {
    UnitQuaternion::new_normalize(UnitQuaternion::from_rotation_matrix(rotation).into_inner())
}
