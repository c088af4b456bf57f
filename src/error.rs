use core::fmt;

/// A control limit that can't be used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// Tilt angle (in radians) outside of 0 ~ PI
    InvalidTiltAngle(f32),
    /// Negative or non-finite magnitude limit
    InvalidMagnitude(f32),
    /// Non-positive or non-finite sphere radius
    InvalidRadius(f32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTiltAngle(angle) => {
                write!(f, "Tilt angle must be within [0, PI) radians, got {}", angle)
            }
            Error::InvalidMagnitude(magnitude) => {
                write!(f, "Magnitude limit must be finite and non-negative, got {}", magnitude)
            }
            Error::InvalidRadius(radius) => {
                write!(f, "Radius must be finite and positive, got {}", radius)
            }
        }
    }
}
