use nalgebra::Vector3;
use num_traits::Float;

/// Segments shorter than this (in meters) have no usable direction.
const MIN_SEGMENT_LENGTH: f32 = 0.01;

/// Result of intersecting the line between two waypoints with a sphere.
///
/// Both variants carry a point, but only a [`LineCrossing::Crossed`] point is a valid target.
/// A missed point is the closest useful fallback (the foot of the perpendicular, clamped to the waypoints).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineCrossing {
    /// The line crosses the sphere; the point lies on the segment.
    Crossed(Vector3<f32>),
    /// The line is out of reach of the sphere.
    Missed(Vector3<f32>),
}

impl LineCrossing {
    /// Returns `true` if the line crosses the sphere.
    pub fn is_crossed(&self) -> bool {
        matches!(self, LineCrossing::Crossed(_))
    }

    /// The crossing point, if the line crosses the sphere.
    pub fn crossed(self) -> Option<Vector3<f32>> {
        match self {
            LineCrossing::Crossed(point) => Some(point),
            LineCrossing::Missed(_) => None,
        }
    }

    /// The point carried by either variant.
    pub fn point(&self) -> Vector3<f32> {
        match *self {
            LineCrossing::Crossed(point) | LineCrossing::Missed(point) => point,
        }
    }
}

/// Find the target on the line from `prev` to `curr` where it leaves the sphere of `radius`
/// around `position`, in the direction of travel.
///
/// The target always lies on the segment: if `curr` is already behind `position` along the line,
/// or the crossing lies past it, the target is `curr` itself.
/// A crossing behind `prev` is moved up to `prev` rather than returned as is, so guidance never
/// targets a point before the segment starts.
///
/// A line tangent to the sphere counts as crossed, at the foot of the perpendicular.
///
/// When the line is farther than `radius` from `position` the result is [`LineCrossing::Missed`] with the
/// closest point on the line, clamped to `prev` if it is still ahead or to `curr` if it is behind.
pub fn cross_sphere_line(
    position: Vector3<f32>,
    radius: f32,
    prev: Vector3<f32>,
    curr: Vector3<f32>,
) -> LineCrossing {
    let segment = curr - prev;
    let segment_len = segment.norm();
    if segment_len < MIN_SEGMENT_LENGTH {
        log::trace!("waypoints {:?} and {:?} are too close to form a line", prev, curr);
        return LineCrossing::Crossed(curr);
    }
    let direction = segment / segment_len;

    // 1. Project the sphere center on the line
    let foot = prev + direction * (position - prev).dot(&direction);
    let foot_distance = (position - foot).norm();

    // Where the waypoints lie relative to the sphere center along the line
    let prev_ahead = (position - prev).dot(&direction) < 0.;
    let curr_behind = (position - curr).dot(&direction) > 0.;

    if radius >= foot_distance {
        // 2. The sphere center, its foot and the crossing form a right triangle.
        // A tangent line touches the sphere at the foot.
        let along = (radius * radius - foot_distance * foot_distance).max(0.).sqrt();

        let target = if curr_behind {
            // Target waypoint is already behind us
            curr
        } else {
            // Keep the crossing on the segment
            let crossing = foot + direction * along;
            let progress = (crossing - prev).dot(&direction);
            if progress < 0. {
                prev
            } else if progress > segment_len {
                curr
            } else {
                crossing
            }
        };

        LineCrossing::Crossed(target)
    } else {
        // 3. No crossing, go directly to the line
        let target = if curr_behind {
            curr
        } else if prev_ahead {
            prev
        } else {
            foot
        };

        LineCrossing::Missed(target)
    }
}
