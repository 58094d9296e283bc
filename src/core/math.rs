// Math utilities and helper functions

use glam::{Mat3, Quat, Vec3};

/// Build a rotation that points the +Z axis along `forward` while keeping
/// `up` as close to the +Y axis as possible.
///
/// Returns the identity rotation when `forward` is zero-length or parallel
/// to `up`, so callers never receive a NaN quaternion.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let forward = forward.normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    let right = up.cross(forward).normalize_or_zero();
    if right == Vec3::ZERO {
        // Forward is parallel to up; there is no well-defined facing
        return Quat::IDENTITY;
    }

    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// Rotate `from` toward `to` by at most `max_degrees`.
///
/// Takes the shortest arc and never overshoots: if the remaining angle is
/// within the step, the result is exactly `to`.
pub fn rotate_towards(from: Quat, to: Quat, max_degrees: f32) -> Quat {
    if max_degrees <= 0.0 {
        return from;
    }

    let angle = from.angle_between(to).to_degrees();
    if angle <= max_degrees {
        return to;
    }

    from.slerp(to, max_degrees / angle)
}

/// Project a vector onto the horizontal (XZ) plane.
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Check if two f32 values are approximately equal
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}
