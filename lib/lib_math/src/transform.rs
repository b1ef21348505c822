//! Camera transform builders.
//!
//! All builders are pure. Degenerate input is not checked: it produces a matrix with
//! `NaN` or infinite entries, the way float arithmetic would. The `try_*` variants check
//! the same preconditions up front and return a [`TransformError`] instead.

use crate::{Matrix4x4, Rect, TransformError, TransformResult, f32::FVec3, vec3};

/// Maps the box `[left, right] x [bottom, top] x [near, far]` onto clip space, with
/// depth landing in `[0, 1]`.
///
/// Requires `left != right`, `top != bottom` and `near != far`.
pub fn orthographic(
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    near: f32,
    far: f32,
) -> Matrix4x4 {
    let width = right - left;
    let height = top - bottom;
    let depth = far - near;

    Matrix4x4::from_cols([
        [2.0 / width, 0.0, 0.0, 0.0],
        [0.0, 2.0 / height, 0.0, 0.0],
        [0.0, 0.0, 1.0 / depth, 0.0],
        [
            -(right + left) / width,
            -(top + bottom) / height,
            -near / depth,
            1.0,
        ],
    ])
}

/// [`orthographic`] over a rectangle whose `max.y` is the top edge.
pub fn orthographic_rect(rect: Rect, near: f32, far: f32) -> Matrix4x4 {
    orthographic(rect.min.x, rect.max.x, rect.max.y, rect.min.y, near, far)
}

/// Symmetric perspective projection for a right-handed view space looking down `-z`.
///
/// `vertical_fov_degrees` is converted to radians. Depth is remapped so that
/// `z = -near` lands on 0 and `z = -far` on 1, and `cols[2][3] = -1` moves `-z` into
/// clip `w`.
///
/// Requires `near > 0`, `far > 0` and `near != far`.
pub fn perspective(vertical_fov_degrees: f32, near: f32, far: f32) -> Matrix4x4 {
    let focal = 1.0 / (vertical_fov_degrees.to_radians() * 0.5).tan();

    Matrix4x4::from_cols([
        [focal, 0.0, 0.0, 0.0],
        [0.0, focal, 0.0, 0.0],
        [0.0, 0.0, far / (near - far), -1.0],
        [0.0, 0.0, -(far * near) / (far - near), 0.0],
    ])
}

/// Right-handed view matrix for a camera at `eye` looking at `target`.
///
/// The rows of the rotation block are the camera's right, up and backward axes, and
/// the translation column is `-R * eye`.
///
/// Requires `up_hint` not parallel to `eye - target`.
pub fn look_at(eye: FVec3, up_hint: FVec3, target: FVec3) -> Matrix4x4 {
    let forward = normalize(eye - target);
    let right = normalize(cross(up_hint, forward));
    let up = cross(forward, right);

    Matrix4x4::from_cols([
        [right.x, up.x, forward.x, 0.0],
        [right.y, up.y, forward.y, 0.0],
        [right.z, up.z, forward.z, 0.0],
        [-right.dot(eye), -up.dot(eye), -forward.dot(eye), 1.0],
    ])
}

pub fn try_orthographic(
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    near: f32,
    far: f32,
) -> TransformResult<Matrix4x4> {
    const BUILDER: &str = "orthographic";

    if left == right {
        return Err(TransformError::precondition(BUILDER, "left equals right"));
    }
    if top == bottom {
        return Err(TransformError::precondition(BUILDER, "top equals bottom"));
    }
    if near == far {
        return Err(TransformError::precondition(BUILDER, "near equals far"));
    }

    Ok(orthographic(left, right, top, bottom, near, far))
}

pub fn try_perspective(
    vertical_fov_degrees: f32,
    near: f32,
    far: f32,
) -> TransformResult<Matrix4x4> {
    const BUILDER: &str = "perspective";

    if !(vertical_fov_degrees > 0.0 && vertical_fov_degrees < 180.0) {
        return Err(TransformError::precondition(
            BUILDER,
            "field of view must be within (0, 180) degrees",
        ));
    }
    if !(near > 0.0 && far > 0.0) {
        return Err(TransformError::precondition(
            BUILDER,
            "near and far must be positive",
        ));
    }
    if near == far {
        return Err(TransformError::precondition(BUILDER, "near equals far"));
    }

    Ok(perspective(vertical_fov_degrees, near, far))
}

pub fn try_look_at(eye: FVec3, up_hint: FVec3, target: FVec3) -> TransformResult<Matrix4x4> {
    const BUILDER: &str = "look_at";

    let to_eye = eye - target;
    if to_eye.length() <= f32::EPSILON {
        return Err(TransformError::precondition(BUILDER, "eye equals target"));
    }
    if cross(up_hint, to_eye).length() <= f32::EPSILON * to_eye.length() * up_hint.length() {
        return Err(TransformError::precondition(
            BUILDER,
            "up hint is parallel to the view direction",
        ));
    }

    Ok(look_at(eye, up_hint, target))
}

fn cross(a: FVec3, b: FVec3) -> FVec3 {
    vec3!(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

// ggmath's `normalize` asserts on zero vectors in debug builds. Degenerate input here
// has to come out as NaN instead.
fn normalize(v: FVec3) -> FVec3 {
    v * (1.0 / v.length())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: [f32; 4], b: [f32; 4]) {
        for (x, y) in a.into_iter().zip(b) {
            assert!((x - y).abs() <= 1e-5, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn unit_box_orthographic_is_identity() {
        let m = orthographic(-1.0, 1.0, 1.0, -1.0, 0.0, 1.0);
        assert!(m.abs_diff_eq(&Matrix4x4::IDENTITY, 1e-6));
        assert_close(m.transform_vec4([1.0, 1.0, 1.0, 1.0]), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn orthographic_maps_box_corners() {
        let m = orthographic(0.0, 800.0, 600.0, 0.0, -1.0, 1.0);

        assert_close(m.transform_vec4([0.0, 0.0, -1.0, 1.0]), [-1.0, -1.0, 0.0, 1.0]);
        assert_close(m.transform_vec4([800.0, 600.0, 1.0, 1.0]), [1.0, 1.0, 1.0, 1.0]);
        assert_close(m.transform_vec4([400.0, 300.0, 0.0, 1.0]), [0.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn degenerate_orthographic_is_not_finite() {
        assert!(!orthographic(0.0, 0.0, 1.0, -1.0, 0.0, 1.0).is_finite());
        assert!(!orthographic(-1.0, 1.0, 1.0, 1.0, 0.0, 1.0).is_finite());
        assert!(!orthographic(-1.0, 1.0, 1.0, -1.0, 2.0, 2.0).is_finite());
    }

    #[test]
    fn perspective_depth_spans_near_to_far() {
        let m = perspective(90.0, 1.0, 100.0);

        let near = m.transform_vec4([0.0, 0.0, -1.0, 1.0]);
        let far = m.transform_vec4([0.0, 0.0, -100.0, 1.0]);
        assert!((near[2] / near[3]).abs() <= 1e-6);
        assert!((far[2] / far[3] - 1.0).abs() <= 1e-5);
    }

    #[test]
    fn perspective_layout() {
        let m = perspective(90.0, 1.0, 100.0);

        assert!((m.cols[0][0] - 1.0).abs() <= 1e-6);
        assert!((m.cols[1][1] - 1.0).abs() <= 1e-6);
        assert_eq!(m.cols[2][3], -1.0);
        assert_eq!(m.cols[3][3], 0.0);
        assert_eq!(m.cols[0][1..], [0.0; 3]);
    }

    #[test]
    fn perspective_edge_of_fov_hits_clip_edge() {
        let m = perspective(90.0, 0.1, 10.0);
        let edge = m.transform_vec4([2.0, 2.0, -2.0, 1.0]);

        assert!((edge[0] / edge[3] - 1.0).abs() <= 1e-6);
        assert!((edge[1] / edge[3] - 1.0).abs() <= 1e-6);
    }

    #[test]
    fn look_down_negative_z_is_identity_rotation() {
        let m = look_at(vec3!(0.0, 0.0, 5.0), vec3!(0.0, 1.0, 0.0), vec3!(0.0, 0.0, 0.0));

        for col in 0..3 {
            let mut expected = [0.0; 4];
            expected[col] = 1.0;
            assert_close(m.col(col), expected);
        }
        assert_close(m.col(3), [0.0, 0.0, -5.0, 1.0]);
    }

    #[test]
    fn look_at_puts_target_on_negative_z() {
        let eye = vec3!(3.0, 4.0, -2.0);
        let target = vec3!(-1.0, 0.5, 6.0);
        let m = look_at(eye, vec3!(0.0, 1.0, 0.0), target);

        let t = m.project_point(target);
        let distance = (eye - target).length();
        assert!(t.x.abs() <= 1e-4 && t.y.abs() <= 1e-4);
        assert!((t.z + distance).abs() <= 1e-4);

        let e = m.project_point(eye);
        assert!(e.length() <= 1e-4);
    }

    #[test]
    fn coincident_eye_and_target_is_not_finite() {
        let eye = vec3!(1.0, 2.0, 3.0);
        let m = look_at(eye, vec3!(0.0, 1.0, 0.0), eye);
        assert!(!m.is_finite());
    }

    #[test]
    fn parallel_up_is_not_finite() {
        let m = look_at(vec3!(0.0, 5.0, 0.0), vec3!(0.0, 1.0, 0.0), vec3!(0.0, 0.0, 0.0));
        assert!(!m.is_finite());
    }

    #[test]
    fn checked_builders_reject_degenerate_input() {
        assert!(matches!(
            try_orthographic(1.0, 1.0, 1.0, -1.0, 0.0, 1.0),
            Err(TransformError::PreconditionViolation {
                builder: "orthographic",
                ..
            })
        ));
        assert!(try_perspective(90.0, 0.0, 10.0).is_err());
        assert!(try_perspective(90.0, 5.0, 5.0).is_err());
        assert!(try_perspective(180.0, 1.0, 5.0).is_err());

        let up = vec3!(0.0, 1.0, 0.0);
        assert!(try_look_at(vec3!(0.0, 2.0, 0.0), up, vec3!(0.0, 0.0, 0.0)).is_err());
        assert!(try_look_at(vec3!(1.0, 1.0, 1.0), up, vec3!(1.0, 1.0, 1.0)).is_err());
    }

    #[test]
    fn checked_builders_match_unchecked() {
        assert_eq!(
            try_orthographic(-2.0, 2.0, 1.0, -1.0, 0.1, 50.0),
            Ok(orthographic(-2.0, 2.0, 1.0, -1.0, 0.1, 50.0))
        );
        assert_eq!(
            try_perspective(60.0, 0.1, 100.0),
            Ok(perspective(60.0, 0.1, 100.0))
        );

        let eye = vec3!(1.0, 2.0, 3.0);
        let up = vec3!(0.0, 1.0, 0.0);
        let target = vec3!(0.0, 0.0, 0.0);
        assert_eq!(try_look_at(eye, up, target), Ok(look_at(eye, up, target)));
    }
}
