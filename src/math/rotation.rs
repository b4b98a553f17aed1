use glam::{Mat4, Vec3, Vec4};

/// Cross product `u x v`
pub fn cross_product(u: Vec3, v: Vec3) -> Vec3 {
    Vec3::new(
        u.y * v.z - v.y * u.z,
        -u.x * v.z + v.x * u.z,
        u.x * v.y - v.x * u.y,
    )
}

/// 4x4 identity matrix
pub const fn load_identity_matrix() -> Mat4 {
    Mat4::IDENTITY
}

/// Build a rotation of `angle` radians about the axis `(x, y, z)`.
///
/// The axis is normalized here, so any non-zero length is accepted. A zero
/// axis has no direction and yields the identity instead of dividing by zero.
/// The result is column-major: translation column and bottom row are the
/// identity affine `(0, 0, 0, 1)`.
pub fn rotation_matrix(angle: f32, x: f32, y: f32, z: f32) -> Mat4 {
    if x == 0.0 && y == 0.0 && z == 0.0 {
        return load_identity_matrix();
    }

    let length = (x * x + y * y + z * z).sqrt();
    let (x, y, z) = (x / length, y / length, z / length);

    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;

    let (xx, yy, zz) = (x * x, y * y, z * z);
    let (xy, yz, zx) = (x * y, y * z, z * x);
    let (xs, ys, zs) = (x * s, y * s, z * s);

    Mat4::from_cols(
        Vec4::new(t * xx + c, t * xy + zs, t * zx - ys, 0.0),
        Vec4::new(t * xy - zs, t * yy + c, t * yz + xs, 0.0),
        Vec4::new(t * zx + ys, t * yz - xs, t * zz + c, 0.0),
        Vec4::W,
    )
}

/// Rotate a direction by the upper-left 3x3 block of `m`.
/// The translation column is ignored.
pub fn rotate_vector(v: Vec3, m: &Mat4) -> Vec3 {
    m.x_axis.truncate() * v.x + m.y_axis.truncate() * v.y + m.z_axis.truncate() * v.z
}
