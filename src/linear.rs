pub use cgmath::{Deg, Matrix3, Matrix4, Quaternion, Rad, Vector3, Vector4};

// some useful aliases
pub type V3<T> = Vector3<T>;
pub type V4<T> = Vector4<T>;
pub type M33<T> = Matrix3<T>;
pub type M44<T> = Matrix4<T>;
pub type Quat<T> = Quaternion<T>;

/// Top-left 3x3 block of a homogeneous matrix.
pub fn rotation_block(m: &M44<f32>) -> M33<f32> {
  M33::from_cols(m.x.truncate(), m.y.truncate(), m.z.truncate())
}

/// Embed a 3x3 block in an otherwise identity homogeneous matrix.
pub fn embed_rotation(m: M33<f32>) -> M44<f32> {
  M44::from_cols(
    m.x.extend(0.),
    m.y.extend(0.),
    m.z.extend(0.),
    V4::new(0., 0., 0., 1.),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use cgmath::SquareMatrix as _;

  #[test]
  fn block_roundtrip() {
    let m = M33::new(1., 2., 3., 4., 5., 6., 7., 8., 9.);
    let h = embed_rotation(m);

    assert_eq!(rotation_block(&h), m);
    assert_eq!(h.w, V4::new(0., 0., 0., 1.));
    assert_eq!(h.x.w, 0.);
  }

  #[test]
  fn block_ignores_translation() {
    let h = M44::from_translation(V3::new(1., 2., 3.));

    assert_eq!(rotation_block(&h), M33::identity());
  }
}
