use crate::linear::M44;

/// Class of types that can yield homogeneous transformation matrices.
///
/// Translations, rotations and scales are independent; a scene layer obtains a model matrix by
/// multiplying the matrices they yield.
pub trait Transformable {
  fn to_matrix(&self) -> M44<f32>;
}

/// Class of types that can be recovered from a homogeneous transformation matrix.
///
/// The matrix is assumed well-formed for the extracted part (orthonormal rotation block, shear-free
/// scale block); nothing is validated and malformed input yields meaningless values.
pub trait FromMatrix: Sized {
  fn from_matrix(matrix: &M44<f32>) -> Self;
}

impl Transformable for M44<f32> {
  fn to_matrix(&self) -> M44<f32> {
    *self
  }
}
