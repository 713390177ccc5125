//! Vector helpers.

use cgmath::{InnerSpace as _, SquareMatrix as _};

use crate::error::Error;
use crate::linear::{M33, V3};

/// Skew-symmetric matrix `[v]×` such that `[v]× * u == v.cross(u)`.
pub fn cross_product_matrix(v: V3<f32>) -> M33<f32> {
  // column-major
  M33::new(
    0., v.z, -v.y, //
    -v.z, 0., v.x, //
    v.y, -v.x, 0.,
  )
}

/// Rotation matrix meant to bring the direction of `from` onto the direction of `to`.
///
/// Both vectors are normalized first. The result is `I + [v]× + [v]×² * (1 + cos)`, with `v` the
/// cross product and `cos` the dot product of the normalized vectors. That scaling term is kept as is;
/// the usual alignment formula divides by `1 + cos` instead, so the result only rotates exactly onto
/// `to` when the vectors are orthogonal or already aligned.
///
/// Fails with [`Error::OppositeVectors`] when the vectors point in exactly opposite directions. The
/// check compares `cos` with `-1` exactly: opposite vectors off the axes usually normalize to a `cos`
/// one ulp away from it, in which case the cross product vanishes and the result is close to the
/// identity rather than an error.
pub fn rotation_matrix_between_vectors(from: V3<f32>, to: V3<f32>) -> Result<M33<f32>, Error> {
  let a = from.normalize();
  let b = to.normalize();

  let v = a.cross(b);
  let cos = a.dot(b);

  if cos == -1. {
    log::warn!("cannot align {:?} onto {:?}: opposite directions", from, to);
    return Err(Error::OppositeVectors);
  }

  let skew = cross_product_matrix(v);

  Ok(M33::identity() + skew + skew * skew * (1. + cos))
}
