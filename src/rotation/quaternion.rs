//! Quaternion rotations.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::axes::Wxyz;
use crate::coordinates::Coordinates;
use crate::linear::{embed_rotation, rotation_block, Quat, M33, M44};
use crate::rotation::axes::EulerAxes;
use crate::rotation::math::{euler_from_matrix, quaternion_from_matrix};
use crate::rotation::{Euler, EulerRadians, Rotation, Units};
use crate::transform::{FromMatrix, Transformable};

/// Rotation held as a quaternion, scalar part first.
///
/// Quaternions are expected to have a unit norm, but that is never checked.
#[derive(Clone, Debug, PartialEq)]
pub struct Quaternion {
  coords: Coordinates<Wxyz>,
}

impl Quaternion {
  pub fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
    Quaternion {
      coords: Coordinates::new([w, x, y, z]),
    }
  }

  /// No rotation.
  pub fn identity() -> Self {
    Self::new(1., 0., 0., 0.)
  }

  pub fn to_quat(&self) -> Quat<f32> {
    let [w, x, y, z] = self.coords.wxyz();
    Quat::new(w, x, y, z)
  }

  fn rotation_matrix(&self) -> M33<f32> {
    M33::from(self.to_quat())
  }
}

impl Default for Quaternion {
  fn default() -> Self {
    Self::identity()
  }
}

impl From<Quat<f32>> for Quaternion {
  fn from(q: Quat<f32>) -> Self {
    Self::new(q.s, q.v.x, q.v.y, q.v.z)
  }
}

impl From<Quaternion> for Quat<f32> {
  fn from(q: Quaternion) -> Self {
    q.to_quat()
  }
}

impl Deref for Quaternion {
  type Target = Coordinates<Wxyz>;

  fn deref(&self) -> &Self::Target {
    &self.coords
  }
}

impl DerefMut for Quaternion {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.coords
  }
}

impl Transformable for Quaternion {
  fn to_matrix(&self) -> M44<f32> {
    embed_rotation(self.rotation_matrix())
  }
}

impl FromMatrix for Quaternion {
  fn from_matrix(matrix: &M44<f32>) -> Self {
    quaternion_from_matrix(&rotation_block(matrix)).into()
  }
}

impl Rotation for Quaternion {
  fn to_quaternion(&self) -> Quaternion {
    Quaternion::new(self.w(), self.x(), self.y(), self.z())
  }

  /// Euler angles with the default axes.
  fn to_euler_in(&self, units: Units) -> Euler {
    let axes = EulerAxes::default();
    let [x, y, z] = euler_from_matrix(&self.rotation_matrix(), axes);

    EulerRadians::with_axes(x, y, z, axes).to_euler_in(units)
  }
}

impl fmt::Display for Quaternion {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    write!(f, "Quaternion({})", self.coords)
  }
}
