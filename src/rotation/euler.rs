//! Euler angles.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::axes::Xyz;
use crate::coordinates::Coordinates;
use crate::linear::{embed_rotation, rotation_block, Deg, Rad, M33, M44};
use crate::rotation::axes::EulerAxes;
use crate::rotation::math::{euler_from_matrix, euler_matrix, quaternion_from_matrix};
use crate::rotation::{Euler, Quaternion, Rotation, Units};
use crate::transform::{FromMatrix, Transformable};

fn degrees([x, y, z]: [f32; 3]) -> [f32; 3] {
  [Deg::from(Rad(x)).0, Deg::from(Rad(y)).0, Deg::from(Rad(z)).0]
}

fn radians([x, y, z]: [f32; 3]) -> [f32; 3] {
  [Rad::from(Deg(x)).0, Rad::from(Deg(y)).0, Rad::from(Deg(z)).0]
}

/// Euler angles in radians.
#[derive(Clone, Debug, PartialEq)]
pub struct EulerRadians {
  coords: Coordinates<Xyz>,
  axes: EulerAxes,
}

impl EulerRadians {
  /// Angles applied about rotating `x`, `y` then `z` axes.
  pub fn new(x: f32, y: f32, z: f32) -> Self {
    Self::with_axes(x, y, z, EulerAxes::default())
  }

  pub fn with_axes(x: f32, y: f32, z: f32, axes: EulerAxes) -> Self {
    EulerRadians {
      coords: Coordinates::new([x, y, z]),
      axes,
    }
  }

  pub fn axes(&self) -> EulerAxes {
    self.axes
  }

  pub fn to_radians(&self) -> EulerRadians {
    let [x, y, z] = self.coords.xyz();
    Self::with_axes(x, y, z, self.axes)
  }

  pub fn to_degrees(&self) -> EulerDegrees {
    let [x, y, z] = degrees(self.coords.xyz());
    EulerDegrees::with_axes(x, y, z, self.axes)
  }

  /// Decompose the rotation block of a matrix with the given axes.
  pub fn from_matrix_with_axes(matrix: &M44<f32>, axes: EulerAxes) -> Self {
    let [x, y, z] = euler_from_matrix(&rotation_block(matrix), axes);
    Self::with_axes(x, y, z, axes)
  }

  fn rotation_matrix(&self) -> M33<f32> {
    euler_matrix(self.coords.xyz(), self.axes)
  }
}

impl Default for EulerRadians {
  fn default() -> Self {
    Self::new(0., 0., 0.)
  }
}

impl Deref for EulerRadians {
  type Target = Coordinates<Xyz>;

  fn deref(&self) -> &Self::Target {
    &self.coords
  }
}

impl DerefMut for EulerRadians {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.coords
  }
}

impl Transformable for EulerRadians {
  fn to_matrix(&self) -> M44<f32> {
    embed_rotation(self.rotation_matrix())
  }
}

impl FromMatrix for EulerRadians {
  fn from_matrix(matrix: &M44<f32>) -> Self {
    Self::from_matrix_with_axes(matrix, EulerAxes::default())
  }
}

impl Rotation for EulerRadians {
  fn to_quaternion(&self) -> Quaternion {
    quaternion_from_matrix(&self.rotation_matrix()).into()
  }

  fn to_euler_in(&self, units: Units) -> Euler {
    match units {
      Units::Radians => Euler::Radians(self.to_radians()),
      Units::Degrees => Euler::Degrees(self.to_degrees()),
    }
  }
}

impl fmt::Display for EulerRadians {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    write!(f, "EulerRadians({}, axes={})", self.coords, self.axes)
  }
}

/// Euler angles in degrees.
///
/// Every conversion goes through [`EulerRadians`].
#[derive(Clone, Debug, PartialEq)]
pub struct EulerDegrees {
  coords: Coordinates<Xyz>,
  axes: EulerAxes,
}

impl EulerDegrees {
  /// Angles applied about rotating `x`, `y` then `z` axes.
  pub fn new(x: f32, y: f32, z: f32) -> Self {
    Self::with_axes(x, y, z, EulerAxes::default())
  }

  pub fn with_axes(x: f32, y: f32, z: f32, axes: EulerAxes) -> Self {
    EulerDegrees {
      coords: Coordinates::new([x, y, z]),
      axes,
    }
  }

  pub fn axes(&self) -> EulerAxes {
    self.axes
  }

  pub fn to_radians(&self) -> EulerRadians {
    let [x, y, z] = radians(self.coords.xyz());
    EulerRadians::with_axes(x, y, z, self.axes)
  }

  pub fn to_degrees(&self) -> EulerDegrees {
    let [x, y, z] = self.coords.xyz();
    Self::with_axes(x, y, z, self.axes)
  }

  /// Decompose the rotation block of a matrix with the given axes.
  pub fn from_matrix_with_axes(matrix: &M44<f32>, axes: EulerAxes) -> Self {
    EulerRadians::from_matrix_with_axes(matrix, axes).to_degrees()
  }
}

impl Default for EulerDegrees {
  fn default() -> Self {
    Self::new(0., 0., 0.)
  }
}

impl Deref for EulerDegrees {
  type Target = Coordinates<Xyz>;

  fn deref(&self) -> &Self::Target {
    &self.coords
  }
}

impl DerefMut for EulerDegrees {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.coords
  }
}

impl Transformable for EulerDegrees {
  fn to_matrix(&self) -> M44<f32> {
    self.to_radians().to_matrix()
  }
}

impl FromMatrix for EulerDegrees {
  fn from_matrix(matrix: &M44<f32>) -> Self {
    Self::from_matrix_with_axes(matrix, EulerAxes::default())
  }
}

impl Rotation for EulerDegrees {
  fn to_quaternion(&self) -> Quaternion {
    self.to_radians().to_quaternion()
  }

  fn to_euler_in(&self, units: Units) -> Euler {
    self.to_radians().to_euler_in(units)
  }
}

impl fmt::Display for EulerDegrees {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    write!(f, "EulerDegrees({}, axes={})", self.coords, self.axes)
  }
}
