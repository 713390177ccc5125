use cgmath::InnerSpace as _;
use std::fmt;
use std::ops::{Deref, DerefMut, Mul};

use crate::axes::Xyz;
use crate::coordinates::Coordinates;
use crate::error::Error;
use crate::linear::M44;
use crate::transform::{FromMatrix, Transformable};

/// Arbritrary scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Scale {
  coords: Coordinates<Xyz>,
}

impl Scale {
  /// Arbitrary scale along the X, Y and Z axis.
  pub fn new(x: f32, y: f32, z: f32) -> Self {
    Scale {
      coords: Coordinates::new([x, y, z]),
    }
  }

  /// Uniform scale along the X, Y and Z axis.
  pub fn uniform(s: f32) -> Self {
    Scale::new(s, s, s)
  }

  /// Build from either one (uniform) or three (per-axis) components.
  pub fn from_slice(values: &[f32]) -> Result<Self, Error> {
    match *values {
      [s] => Ok(Scale::uniform(s)),
      [x, y, z] => Ok(Scale::new(x, y, z)),
      _ => Err(Error::InvalidArity(values.len())),
    }
  }
}

impl Default for Scale {
  fn default() -> Self {
    Scale::uniform(1.)
  }
}

impl Deref for Scale {
  type Target = Coordinates<Xyz>;

  fn deref(&self) -> &Self::Target {
    &self.coords
  }
}

impl DerefMut for Scale {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.coords
  }
}

impl From<f32> for Scale {
  fn from(s: f32) -> Self {
    Scale::uniform(s)
  }
}

impl From<[f32; 3]> for Scale {
  fn from([x, y, z]: [f32; 3]) -> Self {
    Scale::new(x, y, z)
  }
}

impl From<Scale> for [f32; 3] {
  fn from(scale: Scale) -> Self {
    scale.xyz()
  }
}

impl Mul for Scale {
  type Output = Scale;

  fn mul(self, rhs: Self) -> Self::Output {
    let [a, b, c] = self.xyz();
    let [x, y, z] = rhs.xyz();

    Scale::new(a * x, b * y, c * z)
  }
}

impl Transformable for Scale {
  fn to_matrix(&self) -> M44<f32> {
    let [x, y, z] = self.xyz();
    M44::from_nonuniform_scale(x, y, z)
  }
}

/// Per-axis scale is the norm of each column of the 3x3 block; the block must not hold any shear.
impl FromMatrix for Scale {
  fn from_matrix(matrix: &M44<f32>) -> Self {
    Scale::new(
      matrix.x.truncate().magnitude(),
      matrix.y.truncate().magnitude(),
      matrix.z.truncate().magnitude(),
    )
  }
}

impl fmt::Display for Scale {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    write!(f, "Scale({})", self.coords)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::linear::{Rad, M33};
  use crate::linear::embed_rotation;

  #[test]
  fn uniform_broadcasts() {
    let s = Scale::uniform(2.);

    assert_eq!(s.get("xyz").unwrap().to_vec(), vec![2., 2., 2.]);
    assert_eq!(Scale::from_slice(&[2.]).unwrap(), s);
  }

  #[test]
  fn arity() {
    assert_eq!(Scale::from_slice(&[1., 2., 3.]).unwrap(), Scale::new(1., 2., 3.));
    assert!(matches!(Scale::from_slice(&[]), Err(Error::InvalidArity(0))));
    assert!(matches!(Scale::from_slice(&[1., 2.]), Err(Error::InvalidArity(2))));
    assert!(matches!(Scale::from_slice(&[1., 2., 3., 4.]), Err(Error::InvalidArity(4))));
  }

  #[test]
  fn diagonal_matrix() {
    let m = Scale::uniform(2.).to_matrix();
    let expected = M44::new(
      2., 0., 0., 0., //
      0., 2., 0., 0., //
      0., 0., 2., 0., //
      0., 0., 0., 1.,
    );

    assert_eq!(m, expected);
  }

  #[test]
  fn matrix_roundtrip() {
    let s = Scale::from_matrix(&Scale::new(1., 2., 3.).to_matrix());

    for (a, b) in s.xyz().iter().zip(&[1., 2., 3.]) {
      assert!((a - b).abs() < 1e-6);
    }
  }

  #[test]
  fn survives_rotation() {
    let m = embed_rotation(M33::from_angle_z(Rad(0.7))) * Scale::new(1., 2., 3.).to_matrix();
    let s = Scale::from_matrix(&m);

    for (a, b) in s.xyz().iter().zip(&[1., 2., 3.]) {
      assert!((a - b).abs() < 1e-5);
    }
  }

  #[test]
  fn component_wise_mul() {
    assert_eq!(Scale::new(1., 2., 3.) * Scale::uniform(2.), Scale::new(2., 4., 6.));
    assert_eq!(Scale::default() * Scale::new(1., 2., 3.), Scale::new(1., 2., 3.));
  }
}
