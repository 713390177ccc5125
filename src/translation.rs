use std::fmt;
use std::ops::{Add, Deref, DerefMut, Neg, Sub};

use crate::axes::Xyz;
use crate::coordinates::Coordinates;
use crate::error::Error;
use crate::linear::{M44, V3};
use crate::transform::{FromMatrix, Transformable};

/// Displacement along the X, Y and Z axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Translation {
  coords: Coordinates<Xyz>,
}

impl Translation {
  pub fn new(x: f32, y: f32, z: f32) -> Self {
    Translation {
      coords: Coordinates::new([x, y, z]),
    }
  }

  /// Build from exactly three components.
  pub fn from_slice(values: &[f32]) -> Result<Self, Error> {
    Coordinates::from_slice(values).map(|coords| Translation { coords })
  }

  /// Component-wise sum with any three-component sequence.
  pub fn checked_add<T>(&self, other: T) -> Result<Self, Error>
  where
    T: AsRef<[f32]>,
  {
    let other = three(other.as_ref())?;
    Ok(self.zip_with(other, |a, b| a + b))
  }

  /// Component-wise difference with any three-component sequence.
  pub fn checked_sub<T>(&self, other: T) -> Result<Self, Error>
  where
    T: AsRef<[f32]>,
  {
    let other = three(other.as_ref())?;
    Ok(self.zip_with(other, |a, b| a - b))
  }

  fn zip_with<F>(&self, [x, y, z]: [f32; 3], f: F) -> Self
  where
    F: Fn(f32, f32) -> f32,
  {
    let [a, b, c] = self.coords.xyz();
    Translation::new(f(a, x), f(b, y), f(c, z))
  }
}

fn three(values: &[f32]) -> Result<[f32; 3], Error> {
  match *values {
    [x, y, z] => Ok([x, y, z]),
    _ => Err(Error::LengthMismatch {
      expected: 3,
      found: values.len(),
    }),
  }
}

impl Deref for Translation {
  type Target = Coordinates<Xyz>;

  fn deref(&self) -> &Self::Target {
    &self.coords
  }
}

impl DerefMut for Translation {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.coords
  }
}

impl AsRef<[f32]> for Translation {
  fn as_ref(&self) -> &[f32] {
    self.coords.as_slice()
  }
}

impl From<[f32; 3]> for Translation {
  fn from([x, y, z]: [f32; 3]) -> Self {
    Translation::new(x, y, z)
  }
}

impl From<V3<f32>> for Translation {
  fn from(v: V3<f32>) -> Self {
    Translation::new(v.x, v.y, v.z)
  }
}

impl From<Translation> for V3<f32> {
  fn from(t: Translation) -> Self {
    t.coords.xyz().into()
  }
}

impl Add for Translation {
  type Output = Translation;

  fn add(self, rhs: Self) -> Self::Output {
    self.zip_with(rhs.xyz(), |a, b| a + b)
  }
}

impl Add<[f32; 3]> for Translation {
  type Output = Translation;

  fn add(self, rhs: [f32; 3]) -> Self::Output {
    self.zip_with(rhs, |a, b| a + b)
  }
}

impl Sub for Translation {
  type Output = Translation;

  fn sub(self, rhs: Self) -> Self::Output {
    self.zip_with(rhs.xyz(), |a, b| a - b)
  }
}

impl Sub<[f32; 3]> for Translation {
  type Output = Translation;

  fn sub(self, rhs: [f32; 3]) -> Self::Output {
    self.zip_with(rhs, |a, b| a - b)
  }
}

impl Neg for Translation {
  type Output = Translation;

  fn neg(self) -> Self::Output {
    let [x, y, z] = self.xyz();
    Translation::new(-x, -y, -z)
  }
}

impl Transformable for Translation {
  fn to_matrix(&self) -> M44<f32> {
    M44::from_translation(self.coords.xyz().into())
  }
}

/// Read back the first three rows of the last column.
impl FromMatrix for Translation {
  fn from_matrix(matrix: &M44<f32>) -> Self {
    matrix.w.truncate().into()
  }
}

impl fmt::Display for Translation {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    write!(f, "Translation({})", self.coords)
  }
}
