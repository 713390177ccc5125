//! Rotation representations.
//!
//! A rotation can be held as Euler angles (in radians or in degrees) or as a quaternion. Every
//! representation converts directly into the others and into a homogeneous matrix. Euler angles in
//! radians are the hub: degrees always go through them, so there is a single trigonometric path.

pub mod axes;
pub mod euler;
pub mod math;
pub mod quaternion;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::linear::{rotation_block, M44, V3};
use crate::transform::{FromMatrix, Transformable};

pub use self::axes::EulerAxes;
pub use self::euler::{EulerDegrees, EulerRadians};
pub use self::quaternion::Quaternion;

/// Angle units of Euler angles.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Units {
  Radians,
  Degrees,
}

impl FromStr for Units {
  type Err = Error;

  /// Parse `rad` or `deg`, ignoring case.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "rad" => Ok(Units::Radians),
      "deg" => Ok(Units::Degrees),
      _ => Err(Error::InvalidUnits(s.to_owned())),
    }
  }
}

impl fmt::Display for Units {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      Units::Radians => f.write_str("rad"),
      Units::Degrees => f.write_str("deg"),
    }
  }
}

/// Class of rotation representations.
pub trait Rotation: Transformable {
  /// Same rotation as a quaternion.
  fn to_quaternion(&self) -> Quaternion;

  /// Same rotation as Euler angles in the given units.
  fn to_euler_in(&self, units: Units) -> Euler;

  /// Same rotation as Euler angles, with units given as `rad` or `deg` (case insensitive).
  fn to_euler(&self, units: &str) -> Result<Euler, Error> {
    let units = units.parse()?;
    Ok(self.to_euler_in(units))
  }

  /// Rotate a vector. Only the 3x3 rotation block of the matrix is applied.
  fn rotate(&self, v: V3<f32>) -> V3<f32> {
    rotation_block(&self.to_matrix()) * v
  }
}

/// Euler angles, in either units.
#[derive(Clone, Debug, PartialEq)]
pub enum Euler {
  Radians(EulerRadians),
  Degrees(EulerDegrees),
}

impl Euler {
  pub fn units(&self) -> Units {
    match *self {
      Euler::Radians(_) => Units::Radians,
      Euler::Degrees(_) => Units::Degrees,
    }
  }

  pub fn axes(&self) -> EulerAxes {
    match *self {
      Euler::Radians(ref e) => e.axes(),
      Euler::Degrees(ref e) => e.axes(),
    }
  }

  /// Angles, in the held units.
  pub fn xyz(&self) -> [f32; 3] {
    match *self {
      Euler::Radians(ref e) => e.xyz(),
      Euler::Degrees(ref e) => e.xyz(),
    }
  }

  pub fn to_radians(&self) -> EulerRadians {
    match *self {
      Euler::Radians(ref e) => e.to_radians(),
      Euler::Degrees(ref e) => e.to_radians(),
    }
  }

  pub fn to_degrees(&self) -> EulerDegrees {
    match *self {
      Euler::Radians(ref e) => e.to_degrees(),
      Euler::Degrees(ref e) => e.to_degrees(),
    }
  }
}

impl From<EulerRadians> for Euler {
  fn from(e: EulerRadians) -> Self {
    Euler::Radians(e)
  }
}

impl From<EulerDegrees> for Euler {
  fn from(e: EulerDegrees) -> Self {
    Euler::Degrees(e)
  }
}

impl Transformable for Euler {
  fn to_matrix(&self) -> M44<f32> {
    match *self {
      Euler::Radians(ref e) => e.to_matrix(),
      Euler::Degrees(ref e) => e.to_matrix(),
    }
  }
}

impl Rotation for Euler {
  fn to_quaternion(&self) -> Quaternion {
    match *self {
      Euler::Radians(ref e) => e.to_quaternion(),
      Euler::Degrees(ref e) => e.to_quaternion(),
    }
  }

  fn to_euler_in(&self, units: Units) -> Euler {
    match *self {
      Euler::Radians(ref e) => e.to_euler_in(units),
      Euler::Degrees(ref e) => e.to_euler_in(units),
    }
  }
}

impl fmt::Display for Euler {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      Euler::Radians(ref e) => fmt::Display::fmt(e, f),
      Euler::Degrees(ref e) => fmt::Display::fmt(e, f),
    }
  }
}

/// Any rotation representation.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyRotation {
  EulerRadians(EulerRadians),
  EulerDegrees(EulerDegrees),
  Quaternion(Quaternion),
}

impl Default for AnyRotation {
  fn default() -> Self {
    AnyRotation::Quaternion(Quaternion::identity())
  }
}

impl From<EulerRadians> for AnyRotation {
  fn from(e: EulerRadians) -> Self {
    AnyRotation::EulerRadians(e)
  }
}

impl From<EulerDegrees> for AnyRotation {
  fn from(e: EulerDegrees) -> Self {
    AnyRotation::EulerDegrees(e)
  }
}

impl From<Quaternion> for AnyRotation {
  fn from(q: Quaternion) -> Self {
    AnyRotation::Quaternion(q)
  }
}

impl From<Euler> for AnyRotation {
  fn from(e: Euler) -> Self {
    match e {
      Euler::Radians(e) => AnyRotation::EulerRadians(e),
      Euler::Degrees(e) => AnyRotation::EulerDegrees(e),
    }
  }
}

impl Transformable for AnyRotation {
  fn to_matrix(&self) -> M44<f32> {
    match *self {
      AnyRotation::EulerRadians(ref e) => e.to_matrix(),
      AnyRotation::EulerDegrees(ref e) => e.to_matrix(),
      AnyRotation::Quaternion(ref q) => q.to_matrix(),
    }
  }
}

/// Matrices decompose into quaternions.
impl FromMatrix for AnyRotation {
  fn from_matrix(matrix: &M44<f32>) -> Self {
    AnyRotation::Quaternion(Quaternion::from_matrix(matrix))
  }
}

impl Rotation for AnyRotation {
  fn to_quaternion(&self) -> Quaternion {
    match *self {
      AnyRotation::EulerRadians(ref e) => e.to_quaternion(),
      AnyRotation::EulerDegrees(ref e) => e.to_quaternion(),
      AnyRotation::Quaternion(ref q) => q.to_quaternion(),
    }
  }

  fn to_euler_in(&self, units: Units) -> Euler {
    match *self {
      AnyRotation::EulerRadians(ref e) => e.to_euler_in(units),
      AnyRotation::EulerDegrees(ref e) => e.to_euler_in(units),
      AnyRotation::Quaternion(ref q) => q.to_euler_in(units),
    }
  }
}

impl fmt::Display for AnyRotation {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      AnyRotation::EulerRadians(ref e) => fmt::Display::fmt(e, f),
      AnyRotation::EulerDegrees(ref e) => fmt::Display::fmt(e, f),
      AnyRotation::Quaternion(ref q) => fmt::Display::fmt(q, f),
    }
  }
}
