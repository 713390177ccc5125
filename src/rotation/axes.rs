//! Euler axes specifications.
//!
//! An axes specification is a frame letter followed by three axis letters. The frame is either `s`
//! (static: every elementary rotation happens about the fixed, extrinsic axes) or `r` (rotating: each
//! elementary rotation happens about the axes moved by the previous ones). The axis letters give the
//! order in which the three angles are applied. `rxyz` is the default.
//!
//! The frame letter matters numerically: `rxyz` composes as `Rx · Ry · Rz` while `sxyz` composes as
//! `Rz · Ry · Rx`, so the same three angles give different matrices under the two frames.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Cyclic successor of an axis (with one extra slot to avoid wrapping arithmetic).
const NEXT_AXIS: [usize; 4] = [1, 2, 0, 1];

#[derive(Debug, Eq, Hash, PartialEq)]
struct Convention {
  name: &'static str,
  first: usize,
  parity: bool,
  repetition: bool,
  rotating: bool,
}

macro_rules! conventions {
  ($( $name:literal => ($first:literal, $parity:literal, $repetition:literal, $rotating:literal) ),* $(,)?) => {
    [$(
      Convention {
        name: $name,
        first: $first,
        parity: $parity != 0,
        repetition: $repetition != 0,
        rotating: $rotating != 0,
      }
    ),*]
  }
}

static CONVENTIONS: [Convention; 24] = conventions![
  "sxyz" => (0, 0, 0, 0),
  "sxyx" => (0, 0, 1, 0),
  "sxzy" => (0, 1, 0, 0),
  "sxzx" => (0, 1, 1, 0),
  "syzx" => (1, 0, 0, 0),
  "syzy" => (1, 0, 1, 0),
  "syxz" => (1, 1, 0, 0),
  "syxy" => (1, 1, 1, 0),
  "szxy" => (2, 0, 0, 0),
  "szxz" => (2, 0, 1, 0),
  "szyx" => (2, 1, 0, 0),
  "szyz" => (2, 1, 1, 0),
  "rzyx" => (0, 0, 0, 1),
  "rxyx" => (0, 0, 1, 1),
  "ryzx" => (0, 1, 0, 1),
  "rxzx" => (0, 1, 1, 1),
  "rxzy" => (1, 0, 0, 1),
  "ryzy" => (1, 0, 1, 1),
  "rzxy" => (1, 1, 0, 1),
  "ryxy" => (1, 1, 1, 1),
  "ryxz" => (2, 0, 0, 1),
  "rzxz" => (2, 0, 1, 1),
  "rxyz" => (2, 1, 0, 1),
  "rzyz" => (2, 1, 1, 1),
];

/// Composition convention and axis order of Euler angles.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct EulerAxes(&'static Convention);

impl EulerAxes {
  /// All the supported specifications.
  pub fn all() -> impl Iterator<Item = EulerAxes> {
    CONVENTIONS.iter().map(EulerAxes)
  }

  /// Full specification, such as `rxyz`.
  pub fn name(&self) -> &'static str {
    self.0.name
  }

  /// Axis order, such as `xyz`.
  pub fn order(&self) -> &'static str {
    &self.0.name[1..]
  }

  /// Whether angles are applied about rotating (intrinsic) axes.
  pub fn is_rotating(&self) -> bool {
    self.0.rotating
  }

  /// Whether the first and last axes are the same (proper Euler angles, as opposed to Tait-Bryan).
  pub fn is_repeating(&self) -> bool {
    self.0.repetition
  }

  pub(crate) fn parity(&self) -> bool {
    self.0.parity
  }

  /// Inner axes indices `(i, j, k)`, in static frame order.
  pub(crate) fn indices(&self) -> (usize, usize, usize) {
    let parity = self.0.parity as usize;
    let i = self.0.first;
    let j = NEXT_AXIS[i + parity];
    let k = NEXT_AXIS[i + 1 - parity];

    (i, j, k)
  }
}

impl Default for EulerAxes {
  fn default() -> Self {
    EulerAxes(&CONVENTIONS[22])
  }
}

impl FromStr for EulerAxes {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    CONVENTIONS
      .iter()
      .find(|convention| convention.name == s)
      .map(EulerAxes)
      .ok_or_else(|| Error::InvalidAxes(s.to_owned()))
  }
}

impl fmt::Debug for EulerAxes {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    write!(f, "EulerAxes({})", self.0.name)
  }
}

impl fmt::Display for EulerAxes {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    f.write_str(self.0.name)
  }
}
