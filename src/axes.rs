//! Axis sets and their named accessors.
//!
//! An axis set maps single letters to component indices. From it, every ordered combination of letters
//! (repetitions allowed) of length one up to the number of axes is a valid accessor name: for `xyz`,
//! `x`, `zy`, `xxz` or `zyx` all address components, in the order they’re written. The table of all
//! those names is built once per axis set and never mutated afterwards.

use itertools::Itertools as _;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Accessor name to component indices mapping.
#[derive(Clone, Debug)]
pub struct AccessorTable {
  accessors: HashMap<String, Vec<usize>>,
}

impl AccessorTable {
  /// Generate all the accessors for the given axis letters, in declared order.
  pub fn new(names: &str) -> Self {
    let axes: Vec<(char, usize)> = names.chars().zip(0..).collect();
    let mut accessors = HashMap::new();

    for len in 1..=axes.len() {
      for combination in itertools::repeat_n(axes.iter(), len).multi_cartesian_product() {
        let name = combination.iter().map(|&&(letter, _)| letter).collect::<String>();
        let indices = combination.iter().map(|&&(_, index)| index).collect();

        accessors.insert(name, indices);
      }
    }

    AccessorTable { accessors }
  }

  /// Indices addressed by an accessor, in the order the name spells them.
  pub fn indices(&self, name: &str) -> Option<&[usize]> {
    self.accessors.get(name).map(Vec::as_slice)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.accessors.contains_key(name)
  }

  pub fn len(&self) -> usize {
    self.accessors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.accessors.is_empty()
  }

  /// All accessor names, in no particular order.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.accessors.keys().map(String::as_str)
  }
}

/// Class of axis sets.
pub trait AxisSet: 'static {
  /// Axis letters, in storage order.
  const NAMES: &'static str;

  /// Fixed-size storage of the components.
  type Array: Copy + Default + PartialEq + fmt::Debug + AsRef<[f32]> + AsMut<[f32]> + Send + Sync;

  /// Accessor table of this axis set.
  fn accessors() -> &'static AccessorTable;
}

/// `x`, `y`, `z` axes, used by translations, scales and Euler angles.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Xyz;

impl AxisSet for Xyz {
  const NAMES: &'static str = "xyz";

  type Array = [f32; 3];

  fn accessors() -> &'static AccessorTable {
    static TABLE: OnceLock<AccessorTable> = OnceLock::new();
    TABLE.get_or_init(|| AccessorTable::new(Self::NAMES))
  }
}

/// `w`, `x`, `y`, `z` axes, used by quaternions (scalar part first).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Wxyz;

impl AxisSet for Wxyz {
  const NAMES: &'static str = "wxyz";

  type Array = [f32; 4];

  fn accessors() -> &'static AccessorTable {
    static TABLE: OnceLock<AccessorTable> = OnceLock::new();
    TABLE.get_or_init(|| AccessorTable::new(Self::NAMES))
  }
}
