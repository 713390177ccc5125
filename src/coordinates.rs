//! Letter-addressed numeric components.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use crate::axes::{AxisSet, Wxyz, Xyz};
use crate::error::Error;
use crate::observer::Observer;

/// Components read from, or written to, an accessor.
#[derive(Clone, Debug, PartialEq)]
pub enum Swizzle {
  /// Single component (one-letter accessor).
  Scalar(f32),
  /// Several components, in the order the accessor spells them.
  Tuple(Vec<f32>),
}

impl Swizzle {
  pub fn len(&self) -> usize {
    match *self {
      Swizzle::Scalar(_) => 1,
      Swizzle::Tuple(ref values) => values.len(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn as_scalar(&self) -> Option<f32> {
    match *self {
      Swizzle::Scalar(x) => Some(x),
      Swizzle::Tuple(_) => None,
    }
  }

  pub fn to_vec(&self) -> Vec<f32> {
    match *self {
      Swizzle::Scalar(x) => vec![x],
      Swizzle::Tuple(ref values) => values.clone(),
    }
  }
}

impl From<f32> for Swizzle {
  fn from(x: f32) -> Self {
    Swizzle::Scalar(x)
  }
}

impl From<Vec<f32>> for Swizzle {
  fn from(values: Vec<f32>) -> Self {
    Swizzle::Tuple(values)
  }
}

impl<'a> From<&'a [f32]> for Swizzle {
  fn from(values: &'a [f32]) -> Self {
    Swizzle::Tuple(values.to_vec())
  }
}

impl<const N: usize> From<[f32; N]> for Swizzle {
  fn from(values: [f32; N]) -> Self {
    Swizzle::Tuple(values.to_vec())
  }
}

/// Fixed-size numeric vector whose components are addressed by axis letters.
///
/// Any combination of the axis letters is an accessor (see [`crate::axes`]). Writes through an accessor,
/// or through a raw index, notify the attached [`Observer`], if any, exactly once per call.
pub struct Coordinates<A>
where
  A: AxisSet,
{
  array: A::Array,
  observer: Option<Arc<dyn Observer>>,
}

impl<A> Coordinates<A>
where
  A: AxisSet,
{
  /// Create coordinates from components given in axis order.
  pub fn new(array: A::Array) -> Self {
    Coordinates {
      array,
      observer: None,
    }
  }

  /// Create coordinates from a slice, which must have exactly one value per axis.
  pub fn from_slice(values: &[f32]) -> Result<Self, Error> {
    let mut array = A::Array::default();

    if values.len() != array.as_ref().len() {
      return Err(Error::InvalidArity(values.len()));
    }

    array.as_mut().copy_from_slice(values);
    Ok(Self::new(array))
  }

  /// Attach an observer, replacing the previous one.
  pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
    self.observe(observer);
    self
  }

  /// Attach an observer, replacing the previous one.
  pub fn observe(&mut self, observer: Arc<dyn Observer>) {
    self.observer = Some(observer);
  }

  /// Detach the current observer.
  pub fn unobserve(&mut self) -> Option<Arc<dyn Observer>> {
    self.observer.take()
  }

  pub fn observer(&self) -> Option<&Arc<dyn Observer>> {
    self.observer.as_ref()
  }

  /// Number of components.
  pub fn len(&self) -> usize {
    self.array.as_ref().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn as_array(&self) -> A::Array {
    self.array
  }

  pub fn as_slice(&self) -> &[f32] {
    self.array.as_ref()
  }

  /// Read the components addressed by an accessor.
  pub fn get(&self, name: &str) -> Result<Swizzle, Error> {
    let indices = Self::indices(name)?;
    let array = self.array.as_ref();

    match *indices {
      [index] => Ok(Swizzle::Scalar(array[index])),
      _ => Ok(Swizzle::Tuple(indices.iter().map(|&i| array[i]).collect())),
    }
  }

  /// Write the components addressed by an accessor.
  ///
  /// A scalar is written to every addressed component. A tuple must have one value per letter; when a
  /// letter is repeated, the last value written for it wins. Nothing is written on error.
  pub fn set<V>(&mut self, name: &str, value: V) -> Result<(), Error>
  where
    V: Into<Swizzle>,
  {
    let indices = Self::indices(name)?;
    let array = self.array.as_mut();

    match value.into() {
      Swizzle::Scalar(x) => {
        for &i in indices {
          array[i] = x;
        }
      }

      Swizzle::Tuple(values) => {
        if values.len() != indices.len() {
          return Err(Error::LengthMismatch {
            expected: indices.len(),
            found: values.len(),
          });
        }

        for (&i, x) in indices.iter().zip(values) {
          array[i] = x;
        }
      }
    }

    self.notify(name);
    Ok(())
  }

  /// Write a single component by raw index.
  pub fn set_index(&mut self, index: usize, value: f32) -> Result<(), Error> {
    let len = self.len();
    let slot = self
      .array
      .as_mut()
      .get_mut(index)
      .ok_or(Error::IndexOutOfRange { index, len })?;

    *slot = value;
    self.notify("[index]");
    Ok(())
  }

  /// Write consecutive components starting at a raw index.
  pub fn set_slice(&mut self, start: usize, values: &[f32]) -> Result<(), Error> {
    let len = self.len();
    let end = start
      .checked_add(values.len())
      .filter(|&end| end <= len)
      .ok_or(Error::IndexOutOfRange { index: start, len })?;

    self.array.as_mut()[start..end].copy_from_slice(values);
    self.notify("[slice]");
    Ok(())
  }

  fn indices(name: &str) -> Result<&'static [usize], Error> {
    A::accessors()
      .indices(name)
      .ok_or_else(|| Error::UnknownAccessor(name.to_owned()))
  }

  fn notify(&self, through: &str) {
    log::trace!("{} coordinates changed through {}", A::NAMES, through);

    if let Some(ref observer) = self.observer {
      observer.on_change();
    }
  }
}

impl Coordinates<Xyz> {
  pub fn x(&self) -> f32 {
    self.array[0]
  }

  pub fn y(&self) -> f32 {
    self.array[1]
  }

  pub fn z(&self) -> f32 {
    self.array[2]
  }

  pub fn xyz(&self) -> [f32; 3] {
    self.array
  }
}

impl Coordinates<Wxyz> {
  pub fn w(&self) -> f32 {
    self.array[0]
  }

  pub fn x(&self) -> f32 {
    self.array[1]
  }

  pub fn y(&self) -> f32 {
    self.array[2]
  }

  pub fn z(&self) -> f32 {
    self.array[3]
  }

  pub fn wxyz(&self) -> [f32; 4] {
    self.array
  }
}

impl<A> Clone for Coordinates<A>
where
  A: AxisSet,
{
  fn clone(&self) -> Self {
    Coordinates {
      array: self.array,
      observer: self.observer.clone(),
    }
  }
}

impl<A> Default for Coordinates<A>
where
  A: AxisSet,
{
  fn default() -> Self {
    Self::new(A::Array::default())
  }
}

impl<A> PartialEq for Coordinates<A>
where
  A: AxisSet,
{
  fn eq(&self, rhs: &Self) -> bool {
    self.array == rhs.array
  }
}

impl<A> Index<usize> for Coordinates<A>
where
  A: AxisSet,
{
  type Output = f32;

  fn index(&self, index: usize) -> &Self::Output {
    &self.array.as_ref()[index]
  }
}

impl<A> AsRef<[f32]> for Coordinates<A>
where
  A: AxisSet,
{
  fn as_ref(&self) -> &[f32] {
    self.as_slice()
  }
}

impl<A> fmt::Debug for Coordinates<A>
where
  A: AxisSet,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    f.debug_struct("Coordinates")
      .field("axes", &A::NAMES)
      .field("array", &self.array)
      .field("observed", &self.observer.is_some())
      .finish()
  }
}

impl<A> fmt::Display for Coordinates<A>
where
  A: AxisSet,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    for (i, (letter, value)) in A::NAMES.chars().zip(self.array.as_ref()).enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }

      write!(f, "{}={}", letter, value)?;
    }

    Ok(())
  }
}
