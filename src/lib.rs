//! Translation, rotation and scale as named-component values.
//!
//! Every value stores its components in a small fixed-size vector that can be read and written by axis
//! letters (`x`, `zy`, `wxyz`, …) and converts to and from a 4x4 homogeneous matrix. Rotations come in
//! three interchangeable representations: Euler angles in radians, Euler angles in degrees and
//! quaternions.
//!
//! Composing the matrices of a translation, a rotation and a scale into a model matrix is left to the
//! scene layer.

pub mod axes;
pub mod coordinates;
pub mod error;
pub mod linear;
pub mod observer;
pub mod rotation;
pub mod scale;
pub mod source;
pub mod transform;
pub mod translation;
pub mod vector;

pub use crate::axes::{AccessorTable, AxisSet, Wxyz, Xyz};
pub use crate::coordinates::{Coordinates, Swizzle};
pub use crate::error::{Error, ErrorKind};
pub use crate::observer::Observer;
pub use crate::rotation::{
  AnyRotation, Euler, EulerAxes, EulerDegrees, EulerRadians, Quaternion, Rotation, Units,
};
pub use crate::scale::Scale;
pub use crate::source::{RotationSource, ScaleSource, TransformSource};
pub use crate::transform::{FromMatrix, Transformable};
pub use crate::translation::Translation;
pub use crate::vector::{cross_product_matrix, rotation_matrix_between_vectors};
