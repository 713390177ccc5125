//! Serializable descriptions of transforms.
//!
//! A [`TransformSource`] is what gets written in configuration files: a translation, a rotation in
//! whichever representation is the most convenient to author, and a scale. Every field is optional
//! and defaults to the identity.
//!
//! ```json
//! {
//!   "translation": [0, 1.5, -3],
//!   "rotation": { "euler_degrees": { "angles": [0, 90, 0], "axes": "sxyz" } },
//!   "scale": 2
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::error::Error;
use crate::rotation::{AnyRotation, EulerDegrees, EulerRadians, Quaternion};
use crate::scale::Scale;
use crate::translation::Translation;

fn default_axes() -> String {
  "rxyz".to_owned()
}

/// Resource representation of a rotation.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationSource {
  EulerRadians {
    angles: [f32; 3],
    #[serde(default = "default_axes")]
    axes: String,
  },
  EulerDegrees {
    angles: [f32; 3],
    #[serde(default = "default_axes")]
    axes: String,
  },
  /// Scalar part first.
  Quaternion([f32; 4]),
}

impl Default for RotationSource {
  fn default() -> Self {
    RotationSource::Quaternion([1., 0., 0., 0.])
  }
}

impl RotationSource {
  /// Build the rotation; fails if the axes specification is unknown.
  pub fn rotation(&self) -> Result<AnyRotation, Error> {
    match *self {
      RotationSource::EulerRadians {
        angles: [x, y, z],
        ref axes,
      } => Ok(EulerRadians::with_axes(x, y, z, axes.parse()?).into()),

      RotationSource::EulerDegrees {
        angles: [x, y, z],
        ref axes,
      } => Ok(EulerDegrees::with_axes(x, y, z, axes.parse()?).into()),

      RotationSource::Quaternion([w, x, y, z]) => Ok(Quaternion::new(w, x, y, z).into()),
    }
  }
}

impl<'a> From<&'a AnyRotation> for RotationSource {
  fn from(rotation: &'a AnyRotation) -> Self {
    match *rotation {
      AnyRotation::EulerRadians(ref e) => RotationSource::EulerRadians {
        angles: e.xyz(),
        axes: e.axes().to_string(),
      },

      AnyRotation::EulerDegrees(ref e) => RotationSource::EulerDegrees {
        angles: e.xyz(),
        axes: e.axes().to_string(),
      },

      AnyRotation::Quaternion(ref q) => RotationSource::Quaternion(q.wxyz()),
    }
  }
}

/// Resource representation of a [`Scale`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScaleSource {
  Uniform(f32),
  PerAxis([f32; 3]),
}

impl Default for ScaleSource {
  fn default() -> Self {
    ScaleSource::Uniform(1.)
  }
}

impl ScaleSource {
  pub fn scale(&self) -> Scale {
    match *self {
      ScaleSource::Uniform(s) => Scale::uniform(s),
      ScaleSource::PerAxis(xyz) => xyz.into(),
    }
  }
}

/// Resource representation of a full transform.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct TransformSource {
  pub translation: [f32; 3],
  pub rotation: RotationSource,
  pub scale: ScaleSource,
}

impl Default for TransformSource {
  fn default() -> Self {
    TransformSource {
      translation: [0., 0., 0.],
      rotation: RotationSource::default(),
      scale: ScaleSource::default(),
    }
  }
}

impl TransformSource {
  /// Describe live values.
  pub fn new(translation: &Translation, rotation: &AnyRotation, scale: &Scale) -> Self {
    let [x, y, z] = scale.xyz();
    let scale = if x == y && y == z {
      ScaleSource::Uniform(x)
    } else {
      ScaleSource::PerAxis([x, y, z])
    };

    TransformSource {
      translation: translation.xyz(),
      rotation: rotation.into(),
      scale,
    }
  }

  pub fn from_json(json: &str) -> Result<Self, Error> {
    serde_json::from_str(json).map_err(|e| {
      log::error!("cannot decode transform source: {}", e);
      Error::from(e)
    })
  }

  pub fn from_reader<R>(reader: R) -> Result<Self, Error>
  where
    R: Read,
  {
    let source: Self = serde_json::from_reader(reader).map_err(|e| {
      log::error!("cannot decode transform source: {}", e);
      Error::from(e)
    })?;

    log::info!("loaded transform source");
    Ok(source)
  }

  pub fn to_json(&self) -> Result<String, Error> {
    Ok(serde_json::to_string(self)?)
  }

  pub fn translation(&self) -> Translation {
    self.translation.into()
  }

  pub fn rotation(&self) -> Result<AnyRotation, Error> {
    self.rotation.rotation()
  }

  pub fn scale(&self) -> Scale {
    self.scale.scale()
  }
}
