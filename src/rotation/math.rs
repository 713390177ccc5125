//! Euler angles composition and decomposition, and quaternion extraction.
//!
//! Both Euler directions work on the static-frame axis indices of an [`EulerAxes`]; rotating-frame
//! conventions are handled by swapping the first and last angles.

use cgmath::SquareMatrix as _;

use crate::linear::{Quat, M33};
use crate::rotation::axes::EulerAxes;

/// Threshold under which the decomposition is considered to be at a pole.
const EPSILON: f32 = f32::EPSILON * 4.;

/// Read a matrix in row-column order.
fn at(m: &M33<f32>, row: usize, col: usize) -> f32 {
  m[col][row]
}

/// Write a matrix in row-column order.
fn put(m: &mut M33<f32>, row: usize, col: usize, value: f32) {
  m[col][row] = value;
}

/// Rotation matrix of Euler angles (in radians).
pub fn euler_matrix(angles: [f32; 3], axes: EulerAxes) -> M33<f32> {
  let (i, j, k) = axes.indices();
  let [mut ai, mut aj, mut ak] = angles;

  if axes.is_rotating() {
    std::mem::swap(&mut ai, &mut ak);
  }

  if axes.parity() {
    ai = -ai;
    aj = -aj;
    ak = -ak;
  }

  let (si, sj, sk) = (ai.sin(), aj.sin(), ak.sin());
  let (ci, cj, ck) = (ai.cos(), aj.cos(), ak.cos());
  let (cc, cs) = (ci * ck, ci * sk);
  let (sc, ss) = (si * ck, si * sk);

  let mut m = M33::identity();

  if axes.is_repeating() {
    put(&mut m, i, i, cj);
    put(&mut m, i, j, sj * si);
    put(&mut m, i, k, sj * ci);
    put(&mut m, j, i, sj * sk);
    put(&mut m, j, j, -cj * ss + cc);
    put(&mut m, j, k, -cj * cs - sc);
    put(&mut m, k, i, -sj * ck);
    put(&mut m, k, j, cj * sc + cs);
    put(&mut m, k, k, cj * cc - ss);
  } else {
    put(&mut m, i, i, cj * ck);
    put(&mut m, i, j, sj * sc - cs);
    put(&mut m, i, k, sj * cc + ss);
    put(&mut m, j, i, cj * sk);
    put(&mut m, j, j, sj * ss + cc);
    put(&mut m, j, k, sj * cs - sc);
    put(&mut m, k, i, -sj);
    put(&mut m, k, j, cj * si);
    put(&mut m, k, k, cj * ci);
  }

  m
}

/// Euler angles (in radians) of a rotation matrix.
///
/// The matrix must be orthonormal. At a pole (gimbal lock), the last angle is pinned to zero.
pub fn euler_from_matrix(m: &M33<f32>, axes: EulerAxes) -> [f32; 3] {
  let (i, j, k) = axes.indices();

  let [mut ax, mut ay, mut az] = if axes.is_repeating() {
    let sy = at(m, i, j).hypot(at(m, i, k));

    if sy > EPSILON {
      [
        at(m, i, j).atan2(at(m, i, k)),
        sy.atan2(at(m, i, i)),
        at(m, j, i).atan2(-at(m, k, i)),
      ]
    } else {
      log::debug!("gimbal lock while decomposing {} angles", axes);
      [(-at(m, j, k)).atan2(at(m, j, j)), sy.atan2(at(m, i, i)), 0.]
    }
  } else {
    let cy = at(m, i, i).hypot(at(m, j, i));

    if cy > EPSILON {
      [
        at(m, k, j).atan2(at(m, k, k)),
        (-at(m, k, i)).atan2(cy),
        at(m, j, i).atan2(at(m, i, i)),
      ]
    } else {
      log::debug!("gimbal lock while decomposing {} angles", axes);
      [(-at(m, j, k)).atan2(at(m, j, j)), (-at(m, k, i)).atan2(cy), 0.]
    }
  };

  if axes.parity() {
    ax = -ax;
    ay = -ay;
    az = -az;
  }

  if axes.is_rotating() {
    std::mem::swap(&mut ax, &mut az);
  }

  [ax, ay, az]
}

/// Unit quaternion of an orthonormal rotation matrix.
///
/// The branch is picked on the largest diagonal term to keep the divisor away from zero.
pub fn quaternion_from_matrix(m: &M33<f32>) -> Quat<f32> {
  let (m00, m11, m22) = (at(m, 0, 0), at(m, 1, 1), at(m, 2, 2));
  let trace = m00 + m11 + m22;

  if trace > 0. {
    let s = (trace + 1.).sqrt() * 2.;
    Quat::new(
      0.25 * s,
      (at(m, 2, 1) - at(m, 1, 2)) / s,
      (at(m, 0, 2) - at(m, 2, 0)) / s,
      (at(m, 1, 0) - at(m, 0, 1)) / s,
    )
  } else if m00 > m11 && m00 > m22 {
    let s = (1. + m00 - m11 - m22).sqrt() * 2.;
    Quat::new(
      (at(m, 2, 1) - at(m, 1, 2)) / s,
      0.25 * s,
      (at(m, 0, 1) + at(m, 1, 0)) / s,
      (at(m, 0, 2) + at(m, 2, 0)) / s,
    )
  } else if m11 > m22 {
    let s = (1. + m11 - m00 - m22).sqrt() * 2.;
    Quat::new(
      (at(m, 0, 2) - at(m, 2, 0)) / s,
      (at(m, 0, 1) + at(m, 1, 0)) / s,
      0.25 * s,
      (at(m, 1, 2) + at(m, 2, 1)) / s,
    )
  } else {
    let s = (1. + m22 - m00 - m11).sqrt() * 2.;
    Quat::new(
      (at(m, 1, 0) - at(m, 0, 1)) / s,
      (at(m, 0, 2) + at(m, 2, 0)) / s,
      (at(m, 1, 2) + at(m, 2, 1)) / s,
      0.25 * s,
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::linear::{Rad, V3};
  use cgmath::Matrix3;
  use std::f32::consts::FRAC_PI_2;

  fn assert_close(a: &M33<f32>, b: &M33<f32>) {
    for col in 0..3 {
      for row in 0..3 {
        assert!((a[col][row] - b[col][row]).abs() < 1e-5, "{:?} != {:?}", a, b);
      }
    }
  }

  #[test]
  fn static_xyz_applies_x_first() {
    let (x, y, z) = (0.1, 0.2, 0.3);
    let expected =
      Matrix3::from_angle_z(Rad(z)) * Matrix3::from_angle_y(Rad(y)) * Matrix3::from_angle_x(Rad(x));

    assert_close(&euler_matrix([x, y, z], "sxyz".parse().unwrap()), &expected);
  }

  #[test]
  fn rotating_xyz_composes_about_moving_axes() {
    let (x, y, z) = (0.1, 0.2, 0.3);
    let expected =
      Matrix3::from_angle_x(Rad(x)) * Matrix3::from_angle_y(Rad(y)) * Matrix3::from_angle_z(Rad(z));

    assert_close(&euler_matrix([x, y, z], EulerAxes::default()), &expected);
  }

  #[test]
  fn frame_letter_changes_the_matrix() {
    let angles = [0.5, 0.2, 0.7];
    let rotating = euler_matrix(angles, "rxyz".parse().unwrap());
    let fixed = euler_matrix(angles, "sxyz".parse().unwrap());

    assert!((rotating.z.x - fixed.z.x).abs() > 1e-2);
  }

  #[test]
  fn proper_euler_zxz() {
    let (a, b, c) = (0.4, -0.7, 1.1);
    let expected =
      Matrix3::from_angle_z(Rad(c)) * Matrix3::from_angle_x(Rad(b)) * Matrix3::from_angle_z(Rad(a));

    assert_close(&euler_matrix([a, b, c], "szxz".parse().unwrap()), &expected);
  }

  #[test]
  fn decomposition_recomposes() {
    let angles = [0.3, -0.5, 1.2];

    for axes in EulerAxes::all() {
      let m = euler_matrix(angles, axes);
      let decomposed = euler_from_matrix(&m, axes);

      assert_close(&euler_matrix(decomposed, axes), &m);
    }
  }

  #[test]
  fn decomposition_recovers_tait_bryan_angles() {
    let angles = [0.3, -0.5, 1.2];

    for axes in EulerAxes::all().filter(|axes| !axes.is_repeating()) {
      let decomposed = euler_from_matrix(&euler_matrix(angles, axes), axes);

      for (a, b) in angles.iter().zip(&decomposed) {
        assert!((a - b).abs() < 1e-5, "{}: {:?} != {:?}", axes, angles, decomposed);
      }
    }
  }

  #[test]
  fn gimbal_lock_recomposes() {
    for axes in EulerAxes::all() {
      let middle = if axes.is_repeating() { 0. } else { FRAC_PI_2 };
      let m = euler_matrix([0.4, middle, 0.2], axes);
      let decomposed = euler_from_matrix(&m, axes);

      assert_close(&euler_matrix(decomposed, axes), &m);
    }
  }

  #[test]
  fn quaternion_extraction_matches_cgmath() {
    // one rotation per branch: small angle, then half turns about x, y and z
    let matrices = [
      Matrix3::from_angle_y(Rad(0.3)),
      Matrix3::from_angle_x(Rad(3.)),
      Matrix3::from_angle_y(Rad(3.)),
      Matrix3::from_angle_z(Rad(3.)),
      euler_matrix([2.5, -0.4, 2.9], EulerAxes::default()),
    ];

    for m in &matrices {
      let q = quaternion_from_matrix(m);
      assert_close(&Matrix3::from(q), m);
    }
  }

  #[test]
  fn identity_has_null_angles() {
    let v = V3::new(0., 0., 0.);
    let angles = euler_from_matrix(&M33::identity(), EulerAxes::default());

    assert_eq!(V3::from(angles), v);
  }
}
