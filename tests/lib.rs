use itertools::Itertools as _;
use rand::{thread_rng, Rng};
use spectra_coordinates::linear::{rotation_block, M44, V3};
use spectra_coordinates::*;
use std::f32::consts::PI;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn assert_matrix_close(a: &M44<f32>, b: &M44<f32>, eps: f32) {
  for col in 0..4 {
    for row in 0..4 {
      assert!(
        (a[col][row] - b[col][row]).abs() < eps,
        "{:?}\n!=\n{:?}",
        a,
        b
      );
    }
  }
}

/// Angles far enough from the poles of the given axes for the decomposition to stay accurate.
fn random_angles<R: Rng>(rng: &mut R, axes: EulerAxes) -> [f32; 3] {
  let middle = if axes.is_repeating() {
    rng.gen_range(0.2..PI - 0.2)
  } else {
    rng.gen_range(-1.4..1.4)
  };

  [rng.gen_range(-3.0..3.0), middle, rng.gen_range(-3.0..3.0)]
}

fn random_quaternion<R: Rng>(rng: &mut R) -> Quaternion {
  loop {
    let q: [f32; 4] = [
      rng.gen_range(-1.0..1.0),
      rng.gen_range(-1.0..1.0),
      rng.gen_range(-1.0..1.0),
      rng.gen_range(-1.0..1.0),
    ];
    let norm = q.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.1 {
      return Quaternion::new(q[0] / norm, q[1] / norm, q[2] / norm, q[3] / norm);
    }
  }
}

fn counter() -> (Arc<AtomicUsize>, Arc<dyn Observer>) {
  let count = Arc::new(AtomicUsize::new(0));
  let observer: Arc<dyn Observer> = {
    let count = count.clone();
    Arc::new(move || {
      count.fetch_add(1, Ordering::SeqCst);
    })
  };

  (count, observer)
}

#[test]
fn permutations_read_in_requested_order() {
  let c = Coordinates::<Xyz>::new([1., 2., 3.]);

  for len in 1..=3 {
    for perm in "xyz".chars().permutations(len) {
      let name: String = perm.iter().collect();
      let expected: Vec<f32> = perm.iter().map(|&l| (l as u8 - b'x') as f32 + 1.).collect();

      assert_eq!(c.get(&name).unwrap().to_vec(), expected, "accessor {}", name);
    }
  }
}

#[test]
fn permutations_write_then_read() {
  let mut rng = thread_rng();

  for perm in "xyz".chars().permutations(3) {
    let name: String = perm.into_iter().collect();
    let mut c = Coordinates::<Xyz>::default();
    let values: Vec<f32> = (0..3).map(|_| rng.gen_range(-10.0..10.0)).collect();

    c.set(&name, values.clone()).unwrap();
    assert_eq!(c.get(&name).unwrap().to_vec(), values);
  }
}

#[test]
fn every_distinct_letter_accessor_roundtrips() {
  for name in Wxyz::accessors().names().filter(|name| name.chars().all_unique()) {
    let mut c = Coordinates::<Wxyz>::default();
    let values: Vec<f32> = (0..name.len()).map(|i| i as f32 + 0.5).collect();

    c.set(name, values.clone()).unwrap();
    assert_eq!(c.get(name).unwrap().to_vec(), values, "accessor {}", name);
  }
}

#[test]
fn named_writes_notify_once() {
  let (count, observer) = counter();
  let mut t = Translation::new(0., 0., 0.);
  t.observe(observer.clone());

  for (i, name) in Xyz::accessors().names().enumerate() {
    t.set(name, 1.).unwrap();
    assert_eq!(count.load(Ordering::SeqCst), i + 1);
  }

  let (count, observer) = counter();
  let mut q = Quaternion::identity();
  q.observe(observer);

  q.set("wxyz", [0., 1., 0., 0.]).unwrap();
  q.set_index(0, 1.).unwrap();
  assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn euler_degrees_radians_roundtrip() {
  let mut rng = thread_rng();

  for _ in 0..1000 {
    let e = EulerRadians::new(
      rng.gen_range(-PI..PI),
      rng.gen_range(-PI..PI),
      rng.gen_range(-PI..PI),
    );
    let back = e.to_degrees().to_radians();

    for (a, b) in back.xyz().iter().zip(&e.xyz()) {
      assert!((a - b).abs() < 1e-5);
    }
  }
}

#[test]
fn quaternion_matrix_matches_variant_matrix() {
  let mut rng = thread_rng();

  for axes in EulerAxes::all() {
    for _ in 0..100 {
      let [x, y, z] = random_angles(&mut rng, axes);
      let rad = EulerRadians::with_axes(x, y, z, axes);
      let deg = rad.to_degrees();

      assert_matrix_close(&rad.to_quaternion().to_matrix(), &rad.to_matrix(), 1e-5);
      assert_matrix_close(&deg.to_quaternion().to_matrix(), &deg.to_matrix(), 1e-5);
    }
  }

  for _ in 0..1000 {
    let q = random_quaternion(&mut rng);
    assert_matrix_close(&q.to_quaternion().to_matrix(), &q.to_matrix(), 1e-6);
  }
}

#[test]
fn variants_agree_after_conversion() {
  let mut rng = thread_rng();

  for _ in 0..1000 {
    let q = random_quaternion(&mut rng);
    let m = q.to_matrix();

    assert_matrix_close(&q.to_euler("rad").unwrap().to_matrix(), &m, 1e-3);
    assert_matrix_close(&q.to_euler("deg").unwrap().to_matrix(), &m, 1e-3);
    assert_matrix_close(&q.to_euler("deg").unwrap().to_quaternion().to_matrix(), &m, 1e-3);
  }
}

#[test]
fn from_matrix_roundtrips() {
  let mut rng = thread_rng();

  for axes in EulerAxes::all() {
    for _ in 0..100 {
      let [x, y, z] = random_angles(&mut rng, axes);
      let rad = EulerRadians::with_axes(x, y, z, axes);
      let m = rad.to_matrix();

      let back = EulerRadians::from_matrix_with_axes(&m, axes);
      assert_eq!(back.axes(), axes);
      assert_matrix_close(&back.to_matrix(), &m, 1e-4);

      let back = EulerDegrees::from_matrix_with_axes(&m, axes);
      assert_matrix_close(&back.to_matrix(), &m, 1e-4);

      assert_matrix_close(&Quaternion::from_matrix(&m).to_matrix(), &m, 1e-5);
    }
  }

  for _ in 0..1000 {
    let q = random_quaternion(&mut rng);
    let m = q.to_matrix();

    assert_matrix_close(&Quaternion::from_matrix(&m).to_matrix(), &m, 1e-5);
    assert_matrix_close(&EulerRadians::from_matrix(&m).to_matrix(), &m, 1e-3);
  }
}

#[test]
fn rotate_uses_rotation_block_only() {
  let mut rng = thread_rng();

  for _ in 0..100 {
    let q = random_quaternion(&mut rng);
    let v = V3::new(rng.gen(), rng.gen(), rng.gen());
    let expected = rotation_block(&q.to_matrix()) * v;

    assert_eq!(q.rotate(v), expected);
  }
}

#[test]
fn translation_arithmetic() {
  let a = Translation::new(1., 2., 3.);

  assert_eq!(a.clone() + Translation::new(4., 5., 6.), Translation::new(5., 7., 9.));
  assert_eq!(a.clone() + [4., 5., 6.], Translation::new(5., 7., 9.));
  assert_eq!(a.checked_add([4., 5., 6.]).unwrap(), Translation::new(5., 7., 9.));

  let err = a.checked_add([4., 5.]).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Usage);
}

#[test]
fn translation_matrix_roundtrip() {
  let mut rng = thread_rng();

  for _ in 0..1000 {
    let t = Translation::new(rng.gen(), rng.gen(), rng.gen());
    assert_eq!(Translation::from_matrix(&t.to_matrix()), t);
  }
}

#[test]
fn uniform_scale() {
  let s = Scale::uniform(2.);

  assert_eq!(s.get("xyz").unwrap(), Swizzle::Tuple(vec![2., 2., 2.]));
  assert_eq!(s.to_matrix(), M44::from_nonuniform_scale(2., 2., 2.));
  assert_eq!(s.to_matrix(), M44::from_scale(2.));
}

#[test]
fn scale_matrix_roundtrip() {
  let s = Scale::from_matrix(&Scale::new(1., 2., 3.).to_matrix());

  for (a, b) in s.xyz().iter().zip(&[1., 2., 3.]) {
    assert!((a - b).abs() < 1e-6);
  }
}

#[test]
fn opposite_vectors_are_rejected() {
  let err = rotation_matrix_between_vectors(V3::new(1., 0., 0.), V3::new(-1., 0., 0.)).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Domain);
}

#[test]
fn euler_units() {
  let e = EulerDegrees::new(10., 20., 30.);

  assert_eq!(e.to_euler("RAD").unwrap(), e.to_euler("rad").unwrap());
  assert_eq!(e.to_euler("bad").unwrap_err().kind(), ErrorKind::Usage);
}

#[test]
fn composed_model_matrix() {
  let t = Translation::new(1., 2., 3.);
  let r = EulerDegrees::new(0., 0., 90.);
  let s = Scale::uniform(2.);
  let model = t.to_matrix() * r.to_matrix() * s.to_matrix();

  let p = model * V3::new(1., 0., 0.).extend(1.);
  let expected = [1., 4., 3., 1.];

  for (a, b) in [p.x, p.y, p.z, p.w].iter().zip(&expected) {
    assert!((a - b).abs() < 1e-5);
  }
}
