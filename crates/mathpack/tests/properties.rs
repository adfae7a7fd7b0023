use approx::assert_relative_eq;
use fastrand::Rng;
use mathpack::{
    gauss_elimination, gauss_jordan,
    linalg::{vec2, Mat3d, Mat4d, Matrix, MatrixN, Vec2d, VectorN},
    lls, tridiagonal, CholeskyDecomposition, Error, LuDecomposition, Mode, QrDecomposition,
    RqDecomposition, Status, Svd, SymmetricEigen,
};

const SEED: u64 = 0x6d61_7468_7061_636b;

fn random(rng: &mut Rng, rows: usize, cols: usize) -> MatrixN {
    MatrixN::from_fn(rows, cols, |_, _| rng.f64() * 2.0 - 1.0)
}

/// A random matrix made well-conditioned by a dominant diagonal.
fn dominant(rng: &mut Rng, n: usize) -> MatrixN {
    let mut a = random(rng, n, n);
    for i in 0..n {
        a[(i, i)] += n as f64;
    }
    a
}

#[test]
fn gauss_jordan_inverts_and_solves() {
    mathpack::init_logger!();
    let mut rng = Rng::with_seed(SEED);
    for n in 1..8 {
        let a = dominant(&mut rng, n);
        let b = random(&mut rng, n, 3);

        let mut inv = a.clone();
        let mut x = MatrixN::zeros(n, 3);
        gauss_jordan(&mut inv, &b, &mut x).unwrap();

        assert_relative_eq!(&a * &inv, MatrixN::identity(n), epsilon = 1e-12);
        assert_relative_eq!(&a * &x, b, epsilon = 1e-12);
    }
}

#[test]
fn eliminations_agree() {
    let mut rng = Rng::with_seed(SEED ^ 1);
    for n in 1..8 {
        let a = dominant(&mut rng, n);
        let b = random(&mut rng, n, 2);

        let mut xj = MatrixN::zeros(n, 2);
        gauss_jordan(&mut a.clone(), &b, &mut xj).unwrap();
        let mut xe = MatrixN::zeros(n, 2);
        gauss_elimination(&mut a.clone(), &b, &mut xe).unwrap();
        assert_relative_eq!(xj, xe, epsilon = 1e-12);
    }
}

#[test]
fn two_by_two_scenario() {
    let mut a = MatrixN::from_rows(&[[2.0, 1.0], [1.0, 3.0]]);
    let b = VectorN::from(vec![3.0, 5.0]);
    let mut x = VectorN::zeros(2);
    gauss_jordan(&mut a, &b, &mut x).unwrap();
    assert_relative_eq!(x, VectorN::from(vec![0.8, 1.4]), epsilon = 1e-12);
}

#[test]
fn tridiagonal_scenario() {
    let bands = MatrixN::from_rows(&[
        [-1.0, 2.0, -1.0],
        [-1.0, 2.0, -1.0],
        [-1.0, 2.0, -1.0],
        [-1.0, 2.0, -1.0],
    ]);
    let mut b = VectorN::from(vec![1.0, 0.0, 0.0, 1.0]);
    tridiagonal(&bands, &mut b).unwrap();
    assert_relative_eq!(b, VectorN::from(vec![1.0, 1.0, 1.0, 1.0]), epsilon = 1e-12);
}

#[test]
fn lu_reconstructs_permuted_input() {
    let mut rng = Rng::with_seed(SEED ^ 2);
    for (m, n) in [(1, 1), (3, 3), (6, 6), (5, 3), (3, 5)] {
        let a = random(&mut rng, m, n);
        let lu = LuDecomposition::new(&a).unwrap();
        assert_relative_eq!(&lu.permutation() * &a, &lu.l() * &lu.u(), epsilon = 1e-12);
    }
}

#[test]
fn lu_parity_matches_cofactor_sign() {
    let mut rng = Rng::with_seed(SEED ^ 3);
    for _ in 0..20 {
        let m3 = Mat3d::from_fn(|_, _| rng.f64() * 2.0 - 1.0);
        let lu = LuDecomposition::new(&MatrixN::from(m3)).unwrap();
        assert_eq!(lu.determinant().signum(), m3.determinant().signum());
        assert_relative_eq!(lu.determinant(), m3.determinant(), epsilon = 1e-12);

        let m4 = Mat4d::from_fn(|_, _| rng.f64() * 2.0 - 1.0);
        let lu = LuDecomposition::new(&MatrixN::from(m4)).unwrap();
        assert_eq!(lu.determinant().signum(), m4.determinant().signum());
        assert_relative_eq!(lu.determinant(), m4.determinant(), epsilon = 1e-12);
    }
}

#[test]
fn qr_reconstructs_tall_input() {
    let mut rng = Rng::with_seed(SEED ^ 4);
    for (m, n) in [(4, 4), (7, 4), (9, 2)] {
        let a = random(&mut rng, m, n);
        for mode in [Mode::Economy, Mode::Full] {
            let qr = QrDecomposition::new(&a, mode).unwrap();
            let k = qr.q().cols();
            assert_relative_eq!(qr.q() * qr.r(), a, epsilon = 1e-12);
            assert_relative_eq!(
                &qr.q().transpose() * qr.q(),
                MatrixN::identity(k),
                epsilon = 1e-12
            );
        }
    }
}

#[test]
fn rq_reconstructs_input() {
    let mut rng = Rng::with_seed(SEED ^ 5);
    for (m, n) in [(3, 3), (3, 4), (5, 2)] {
        let a = random(&mut rng, m, n);
        let rq = RqDecomposition::new(&a).unwrap();
        assert_relative_eq!(rq.r() * rq.q(), a, epsilon = 1e-12);
        let k = m.min(n);
        assert_relative_eq!(
            rq.q() * &rq.q().transpose(),
            MatrixN::identity(k),
            epsilon = 1e-12
        );
    }
}

#[test]
fn svd_reconstructs_input() {
    let mut rng = Rng::with_seed(SEED ^ 6);
    for (m, n) in [(4, 4), (6, 3), (3, 6)] {
        let a = random(&mut rng, m, n);
        let svd = Svd::new(&a, Mode::Economy).unwrap();
        let s = svd.singular_values();
        for i in 0..s.size() {
            assert!(s[i] >= 0.0);
            if i > 0 {
                assert!(s[i] <= s[i - 1], "singular values not sorted: {s:?}");
            }
        }

        let us = svd.u() * &MatrixN::from_diagonal(s.as_slice());
        assert_relative_eq!(&us * &svd.v().transpose(), a, epsilon = 1e-12);
    }
}

#[test]
fn full_svd_bases_are_orthonormal() {
    let mut rng = Rng::with_seed(SEED ^ 7);
    let a = random(&mut rng, 5, 3);
    let (u, s, v) = Svd::new(&a, Mode::Full).unwrap().into_parts();
    assert_eq!(s.size(), 3);
    assert_relative_eq!(&u.transpose() * &u, MatrixN::identity(5), epsilon = 1e-12);
    assert_relative_eq!(&v.transpose() * &v, MatrixN::identity(3), epsilon = 1e-12);
}

#[test]
fn cholesky_reconstructs_spd_input() {
    let mut rng = Rng::with_seed(SEED ^ 8);
    let m = random(&mut rng, 5, 5);
    let a = &(&m.transpose() * &m) + &MatrixN::identity(5);
    let chol = CholeskyDecomposition::new(&a).unwrap();
    assert_relative_eq!(&chol.u().transpose() * chol.u(), a, epsilon = 1e-12);

    let mut indefinite = a.clone();
    indefinite[(2, 2)] = -1.0;
    let err = CholeskyDecomposition::new(&indefinite).unwrap_err();
    assert_eq!(err.status(), Status::Singular);
    assert!(err.info() > 0);
    assert!(err.info() <= 3);
}

#[test]
fn eigen_diagonalizes() {
    let mut rng = Rng::with_seed(SEED ^ 9);
    let m = random(&mut rng, 4, 4);
    let a = &m + &m.transpose();
    let (values, vectors) = SymmetricEigen::new(&a).unwrap().into_parts();
    let d = &(&vectors.transpose() * &a) * &vectors;
    assert_relative_eq!(d, MatrixN::from_diagonal(values.as_slice()), epsilon = 1e-12);
    for i in 1..values.size() {
        assert!(values[i - 1] <= values[i]);
    }
}

#[test]
fn transpose_is_involutive() {
    let mut rng = Rng::with_seed(SEED ^ 10);
    let a = random(&mut rng, 4, 7);
    assert_eq!(a.transpose().transpose(), a);

    let m: Matrix<f64, 2, 3> = Matrix::from_fn(|_, _| rng.f64());
    assert_eq!(m.transpose().transpose(), m);
}

#[test]
fn least_squares_line() {
    let mut rng = Rng::with_seed(SEED ^ 11);
    let t: Vec<f64> = (0..50).map(|i| i as f64 / 10.0).collect();
    let y: VectorN = t
        .iter()
        .map(|t| 0.5 - 2.0 * t + (rng.f64() - 0.5) * 1e-3)
        .collect();
    let d = MatrixN::from_fn(t.len(), 2, |r, c| if c == 0 { 1.0 } else { t[r] });

    let mut coeffs = Vec2d::ZERO;
    lls(&d, &y, &mut coeffs).unwrap();
    assert_relative_eq!(coeffs, vec2(0.5, -2.0), epsilon = 1e-3);
}

#[test]
fn singular_systems_are_reported() {
    let a = MatrixN::from_rows(&[[1.0, 2.0, 3.0], [0.0, 0.0, 0.0], [7.0, 8.0, 9.0]]);
    let b = VectorN::from(vec![1.0, 1.0, 1.0]);
    let mut x = VectorN::zeros(3);

    let err = gauss_jordan(&mut a.clone(), &b, &mut x).unwrap_err();
    assert_eq!(err.status(), Status::Singular);
    assert!(matches!(err, Error::Singular { .. }));
}
