//! End-to-end computations: fixed products, gate construction, tensor
//! products and a two-qubit circuit, checked against their printed form.

use std::f64::consts::FRAC_1_SQRT_2;

use approx::assert_abs_diff_eq;
use qmath_core::prelude::*;

fn real_matrix(rows: usize, cols: usize, data: Vec<f64>) -> Matrix {
    Matrix::from_vec(rows, cols, data).unwrap()
}

#[test]
fn test_product_of_2x2_matrices() {
    let m1 = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    let m2 = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();

    let p = m1.matmul(&m2).unwrap();
    assert_eq!(p, real_matrix(2, 2, vec![19.0, 22.0, 43.0, 50.0]));
    assert!(p.iter().all(|z| z.im == 0.0));
    assert_eq!(
        p.to_string(),
        "| 19.00 + 0.00i,  22.00 + 0.00i |\n| 43.00 + 0.00i,  50.00 + 0.00i |"
    );

    let q = m2.matmul(&m1).unwrap();
    assert_eq!(
        q.to_string(),
        "| 23.00 + 0.00i,  34.00 + 0.00i |\n| 31.00 + 0.00i,  46.00 + 0.00i |"
    );
}

#[test]
fn test_scaled_hadamard_display() {
    let h = real_matrix(2, 2, vec![1.0, 1.0, 1.0, -1.0]).scale(1.0 / 2.0_f64.sqrt());
    let text = h.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, ["| 0.71 + 0.00i,  0.71 + 0.00i |", "| 0.71 + 0.00i,  -0.71 + 0.00i |"]);
    assert_abs_diff_eq!(h, gates::hadamard(), epsilon = 1e-15);
}

#[test]
fn test_wrong_element_count_is_rejected() {
    let err = Matrix::from_vec(2, 2, vec![1, 2, 3]).unwrap_err();
    assert_eq!(
        err,
        CoreError::InvalidShape {
            rows: 2,
            cols: 2,
            len: 3
        }
    );
}

#[test]
fn test_tensor_product_corners() {
    let a = Matrix::from_rows(&[
        [Complex::new(1.0, 1.0), Complex::new(2.0, 0.0)],
        [Complex::new(0.0, -1.0), Complex::new(3.0, 2.0)],
    ]);
    let b = Matrix::from_rows(&[
        [Complex::new(2.0, -1.0), Complex::I],
        [Complex::new(-1.0, 0.0), Complex::new(0.5, 0.5)],
    ]);
    let k = a.kron(&b);
    assert_eq!(k.shape(), (4, 4));
    assert_eq!(*k.get(0, 0).unwrap(), *a.get(0, 0).unwrap() * *b.get(0, 0).unwrap());
    assert_eq!(*k.get(3, 3).unwrap(), *a.get(1, 1).unwrap() * *b.get(1, 1).unwrap());
    // Top-right block is a[0, 1] * b.
    assert_eq!(*k.get(1, 2).unwrap(), *a.get(0, 1).unwrap() * *b.get(1, 0).unwrap());

    // Equally shaped operands give the same result under either convention.
    let reference = a.tensor_product_with(&b, TensorProductMode::Reference).unwrap();
    assert_eq!(reference, k);
}

#[test]
fn test_row_vector_through_gate_product() {
    // <00| (H ⊗ X) is the first row of H ⊗ X: [0, h, 0, h].
    let hx = gates::hadamard().kron(&gates::pauli_x());
    let bra = Matrix::row_vector(vec![1.0, 0.0, 0.0, 0.0]);
    let out = bra.matmul(&hx).unwrap();
    assert_eq!(out.shape(), (1, 4));
    assert_abs_diff_eq!(
        out,
        Matrix::row_vector(vec![0.0, FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2]),
        epsilon = 1e-15
    );
}

#[test]
fn test_bell_state() {
    let layer = gates::hadamard().kron(&gates::identity(2));
    let circuit = gates::cnot().matmul(&layer).unwrap();
    let state = circuit.matmul(&gates::ket("00").unwrap()).unwrap();

    let expected = (&gates::ket("00").unwrap() + &gates::ket("11").unwrap()).scale(FRAC_1_SQRT_2);
    assert_abs_diff_eq!(state, expected, epsilon = 1e-15);

    let total: f64 = state.iter().map(|z| z.norm_sqr()).sum();
    assert_abs_diff_eq!(total, 1.0, epsilon = 1e-12);
    assert_eq!(
        state.to_string(),
        "| 0.71 + 0.00i |\n| 0.00 + 0.00i |\n| 0.00 + 0.00i |\n| 0.71 + 0.00i |"
    );
}

#[test]
fn test_phase_kickback_on_plus_state() {
    // Z |+> = |->
    let plus = gates::hadamard().matmul(&gates::ket0()).unwrap();
    let minus = gates::hadamard().matmul(&gates::ket1()).unwrap();
    assert_abs_diff_eq!(gates::pauli_z().matmul(&plus).unwrap(), minus, epsilon = 1e-15);
}

#[test]
fn test_shape_mismatch_errors() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(3, 2);
    assert!(matches!(a.add_checked(&b), Err(CoreError::DimensionMismatch { op: "add", .. })));
    assert!(matches!(a.sub_checked(&b), Err(CoreError::DimensionMismatch { op: "sub", .. })));
    assert!(matches!(a.matmul(&a), Err(CoreError::DimensionMismatch { op: "matmul", .. })));
    assert_eq!(a.matmul(&b).unwrap().shape(), (2, 2));
}
