use f2::matrix::{arbitrary::MatrixArbParams, Matrix, ProductOrder};
use proptest::prelude::*;

/// A pair of composable matrices `(a, b)`, so that `a * b` is defined.
fn arb_composable_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
    (0..=20usize, 0..=20usize, 0..=20usize).prop_flat_map(|(rows, middle, columns)| {
        let a = Matrix::arbitrary_with(MatrixArbParams {
            rows: Just(rows).boxed(),
            columns: Just(middle).boxed(),
        });
        let b = Matrix::arbitrary_with(MatrixArbParams {
            rows: Just(middle).boxed(),
            columns: Just(columns).boxed(),
        });
        (a, b)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    /// The rank of a product is at most the rank of each factor.
    #[test]
    fn rank_of_product((a, b) in arb_composable_pair()) {
        let product = Matrix::product([&a, &b], ProductOrder::Forward).unwrap();
        let rank = product.smith_normal_form().rank;
        prop_assert!(rank <= a.clone().smith_normal_form().rank);
        prop_assert!(rank <= b.clone().smith_normal_form().rank);
    }

    /// Transposing does not change the rank, and the factorization of the transpose is the
    /// transpose of a factorization.
    #[test]
    fn rank_of_transpose(m in any::<Matrix>()) {
        let snf = m.clone().smith_normal_form();
        let transposed = m.transpose().smith_normal_form();
        prop_assert_eq!(snf.rank, transposed.rank);

        let product = Matrix::product(
            [&snf.right.transpose(), &m.transpose(), &snf.left.transpose()],
            ProductOrder::Forward,
        )
        .unwrap();
        prop_assert_eq!(product, snf.diagonal.transpose());
    }

    /// When `a * b == 0`, the image of `b` lies in the kernel of `a`, so the ranks add up to at
    /// most the number of columns of `a`.
    #[test]
    fn chain_condition((a, b) in arb_composable_pair()) {
        if (&a * &b).is_zero() {
            let kernel = a.clone().smith_normal_form().nullity();
            let image = b.smith_normal_form().rank;
            prop_assert!(image <= kernel);
        }
    }
}

#[test]
fn kernel_of_boundary_of_square() {
    // Four edges of a square: (1, 2), (1, 4), (2, 3), (3, 4)
    let boundary = Matrix::from_vec(&[
        vec![1, 1, 0, 0],
        vec![1, 0, 1, 0],
        vec![0, 0, 1, 1],
        vec![0, 1, 0, 1],
    ]);
    let snf = boundary.clone().smith_normal_form();
    assert_eq!(snf.rank, 3);
    assert_eq!(snf.nullity(), 1);
    assert_eq!(snf.kernel().transpose().to_vec(), vec![vec![1, 1, 1, 1]]);
    assert_eq!(snf.cokernel().columns(), 1);
}
