#![allow(non_snake_case)]
//! Scalar-vector primitives shared by the proof layers.

use curve25519_dalek::scalar::Scalar;

/// Provides an iterator over the powers of a `Scalar`.
///
/// This struct is created by the `exp_iter` function.
pub struct ScalarExp {
    x: Scalar,
    next_exp_x: Scalar,
}

impl Iterator for ScalarExp {
    type Item = Scalar;

    fn next(&mut self) -> Option<Scalar> {
        let exp_x = self.next_exp_x;
        self.next_exp_x *= self.x;
        Some(exp_x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Return an iterator of the powers of `x`, starting from `x^0 = 1`.
pub fn exp_iter(x: Scalar) -> ScalarExp {
    let next_exp_x = Scalar::one();
    ScalarExp { x, next_exp_x }
}

/// Computes the sum of all the powers of `x` up to (and excluding) `x^n`.
pub fn sum_of_powers(x: &Scalar, n: usize) -> Scalar {
    exp_iter(*x).take(n).fold(Scalar::zero(), |acc, x_i| acc + x_i)
}

/// Computes the inner product of two equal-length vectors of scalars.
///
/// Panics if the lengths differ; the proof layers only call this on vectors
/// whose lengths they have already constrained to match.
pub fn inner_product(a: &[Scalar], b: &[Scalar]) -> Scalar {
    if a.len() != b.len() {
        panic!("inner_product(a,b): lengths of vectors do not match");
    }
    let mut out = Scalar::zero();
    for i in 0..a.len() {
        out += a[i] * b[i];
    }
    out
}

pub fn add_vec(a: &[Scalar], b: &[Scalar]) -> Vec<Scalar> {
    if a.len() != b.len() {
        panic!("add_vec(a,b): lengths of vectors do not match");
    }
    a.iter().zip(b.iter()).map(|(a_i, b_i)| a_i + b_i).collect()
}

/// Represents a degree-1 vector polynomial \\(\mathbf{a} + \mathbf{b} \cdot x\\).
pub struct VecPoly1(pub Vec<Scalar>, pub Vec<Scalar>);

/// Represents a degree-2 scalar polynomial \\(a + b \cdot x + c \cdot x^2\\).
pub struct Poly2(pub Scalar, pub Scalar, pub Scalar);

impl VecPoly1 {
    pub fn zero(n: usize) -> Self {
        VecPoly1(vec![Scalar::zero(); n], vec![Scalar::zero(); n])
    }

    /// Compute the scalar polynomial \\(t(x) = \langle l(x), r(x) \rangle\\).
    ///
    /// Uses Karatsuba's method: the linear coefficient is recovered from the
    /// product of the coefficient sums, saving one vector inner product.
    pub fn inner_product(&self, rhs: &VecPoly1) -> Poly2 {
        let l = self;
        let r = rhs;

        let t0 = inner_product(&l.0, &r.0);
        let t2 = inner_product(&l.1, &r.1);

        let l0_plus_l1 = add_vec(&l.0, &l.1);
        let r0_plus_r1 = add_vec(&r.0, &r.1);

        let t1 = inner_product(&l0_plus_l1, &r0_plus_r1) - t0 - t2;

        Poly2(t0, t1, t2)
    }

    pub fn eval(&self, x: Scalar) -> Vec<Scalar> {
        let n = self.0.len();
        let mut out = vec![Scalar::zero(); n];
        for i in 0..n {
            out[i] = self.0[i] + self.1[i] * x;
        }
        out
    }
}

impl Poly2 {
    pub fn eval(&self, x: Scalar) -> Scalar {
        self.0 + x * (self.1 + x * self.2)
    }
}

/// Maps a signed 64-bit integer into the scalar field, with negative values
/// reduced modulo the group order.
pub fn scalar_from_i64(v: i64) -> Scalar {
    if v >= 0 {
        Scalar::from(v as u64)
    } else {
        -Scalar::from(v.unsigned_abs())
    }
}

/// Reads exactly 32 bytes from the head of `data`.
///
/// Panics if `data` holds fewer than 32 bytes; callers bounds-check first.
pub fn read32(data: &[u8]) -> [u8; 32] {
    let mut buf32 = [0u8; 32];
    buf32[..].copy_from_slice(&data[..32]);
    buf32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exp_iter_starts_at_one() {
        let exp_2: Vec<_> = exp_iter(Scalar::from(2u64)).take(4).collect();
        assert_eq!(exp_2[0], Scalar::one());
        assert_eq!(exp_2[1], Scalar::from(2u64));
        assert_eq!(exp_2[2], Scalar::from(4u64));
        assert_eq!(exp_2[3], Scalar::from(8u64));
    }

    #[test]
    fn sum_of_powers_of_two() {
        // 1 + 2 + 4 + ... + 2^{n-1} = 2^n - 1
        assert_eq!(
            sum_of_powers(&Scalar::from(2u64), 7),
            Scalar::from(127u64)
        );
        assert_eq!(sum_of_powers(&Scalar::from(2u64), 0), Scalar::zero());
    }

    #[test]
    fn inner_product_small() {
        let a = vec![
            Scalar::from(1u64),
            Scalar::from(2u64),
            Scalar::from(3u64),
            Scalar::from(4u64),
        ];
        let b = vec![
            Scalar::from(2u64),
            Scalar::from(3u64),
            Scalar::from(4u64),
            Scalar::from(5u64),
        ];
        assert_eq!(Scalar::from(40u64), inner_product(&a, &b));
    }

    #[test]
    fn vec_poly1_inner_product_matches_eval() {
        let mut rng = rand::thread_rng();

        let n = 16;
        let l = VecPoly1(
            (0..n).map(|_| Scalar::random(&mut rng)).collect(),
            (0..n).map(|_| Scalar::random(&mut rng)).collect(),
        );
        let r = VecPoly1(
            (0..n).map(|_| Scalar::random(&mut rng)).collect(),
            (0..n).map(|_| Scalar::random(&mut rng)).collect(),
        );

        let t = l.inner_product(&r);

        // t(x) must agree with <l(x), r(x)> at a random point.
        let x = Scalar::random(&mut rng);
        assert_eq!(t.eval(x), inner_product(&l.eval(x), &r.eval(x)));
    }

    #[test]
    fn scalar_from_i64_negates() {
        assert_eq!(scalar_from_i64(42), Scalar::from(42u64));
        assert_eq!(scalar_from_i64(-1) + Scalar::one(), Scalar::zero());
        assert_eq!(
            scalar_from_i64(i64::MIN),
            -Scalar::from(1u64 << 63)
        );
    }
}
