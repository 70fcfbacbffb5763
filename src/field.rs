/*!
Numeric field abstraction.

`Field` is the set of operations a generic root finder needs from its
scalars: zero, one, addition, multiplication, negation, and reciprocals.
Both `Cx` and `f64` implement it, so polynomial code can be written once
and checked against real arithmetic.

`Cx` also implements `num_traits::{Zero, One, Inv}`, for code written
against that crate instead.
*/

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{Inv, One, Zero};

use crate::cx::Cx;

pub trait Field:
    Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn recip(self) -> Self;

    /** The integer multiple _n·self_. */
    fn scale_int(self, n: i32) -> Self;

    /** `self` raised to the `n`th power by repeated squaring. */
    fn powu(self, mut n: u32) -> Self {
        let mut acc = Self::one();
        let mut base = self;
        while n > 0 {
            if n & 1 == 1 {
                acc = acc * base;
            }
            n >>= 1;
            if n > 0 {
                base = base * base;
            }
        }
        acc
    }
}

impl Field for Cx {
    fn zero() -> Self {
        Cx::ZERO
    }
    fn one() -> Self {
        Cx::ONE
    }
    fn recip(self) -> Self {
        Cx::recip(&self)
    }
    fn scale_int(self, n: i32) -> Self {
        Cx::scale_int(&self, n)
    }
}

impl Field for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn recip(self) -> Self {
        f64::recip(self)
    }
    fn scale_int(self, n: i32) -> Self {
        self * f64::from(n)
    }
}

/**
Evaluate the polynomial

```text
coeffs[0] + coeffs[1]*z + coeffs[2]*z^2 + ...
```

at `z` using Horner's rule. An empty slice is the zero polynomial.
*/
pub fn horner<F: Field>(coeffs: &[F], z: F) -> F {
    coeffs
        .iter()
        .rev()
        .fold(F::zero(), |acc, &c| acc * z + c)
}

/**
Evaluate the polynomial given by `coeffs` (lowest degree first) and its
first derivative at `z` in a single pass. Returns `(p(z), p'(z))`.

This is the pair a Newton step _z - p(z)/p'(z)_ needs.
*/
pub fn horner_with_slope<F: Field>(coeffs: &[F], z: F) -> (F, F) {
    let mut p = F::zero();
    let mut dp = F::zero();
    for &c in coeffs.iter().rev() {
        dp = dp * z + p;
        p = p * z + c;
    }
    (p, dp)
}

impl Zero for Cx {
    fn zero() -> Self {
        Cx::ZERO
    }
    fn is_zero(&self) -> bool {
        *self == Cx::ZERO
    }
}

impl One for Cx {
    fn one() -> Self {
        Cx::ONE
    }
}

impl Inv for Cx {
    type Output = Cx;

    fn inv(self) -> Cx {
        Cx::recip(&self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const EPS: f64 = 1.0e-9;

    // z^3 - 1, lowest degree first
    fn cube_minus_one() -> Vec<Cx> {
        vec![-Cx::ONE, Cx::ZERO, Cx::ZERO, Cx::ONE]
    }

    #[test]
    fn powers() {
        let z = Cx::rect(0.5, -1.25);
        assert_eq!(Field::powu(z, 0), Cx::ONE);
        assert_eq!(Field::powu(z, 1), z);
        assert!(Field::powu(z, 5).approx_eq(&(z * z * z * z * z), EPS));
        assert_eq!(Field::powu(Cx::I, 2), -Cx::ONE);
        assert_eq!(Field::powu(2.0f64, 10), 1024.0);
    }

    #[test]
    fn cube_roots_of_unity() {
        let p = cube_minus_one();
        let s = 3.0f64.sqrt() / 2.0;
        let roots = [Cx::ONE, Cx::rect(-0.5, s), Cx::rect(-0.5, -s)];
        for r in roots.iter() {
            assert!(horner(&p, *r).approx_eq(&Cx::ZERO, EPS));
        }
        assert!(horner(&p, Cx::rect(2.0, 0.0)).approx_eq(&Cx::rect(7.0, 0.0), EPS));
    }

    #[test]
    fn value_and_slope() {
        let p = cube_minus_one();
        let z = Cx::rect(0.3, 0.9);
        let (v, dv) = horner_with_slope(&p, z);
        assert!(v.approx_eq(&(z * z * z - Cx::ONE), EPS));
        assert!(dv.approx_eq(&(z * z).scale_int(3), EPS));
        assert_eq!(horner_with_slope::<Cx>(&[], z), (Cx::ZERO, Cx::ZERO));

        // 2 - 3x + x^2 at x = 4: value 6, slope 5
        let (v, dv) = horner_with_slope(&[2.0, -3.0, 1.0], 4.0f64);
        assert_eq!((v, dv), (6.0, 5.0));
    }

    #[test]
    fn newton_step_moves_toward_root() {
        let p = cube_minus_one();
        let mut z = Cx::rect(1.3, 0.2);
        for _ in 0..20 {
            let (v, dv) = horner_with_slope(&p, z);
            z = z - v / dv;
        }
        assert!(z.approx_eq(&Cx::ONE, 0.0001));
    }

    #[test]
    fn num_traits_agree() {
        let z = Cx::rect(-2.0, -7.0);
        assert!(<Cx as Zero>::zero().is_zero());
        assert!(!z.is_zero());
        assert_eq!(<Cx as One>::one(), Cx::ONE);
        assert_eq!(z.inv(), z.recip());
        assert_eq!(<Cx as Field>::recip(z), z.recip());
    }
}
