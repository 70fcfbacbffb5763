/*!
a complex number abstraction

Type `Cx` is an immutable value: it can use the `+`, `-`, `*`, `/`, and
unary `-` operators (with another `Cx` or, for `*` and `/`, with an `f64`
scalar), and every one of them returns a new value. There are no `*Assign`
operators and no setters.

Division goes through the reciprocal, _1/z = z̄ / |z|²_, and is not guarded:
dividing by zero gives NaN or infinite components, which then propagate
through whatever arithmetic follows. Use `checked_recip()` or
`checked_div()` where that should be an error instead.
*/

use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};

use ::serde_derive::{Deserialize, Serialize};

use crate::err::{Error, Result};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Cx {
    re: f64,
    im: f64,
}

impl Cx {
    pub const ZERO: Cx = Cx { re: 0.0, im: 0.0 };
    pub const ONE: Cx = Cx { re: 1.0, im: 0.0 };
    pub const I: Cx = Cx { re: 0.0, im: 1.0 };

    pub const fn rect(x: f64, y: f64) -> Cx {
        Cx { re: x, im: y }
    }

    pub fn re(&self) -> f64 {
        self.re
    }

    pub fn im(&self) -> f64 {
        self.im
    }

    pub fn sqmod(&self) -> f64 {
        (self.re * self.re) + (self.im * self.im)
    }

    /** Return _|z|_. This is zero only for the zero value. */
    pub fn modulus(&self) -> f64 {
        self.sqmod().sqrt()
    }

    pub fn conj(&self) -> Cx {
        Cx {
            re: self.re,
            im: -self.im,
        }
    }

    /**
    Return _1/z_, computed as _z̄ / |z|²_.

    The zero value has no reciprocal; its components come back non-finite.
    */
    pub fn recip(&self) -> Cx {
        self.conj() / self.sqmod()
    }

    /** Like `recip()`, but fails when this value has zero magnitude. */
    pub fn checked_recip(&self) -> Result<Cx> {
        if self.sqmod() == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self.recip())
    }

    /** Like `/`, but fails when `divisor` has zero magnitude. */
    pub fn checked_div(&self, divisor: Cx) -> Result<Cx> {
        Ok(*self * divisor.checked_recip()?)
    }

    /** The integer multiple _n·z_. */
    pub fn scale_int(&self, n: i32) -> Cx {
        *self * f64::from(n)
    }

    /**
    True if each component of `other` lies within `epsilon` of the
    corresponding component of this value.

    This is a per-component absolute test, not a distance; for a
    distance-based check compare `dist()` against a threshold.
    */
    pub fn approx_eq(&self, other: &Cx, epsilon: f64) -> bool {
        (self.re - other.re).abs() <= epsilon
            && (self.im - other.im).abs() <= epsilon
    }

    /** Euclidean distance _|z - w|_. */
    pub fn dist(&self, other: &Cx) -> f64 {
        (*self - *other).modulus()
    }

    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /** The bitwise identity of this value, usable as a set or map key. */
    pub fn key(&self) -> CxKey {
        CxKey {
            re: canonical_bits(self.re),
            im: canonical_bits(self.im),
        }
    }
}

/**
A hashable stand-in for a `Cx`.

`Cx` compares with IEEE semantics and so can be neither `Eq` nor `Hash`.
A `CxKey` compares components bit for bit instead: `0.0` and `-0.0` are
different keys, and every NaN is the same key.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CxKey {
    re: u64,
    im: u64,
}

// All NaN payloads collapse to one.
fn canonical_bits(x: f64) -> u64 {
    if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}

impl From<Cx> for CxKey {
    fn from(z: Cx) -> CxKey {
        z.key()
    }
}

impl From<CxKey> for Cx {
    fn from(k: CxKey) -> Cx {
        Cx {
            re: f64::from_bits(k.re),
            im: f64::from_bits(k.im),
        }
    }
}

impl Add for Cx {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl Sub for Cx {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self + (-other)
    }
}

impl Mul for Cx {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Self {
            re: (self.re * other.re) - (self.im * other.im),
            im: (self.re * other.im) + (self.im * other.re),
        }
    }
}

impl Mul<f64> for Cx {
    type Output = Self;

    fn mul(self, factor: f64) -> Self::Output {
        Self {
            re: self.re * factor,
            im: self.im * factor,
        }
    }
}

impl Mul<Cx> for f64 {
    type Output = Cx;

    fn mul(self, z: Cx) -> Self::Output {
        z * self
    }
}

impl Div for Cx {
    type Output = Self;

    fn div(self, other: Self) -> Self::Output {
        self * other.recip()
    }
}

impl Div<f64> for Cx {
    type Output = Self;

    fn div(self, divisor: f64) -> Self::Output {
        Self {
            re: self.re / divisor,
            im: self.im / divisor,
        }
    }
}

impl Neg for Cx {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Cx {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl Sum for Cx {
    fn sum<I: Iterator<Item = Cx>>(iter: I) -> Cx {
        iter.fold(Cx::ZERO, |tot, z| tot + z)
    }
}

impl<'a> Sum<&'a Cx> for Cx {
    fn sum<I: Iterator<Item = &'a Cx>>(iter: I) -> Cx {
        iter.copied().sum()
    }
}

impl Product for Cx {
    fn product<I: Iterator<Item = Cx>>(iter: I) -> Cx {
        iter.fold(Cx::ONE, |tot, z| tot * z)
    }
}

impl<'a> Product<&'a Cx> for Cx {
    fn product<I: Iterator<Item = &'a Cx>>(iter: I) -> Cx {
        iter.copied().product()
    }
}

// `{:?}` on an f64 always shows a decimal point or exponent, so `ZERO`
// reads "(0.0, 0.0)".
impl fmt::Display for Cx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.re, self.im)
    }
}

impl From<[f64; 2]> for Cx {
    fn from(a: [f64; 2]) -> Cx {
        Cx { re: a[0], im: a[1] }
    }
}

impl From<Cx> for [f64; 2] {
    fn from(z: Cx) -> [f64; 2] {
        [z.re, z.im]
    }
}

impl From<(f64, f64)> for Cx {
    fn from((re, im): (f64, f64)) -> Cx {
        Cx { re, im }
    }
}

impl From<f64> for Cx {
    fn from(re: f64) -> Cx {
        Cx { re, im: 0.0 }
    }
}
