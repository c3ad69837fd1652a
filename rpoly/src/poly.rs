use std::fmt::{Display, Debug};
use std::ops::{Mul, MulAssign, Neg};
use delegate::delegate;
use auto_impl_ops::auto_ops;
use log::trace;

use crate::{PolyError, Term};
use crate::util::format::lc;

// Coefficients with magnitude below this are treated as zero.
pub const TOLERANCE: f64 = 1e-8;

// A polynomial is a list of terms, sorted by strictly increasing exponent,
// each having a coefficient of magnitude at least `TOLERANCE`.
// The only exception is `multiply`, which scales without pruning.
// Equality compares whole term lists, so extra trailing terms make
// two polynomials unequal.

#[derive(Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Term>", into = "Vec<Term>"))]
pub struct Polynomial {
    terms: Vec<Term>
}

impl Polynomial {
    pub fn new() -> Self {
        Self { terms: vec![] }
    }

    pub fn from_terms<I>(iter: I) -> Result<Self, PolyError>
    where I: IntoIterator<Item = (i64, f64)> {
        let mut res = Self::new();
        for (e, c) in iter {
            res.insert_term(e, c)?;
        }
        Ok(res)
    }

    delegate! {
        to self.terms {
            #[call(len)] pub fn nterms(&self) -> usize;
            #[call(is_empty)] pub fn is_zero(&self) -> bool;
        }
    }

    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    pub fn lead_term(&self) -> Option<&Term> {
        self.terms.last()
    }

    pub fn degree(&self) -> Option<usize> {
        self.lead_term().map(Term::exp)
    }

    pub fn coeff(&self, exp: usize) -> f64 {
        match self.position(exp) {
            Ok(i) => self.terms[i].coeff(),
            Err(_) => 0.0
        }
    }

    /// Inserts `coeff * x^exp`, merging it into an existing term of the
    /// same exponent. A merge whose result falls below `TOLERANCE` removes
    /// the term.
    ///
    /// Fails if `exp` is negative, `coeff` is not finite, 
    /// or `|coeff| < TOLERANCE`.
    pub fn insert_term(&mut self, exp: i64, coeff: f64) -> Result<(), PolyError> {
        let exp = usize::try_from(exp).map_err(|_| PolyError::InvalidExponent(exp))?;
        self.insert(exp, coeff)
    }

    fn insert(&mut self, exp: usize, coeff: f64) -> Result<(), PolyError> {
        if !coeff.is_finite() {
            return Err(PolyError::NonFiniteCoefficient(coeff))
        }
        if coeff.abs() < TOLERANCE {
            return Err(PolyError::NegligibleCoefficient(coeff))
        }
        self.merge(exp, coeff);
        Ok(())
    }

    fn merge(&mut self, exp: usize, coeff: f64) {
        match self.position(exp) {
            Ok(i) => {
                let c = self.terms[i].coeff_mut();
                *c += coeff;

                if c.abs() < TOLERANCE {
                    trace!("x^{exp} cancelled, residue: {c}");
                    self.terms.remove(i);
                }
            },
            Err(i) => {
                self.terms.insert(i, Term::new(exp, coeff))
            }
        }
    }

    // index of the first term with exponent >= `exp`.
    fn position(&self, exp: usize) -> Result<usize, usize> {
        self.terms.binary_search_by_key(&exp, Term::exp)
    }

    // Only the terms of `other` go through the checked insertion. Terms of
    // `self` left negligible by `multiply` are copied as they are, so
    // `p.add(&q)` and `q.add(&p)` may differ in whether they fail.
    pub fn add(&self, other: &Self) -> Result<Self, PolyError> {
        let mut res = self.clone();
        for t in other.terms() {
            res.insert(t.exp(), t.coeff())?;
        }
        Ok(res)
    }

    pub fn sub(&self, other: &Self) -> Result<Self, PolyError> {
        self.add(&-other)
    }

    /// Scales every coefficient by `r`.
    ///
    /// Terms that become negligible are kept as they are.
    pub fn multiply(&self, r: f64) -> Self {
        self * &r
    }

    pub fn differentiate(&self) -> Self {
        let mut res = Self::new();
        for t in self.terms().filter(|t| t.exp() > 0) {
            let (e, c) = (t.exp() - 1, t.coeff() * t.exp() as f64);
            if c.abs() < TOLERANCE {
                trace!("dropped d/dx of x^{}, coeff: {c}", t.exp());
                continue
            }
            res.merge(e, c);
        }
        res
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms().map(|t| t.eval(x)).sum()
    }
}

impl TryFrom<Vec<Term>> for Polynomial {
    type Error = PolyError;

    fn try_from(terms: Vec<Term>) -> Result<Self, Self::Error> {
        let mut res = Self::new();
        for t in terms {
            res.insert(t.exp(), t.coeff())?;
        }
        Ok(res)
    }
}

impl From<Polynomial> for Vec<Term> {
    fn from(p: Polynomial) -> Self {
        p.terms
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = lc(self.terms().map(|t| (t.is_negative(), t)));
        f.write_str(&s)
    }
}

impl Debug for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[auto_ops]
impl MulAssign<&f64> for Polynomial {
    fn mul_assign(&mut self, r: &f64) {
        for t in self.terms.iter_mut() {
            *t.coeff_mut() *= r
        }
    }
}

impl Neg for Polynomial {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self * -1.0
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Self::Output {
        self.multiply(-1.0)
    }
}
