use std::fmt::Display;
use crate::util::format::fmt_mono;

pub const VAR_SYMBOL: char = 'x';

// A single monomial `coeff * x^exp`. 
// Equality is exact on both fields, no tolerance.

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Term { 
    exp: usize,
    coeff: f64
}

impl Term { 
    pub fn new(exp: usize, coeff: f64) -> Self { 
        Self { exp, coeff }
    }

    pub fn exp(&self) -> usize { 
        self.exp
    }

    pub fn coeff(&self) -> f64 { 
        self.coeff
    }

    pub fn is_negative(&self) -> bool { 
        self.coeff < 0.0
    }

    pub fn eval(&self, x: f64) -> f64 { 
        self.coeff * num_traits::pow(x, self.exp)
    }

    pub(crate) fn coeff_mut(&mut self) -> &mut f64 { 
        &mut self.coeff
    }
}

impl From<(usize, f64)> for Term {
    fn from(pair: (usize, f64)) -> Self {
        Self::new(pair.0, pair.1)
    }
}

// Renders the magnitude only, the sign is left to the enclosing polynomial.
impl Display for Term { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = format!("{:.2}", self.coeff.abs());
        let x = fmt_mono(VAR_SYMBOL, self.exp);
        write!(f, "{c}{x}")
    }
}
