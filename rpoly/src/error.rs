use derive_more::Display;
use crate::TOLERANCE;

#[derive(Clone, Copy, PartialEq, Debug, Display)]
pub enum PolyError { 
    #[display("exponent cannot be negative: {_0}")]
    InvalidExponent(i64),

    #[display("coefficient {_0} is below tolerance {}", TOLERANCE)]
    NegligibleCoefficient(f64),

    #[display("coefficient must be finite: {_0}")]
    NonFiniteCoefficient(f64)
}

impl std::error::Error for PolyError {}
