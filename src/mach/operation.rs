use super::Val;
use crate::error;
use crate::lang::{Error, Operator};

type Result<T> = std::result::Result<T, Error>;

/// Binary operations. `lhs` is the second value on the stack,
/// `rhs` the top. Every result is saturated.
pub struct Operation {}

impl Operation {
    pub fn apply(op: Operator, lhs: Val, rhs: Val) -> Result<Val> {
        use Operator::*;
        match op {
            Caret => Operation::power(lhs, rhs),
            Modulus => Operation::modulus(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
            Plus => Operation::sum(lhs, rhs),
            Minus => Operation::subtract(lhs, rhs),
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::saturate(lhs.get() + rhs.get()))
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::saturate(lhs.get() - rhs.get()))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::saturate(lhs.get() * rhs.get()))
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        if rhs.is_zero() {
            return Err(error!(DivideByZero));
        }
        Ok(Val::saturate(lhs.get() / rhs.get()))
    }

    /// Truncated remainder, taking the sign of `lhs`.
    pub fn modulus(lhs: Val, rhs: Val) -> Result<Val> {
        if rhs.is_zero() {
            return Err(error!(DivideByZero));
        }
        Ok(Val::saturate(lhs.get() % rhs.get()))
    }

    /// Truncated toward zero; the cast clamps into range.
    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from(lhs.get().powf(rhs.get()) as i32))
    }
}
