//! Session 3: four-function calculator.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("inputs cannot be nil")]
    InvalidInput,
    #[error("division by zero is not allowed")]
    DivideByZero,
    #[error("invalid operator: {0}")]
    InvalidOperator(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Sub => Ok(a - b),
            Operator::Mul => Ok(a * b),
            Operator::Div if b == 0.0 => Err(CalcError::DivideByZero),
            Operator::Div => Ok(a / b),
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            other => Err(CalcError::InvalidOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        };
        f.write_str(symbol)
    }
}

/// Applies `operator` to both operands. A missing operand is reported before
/// the operator is even looked at.
pub fn perform_operation(a: Option<f64>, b: Option<f64>, operator: &str) -> Result<f64, CalcError> {
    let (Some(a), Some(b)) = (a, b) else {
        return Err(CalcError::InvalidInput);
    };
    operator.parse::<Operator>()?.apply(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn basic_operations() {
        assert_eq!(perform_operation(Some(10.0), Some(5.0), "+"), Ok(15.0));
        assert_eq!(perform_operation(Some(10.0), Some(5.0), "-"), Ok(5.0));
        assert_eq!(perform_operation(Some(10.0), Some(5.0), "*"), Ok(50.0));
        assert_eq!(perform_operation(Some(10.0), Some(5.0), "/"), Ok(2.0));
    }

    #[test]
    fn error_cases() {
        assert_eq!(
            perform_operation(Some(10.0), Some(0.0), "/"),
            Err(CalcError::DivideByZero)
        );
        assert_eq!(
            perform_operation(Some(10.0), Some(5.0), "%"),
            Err(CalcError::InvalidOperator("%".into()))
        );
        assert_eq!(perform_operation(None, Some(5.0), "+"), Err(CalcError::InvalidInput));
        assert_eq!(perform_operation(Some(1.0), None, "%"), Err(CalcError::InvalidInput));
    }

    #[test]
    fn error_messages() {
        assert_eq!(CalcError::InvalidOperator("%".into()).to_string(), "invalid operator: %");
        assert_eq!(
            CalcError::DivideByZero.to_string(),
            "division by zero is not allowed"
        );
    }

    #[test]
    fn operator_display_matches_parse() {
        for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
            assert_eq!(op.to_string().parse::<Operator>(), Ok(op));
        }
    }

    proptest! {
        #[test]
        fn addition_commutes(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            prop_assert_eq!(
                perform_operation(Some(a), Some(b), "+"),
                perform_operation(Some(b), Some(a), "+")
            );
        }

        #[test]
        fn division_by_nonzero_succeeds(a in -1e6f64..1e6, b in 1e-3f64..1e6) {
            prop_assert!(perform_operation(Some(a), Some(b), "/").is_ok());
        }
    }
}
