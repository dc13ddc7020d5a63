//! Core logic for the Sundial API.
//!
//! Pure, I/O-free pieces shared by the gateway: operand validation for the
//! add endpoints, fixed-width and arbitrary-length integer addition, and the
//! random number draw.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod arith;
pub mod error;
pub mod operands;
pub mod random;

pub use arith::{add, add_decimal, is_decimal};
pub use error::CoreError;
pub use operands::{Operands, Summation};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameters_lists_names_in_order() {
        let err = CoreError::MissingParameters { names: vec!["num1", "num2"] };
        assert_eq!(err.to_string(), "Missing required parameters: num1, num2");
    }

    #[test]
    fn not_decimal_display_includes_value() {
        let err = CoreError::NotDecimal { value: "12a".to_owned() };
        assert!(err.to_string().contains("12a"), "Display must include the value");
    }

    #[test]
    fn json_body_flows_through_to_sum() {
        let summation = match Operands::from_json_slice(br#"{"num1": "10", "num2": 32}"#)
            .and_then(Operands::sum)
        {
            Ok(s) => s,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(summation.result, 42);
    }
}
