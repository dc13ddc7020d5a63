//! Fuzz target: validation of the `POST /add-numbers` body.
//!
//! Arbitrary bytes must either validate into operands or produce one of
//! the client-facing validation errors, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sundial_core::{CoreError, Operands};

fuzz_target!(|data: &[u8]| {
    match Operands::from_json_slice(data).and_then(Operands::sum) {
        Ok(summation) => {
            assert_eq!(summation.num1.checked_add(summation.num2), Some(summation.result));
        }
        Err(CoreError::MissingParameters { names }) => assert!(!names.is_empty()),
        Err(_) => {}
    }
});
