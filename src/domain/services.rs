//! Arithmetic services for the terminal calculator.
//!
//! This module provides the evaluation and result formatting that back
//! the calculator state machine: applying an operator to two operands
//! and turning the floating point result into display text.

use super::models::Operator;

/// Evaluates binary operations and formats their results for display.
///
/// All arithmetic runs on `f64`. Failures are encoded in the value
/// itself rather than a `Result`: division by zero produces NaN, and
/// the formatting step collapses every non-finite value to the display
/// text `Error`. Whole-number results are shown without a fractional
/// part so `4 × 5` reads as `20` rather than `20.0`.
///
/// # Examples
///
/// ```
/// use tcalc::domain::{ArithmeticEngine, Operator};
///
/// let sum = ArithmeticEngine::evaluate(Operator::Add, 2.0, 3.0);
/// assert_eq!(ArithmeticEngine::format_result(sum), "5");
///
/// let broken = ArithmeticEngine::evaluate(Operator::Divide, 1.0, 0.0);
/// assert_eq!(ArithmeticEngine::format_result(broken), "Error");
/// ```
pub struct ArithmeticEngine;

impl ArithmeticEngine {
    /// Applies `op` to the operand pair.
    ///
    /// Division by zero (including `0 ÷ 0`) yields NaN so that the caller
    /// formats it as `Error` instead of the `inf` that raw `f64` division
    /// would produce.
    pub fn evaluate(op: Operator, lhs: f64, rhs: f64) -> f64 {
        match op {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    f64::NAN
                } else {
                    lhs / rhs
                }
            }
        }
    }

    /// Formats a computation result for the display.
    ///
    /// Non-finite values become `Error`. Values that are exactly whole
    /// numbers are printed as integers; everything else uses the default
    /// shortest `f64` form.
    pub fn format_result(value: f64) -> String {
        if !value.is_finite() {
            return "Error".to_string();
        }
        let as_int = value as i64;
        if value == as_int as f64 {
            as_int.to_string()
        } else {
            value.to_string()
        }
    }

    /// Formats a value by trimming trailing zeros from its decimal form,
    /// used for percent results (`0.50` style inputs come out as `0.5`,
    /// whole values lose the point entirely).
    pub fn format_trimmed(value: f64) -> String {
        if !value.is_finite() {
            return "Error".to_string();
        }
        let text = value.to_string();
        if text.contains('.') {
            text.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            text
        }
    }
}
