//! End-to-end token sequences through the script driver.
//!
//! Each test spells a button sequence the way a user would press it and
//! checks the display that a presentation layer would render.

#![allow(clippy::unwrap_used)]

use tenkey::prelude::*;

fn run(labels: &[&str]) -> String {
    let mut driver = KeypadDriver::new();
    driver.run(labels.iter().copied()).unwrap()
}

// ===== Numeral entry =====

#[test]
fn test_first_digit_replaces_the_initial_zero() {
    assert_eq!(run(&["7"]), "7");
    assert_eq!(run(&["0", "7"]), "7");
}

#[test]
fn test_subsequent_digits_append() {
    assert_eq!(run(&["1", "2", "3", "4"]), "1234");
}

#[test]
fn test_decimal_numeral_entry() {
    assert_eq!(run(&["3", ".", "1", "4"]), "3.14");
}

#[test]
fn test_permissive_decimal_entry_fails_only_at_evaluation() {
    // "1.." is accepted as display text; the parse failure surfaces when
    // an operator needs the numeral.
    assert_eq!(run(&["1", ".", "."]), "1..");
    assert_eq!(run(&["1", ".", ".", "+"]), "Error");
    assert_eq!(run(&["1", ".", ".", "="]), "Error");
}

// ===== Arithmetic =====

#[test]
fn test_basic_addition() {
    assert_eq!(run(&["7", "+", "3", "="]), "10");
}

#[test]
fn test_basic_subtraction_goes_negative() {
    assert_eq!(run(&["3", "-", "5", "="]), "-2");
}

#[test]
fn test_chained_operators_evaluate_left_to_right() {
    assert_eq!(run(&["5", "+", "2", "+", "1", "="]), "8");
    // No precedence: (2 + 3) * 4, not 2 + 12.
    assert_eq!(run(&["2", "+", "3", "*", "4", "="]), "20");
}

#[test]
fn test_division_by_zero_shows_error() {
    assert_eq!(run(&["8", "/", "0", "="]), "Error");
}

#[test]
fn test_division_result_is_plain_decimal_not_exponential() {
    let display = run(&["1", "/", "3", "="]);
    assert_eq!(display, "0.3333333333");
    assert!(!display.contains('e') && !display.contains('E'));
}

#[test]
fn test_result_feeds_the_next_calculation() {
    assert_eq!(run(&["6", "*", "7", "=", "+", "8", "="]), "50");
}

// ===== Scientific functions =====

#[test]
fn test_sin_of_zero_is_zero() {
    assert_eq!(run(&["0", "sin"]), "0");
}

#[test]
fn test_ln_of_zero_is_a_domain_error() {
    assert_eq!(run(&["0", "ln"]), "Error");
}

#[test]
fn test_ln_of_one_is_zero() {
    assert_eq!(run(&["1", "ln"]), "0");
}

#[test]
fn test_square_and_exp() {
    assert_eq!(run(&["9", "square"]), "81");
    assert_eq!(run(&["0", "exp"]), "1");
}

#[test]
fn test_function_result_flows_into_pending_operation() {
    // square leaves the pending "+" in place and overwrites the operand,
    // so the chain closes over the function result.
    assert_eq!(run(&["2", "+", "4", "square", "="]), "32");
}

// ===== Percent and sign =====

#[test]
fn test_percent_divides_by_one_hundred() {
    assert_eq!(run(&["5", "0", "%"]), "0.5");
    assert_eq!(run(&["7", "%"]), "0.07");
}

#[test]
fn test_toggle_sign_round_trips() {
    assert_eq!(run(&["5", "+/-"]), "-5");
    assert_eq!(run(&["5", "+/-", "+/-"]), "5");
    assert_eq!(run(&["1", ".", "2", "0", "+/-", "+/-"]), "1.20");
}

#[test]
fn test_toggle_sign_on_zero_changes_nothing() {
    assert_eq!(run(&["0", "+/-"]), "0");
}

// ===== Reset and recovery =====

#[test]
fn test_clear_returns_to_zero_from_anywhere() {
    assert_eq!(run(&["1", "2", "3", "AC"]), "0");
    assert_eq!(run(&["7", "+", "3", "AC"]), "0");
    assert_eq!(run(&["8", "/", "0", "=", "AC"]), "0");
}

#[test]
fn test_error_recovery_consumes_the_next_token() {
    // The first press after an error resets the display; it takes a second
    // press to start a new numeral.
    assert_eq!(run(&["8", "/", "0", "=", "5"]), "0");
    assert_eq!(run(&["8", "/", "0", "=", "5", "5"]), "5");
}

#[test]
fn test_state_is_clean_after_error_recovery() {
    // Operand and operator from before the error must not leak through.
    assert_eq!(run(&["8", "/", "0", "=", "9", "9", "="]), "9");
}
