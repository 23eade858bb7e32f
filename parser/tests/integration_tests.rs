use std::cell::Cell;

use argsift::{Callback, Parser};

// ---------------------------------------------------------------------------
// Entry points and canonical forms
// ---------------------------------------------------------------------------

#[test]
fn test_token_and_text_entry_points_agree() {
    let run = |as_tokens: bool| {
        let mut verbose = false;
        let mut parser = Parser::new();
        parser.flag("verbose|v", &mut verbose);
        let residual = if as_tokens {
            parser.parse(["one", "--verbose", "two"])
        } else {
            parser.parse_str("  one \t --verbose   two ")
        };
        drop(parser);
        (verbose, residual)
    };
    assert_eq!(run(true), run(false));
    assert_eq!(run(true), (true, "one two".into()));
}

#[test]
fn test_separator_forms_all_equivalent() {
    for input in ["--test 4", "--test=4", "--test: 4", "-c 4"] {
        let mut value = 0i32;
        let mut parser = Parser::new();
        parser.option("test|c", &mut value);
        let residual = parser.parse_str(input);
        drop(parser);
        assert_eq!(value, 4, "for input {input:?}");
        assert_eq!(residual, "", "for input {input:?}");
    }
}

#[test]
fn test_residual_keeps_one_space_at_junctions() {
    let mut value = 0i32;
    let mut parser = Parser::new();
    parser.option("test|c", &mut value);
    let residual = parser.parse_str("text text --test 4 more text");
    drop(parser);
    assert_eq!(value, 4);
    assert_eq!(residual, "text text more text");
}

#[test]
fn test_boundary_precision() {
    let mut hit = false;
    let mut parser = Parser::new();
    parser.flag("test", &mut hit);
    let residual = parser.parse_str("text text --testtext text");
    drop(parser);
    assert!(!hit, "--test must not match inside --testtext");
    assert_eq!(residual, "text text --testtext text");
}

// ---------------------------------------------------------------------------
// Flags: presence, truthiness, negation, bundles
// ---------------------------------------------------------------------------

#[test]
fn test_flag_scenario_end_to_end() {
    let (mut alpha, mut beta, mut gamma) = (false, false, false);
    let mut parser = Parser::new();
    parser
        .flag("alpha|a", &mut alpha)
        .flag("beta|b", &mut beta)
        .flag("gamma|g", &mut gamma);
    let residual = parser.parse_str("--alpha --gamma");
    drop(parser);

    assert!(alpha);
    assert!(!beta);
    assert!(gamma);
    assert!(!residual.contains("alpha") && !residual.contains("gamma"));
}

#[test]
fn test_truthiness_table() {
    let cases = [
        ("--nflag=14Miles", true),
        ("--nflag=0deaths", false),
        ("--tflag=text", true),
        ("--ntflag=", false),
        ("--nflag=YES", true),
        ("--nflag=False", false),
    ];
    for (input, expected) in cases {
        let name = input.trim_start_matches('-').split('=').next().unwrap();
        let mut flag = !expected;
        let mut parser = Parser::new();
        parser.flag(name, &mut flag);
        parser.parse_str(input);
        drop(parser);
        assert_eq!(flag, expected, "for input {input:?}");
    }
}

#[test]
fn test_negation() {
    let mut flag = true;
    let mut parser = Parser::new();
    parser.flag("flag|f", &mut flag);
    let residual = parser.parse_str("text text --no-flag text text");
    drop(parser);
    assert!(!flag);
    assert_eq!(residual, "text text text text");
}

#[test]
fn test_bundled_short_flags() {
    let (mut die, mut sleep, mut observe) = (false, false, false);
    let (mut alpha, mut gamma) = (0i32, 0i32);

    let mut parser = Parser::new();
    parser
        .flag("die|d", &mut die)
        .flag("sleep|s", &mut sleep)
        .flag("observe|o", &mut observe)
        .option("alpha|a", &mut alpha)
        .option("gamma|g", &mut gamma);
    let residual = parser.parse_str(" -dsa 42 -g 123 ");
    drop(parser);

    assert!(die);
    assert!(sleep);
    assert!(!observe);
    assert_eq!(alpha, 42);
    assert_eq!(gamma, 123);
    assert_eq!(residual, "");
}

#[test]
fn test_bool_registered_as_option_keeps_flag_syntax() {
    let mut flag = false;
    let mut parser = Parser::new();
    parser.option("flag|f", &mut flag);
    let residual = parser.parse_str("--flag rest");
    drop(parser);
    assert!(flag);
    assert_eq!(residual, "rest");
}

// ---------------------------------------------------------------------------
// Valued options: conversion policy and captures
// ---------------------------------------------------------------------------

#[test]
fn test_failed_conversion_keeps_prior_value() {
    let mut value = 7i32;
    let mut parser = Parser::new();
    parser.option("num|n", &mut value);
    let residual = parser.parse_str("--num=notanumber rest");
    drop(parser);
    assert_eq!(value, 7);
    assert_eq!(residual, "rest", "the match is still excised");
}

#[test]
fn test_missing_value_assigns_default() {
    let mut value = 7i32;
    let mut parser = Parser::new();
    parser.option("num|n", &mut value);
    parser.parse_str("rest --num");
    drop(parser);
    assert_eq!(value, 0);
}

#[test]
fn test_string_capture_verbatim_with_embedded_spaces() {
    let mut name = String::from("before");
    let mut parser = Parser::new();
    parser.option("name|n", &mut name);
    let residual = parser.parse(["--name", "John Smith", "rest"]);
    drop(parser);
    assert_eq!(name, "John Smith");
    assert_eq!(residual, "rest");
}

#[test]
fn test_empty_string_capture_is_viable() {
    let mut name = String::from("before");
    let mut parser = Parser::new();
    parser.option("name|n", &mut name);
    parser.parse_str("--name= rest");
    drop(parser);
    assert_eq!(name, "");
}

#[test]
fn test_unmatched_text_round_trips_through_encoding() {
    let mut parser = Parser::new();
    let mut unused = false;
    parser.flag("unused|u", &mut unused);
    let residual = parser.parse(["keep me", "a$1$b", r"back\slash"]);
    drop(parser);
    assert_eq!(residual, r"keep me a$1$b back\slash");
}

// ---------------------------------------------------------------------------
// Callbacks
// ---------------------------------------------------------------------------

#[test]
fn test_nullary_and_unary_callbacks() {
    let hits = Cell::new(0u32);
    let jobs = Cell::new(0u32);

    let mut parser = Parser::new();
    parser
        .callback("touch|t", Callback::nullary(|| hits.set(hits.get() + 1)))
        .callback("jobs|j", Callback::unary(|n: u32| jobs.set(n)));
    // a bare callback consumes the next token as its value, so --touch
    // goes last where there is nothing left to capture
    let residual = parser.parse_str("--jobs=8 rest --touch");
    drop(parser);

    assert_eq!(hits.get(), 1);
    assert_eq!(jobs.get(), 8);
    assert_eq!(residual, "rest");
}

#[test]
fn test_binary_callback_gets_converted_and_raw_value() {
    let seen = Cell::new(false);
    let mut parser = Parser::new();
    parser.callback(
        "pair|p",
        Callback::binary(|n: i32, raw: &str| {
            seen.set(n == 42 && raw == "42");
        }),
    );
    parser.parse_str("--pair 42");
    drop(parser);
    assert!(seen.get());
}

#[test]
fn test_failing_callback_is_retried_exactly_once() {
    let calls = Cell::new(0u32);
    let mut parser = Parser::new();
    parser.callback(
        "retry|r",
        Callback::unary(|_: i32| {
            calls.set(calls.get() + 1);
            1i32 // shell convention: nonzero is failure
        }),
    );
    parser.parse_str("--retry 5");
    drop(parser);
    assert_eq!(calls.get(), 2);
}

#[test]
#[should_panic(expected = "at most 2 are supported")]
fn test_callback_arity_fault_panics_on_match() {
    let mut parser = Parser::new();
    parser.callback("bad|b", Callback::nullary(|| ()).with_declared_params(3));
    parser.parse_str("--bad");
}

#[test]
fn test_callback_arity_fault_swallowed_in_fail_silently_mode() {
    let mut parser = Parser::new();
    parser
        .fail_silently(true)
        .callback("bad|b", Callback::nullary(|| ()).with_declared_params(3));
    let residual = parser.parse_str("--bad=x rest");
    drop(parser);
    assert_eq!(residual, "rest", "the match is still excised");
}

// ---------------------------------------------------------------------------
// Registry behavior across parses
// ---------------------------------------------------------------------------

#[test]
fn test_repeated_parses_reuse_descriptors() {
    let mut value = 0i32;
    let mut parser = Parser::new();
    parser.option("num|n", &mut value);

    assert_eq!(parser.parse_str("--num=1 first"), "first");
    assert_eq!(parser.parse_str("-n 2 second"), "second");
    drop(parser);
    assert_eq!(value, 2);
}

#[test]
fn test_only_first_occurrence_is_consumed_per_parse() {
    let mut value = 0i32;
    let mut parser = Parser::new();
    parser.option("num|n", &mut value);
    let residual = parser.parse_str("--num=1 --num=2");
    drop(parser);
    assert_eq!(value, 1);
    assert_eq!(residual, "--num=2");
}

#[test]
fn test_removed_option_no_longer_matches() {
    let mut flag = false;
    let mut parser = Parser::new();
    parser.flag("flag|f", &mut flag);
    assert!(parser.remove("flag"));
    let residual = parser.parse_str("--flag rest");
    drop(parser);
    assert!(!flag);
    assert_eq!(residual, "--flag rest");
}
