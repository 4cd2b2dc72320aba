#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use yare::parameterized;

use super::*;

fn run(pattern: &str) -> Vec<String> {
    expand(pattern, &ExpandOptions::default()).unwrap()
}

#[parameterized(
    simple = { "a{b,c}d", &["abd", "acd"] },
    nested = { "{a,{b,c}}", &["a", "b", "c"] },
    two_groups = { "{a,b}{1,2}", &["a1", "a2", "b1", "b2"] },
    empty_alternative = { "a{,b}c", &["ac", "abc"] },
    no_braces = { "plain", &["plain"] },
    single_item = { "a{b}c", &["a{b}c"] },
    empty_group = { "a{}b", &["a{}b"] },
    leading_empty_group = { "{}a,b", &["{}a,b"] },
    dollar_group = { "${a,b}", &["${a,b}"] },
    dollar_group_with_tail = { "${a,b}{c,d}", &["${a,b}c", "${a,b}d"] },
    escaped_open = { r"\{a,b}", &["{a,b}"] },
    escaped_comma = { r"{a\,b,c}", &["a,b", "c"] },
    escaped_backslash = { r"\\{a,b}", &[r"\a", r"\b"] },
    stray_closer_in_group = { "{a},b}", &["a}", "b"] },
    doubled_braces = { "x{{a,b}}y", &["x{a}y", "x{b}y"] },
    unclosed = { "a{b,c", &["a{b,c"] },
)]
fn lists(pattern: &str, expected: &[&str]) {
    assert_eq!(run(pattern), expected);
}

#[parameterized(
    ascending = { "{1..3}", &["1", "2", "3"] },
    descending = { "{3..1}", &["3", "2", "1"] },
    negative = { "{-1..1}", &["-1", "0", "1"] },
    stepped = { "{1..10..3}", &["1", "4", "7", "10"] },
    negative_step_is_absolute = { "{1..5..-2}", &["1", "3", "5"] },
    zero_step_is_one = { "{1..3..0}", &["1", "2", "3"] },
    padded = { "{01..03}", &["01", "02", "03"] },
    padded_by_end = { "{8..010}", &["008", "009", "010"] },
    padded_negative = { "{-05..-03}", &["-05", "-04", "-03"] },
    alpha = { "{a..e}", &["a", "b", "c", "d", "e"] },
    alpha_reverse_stepped = { "{e..a..2}", &["e", "c", "a"] },
    alpha_skips_backslash = { "{Z..a}", &["Z", "[", "", "]", "^", "_", "`", "a"] },
    with_affixes = { "v{1..2}.txt", &["v1.txt", "v2.txt"] },
    not_a_sequence = { "{1..b}", &["{1..b}"] },
    too_many_parts = { "{1..2..3..4}", &["{1..2..3..4}"] },
)]
fn sequences(pattern: &str, expected: &[&str]) {
    assert_eq!(run(pattern), expected);
}

#[test]
fn empty_pattern_has_no_expansions() {
    assert!(run("").is_empty());
}

#[test]
fn empty_results_are_dropped_at_top_level() {
    assert!(run("{,}").is_empty());
    assert_eq!(run("{,a}"), vec!["a"]);
}

#[test]
fn limit_is_an_error() {
    let options = ExpandOptions { max: 3 };
    match expand("{1..10}", &options) {
        Err(Error::ExpansionLimit { limit }) => assert_eq!(limit, 3),
        other => panic!("expected ExpansionLimit, got {other:?}"),
    }
    assert_eq!(expand("{1..3}", &options).unwrap().len(), 3);
}

#[test]
fn huge_sequence_stops_at_limit() {
    let options = ExpandOptions { max: 10 };
    assert!(expand("{1..1000000000}", &options).is_err());
}

#[test]
fn default_limit() {
    assert_eq!(ExpandOptions::default().max, 100_000);
}

#[parameterized(
    two = { "a,b", &["a", "b"] },
    nested_kept = { "a,{b,c},d", &["a", "{b,c}", "d"] },
    escaped = { r"a\,b,c", &[r"a\,b", "c"] },
    trailing = { "a,", &["a", ""] },
)]
fn comma_splitting(body: &str, expected: &[&str]) {
    assert_eq!(split_commas(body), expected);
}
