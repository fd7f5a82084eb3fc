use super::*;

fn chars(s: &str) -> f32 {
    s.chars().count() as f32
}

#[test]
fn two_words_per_line() {
    assert_eq!(wrap("a b c", 3.0, chars), vec!["a b", "c"]);
}

#[test]
fn over_long_word_sits_alone() {
    assert_eq!(
        wrap("hi extraordinarily ok", 5.0, chars),
        vec!["hi", "extraordinarily", "ok"]
    );
    assert_eq!(wrap("extraordinarily", 1.0, chars), vec!["extraordinarily"]);
}

#[test]
fn empty_and_blank_input_yield_no_lines() {
    assert!(wrap("", 100.0, chars).is_empty());
    assert!(wrap("  \n\t ", 100.0, chars).is_empty());
}

#[test]
fn whitespace_runs_collapse() {
    assert_eq!(wrap("uno\n  dos   tres", 100.0, chars), vec!["uno dos tres"]);
}

#[test]
fn exact_fit_stays_on_line() {
    assert_eq!(wrap("ab cd ef", 5.0, chars), vec!["ab cd", "ef"]);
}

#[test]
fn measurement_errors_propagate() {
    let out: Result<Vec<String>, &str> = try_wrap("a b", 10.0, |_| Err("boom"));
    assert_eq!(out, Err("boom"));
}

#[test]
fn single_word_is_never_measured() {
    let mut calls = 0;
    let lines = wrap("solo", 0.0, |s| {
        calls += 1;
        chars(s)
    });
    assert_eq!(lines, vec!["solo"]);
    assert_eq!(calls, 0);
}
