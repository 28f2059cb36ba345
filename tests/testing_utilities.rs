//! Tests and examples for the assertion macros and property-test support
//!
//! This suite shows how downstream code that returns outcomes is usually tested.

use bifold::prelude::*;
use bifold::{assert_err, assert_err_eq, assert_ok, assert_ok_eq};

#[derive(Debug, Clone, PartialEq)]
struct Setting {
    key: String,
    value: i32,
}

#[derive(Debug, Clone, PartialEq)]
enum SettingError {
    MissingSeparator(String),
    BadValue(String),
}

fn parse_setting(line: &str) -> Outcome<SettingError, Setting> {
    let Some((key, raw)) = line.split_once('=') else {
        return Outcome::err(SettingError::MissingSeparator(line.to_string()));
    };

    Outcome::from_result(raw.trim().parse::<i32>())
        .as_err()
        .map(|_| SettingError::BadValue(raw.trim().to_string()))
        .as_ok()
        .map(|value| Setting {
            key: key.trim().to_string(),
            value,
        })
}

fn parse_all(text: &str) -> Partition<SettingError, Setting> {
    text.lines()
        .filter(|l| !l.trim().is_empty())
        .map(parse_setting)
        .collect()
}

#[test]
fn test_assert_ok_with_valid_line() {
    assert_ok!(parse_setting("retries = 3"));
}

#[test]
fn test_assert_ok_eq_with_parsed_setting() {
    assert_ok_eq!(
        parse_setting("timeout=30"),
        Setting {
            key: "timeout".to_string(),
            value: 30
        }
    );
}

#[test]
fn test_assert_err_with_missing_separator() {
    assert_err!(parse_setting("verbose"));
}

#[test]
fn test_assert_err_eq_with_bad_value() {
    assert_err_eq!(
        parse_setting("depth = deep"),
        SettingError::BadValue("deep".to_string())
    );
}

#[test]
fn test_fold_of_clean_file() {
    let p = parse_all("a = 1\n\nb = 2\n");
    assert_ok_eq!(p.fold_with(|e| e, |oks| oks.len()), 2);
}

#[test]
fn test_fold_of_dirty_file_reports_every_error() {
    let p = parse_all("a = 1\nnope\nb = x\n");
    assert_err_eq!(
        p.fold(),
        vec![
            SettingError::MissingSeparator("nope".to_string()),
            SettingError::BadValue("x".to_string()),
        ]
    );
}

#[test]
#[should_panic(expected = "Expected Ok")]
fn test_assert_ok_eq_reports_the_failure() {
    assert_ok_eq!(parse_setting("x"), Setting { key: "x".to_string(), value: 0 });
}

#[cfg(feature = "proptest")]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_swap_flips_tags(out in any::<Outcome<String, i32>>()) {
            let was_ok = out.is_ok();
            prop_assert_eq!(out.swap().is_err(), was_ok);
        }

        #[test]
        fn prop_partition_fold_matches_has_errs(p in any::<Partition<u8, i8>>()) {
            let had_errs = p.has_errs();
            prop_assert_eq!(p.fold().is_err(), had_errs);
        }

        #[test]
        fn prop_either_roundtrips_through_outcome(e in any::<Either<u8, String>>()) {
            let back = Either::from(Outcome::<u8, String>::from(e.clone()));
            prop_assert_eq!(back, e);
        }
    }
}
