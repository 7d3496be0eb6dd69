//! String option bag handed over by a plugin host.

use std::collections::BTreeMap;

use crate::error::PluginError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    values: BTreeMap<String, String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Unsigned integer option. Accepts decimal and `0x` hex, with `_` separators.
    pub fn get_u64(&self, key: &str, default: u64) -> Result<u64, PluginError> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => parse_u64(raw).ok_or_else(|| invalid(key, raw, "an unsigned integer")),
        }
    }

    /// Boolean option: `true/false`, `1/0`, `yes/no`, `on/off`, any case.
    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool, PluginError> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => parse_bool(raw).ok_or_else(|| invalid(key, raw, "a boolean")),
        }
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_owned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn invalid(key: &str, value: &str, expected: &'static str) -> PluginError {
    PluginError::InvalidOption {
        key: key.to_owned(),
        value: value.to_owned(),
        expected,
    }
}

pub fn parse_u64(raw: &str) -> Option<u64> {
    let digits: String = raw.trim().chars().filter(|c| *c != '_').collect();
    if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        u64::from_str_radix(hex, 16).ok()
    } else {
        digits.parse().ok()
    }
}

pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn integers_in_both_radixes() {
        assert_eq!(parse_u64("0x80000000"), Some(0x8000_0000));
        assert_eq!(parse_u64("0XF000_0000"), Some(0xF000_0000));
        assert_eq!(parse_u64(" 2147483648 "), Some(0x8000_0000));
        assert_eq!(parse_u64("0x"), None);
        assert_eq!(parse_u64("-1"), None);
        assert_eq!(parse_u64("0x1_0000_0000_0000_0000"), None);
    }

    #[test]
    fn boolean_spellings() {
        for raw in ["true", "TRUE", "1", "yes", "On"] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["false", "0", "No", "off"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn defaults_and_errors() {
        let options: Options = [("a", "0x10"), ("b", "nope"), ("c", "yes")]
            .into_iter()
            .collect();
        assert_eq!(options.get_u64("a", 0).ok(), Some(0x10));
        assert_eq!(options.get_u64("missing", 7).ok(), Some(7));
        assert_eq!(options.get_bool("c", false).ok(), Some(true));
        assert_eq!(options.get_string("missing", "dflt"), "dflt");

        let err = options.get_u64("b", 0).expect_err("not a number");
        assert_eq!(
            err.to_string(),
            "invalid value \"nope\" for option b (expected an unsigned integer)"
        );
    }

    proptest! {
        #[test]
        fn hex_and_decimal_agree(value in any::<u64>()) {
            prop_assert_eq!(parse_u64(&format!("{value:#x}")), Some(value));
            prop_assert_eq!(parse_u64(&value.to_string()), Some(value));
        }
    }
}
