//! Years-of-experience inference from free-form model output

use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_EXPERIENCE_LEVEL: &str = "5";

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid digit pattern"));

/// First run of digits in `info`, if any.
pub fn parse_experience_level(info: &str) -> Option<String> {
    DIGITS.find(info).map(|m| m.as_str().to_string())
}

pub fn experience_level_or_default(info: &str) -> String {
    parse_experience_level(info).unwrap_or_else(|| DEFAULT_EXPERIENCE_LEVEL.to_string())
}
