//! `{{variable}}` placeholder extraction and substitution.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder pattern compiles"));

/// Placeholder names in `body`, in first-occurrence order, deduplicated.
pub fn extract_variables(body: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER_RE.captures_iter(body) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_owned());
        }
    }
    names
}

/// Substitute placeholders in `body` from `variables`.
///
/// A name with no supplied value is left as the literal `{{name}}`, so a
/// partially filled template stays visibly incomplete.
pub fn render_template(body: &str, variables: &BTreeMap<String, String>) -> String {
    PLACEHOLDER_RE
        .replace_all(body, |caps: &Captures<'_>| match variables.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_owned(),
        })
        .into_owned()
}
