use std::collections::BTreeMap;
use std::fmt;

use crate::charset::is_gsm7;
use crate::domain::validation::ValidationError;
use crate::phone::{DefaultCountry, format_display, format_e164, is_valid_e164};
use crate::segment::{SegmentInfo, count_segments};
use crate::template::{extract_variables, render_template};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message body.
///
/// Invariant: non-empty after trimming. The original value (including
/// whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: "message" });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this body fits the GSM-7 repertoire.
    pub fn is_gsm7(&self) -> bool {
        is_gsm7(&self.0)
    }

    /// Segment accounting for this body.
    pub fn segment_info(&self) -> SegmentInfo {
        count_segments(&self.0)
    }
}

#[derive(Debug, Clone)]
/// Phone number normalized to E.164.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
}

impl PhoneNumber {
    /// Normalize and validate a phone number into E.164.
    ///
    /// `default_country` supplies the country prefix when the input does not
    /// carry an explicit `+`.
    pub fn parse(
        default_country: DefaultCountry,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: "phone" });
        }

        let e164 = format_e164(&raw, default_country);
        if !is_valid_e164(&e164) {
            return Err(ValidationError::InvalidPhoneNumber { input: raw });
        }

        Ok(Self { raw, e164 })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// Human-readable rendering. Display-only; not an E.164 round-trip.
    pub fn display(&self) -> String {
        format_display(&self.e164)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message template with `{{variable}}` placeholders.
///
/// Invariant: non-empty after trimming.
pub struct MessageTemplate(String);

impl MessageTemplate {
    /// Create a validated template body.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: "template" });
        }
        Ok(Self(value))
    }

    /// Borrow the template body as provided.
    pub fn body(&self) -> &str {
        &self.0
    }

    /// Placeholder names in first-occurrence order, deduplicated.
    pub fn variables(&self) -> Vec<String> {
        extract_variables(&self.0)
    }

    /// Render the template; unsupplied placeholders stay literal.
    pub fn render(&self, variables: &BTreeMap<String, String>) -> String {
        render_template(&self.0, variables)
    }

    /// Placeholder names that `variables` does not supply.
    pub fn missing_variables(&self, variables: &BTreeMap<String, String>) -> Vec<String> {
        self.variables()
            .into_iter()
            .filter(|name| !variables.contains_key(name))
            .collect()
    }
}
