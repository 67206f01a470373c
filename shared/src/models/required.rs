//! Presence checks for payloads with required fields

use rust_decimal::Decimal;

/// Names of the required fields a payload is missing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required fields: {}", .0.join(", "))]
pub struct MissingFields(pub Vec<&'static str>);

/// Accumulates missing fields while a payload is converted to its validated form.
///
/// A field counts as missing when it is absent, null, an empty string, or a
/// zero amount.
#[derive(Debug, Default)]
pub(crate) struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub(crate) fn text(&mut self, name: &'static str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    /// Amounts stay text; one that reads as zero is missing, anything
    /// non-numeric is passed on for the store to reject.
    pub(crate) fn amount(&mut self, name: &'static str, value: Option<String>) -> String {
        let is_zero = |v: &str| v.trim().parse::<Decimal>().is_ok_and(|d| d.is_zero());
        match value {
            Some(v) if !v.trim().is_empty() && !is_zero(&v) => v,
            _ => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    pub(crate) fn finish<T>(self, validated: T) -> Result<T, MissingFields> {
        if self.missing.is_empty() {
            Ok(validated)
        } else {
            Err(MissingFields(self.missing))
        }
    }
}
