//! # Deployment Environment
//!
//! This module defines the [`Environment`] type and the parser that turns
//! loosely formatted text into one.
//!
//! Three environments are known, each identified by a short canonical text:
//!
//! | Variant       | Canonical text | Label         |
//! |---------------|----------------|---------------|
//! | `Production`  | `PROD`         | `Production`  |
//! | `Staging`     | `STAGE`        | `Staging`     |
//! | `Development` | `DEV`          | `Development` |
//!
//! Any other text is kept verbatim in [`Environment::Unrecognized`], which
//! reports the label `Unknown` and answers `false` to every predicate.
//!
//! ## Parsing
//!
//! [`Environment::parse`] accepts the canonical and long forms in any case,
//! with surrounding whitespace and quote characters:
//!
//! ```
//! use deployenv::Environment;
//!
//! assert_eq!(Environment::parse("  'prod' "), Environment::PROD);
//! assert_eq!(Environment::parse("Staging"), Environment::STAGE);
//! // Unknown input degrades to production
//! assert_eq!(Environment::parse("banana"), Environment::PROD);
//! ```

use crate::error::ParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::warn;

const PROD_TEXT: &str = "PROD";
const STAGE_TEXT: &str = "STAGE";
const DEV_TEXT: &str = "DEV";

/// The deployment mode an application instance is running under.
///
/// Values compare, hash and order by their canonical text, so an
/// `Unrecognized("PROD")` built by hand is equal to `Production`.
#[derive(Debug, Clone)]
pub enum Environment {
    /// Canonical text `PROD`
    Production,
    /// Canonical text `STAGE`
    Staging,
    /// Canonical text `DEV`
    Development,
    /// Any other text, stored exactly as given
    Unrecognized(String),
}

impl Environment {
    /// The production environment (`PROD`).
    pub const PROD: Environment = Environment::Production;
    /// The staging environment (`STAGE`).
    pub const STAGE: Environment = Environment::Staging;
    /// The development environment (`DEV`).
    pub const DEV: Environment = Environment::Development;

    /// All known environments, from most to least restrictive.
    pub const ALL: [Environment; 3] = [Self::PROD, Self::STAGE, Self::DEV];

    /// Build an environment from its canonical text without any normalization.
    ///
    /// Only the exact strings `PROD`, `STAGE` and `DEV` map to known variants;
    /// everything else, including `"prod"` and the empty string, is kept as
    /// [`Environment::Unrecognized`]. Use [`Environment::parse`] for user input.
    pub fn from_canonical(text: impl Into<String>) -> Self {
        let text = text.into();
        match text.as_str() {
            PROD_TEXT => Self::Production,
            STAGE_TEXT => Self::Staging,
            DEV_TEXT => Self::Development,
            _ => Self::Unrecognized(text),
        }
    }

    /// Parse arbitrary text into an environment, falling back to production.
    ///
    /// The input is normalized with [`normalize`] and matched against:
    ///
    /// - `PROD`, `PRODUCTION` → [`Environment::Production`]
    /// - `STAGE`, `STAGING` → [`Environment::Staging`]
    /// - `DEV`, `DEVELOP`, `DEVELOPMENT` → [`Environment::Development`]
    ///
    /// Anything else yields [`Environment::Production`] and logs a warning
    /// naming the raw input. This never fails.
    pub fn parse(raw: &str) -> Self {
        Self::parse_strict(raw).unwrap_or_else(|err| {
            warn!(input = %raw, error = %err, "invalid environment, defaulting to PROD");
            Self::Production
        })
    }

    /// Parse arbitrary text into a known environment.
    ///
    /// Applies the same normalization and aliases as [`Environment::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Unrecognized`] carrying the raw input when it
    /// does not name a known environment.
    pub fn parse_strict(raw: &str) -> crate::Result<Self> {
        match normalize(raw).as_str() {
            "PROD" | "PRODUCTION" => Ok(Self::Production),
            "STAGE" | "STAGING" => Ok(Self::Staging),
            "DEV" | "DEVELOP" | "DEVELOPMENT" => Ok(Self::Development),
            _ => Err(ParseError::Unrecognized {
                input: raw.to_string(),
            }),
        }
    }

    /// The canonical text, or the stored text for unrecognized values.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Production => PROD_TEXT,
            Self::Staging => STAGE_TEXT,
            Self::Development => DEV_TEXT,
            Self::Unrecognized(text) => text,
        }
    }

    /// Human-readable name, `"Unknown"` for anything unrecognized.
    pub fn label(&self) -> &'static str {
        match self.as_str() {
            PROD_TEXT => "Production",
            STAGE_TEXT => "Staging",
            DEV_TEXT => "Development",
            _ => "Unknown",
        }
    }

    /// True for `DEV` only.
    pub fn is_development(&self) -> bool {
        self.as_str() == DEV_TEXT
    }

    /// True for `STAGE` only.
    pub fn is_staging(&self) -> bool {
        self.as_str() == STAGE_TEXT
    }

    /// True for `PROD` only.
    pub fn is_production(&self) -> bool {
        self.as_str() == PROD_TEXT
    }

    /// Whether this is one of the three known environments.
    pub fn is_recognized(&self) -> bool {
        self.is_production() || self.is_staging() || self.is_development()
    }

    /// Whether this is the empty value, as produced by [`Default`].
    pub(crate) fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

/// Trim whitespace, then any `"` or `'` from either end, then uppercase.
///
/// Quotes are stripped from each end independently, so `'prod"` and
/// `"prod` both normalize to `PROD`. Case mapping is one character to one
/// character: characters whose uppercase form expands (`ﬆ` to `ST`) are kept.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}

impl Default for Environment {
    /// The empty value: label `Unknown`, every predicate `false`.
    fn default() -> Self {
        Self::Unrecognized(String::new())
    }
}

impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Environment {}

impl Hash for Environment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialOrd for Environment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Environment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    /// Lenient parse; see [`Environment::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Environment {
    fn from(text: &str) -> Self {
        Self::from_canonical(text)
    }
}

impl From<String> for Environment {
    fn from(text: String) -> Self {
        Self::from_canonical(text)
    }
}

impl From<Environment> for String {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Unrecognized(text) => text,
            known => known.as_str().to_string(),
        }
    }
}

impl AsRef<str> for Environment {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for Environment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Environment {
    /// Deserialization is lenient: unknown text falls back to production.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
