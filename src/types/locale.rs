use std::fmt;
use std::str::FromStr;

use crate::types::error::AppError;

/// A language with an optional region, e.g. `en-US` or `de`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    pub fn new(language: &str, region: Option<&str>) -> Self {
        Locale {
            language: language.to_ascii_lowercase(),
            region: region.map(|r| r.to_ascii_uppercase()),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::new("en", Some("US"))
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let mut parts = tag.trim().split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        let region = parts.next();

        let valid = |s: &str| {
            !s.is_empty() && s.len() <= 8 && s.chars().all(|c| c.is_ascii_alphanumeric())
        };
        if !valid(language) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(AppError::BadRequest(format!("invalid locale tag: {tag}")));
        }
        if let Some(region) = region {
            if !valid(region) {
                return Err(AppError::BadRequest(format!("invalid locale tag: {tag}")));
            }
        }

        Ok(Locale::new(language, region))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => write!(f, "{}", self.language),
        }
    }
}
