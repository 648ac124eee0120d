//! View configuration

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;
use crate::{Error, Result};

pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    pub locale: Locale,
    pub placeholder_image: String,
    pub currency_symbol: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl ViewConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::InvalidConfig)
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.placeholder_image, "/images/placeholder.jpg");
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ViewConfig::from_json(r#"{"locale": "ar"}"#).unwrap();
        assert_eq!(config.locale, Locale::Ar);
        assert_eq!(config.placeholder_image, DEFAULT_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            ViewConfig::from_json(r#"{"locale": "fr"}"#),
            Err(Error::InvalidConfig(_))
        ));
    }
}
