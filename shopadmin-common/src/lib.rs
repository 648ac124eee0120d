//! Common types and utilities shared between the ShopAdmin UI crates

pub mod config;
pub mod format;
pub mod i18n;
pub mod product;

pub use config::ViewConfig;
pub use i18n::{Locale, Namespace, TextKey, Translations};
pub use product::{prefer_non_empty, LocalizedText, Product, ProductStatus};

/// Errors raised while setting up a view (locale, catalogs, configuration)
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Unknown translation namespace: {0}")]
    UnknownNamespace(String),

    #[error("Invalid translation catalog: {0}")]
    InvalidCatalog(#[source] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::UnsupportedLocale("fr".to_string());
        assert_eq!(err.to_string(), "Unsupported locale: fr");

        let err = Error::UnknownNamespace("orders".to_string());
        assert_eq!(err.to_string(), "Unknown translation namespace: orders");
    }

    #[test]
    fn test_json_errors_keep_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::InvalidCatalog(source);

        assert!(err.to_string().starts_with("Invalid translation catalog"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
