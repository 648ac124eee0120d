//! Product records as delivered by the catalog API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::{Locale, TextKey};

/// Base path of the product screens
pub const PRODUCTS_PATH: &str = "/products";

/// Pick `preferred` unless it is empty, otherwise `fallback`.
pub fn prefer_non_empty<'a>(preferred: Option<&'a str>, fallback: Option<&'a str>) -> &'a str {
    match preferred {
        Some(value) if !value.is_empty() => value,
        _ => fallback.unwrap_or_default(),
    }
}

/// Text carrying an English and an Arabic variant
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocalizedText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ar: Option<String>,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: Some(en.into()),
            ar: Some(ar.into()),
        }
    }

    pub fn en(value: impl Into<String>) -> Self {
        Self {
            en: Some(value.into()),
            ar: None,
        }
    }

    pub fn ar(value: impl Into<String>) -> Self {
        Self {
            en: None,
            ar: Some(value.into()),
        }
    }

    /// Display text: English first, Arabic when English is missing or empty.
    pub fn display(&self) -> &str {
        prefer_non_empty(self.en.as_deref(), self.ar.as_deref())
    }

    /// Text for `locale`, falling back to the other variant.
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => prefer_non_empty(self.en.as_deref(), self.ar.as_deref()),
            Locale::Ar => prefer_non_empty(self.ar.as_deref(), self.en.as_deref()),
        }
    }
}

/// Product status as shown to admins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductStatus {
    Active,
    Inactive,
}

impl ProductStatus {
    pub fn label_key(self) -> TextKey {
        match self {
            Self::Active => TextKey::Active,
            Self::Inactive => TextKey::Inactive,
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

/// Catalog product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    pub price: f64,
    #[serde(default)]
    pub price_sale: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn new(product_id: impl Into<String>, title: LocalizedText, price: f64) -> Self {
        Self {
            product_id: product_id.into(),
            title,
            image: None,
            is_active: false,
            price,
            price_sale: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn display_title(&self) -> &str {
        self.title.display()
    }

    /// Image URL, or `placeholder` when the product has none.
    pub fn image_src<'a>(&'a self, placeholder: &'a str) -> &'a str {
        prefer_non_empty(self.image.as_deref(), Some(placeholder))
    }

    pub fn status(&self) -> ProductStatus {
        if self.is_active {
            ProductStatus::Active
        } else {
            ProductStatus::Inactive
        }
    }

    pub fn has_sale_price(&self) -> bool {
        self.price_sale.is_some()
    }

    pub fn edit_path(&self) -> String {
        format!("{}/{}", PRODUCTS_PATH, self.product_id)
    }
}
