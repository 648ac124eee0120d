//! Translation catalogs for the admin screens
//!
//! Text is looked up by `namespace:key`, the same addressing the web admin
//! uses for its `common` and `products` catalogs. A key with no entry renders
//! as the bare key name.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Supported display languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Text direction for the `dir` attribute
    pub fn direction(self) -> &'static str {
        match self {
            Self::En => "ltr",
            Self::Ar => "rtl",
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Accept region-qualified tags such as "en-US" or "ar_SA".
        let language = s.split(['-', '_']).next().unwrap_or_default();
        match language.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ar" => Ok(Self::Ar),
            _ => Err(Error::UnsupportedLocale(s.to_string())),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Translation catalog namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Common,
    Products,
}

impl Namespace {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Products => "products",
        }
    }
}

impl FromStr for Namespace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "common" => Ok(Self::Common),
            "products" => Ok(Self::Products),
            _ => Err(Error::UnknownNamespace(s.to_string())),
        }
    }
}

/// Text resources used by the product screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    ProductTitle,
    Status,
    Active,
    Inactive,
    Price,
    PriceSale,
    CreatedAt,
    UpdatedAt,
    Edit,
    Delete,
}

impl TextKey {
    pub fn namespace(self) -> Namespace {
        match self {
            Self::ProductTitle | Self::Status | Self::Price | Self::PriceSale => {
                Namespace::Products
            }
            Self::Active
            | Self::Inactive
            | Self::CreatedAt
            | Self::UpdatedAt
            | Self::Edit
            | Self::Delete => Namespace::Common,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::ProductTitle => "productTitle",
            Self::Status => "status",
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Price => "price",
            Self::PriceSale => "priceSale",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }

    /// Fully qualified `namespace:key` form
    pub fn qualified(self) -> String {
        format!("{}:{}", self.namespace().as_str(), self.name())
    }
}

const EN_COMMON: &[(&str, &str)] = &[
    ("active", "Active"),
    ("inactive", "Inactive"),
    ("createdAt", "Created At"),
    ("updatedAt", "Updated At"),
    ("edit", "Edit"),
    ("delete", "Delete"),
];

const EN_PRODUCTS: &[(&str, &str)] = &[
    ("productTitle", "Product Title"),
    ("status", "Status"),
    ("price", "Price"),
    ("priceSale", "Sale Price"),
];

const AR_COMMON: &[(&str, &str)] = &[
    ("active", "نشط"),
    ("inactive", "غير نشط"),
    ("createdAt", "تاريخ الإنشاء"),
    ("updatedAt", "تاريخ التحديث"),
    ("edit", "تعديل"),
    ("delete", "حذف"),
];

const AR_PRODUCTS: &[(&str, &str)] = &[
    ("productTitle", "اسم المنتج"),
    ("status", "الحالة"),
    ("price", "السعر"),
    ("priceSale", "سعر التخفيض"),
];

fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Translations for one locale, grouped by namespace
#[derive(Debug, Clone, PartialEq)]
pub struct Translations {
    locale: Locale,
    catalogs: HashMap<Namespace, HashMap<String, String>>,
}

impl Default for Translations {
    fn default() -> Self {
        Self::builtin(Locale::default())
    }
}

impl Translations {
    /// Catalogs bundled with the crate
    pub fn builtin(locale: Locale) -> Self {
        let (common, products) = match locale {
            Locale::En => (EN_COMMON, EN_PRODUCTS),
            Locale::Ar => (AR_COMMON, AR_PRODUCTS),
        };

        let mut catalogs = HashMap::new();
        catalogs.insert(Namespace::Common, table(common));
        catalogs.insert(Namespace::Products, table(products));

        Self { locale, catalogs }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Overlay entries for `namespace` from an already loaded JSON object.
    ///
    /// Existing keys are replaced; keys absent from `json` are kept.
    pub fn with_namespace_json(mut self, namespace: &str, json: &str) -> Result<Self> {
        let namespace = namespace.parse::<Namespace>()?;
        let entries: HashMap<String, String> =
            serde_json::from_str(json).map_err(Error::InvalidCatalog)?;

        self.catalogs.entry(namespace).or_default().extend(entries);
        Ok(self)
    }

    pub fn t(&self, key: TextKey) -> String {
        self.resolve(key.namespace(), key.name())
    }

    /// Look up a `namespace:key` string
    pub fn lookup(&self, qualified: &str) -> String {
        match qualified.split_once(':') {
            Some((ns, key)) => match ns.parse::<Namespace>() {
                Ok(namespace) => self.resolve(namespace, key),
                Err(_) => {
                    tracing::warn!(key = qualified, "unknown translation namespace");
                    key.to_string()
                }
            },
            None => self.resolve(Namespace::Common, qualified),
        }
    }

    fn resolve(&self, namespace: Namespace, key: &str) -> String {
        match self.catalogs.get(&namespace).and_then(|entries| entries.get(key)) {
            Some(text) => text.clone(),
            None => {
                tracing::warn!(
                    locale = %self.locale,
                    namespace = namespace.as_str(),
                    key,
                    "missing translation"
                );
                key.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("AR_sa".parse::<Locale>().unwrap(), Locale::Ar);
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(Error::UnsupportedLocale(code)) if code == "fr"
        ));
        assert_eq!(Locale::Ar.direction(), "rtl");
    }

    #[test]
    fn test_keys_resolve_in_both_locales() {
        let keys = [
            TextKey::ProductTitle,
            TextKey::Status,
            TextKey::Active,
            TextKey::Inactive,
            TextKey::Price,
            TextKey::PriceSale,
            TextKey::CreatedAt,
            TextKey::UpdatedAt,
            TextKey::Edit,
            TextKey::Delete,
        ];

        for locale in [Locale::En, Locale::Ar] {
            let translations = Translations::builtin(locale);
            for key in keys {
                assert_ne!(translations.t(key), key.name(), "{locale}: {}", key.qualified());
            }
        }
    }

    #[test]
    fn test_lookup_qualified_keys() {
        let translations = Translations::builtin(Locale::En);
        assert_eq!(translations.lookup("products:price"), "Price");
        assert_eq!(translations.lookup("common:active"), "Active");
        assert_eq!(translations.lookup("edit"), "Edit");
        assert_eq!(TextKey::PriceSale.qualified(), "products:priceSale");
    }

    #[test]
    fn test_missing_key_renders_key_name() {
        let translations = Translations::builtin(Locale::En);
        assert_eq!(translations.lookup("products:sku"), "sku");
        assert_eq!(translations.lookup("orders:total"), "total");
    }

    #[test]
    fn test_namespace_overlay() {
        let translations = Translations::builtin(Locale::En)
            .with_namespace_json("products", r#"{"price": "Base price", "sku": "SKU"}"#)
            .unwrap();

        assert_eq!(translations.t(TextKey::Price), "Base price");
        assert_eq!(translations.lookup("products:sku"), "SKU");
        assert_eq!(translations.t(TextKey::PriceSale), "Sale Price");
    }

    #[test]
    fn test_namespace_overlay_errors() {
        let unknown = Translations::default().with_namespace_json("orders", "{}");
        assert!(matches!(unknown, Err(Error::UnknownNamespace(_))));

        let malformed = Translations::default().with_namespace_json("common", "[1, 2]");
        assert!(matches!(malformed, Err(Error::InvalidCatalog(_))));
    }
}
