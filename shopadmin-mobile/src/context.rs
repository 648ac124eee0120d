//! Shared view context: translations and configuration

use std::rc::Rc;

use shopadmin_common::{Locale, TextKey, Translations, ViewConfig};
use yew::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewContext {
    pub config: Rc<ViewConfig>,
    pub translations: Rc<Translations>,
}

impl ViewContext {
    /// Context with the bundled catalogs for the configured locale
    pub fn new(config: ViewConfig) -> Self {
        let translations = Translations::builtin(config.locale);
        Self {
            config: Rc::new(config),
            translations: Rc::new(translations),
        }
    }

    /// Context with caller-supplied catalogs. The config locale follows the
    /// catalogs so dates and text direction agree with the labels.
    pub fn with_translations(config: ViewConfig, translations: Translations) -> Self {
        let config = config.with_locale(translations.locale());
        Self {
            config: Rc::new(config),
            translations: Rc::new(translations),
        }
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    pub fn t(&self, key: TextKey) -> String {
        self.translations.t(key)
    }
}

/// The nearest provided [`ViewContext`], or the English defaults.
#[hook]
pub fn use_view_context() -> ViewContext {
    use_context::<ViewContext>().unwrap_or_default()
}
