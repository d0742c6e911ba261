// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles embedded at compile time from `assets/i18n/*.ftl`.

use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

/// Locale used when nothing else resolves.
pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Translations;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Loads every embedded locale and picks the active one:
    /// CLI flag, then `[general] language`, then the OS locale, then
    /// [`DEFAULT_LOCALE`].
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();

        for file in Translations::iter() {
            let Some(locale) = file
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Translations::get(&file) else {
                continue;
            };

            match build_bundle(&locale, &String::from_utf8_lossy(&content.data)) {
                Some(bundle) => {
                    bundles.insert(locale, bundle);
                }
                None => tracing::warn!(file = %file, "skipping unparsable translation file"),
            }
        }

        let available: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        let current_locale =
            resolve_locale(cli_lang, config, &available).unwrap_or_else(default_locale);

        Self {
            bundles,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key`, substituting `{ $name }` placeables from `args`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let pattern = self
            .bundles
            .get(&self.current_locale)
            .and_then(|bundle| Some((bundle, bundle.get_message(key)?.value()?)));

        if let Some((bundle, pattern)) = pattern {
            let mut errors = Vec::new();
            let value = bundle.format_pattern(pattern, args, &mut errors);
            if errors.is_empty() {
                return value.into_owned();
            }
            tracing::debug!(key, ?errors, "fluent formatting errors");
        }

        format!("MISSING: {key}")
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

fn build_bundle(
    locale: &LanguageIdentifier,
    source: &str,
) -> Option<FluentBundle<FluentResource>> {
    let resource = FluentResource::try_new(source.to_owned()).ok()?;
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Keeps numbers and paths free of bidi isolation marks.
    bundle.set_use_isolating(false);
    bundle.add_resource(resource).ok()?;
    Some(bundle)
}

fn parse_available(tag: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    tag.parse::<LanguageIdentifier>()
        .ok()
        .filter(|lang| available.contains(lang))
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    cli_lang
        .as_deref()
        .and_then(|tag| parse_available(tag, available))
        .or_else(|| {
            config
                .general
                .language
                .as_deref()
                .and_then(|tag| parse_available(tag, available))
        })
        .or_else(|| sys_locale::get_locale().and_then(|tag| parse_available(&tag, available)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn cli_language_wins() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn config_language_used_without_cli() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unknown_cli_language_falls_through() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("xx-YY".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn default_locale_is_en_us() {
        assert_eq!(default_locale().to_string(), DEFAULT_LOCALE);
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.current_locale().to_string(), "en-US");
        assert_eq!(i18n.tr("window-title"), "IcedShrink");
        assert_ne!(i18n.tr("uploader-delete"), i18n.tr("missing-key"));

        let french = I18n::new(Some("fr".to_string()), &Config::default());
        assert_eq!(french.current_locale().to_string(), "fr");
    }

    #[test]
    fn arguments_are_substituted() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(
            i18n.tr_with_args("uploader-original-title", &[("size", "1953.13")]),
            "Original (1953.13 KB)"
        );
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }
}
