// SPDX-License-Identifier: MPL-2.0
use iced_shrink::compression::CompressionOptions;
use iced_shrink::config::{self, CompressionConfig, Config, GeneralConfig};
use iced_shrink::i18n::fluent::I18n;
use iced_shrink::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn config_round_trips_through_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: Some(ThemeMode::Dark),
        },
        compression: CompressionConfig {
            max_size_mb: Some(0.5),
            max_width_or_height: Some(800),
            ..CompressionConfig::default()
        },
    };

    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config file");

    assert_eq!(loaded, config);
}

#[test]
fn missing_compression_section_uses_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[general]\ntheme_mode = \"light\"\n").expect("write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    assert_eq!(loaded.general.theme_mode, Some(ThemeMode::Light));
    assert_eq!(
        CompressionOptions::from_config(&loaded.compression),
        CompressionOptions::default()
    );
}

#[test]
fn out_of_range_compression_values_are_clamped() {
    let cfg = CompressionConfig {
        max_size_mb: Some(1_000.0),
        max_width_or_height: Some(1),
        initial_quality: Some(3.0),
        use_worker: Some(false),
        always_keep_resolution: Some(false),
    };

    let options = CompressionOptions::from_config(&cfg);
    assert_eq!(options.max_size_mb, config::MAX_MAX_SIZE_MB);
    assert_eq!(options.max_width_or_height, config::MIN_MAX_WIDTH_OR_HEIGHT);
    assert_eq!(options.initial_quality, config::MAX_QUALITY);
    assert!(!options.use_worker);
    assert!(!options.always_keep_resolution);
}

#[test]
fn corrupt_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "not = [valid").expect("write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn language_from_config_selects_bundle() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: None,
        },
        ..Config::default()
    };

    let i18n = I18n::new(None, &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("uploader-delete"), "Supprimer");
}

#[test]
fn cli_language_wins_over_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: None,
        },
        ..Config::default()
    };

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("uploader-delete"), "Delete");
}
