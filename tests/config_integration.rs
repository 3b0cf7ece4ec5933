// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use std::fs;
use tempfile::tempdir;
use yadadri360::app::config::{self, Config, LOAD_WARNING};
use yadadri360::ui::theming::ThemeMode;

#[test]
fn settings_round_trip_through_a_directory() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut settings = Config::default();
    settings.general.theme_mode = ThemeMode::Dark;
    settings.carousel.rotation_interval_ms = Some(8_000);
    settings.tracking.visibility_threshold = Some(0.5);
    config::save_with_override(&settings, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, settings);
    assert_eq!(loaded.rotation_interval().as_millis(), 8_000);
    assert_abs_diff_eq!(loaded.visibility_threshold().value(), 0.5);
}

#[test]
fn unreadable_settings_fall_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[carousel\nrotation = ")
        .expect("Failed to write broken config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(LOAD_WARNING));
}

#[test]
fn missing_settings_are_silent_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (loaded, warning) = config::load_with_override(Some(dir.path().join("absent")));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_none());
}

#[test]
fn out_of_range_values_are_clamped_on_read() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[carousel]\nrotation_interval_ms = 10\n\n[tracking]\nvisibility_threshold = 4.0\n",
    )
    .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.carousel.rotation_interval_ms, Some(10));
    assert_eq!(loaded.rotation_interval().as_millis(), 1_000);
    assert_abs_diff_eq!(loaded.visibility_threshold().value(), 1.0);
}
