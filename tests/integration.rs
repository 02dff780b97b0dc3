// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{App, Message};
use iced_folio::config::{self, AnimationConfig, Config, GeneralConfig, SortOrder};
use iced_folio::gallery::{self, GalleryItem};
use iced_folio::i18n::fluent::I18n;
use iced_folio::ui::{grid, modal};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn item(title: &str) -> GalleryItem {
    GalleryItem::new(
        PathBuf::from(format!("/gallery/{title}.jpg")),
        format!("Photo {title}"),
        title,
    )
}

fn gallery_app(titles: &[&str]) -> App {
    let config = Config::default();
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    App::with_items(titles.iter().copied().map(item).collect(), &config, i18n)
}

#[test]
fn test_select_then_escape_round_trip() {
    let mut app = gallery_app(&["A", "B"]);
    assert!(!app.modal().is_open());

    let _ = app.update(Message::Grid(grid::Message::TileActivated(1)));
    assert_eq!(app.grid().selected().map(|i| i.title.as_str()), Some("B"));
    assert!(app.modal().is_open());
    assert!(app.modal().listens_for_escape());
    assert!(app.modal().locks_scroll());

    let _ = app.update(Message::Modal(modal::Message::EscapePressed));
    assert!(app.grid().selected().is_none());
    assert!(!app.modal().is_open());
    assert!(!app.modal().listens_for_escape());
    assert!(!app.modal().locks_scroll());
}

#[test]
fn test_escape_without_selection_is_ignored() {
    let mut app = gallery_app(&["A"]);
    let _ = app.update(Message::Modal(modal::Message::EscapePressed));

    assert!(app.grid().selected().is_none());
    assert_eq!(app.modal().scope_stats().acquired, 0);
}

#[test]
fn test_entrance_runs_after_first_frame() {
    let mut app = gallery_app(&["A"]);
    let _ = app.update(Message::Grid(grid::Message::TileActivated(0)));
    assert_eq!(app.modal().phase(), modal::AnimationPhase::Pending);
    assert_eq!(app.modal().reveal(), modal::RevealFrame::HIDDEN);

    let first = Instant::now() + Duration::from_millis(16);
    let _ = app.update(Message::Frame(first));
    assert!(app.modal().is_animated());
    assert!(app.modal().needs_frames());

    let _ = app.update(Message::Frame(first + Duration::from_secs(2)));
    assert!(!app.modal().needs_frames());
    assert_eq!(app.modal().reveal(), modal::RevealFrame::SETTLED);
}

#[test]
fn test_repeated_open_close_keeps_scopes_balanced() {
    let mut app = gallery_app(&["A", "B", "C"]);

    for cycle in 0..10 {
        let _ = app.update(Message::Grid(grid::Message::TileActivated(cycle % 3)));
        let _ = app.update(Message::Frame(Instant::now() + Duration::from_millis(16)));
        let _ = app.update(Message::Modal(modal::Message::ClosePressed));
    }

    let stats = app.modal().scope_stats();
    assert_eq!(stats.acquired, 10);
    assert_eq!(stats.released, 10);
    assert!(stats.is_balanced());
}

#[test]
fn test_switching_selection_keeps_modal_open_without_reacquiring() {
    let mut app = gallery_app(&["A", "B"]);
    let _ = app.update(Message::Grid(grid::Message::TileActivated(0)));
    let _ = app.update(Message::Frame(Instant::now() + Duration::from_millis(16)));

    let _ = app.update(Message::Grid(grid::Message::TileActivated(1)));

    assert_eq!(app.grid().selected().map(|i| i.title.as_str()), Some("B"));
    assert!(app.modal().is_open());
    assert!(app.modal().is_animated());
    assert_eq!(app.modal().scope_stats().acquired, 1);
    assert_eq!(app.modal().scope_stats().released, 0);
}

#[test]
fn test_config_round_trip_through_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        animation: AnimationConfig {
            backdrop_ms: Some(250),
            ..AnimationConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.animation.timings().backdrop,
        Duration::from_millis(250)
    );
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("modal-close"), "Close");

    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("modal-close"), "Fermer");
}

#[test]
fn test_manifest_gallery_opens_in_app() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let manifest = dir.path().join("gallery.toml");
    fs::write(
        &manifest,
        r#"
[[items]]
src = "fox.jpg"
alt = "A red fox"
title = "Fox"
description = "Taken at dawn."

[[items]]
src = "owl.jpg"
alt = "A snowy owl"
title = "Owl"
"#,
    )
    .expect("Failed to write manifest");

    let items = gallery::load_source(&manifest, SortOrder::Alphabetical)
        .expect("Manifest should load");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].source, dir.path().join("fox.jpg"));

    let config = Config::default();
    let mut app = App::with_items(items, &config, I18n::new(Some("en-US".into()), &config));
    assert_eq!(app.title(), "2 images - IcedFolio");

    let _ = app.update(Message::Grid(grid::Message::TileActivated(0)));
    let selected = app.grid().selected().expect("Fox should be selected");
    assert_eq!(selected.description, "Taken at dawn.");
}

#[test]
fn test_directory_gallery_uses_file_names() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("b_owl.png"), b"x").expect("Failed to write file");
    fs::write(dir.path().join("a_fox.png"), b"x").expect("Failed to write file");
    fs::write(dir.path().join("readme.txt"), b"x").expect("Failed to write file");

    let items =
        gallery::load_source(dir.path(), SortOrder::Alphabetical).expect("Directory should load");

    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["A fox", "B owl"]);
}
