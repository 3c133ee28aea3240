// SPDX-License-Identifier: MPL-2.0
use sunpower_nav::config::{self, Config};
use sunpower_nav::infrastructure::FilePreferenceStore;
use sunpower_nav::locale::{self, current_locale_with};
use sunpower_nav::menu::{entry_for_target, EntryKind, MENU};
use sunpower_nav::port::{PreferenceStore, Router};
use sunpower_nav::test_utils::{FakeRouter, FakeSurface, MemoryPreferences};
use sunpower_nav::{
    dispatch, resolve, switch_to, ContentStore, Locale, NavigationAction, ScrollCoordinator,
    ScrollOutcome,
};
use tempfile::tempdir;

/// A section click away from home: redirect home, then scroll once the
/// destination reports ready.
#[test]
fn section_click_away_from_home_navigates_then_scrolls() {
    let products = entry_for_target("products").expect("catalog entry");
    let mut router = FakeRouter::at("/en/articles");
    let mut surface = FakeSurface::with_anchors(&["articles-list"]);
    let mut coordinator = ScrollCoordinator::new();

    let locale = resolve("en");
    let action = dispatch(products, &router.current_path(), locale);
    assert_eq!(
        action,
        NavigationAction::NavigateThenScroll {
            path: "/en".to_string(),
            anchor: "products".to_string(),
        }
    );

    let outcome = coordinator.execute(products.kind, action, &mut router, &mut surface);
    assert_eq!(outcome, None);
    assert_eq!(router.path, "/en");

    // The home page mounts with its section anchors.
    surface.set_anchors(&["introduction", "products", "contacts"]);
    let outcome = coordinator.on_destination_ready(&router.current_path(), &mut surface);

    assert_eq!(outcome, Some(ScrollOutcome::Scrolled));
    assert_eq!(surface.scrolled_to, vec!["products".to_string()]);
}

/// The user clicks a section entry, then switches locale before the home
/// page reports ready: the deferred scroll must be discarded, not executed
/// against the wrong page.
#[test]
fn locale_switch_before_readiness_cancels_deferred_scroll() {
    let contacts = entry_for_target("contacts").expect("catalog entry");
    let mut router = FakeRouter::at("/en/articles");
    let mut surface = FakeSurface::with_anchors(&[]);
    let mut prefs = MemoryPreferences::default();
    let mut coordinator = ScrollCoordinator::new();

    let action = dispatch(contacts, &router.current_path(), Locale::En);
    coordinator.execute(contacts.kind, action, &mut router, &mut surface);
    assert_eq!(coordinator.pending_destination(), Some("/en"));

    // Locale switch fires before the home page mounted.
    let new_path = switch_to(Locale::De, &mut router, &mut prefs).expect("switch");
    assert_eq!(new_path, "/de");

    surface.set_anchors(&["introduction", "products", "contacts"]);
    let outcome = coordinator.on_destination_ready(&router.current_path(), &mut surface);

    assert_eq!(outcome, Some(ScrollOutcome::Cancelled));
    assert!(surface.scrolled_to.is_empty());
    assert_eq!(surface.top_scrolls, 0);
}

/// Page-kind entries are hard destinations and also invalidate any pending
/// deferred scroll.
#[test]
fn page_click_supersedes_pending_scroll() {
    let products = entry_for_target("products").expect("catalog entry");
    let articles = entry_for_target("/articles").expect("catalog entry");
    let mut router = FakeRouter::at("/cs/articles");
    let mut surface = FakeSurface::with_anchors(&[]);
    let mut coordinator = ScrollCoordinator::new();

    let action = dispatch(products, &router.current_path(), Locale::Cs);
    coordinator.execute(products.kind, action, &mut router, &mut surface);

    let action = dispatch(articles, &router.current_path(), Locale::Cs);
    assert_eq!(
        action,
        NavigationAction::Navigate {
            path: "/cs/articles".to_string(),
        }
    );
    coordinator.execute(articles.kind, action, &mut router, &mut surface);

    assert!(coordinator.pending_destination().is_none());
    assert_eq!(router.path, "/cs/articles");
}

/// Locale switching persists across "visits": a fresh store rooted at the
/// same directory reads the preference back, and the locale chain uses it
/// when the path carries no locale segment.
#[test]
fn switched_locale_survives_restart_via_file_store() {
    let temp_dir = tempdir().expect("create temp dir");
    let mut router = FakeRouter::at("/en/articles?x=1");
    let mut prefs = FilePreferenceStore::with_base_dir(temp_dir.path().to_path_buf());

    let path = switch_to(Locale::De, &mut router, &mut prefs).expect("switch");
    assert_eq!(path, "/de/articles?x=1");

    // Next visit: new store instance, path without a locale segment.
    let prefs = FilePreferenceStore::with_base_dir(temp_dir.path().to_path_buf());
    let token = prefs.load();
    assert_eq!(token.as_deref(), Some("de"));

    let active = current_locale_with("/articles", token.as_deref(), None, Some("en-US"));
    assert_eq!(active, Locale::De);
}

/// A preference from an earlier visit drives the locale when the path
/// carries no locale segment, and only if it is an exact supported code.
#[test]
fn stored_preference_feeds_locale_chain_on_bare_paths() {
    let prefs = MemoryPreferences::with_token("cs");
    let token = prefs.load();

    let active = current_locale_with("/articles", token.as_deref(), None, None);
    assert_eq!(active, Locale::Cs);

    // A tampered or legacy token is not trusted.
    let prefs = MemoryPreferences::with_token("CS");
    let token = prefs.load();
    let active = current_locale_with("/articles", token.as_deref(), None, None);
    assert_eq!(active, Locale::En);
}

/// Round trip from the spec: switching away and back yields the original
/// path.
#[test]
fn locale_switch_round_trip_restores_path() {
    let original = "/en/contacts";
    let mut router = FakeRouter::at(original);
    let mut prefs = MemoryPreferences::default();

    switch_to(Locale::De, &mut router, &mut prefs).expect("to de");
    switch_to(Locale::Cs, &mut router, &mut prefs).expect("to cs");
    let back = switch_to(Locale::En, &mut router, &mut prefs).expect("back to en");

    assert_eq!(back, original);
    assert_eq!(router.path, original);
}

/// Every locale renders from a complete dictionary; menu labels and the
/// inquiry button are localized from the static catalog.
#[test]
fn all_locales_have_complete_content_and_labels() {
    let store = ContentStore::load().expect("embedded dictionaries parse");

    for loc in locale::SUPPORTED_LOCALES {
        let dictionary = store.dictionary(loc).expect("dictionary validates");
        assert_eq!(dictionary.locale(), loc);
        assert!(dictionary.text("site-title").contains("Sunpower"));

        for entry in &MENU {
            assert!(!entry.labels.get(loc).is_empty());
        }
    }
}

/// The configured retry budget feeds the coordinator: a limit of one means
/// one Pending signal before the Section fallback gives up.
#[test]
fn config_retry_limit_drives_deferred_scroll_budget() {
    let temp_dir = tempdir().expect("create temp dir");
    let config_path = temp_dir.path().join("settings.toml");
    let config = Config {
        language: None,
        scroll_retry_limit: Some(1),
    };
    config::save_to_path(&config, &config_path).expect("save config");
    let loaded = config::load_from_path(&config_path).expect("load config");

    let mut coordinator = ScrollCoordinator::with_retry_limit(loaded.scroll_retry_limit());
    let mut router = FakeRouter::at("/de/articles");
    let mut surface = FakeSurface::with_anchors(&[]);

    let products = entry_for_target("products").expect("catalog entry");
    let action = dispatch(products, &router.current_path(), Locale::De);
    coordinator.execute(products.kind, action, &mut router, &mut surface);

    assert_eq!(
        coordinator.on_destination_ready("/de", &mut surface),
        Some(ScrollOutcome::Pending)
    );
    assert_eq!(
        coordinator.on_destination_ready("/de", &mut surface),
        Some(ScrollOutcome::Skipped)
    );
}

/// The home entry's missing-anchor fallback also applies on the deferred
/// path: after exhausting retries it scrolls to the top instead of failing
/// silently.
#[test]
fn home_entry_deferred_fallback_scrolls_to_top() {
    let introduction = entry_for_target("introduction").expect("catalog entry");
    assert_eq!(introduction.kind, EntryKind::Home);

    let mut coordinator = ScrollCoordinator::with_retry_limit(0);
    let mut router = FakeRouter::at("/en/articles");
    let mut surface = FakeSurface::with_anchors(&[]);

    let action = dispatch(introduction, &router.current_path(), Locale::En);
    coordinator.execute(introduction.kind, action, &mut router, &mut surface);

    let outcome = coordinator.on_destination_ready("/en", &mut surface);
    assert_eq!(outcome, Some(ScrollOutcome::ScrolledToTop));
    assert_eq!(surface.top_scrolls, 1);
}
