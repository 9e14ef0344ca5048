// SPDX-License-Identifier: MPL-2.0
//! Application shell: wires the card browser to the iced runtime.
//!
//! The shell owns the pieces the browser component must not know about:
//! configuration, locale bundles, the diagnostics collector, and the network
//! task spawning. The browser reports what it needs through [`browser::Effect`]
//! and the shell turns that into [`Task`]s.

pub mod message;
pub mod subscription;
pub mod view;

pub use message::{Flags, Message};

use crate::api;
use crate::config;
use crate::diagnostics::{Collector, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::browser;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Task, Theme};

const WINDOW_DEFAULT_WIDTH: f32 = 460.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 780.0;
const MIN_WINDOW_WIDTH: f32 = 400.0;
const MIN_WINDOW_HEIGHT: f32 = 640.0;

pub struct App {
    i18n: I18n,
    browser: browser::State,
    diagnostics: Collector,
    theme_mode: ThemeMode,
    colors: ColorScheme,
    api_url: String,
}

/// Timestamped destination for a Ctrl/Cmd+D diagnostics export, under the
/// user's data directory.
fn default_export_path() -> Option<std::path::PathBuf> {
    dirs::data_dir().map(|mut path| {
        path.push("MeowMatch");
        path.push(format!(
            "diagnostics-{}.json",
            chrono::Utc::now().format("%Y%m%d-%H%M%S")
        ));
        path
    })
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the first cat fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let theme_mode = config.theme_mode;
        let api_url = flags
            .api_url
            .or(config.api_url)
            .unwrap_or_else(|| api::DEFAULT_API_URL.to_string());

        let app = App {
            i18n,
            browser: browser::State::new(),
            diagnostics: Collector::new(),
            theme_mode,
            colors: ColorScheme::from_mode(theme_mode),
            api_url,
        };

        let task = app.fetch_task();
        (app, task)
    }

    fn fetch_task(&self) -> Task<Message> {
        Task::perform(api::fetch_card(self.api_url.clone()), |result| {
            Message::Browser(browser::Message::FetchSettled(result))
        })
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Browser(msg) => {
                if let browser::Message::FetchSettled(Err(err)) = &msg {
                    eprintln!("Cat fetch failed: {}", err);
                    self.diagnostics
                        .record(Severity::Error, format!("Cat fetch failed: {}", err));
                }
                let effect = self.browser.handle(msg);
                self.apply_effect(effect)
            }
            Message::Tick(instant) => {
                let effect = self.browser.handle(browser::Message::Tick(instant));
                self.apply_effect(effect)
            }
            Message::ExportDiagnostics => {
                match default_export_path() {
                    Some(path) => self.export_diagnostics_to(&path),
                    None => eprintln!("No data directory available for diagnostics export"),
                }
                Task::none()
            }
        }
    }

    /// Writes the diagnostics buffer to `path` and records the outcome.
    fn export_diagnostics_to(&mut self, path: &std::path::Path) {
        match self.diagnostics.export_to_path(path) {
            Ok(()) => {
                eprintln!("Diagnostics exported to {}", path.display());
                self.diagnostics.record(
                    Severity::Info,
                    format!("Diagnostics exported to {}", path.display()),
                );
            }
            Err(err) => eprintln!("Diagnostics export failed: {}", err),
        }
    }

    fn apply_effect(&mut self, effect: browser::Effect) -> Task<Message> {
        match effect {
            browser::Effect::None => Task::none(),
            browser::Effect::FetchNext => self.fetch_task(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> iced::Subscription<Message> {
        iced::Subscription::batch([
            subscription::create_tick_subscription(self.browser.is_animating()),
            subscription::create_event_subscription(),
        ])
    }

    fn view(&self) -> iced::Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            browser: &self.browser,
            colors: &self.colors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CatCard, CatRecord};
    use crate::error::ApiError;
    use crate::ui::browser::Phase;
    use iced::widget::image::Handle;

    fn test_app() -> App {
        App {
            i18n: I18n::default(),
            browser: browser::State::new(),
            diagnostics: Collector::new(),
            theme_mode: ThemeMode::Light,
            colors: ColorScheme::light(),
            api_url: api::DEFAULT_API_URL.to_string(),
        }
    }

    fn test_card() -> CatCard {
        CatCard {
            record: CatRecord {
                id: Some("abc".to_string()),
                url: "https://example.com/cat.jpg".to_string(),
                width: Some(640),
                height: Some(480),
            },
            handle: Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
        }
    }

    #[test]
    fn successful_fetch_displays_the_card() {
        let mut app = test_app();
        let _ = app.update(Message::Browser(browser::Message::FetchSettled(Ok(
            test_card(),
        ))));
        assert!(matches!(app.browser.phase(), Phase::Displaying { .. }));
    }

    #[test]
    fn failed_fetch_reaches_failed_phase_and_diagnostics() {
        let mut app = test_app();
        let _ = app.update(Message::Browser(browser::Message::FetchSettled(Err(
            ApiError::EmptyResponse,
        ))));
        assert!(matches!(app.browser.phase(), Phase::Failed { .. }));
        assert_eq!(app.diagnostics.error_count(), 1);
    }

    #[test]
    fn responding_starts_a_transition() {
        let mut app = test_app();
        let _ = app.update(Message::Browser(browser::Message::FetchSettled(Ok(
            test_card(),
        ))));
        let _ = app.update(Message::Browser(browser::Message::Respond { liked: true }));
        assert!(matches!(app.browser.phase(), Phase::Transitioning { .. }));
        // Still animating, so the tick subscription stays alive to finish
        // the swipe and trigger the next fetch.
        assert!(app.browser.is_animating());
    }

    #[test]
    fn retry_is_only_honored_from_failed() {
        let mut app = test_app();
        let _ = app.update(Message::Browser(browser::Message::Retry));
        // Retry while loading is ignored and the app keeps spinning.
        assert!(matches!(app.browser.phase(), Phase::Loading { .. }));

        let _ = app.update(Message::Browser(browser::Message::FetchSettled(Err(
            ApiError::Network("offline".to_string()),
        ))));
        let _ = app.update(Message::Browser(browser::Message::Retry));
        assert!(matches!(app.browser.phase(), Phase::Loading { .. }));
    }

    #[test]
    fn export_writes_recorded_failures_to_disk() {
        let mut app = test_app();
        let _ = app.update(Message::Browser(browser::Message::FetchSettled(Err(
            ApiError::HttpStatus(503),
        ))));

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("diagnostics.json");
        app.export_diagnostics_to(&path);

        let written = std::fs::read_to_string(&path).expect("export should exist");
        assert!(written.contains("503"));
        // The successful export itself is recorded.
        assert!(app
            .diagnostics
            .events()
            .any(|e| e.severity == Severity::Info));
    }

    #[test]
    fn window_title_comes_from_translations() {
        let app = test_app();
        assert_eq!(app.title(), "MeowMatch");
    }
}
