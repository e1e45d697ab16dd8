// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the showcase component,
//! localization, configuration and the navigation sink.
//!
//! Content is loaded and validated before the window opens; a fatal content
//! error never reaches [`run`].

pub mod config;
mod handlers;
pub mod logging;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{ContentSource, NavigationSink};
use crate::domain::showcase::Showcase;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{fetch_poster, EmbeddedContent, FileContent, LogNavigator};
use crate::ui::showcase;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    showcase: showcase::State,
    navigator: Box<dyn NavigationSink>,
    wide_breakpoint: f32,
    /// i18n keys of startup warnings shown above the showcase.
    warnings: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active", self.showcase.showcase().active())
            .field("wide_breakpoint", &self.wide_breakpoint)
            .field("warnings", &self.warnings)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1440;
pub const MIN_WINDOW_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Everything the window needs, prepared before it opens.
#[derive(Debug, Clone)]
pub struct Bootstrap {
    pub flags: Flags,
    pub config: Config,
    /// i18n key of a non-fatal config problem.
    pub config_warning: Option<String>,
    pub showcase: Showcase,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Picks the content source: CLI flag, then config, then the bundled document.
pub fn content_source(flags: &Flags, config: &Config) -> Box<dyn ContentSource> {
    if let Some(path) = &flags.content {
        return Box::new(FileContent::new(path));
    }
    if let Some(path) = &config.content.path {
        return Box::new(FileContent::new(path.clone()));
    }
    Box::new(EmbeddedContent)
}

/// Reads and validates the showcase content.
///
/// Missing media references are logged and tolerated.
///
/// # Errors
///
/// Fails if the source cannot be read or parsed, or if the records are
/// empty or contain duplicate ids.
pub fn load_showcase(source: &dyn ContentSource, config: &Config) -> Result<Showcase> {
    let mut content = source.load()?;

    if let Some(target) = config
        .content
        .cta_target
        .as_deref()
        .map(str::trim)
        .filter(|target| !target.is_empty())
    {
        content.cta_target = target.to_string();
    }

    let showcase = Showcase::new(content)?;

    for issue in showcase.catalog().media_issues() {
        tracing::warn!(%issue, "degrading media slot");
    }
    tracing::info!(
        source = %source.describe(),
        tabs = showcase.catalog().records().len(),
        cta_target = showcase.cta_target(),
        "showcase content loaded"
    );
    Ok(showcase)
}

/// i18n key of the banner shown when some records lack media.
pub const MISSING_MEDIA_WARNING: &str = "warning-missing-media";

/// Starts one download per remote poster. Each result comes back as a
/// `PosterLoaded` message.
fn fetch_posters(state: &showcase::State) -> Task<Message> {
    Task::batch(state.pending_posters().into_iter().map(|poster| {
        let url = poster.as_str().to_string();
        Task::perform(fetch_poster(url), move |result| {
            Message::Showcase(showcase::Message::PosterLoaded(
                poster,
                result.map_err(|err| err.to_string()),
            ))
        })
    }))
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(bootstrap: Bootstrap) -> iced::Result {
    // iced 0.14 requires a Fn boot closure
    let boot = move || App::new(bootstrap.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(bootstrap: Bootstrap) -> (Self, Task<Message>) {
        let i18n = I18n::new(bootstrap.flags.lang.clone(), &bootstrap.config);

        let mut warnings: Vec<String> = bootstrap.config_warning.into_iter().collect();
        if !bootstrap.showcase.catalog().media_issues().is_empty() {
            warnings.push(MISSING_MEDIA_WARNING.to_string());
        }

        let app = App {
            i18n,
            showcase: showcase::State::new(bootstrap.showcase),
            navigator: Box::new(LogNavigator),
            wide_breakpoint: bootstrap.config.layout.wide_breakpoint(),
            warnings,
        };
        let task = fetch_posters(&app.showcase);

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.showcase.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Showcase(message) => self.handle_showcase_message(message),
            Message::DismissWarning => {
                self.warnings.clear();
                Task::none()
            }
            Message::WindowCloseRequested(_) => self.handle_close_requested(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            showcase: &self.showcase,
            wide_breakpoint: self.wide_breakpoint,
            warnings: &self.warnings,
        })
    }
}
