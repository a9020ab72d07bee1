//! # Landing Desktop
//!
//! Renders the course landing page in a native window. The form and the page
//! controller run on a tokio runtime; [`bridge`] turns their view calls into
//! [`bridge::UiUpdate`] messages that the Dioxus tree folds into a [`screen::Screen`].

pub mod bridge;
pub mod components;
pub mod screen;
pub mod services;

#[cfg(feature = "desktop")]
use dioxus::desktop::{Config, WindowBuilder};
#[cfg(feature = "desktop")]
use dioxus::prelude::*;
#[cfg(feature = "desktop")]
use services::Services;

#[cfg(feature = "desktop")]
const STYLES: &str = include_str!("../assets/main.css");

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self { title: "Time Series Analysis Course".to_owned(), width: 1280.0, height: 860.0 }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Opens the window and blocks until it is closed.
    #[cfg(feature = "desktop")]
    pub fn launch(self, services: Services) {
        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let head = format!(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0"><style>{STYLES}</style>"#
        );
        let cfg = Config::default().with_window(window).with_custom_head(head);

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(services.clone()))
            .launch(components::App);
    }
}
