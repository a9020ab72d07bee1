#![windows_subsystem = "windows"]

use anyhow::Context;
use landing::domain::config::SiteConfig;
use landing::features::showcase::PageLoad;
use landing::features::showcase::params::UrlParams;
use landing::kernel::config::load_config;
use landing::logger::{LevelFilter, Logger};
use landing_desktop::DesktopApp;
use landing_desktop::bridge::{self, DesktopForm, DesktopPage};
use landing_desktop::components::SECTIONS;
use landing_desktop::services::Services;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let config: SiteConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let level = config.logging.level.parse().unwrap_or(LevelFilter::INFO);
    let mut logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .console(true)
        .level(level)
        .json(config.logging.json);
    if let Some(directory) = &config.logging.directory {
        logger = logger.directory(directory);
    }
    let _log = logger.init()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("landing-worker")
        .build()
        .context("Failed to start the async runtime")?;

    let (tx, rx) = bridge::channel();
    let form = Arc::new(DesktopForm::new(tx.clone()));
    let page_view = Arc::new(DesktopPage::new(tx));

    let services = runtime.block_on(async {
        let platform = landing::init(config).await?;
        let page = platform.page(Arc::clone(&page_view), page_load()?).await?;
        let registration = platform.registration(Arc::clone(&form));
        anyhow::Ok(Services::new(
            runtime.handle().clone(),
            registration,
            page,
            Arc::clone(&form),
            Arc::clone(&page_view),
            rx,
        ))
    })?;

    DesktopApp::new().launch(services);

    runtime.shutdown_background();
    Ok(())
}

/// The first argument may carry the page address, e.g. `https://host/?ref=abc&course=2`,
/// or a bare query string.
fn page_load() -> anyhow::Result<PageLoad> {
    let params = match std::env::args().nth(1) {
        Some(address) if address.contains("://") => UrlParams::from_url(&address)?,
        Some(query) => UrlParams::from_query(&query),
        None => UrlParams::default(),
    };

    Ok(PageLoad {
        params,
        timezone: std::env::var("TZ").ok().filter(|zone| !zone.is_empty()),
        sections: SECTIONS.to_vec(),
    })
}
