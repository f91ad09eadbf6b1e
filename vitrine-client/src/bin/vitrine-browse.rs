//! Terminal front end for a Vitrine server.
//!
//! Loads the catalog once, prints the header counts and the filtered listing,
//! and optionally copies one entry's link.

use anyhow::Context;
use clap::Parser;
use log::warn;
use vitrine_client::{
    CatalogBrowser, HttpCatalogSource, Notification, NotificationLevel,
    terminal_clipboard,
};
use vitrine_core::query::CategoryFilter;

#[derive(Parser, Debug)]
#[command(name = "vitrine-browse")]
#[command(about = "Browse the media catalog of a Vitrine server")]
struct Args {
    /// Server origin the catalog and links are resolved against
    #[arg(long, env = "VITRINE_ORIGIN", default_value = "http://localhost:3000")]
    origin: String,

    /// Category to show: all, image, video, doc or other
    #[arg(long, default_value = "all")]
    category: CategoryFilter,

    /// Case-insensitive substring to match against file names
    #[arg(long, default_value = "")]
    search: String,

    /// Copy the link of the entry with this exact name
    #[arg(long, value_name = "NAME")]
    copy: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let args = Args::parse();

    let source = HttpCatalogSource::new(&args.origin)
        .context("failed to create HTTP client")?;
    let mut browser =
        CatalogBrowser::new(source, terminal_clipboard(), args.origin);

    browser.load().await;
    browser.set_category(args.category);
    browser.set_search(args.search);

    print_listing(&browser);
    report_notification(browser.notifications().current());

    if let Some(name) = args.copy.as_deref() {
        match browser.view().find(name).map(|entry| entry.url.clone()) {
            Some(address) => {
                let link = browser.copy_link(&address);
                println!("{link}");
                report_notification(browser.notifications().current());
            }
            None => warn!("no entry named {:?} in the catalog", name),
        }
    }

    Ok(())
}

fn print_listing<S, C>(browser: &CatalogBrowser<S, C>)
where
    S: vitrine_client::CatalogSource,
    C: vitrine_client::Clipboard,
{
    let view = browser.view();
    let stats = view.stats();
    println!(
        "Total: {}  Images: {}  Videos: {}  Docs & other: {}",
        stats.total,
        stats.image,
        stats.video,
        stats.documents_and_other()
    );

    let filter = view.filter();
    let search = filter.normalized_search();
    if search.is_empty() {
        println!("Showing: {}", filter.category.label());
    } else {
        println!("Showing: {} matching {:?}", filter.category.label(), search);
    }

    match view.display().message() {
        Some(message) => println!("{message}"),
        None => {
            for entry in view.visible_entries() {
                println!(
                    "{:<9}{}\t{}",
                    entry.category.label(),
                    entry.name,
                    entry.url
                );
            }
        }
    }
}

fn report_notification(notification: Option<Notification>) {
    if let Some(notification) = notification {
        let level = match notification.level {
            NotificationLevel::Info => "info",
            NotificationLevel::Error => "error",
        };
        eprintln!("[{level}] {}", notification.message);
    }
}
