//! # Vitrine Client
//!
//! Everything a gallery front end needs besides drawing: fetching the catalog
//! once, tracking load state, filtering and searching, per-category counts,
//! shareable links and short-lived notifications.
//!
//! ```no_run
//! use vitrine_client::{CatalogBrowser, HttpCatalogSource, MemoryClipboard, ViewDisplay};
//!
//! # async fn run() -> Result<(), vitrine_client::FetchError> {
//! let source = HttpCatalogSource::new("http://localhost:3000")?;
//! let mut browser = CatalogBrowser::new(source, MemoryClipboard::new(), "http://localhost:3000");
//! browser.load().await;
//! browser.set_search("beach");
//! if browser.view().display() == ViewDisplay::Entries {
//!     for entry in browser.view().visible_entries() {
//!         println!("{}", entry.name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod api_client;
pub mod browser;
pub mod clipboard;
pub mod error;
pub mod feedback;
pub mod view;

pub use api_client::{CatalogSource, HttpCatalogSource};
pub use browser::{CatalogBrowser, FETCH_FAILED_MESSAGE, LINK_COPIED_MESSAGE};
pub use clipboard::{
    Clipboard, FallbackClipboard, MemoryClipboard, Osc52Clipboard, SystemClipboard,
    UnavailableClipboard, terminal_clipboard,
};
pub use error::{ClipboardError, FetchError};
pub use feedback::{
    NOTIFICATION_TTL, Notification, NotificationCenter, NotificationId,
    NotificationLevel,
};
pub use view::{CatalogView, LoadPhase, ViewDisplay};
