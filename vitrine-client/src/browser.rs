use log::{info, warn};
use vitrine_core::{absolute_link, query::CategoryFilter};

use crate::{
    api_client::CatalogSource,
    clipboard::Clipboard,
    feedback::{NOTIFICATION_TTL, NotificationCenter, NotificationLevel},
    view::{CatalogView, LoadPhase},
};

pub const FETCH_FAILED_MESSAGE: &str = "Unable to fetch media files";
pub const LINK_COPIED_MESSAGE: &str = "Link copied to clipboard";

/// Drives a [`CatalogView`] from a catalog source.
///
/// The catalog is fetched exactly once. Failures never escape: they land in
/// the view as [`LoadPhase::Failed`] plus a notification.
#[derive(Debug)]
pub struct CatalogBrowser<S, C> {
    source: S,
    clipboard: C,
    origin: String,
    view: CatalogView,
    notifications: NotificationCenter,
    fetched: bool,
}

impl<S: CatalogSource, C: Clipboard> CatalogBrowser<S, C> {
    /// `origin` is prepended to entry addresses when copying links.
    pub fn new(source: S, clipboard: C, origin: impl Into<String>) -> Self {
        Self {
            source,
            clipboard,
            origin: origin.into(),
            view: CatalogView::new(),
            notifications: NotificationCenter::new(),
            fetched: false,
        }
    }

    /// Fetch the catalog. Later calls are no-ops.
    pub async fn load(&mut self) -> LoadPhase {
        if self.fetched {
            return self.view.phase();
        }
        self.fetched = true;

        match self.source.fetch_catalog().await {
            Ok(catalog) => {
                info!("catalog loaded with {} entries", catalog.len());
                self.view.apply_loaded(catalog);
            }
            Err(err) => {
                warn!("catalog fetch failed: {}", err);
                self.view.apply_failed();
                self.notifications
                    .show(FETCH_FAILED_MESSAGE, NotificationLevel::Error);
            }
        }
        self.view.phase()
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.view.set_category(category);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.set_search(search);
    }

    /// Copy the absolute link for `address` and confirm it to the user.
    ///
    /// The confirmation is shown whether or not the clipboard accepted the
    /// text. Returns the link.
    pub fn copy_link(&self, address: &str) -> String {
        let link = absolute_link(&self.origin, address);
        if let Err(err) = self.clipboard.write_text(&link) {
            warn!("clipboard write failed for {}: {}", link, err);
        }
        self.notifications.show_for(
            LINK_COPIED_MESSAGE,
            NotificationLevel::Info,
            NOTIFICATION_TTL,
        );
        link
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}
