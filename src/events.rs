use serenity::async_trait;

use crate::page::MenuPage;

/// A page transition, handed to [`MenuEventHandler::page_changing`] before the
/// menu's state moves to the new page.
#[derive(Clone, Copy, Debug)]
pub struct PageChange<'a> {
    pub old_index: usize,
    pub old_page: &'a MenuPage,
    pub new_index: usize,
    pub new_page: &'a MenuPage,
}

/// Observer for menu lifecycle notifications, registered at construction via
/// [`MenuOptions::event_handler`](crate::MenuOptions).
///
/// Both methods default to no-ops; implement only what you need.
#[async_trait]
pub trait MenuEventHandler: Send + Sync {
    /// Fired before any state changes, once the target page has been resolved.
    async fn page_changing(&self, _change: PageChange<'_>) {}

    /// Fired after the page's final content has been rendered.
    async fn page_changed(&self, _index: usize, _page: &MenuPage) {}
}
