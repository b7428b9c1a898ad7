use thiserror::Error;

/// Everything that can go wrong while driving a menu.
///
/// Transport failures from Discord are passed through untouched; the menu
/// attempts every platform call exactly once and never retries.
#[derive(Debug, Error)]
pub enum MenuError {
    /// A menu needs at least one page, since page 0 is rendered immediately.
    #[error("menu requires at least one page")]
    EmptyPageList,

    /// A named navigation target does not exist among the menu's pages.
    #[error("page \"{0}\" not found")]
    PageNotFound(String),

    /// A numeric navigation target is outside `0..pages.len()`.
    #[error("page index {index} out of range (menu has {len} pages)")]
    PageIndexOutOfRange { index: usize, len: usize },

    /// `ReplyMethod::Reply` or `ReplyMethod::FollowUp` was requested on a menu
    /// that was not constructed from a command interaction.
    #[error("menu was not started from a command interaction")]
    MissingInteraction,

    /// The menu has no channel to send to and no user to open a DM with.
    #[error("no channel available to send the menu to")]
    MissingChannel,

    /// An underlying Discord API call failed.
    #[error(transparent)]
    Discord(#[from] serenity::Error),
}

pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_requested_name() {
        let err = MenuError::PageNotFound("settings".to_string());
        assert_eq!(err.to_string(), "page \"settings\" not found");
    }

    #[test]
    fn display_carries_index_and_len() {
        let err = MenuError::PageIndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "page index 7 out of range (menu has 3 pages)"
        );
    }
}
