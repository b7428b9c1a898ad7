use std::fmt;
use std::sync::Arc;

use serenity::all::{CreateActionRow, CreateButton, CreateEmbed, ReactionType};
use serenity::futures::future::BoxFuture;

use crate::error::{MenuError, Result};
use crate::menu::EmbedMenu;

/// A caller-supplied effect invoked with the menu that received the input.
pub type MenuCallback = Arc<dyn for<'a> Fn(&'a mut EmbedMenu) -> BoxFuture<'a, ()> + Send + Sync>;

/// The effect bound to a reaction emoji or a button.
///
/// The navigation directives and the named jump are dispatched by the menu
/// itself; `Callback` hands control to the caller instead.
#[derive(Clone)]
pub enum MenuAction {
    /// Jump to page 0.
    First,
    /// Jump to the last page.
    Last,
    /// Go to the previous page, or do nothing on page 0.
    Previous,
    /// Go to the next page, or do nothing on the last page.
    Next,
    /// End the menu, leaving the message in place.
    Stop,
    /// End the menu and delete the message.
    Delete,
    /// Jump to the page with this name.
    Page(String),
    /// Invoke a caller-supplied callback with the menu.
    Callback(MenuCallback),
}

impl MenuAction {
    /// Wrap an async closure as a [`MenuAction::Callback`].
    pub fn callback<F>(f: F) -> Self
    where
        F: for<'a> Fn(&'a mut EmbedMenu) -> BoxFuture<'a, ()> + Send + Sync + 'static,
    {
        MenuAction::Callback(Arc::new(f))
    }
}

impl fmt::Debug for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::First => write!(f, "First"),
            MenuAction::Last => write!(f, "Last"),
            MenuAction::Previous => write!(f, "Previous"),
            MenuAction::Next => write!(f, "Next"),
            MenuAction::Stop => write!(f, "Stop"),
            MenuAction::Delete => write!(f, "Delete"),
            MenuAction::Page(name) => write!(f, "Page({name:?})"),
            MenuAction::Callback(_) => write!(f, "Callback(..)"),
        }
    }
}

/// A button together with the action it triggers.
///
/// The mapping key the button is registered under becomes its `custom_id`
/// when the row layout is built, so presses resolve back to the key.
#[derive(Clone, Debug)]
pub struct MenuButton {
    pub action: MenuAction,
    pub button: CreateButton,
}

/// A raw page descriptor, built by the caller and handed to the menu, which
/// assigns it an index and turns it into a [`MenuPage`].
#[derive(Clone, Debug, Default)]
pub struct PageSpec {
    name: String,
    title: Option<String>,
    content: CreateEmbed,
    reactions: Vec<(ReactionType, MenuAction)>,
    buttons: Option<Vec<(String, MenuButton)>>,
}

impl PageSpec {
    pub fn new(name: impl Into<String>, content: CreateEmbed) -> Self {
        Self {
            name: name.into(),
            title: None,
            content,
            reactions: Vec::new(),
            buttons: None,
        }
    }

    /// Title shown on the transient loading embed while the page is being
    /// prepared. Falls back to the page name when unset; the embed content
    /// itself cannot be read back out of a serenity builder.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Bind a reaction emoji to an action. Emojis are attached to the message
    /// in the order they were added here.
    pub fn reaction(mut self, emoji: impl Into<ReactionType>, action: MenuAction) -> Self {
        self.reactions.push((emoji.into(), action));
        self
    }

    /// Bind a button to an action under `key`. Buttons are laid out in rows of
    /// up to five, in the order they were added here.
    pub fn button(
        mut self,
        key: impl Into<String>,
        button: CreateButton,
        action: MenuAction,
    ) -> Self {
        self.buttons
            .get_or_insert_with(Vec::new)
            .push((key.into(), MenuButton { action, button }));
        self
    }
}

/// One screen of a menu: an embed plus its reaction and button mappings.
/// Immutable once the menu has been constructed.
#[derive(Clone, Debug)]
pub struct MenuPage {
    pub(crate) name: String,
    pub(crate) title: Option<String>,
    pub(crate) content: CreateEmbed,
    pub(crate) reactions: Vec<(ReactionType, MenuAction)>,
    pub(crate) buttons: Option<Vec<(String, MenuButton)>>,
    pub(crate) index: usize,
}

impl MenuPage {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &CreateEmbed {
        &self.content
    }

    pub fn reactions(&self) -> &[(ReactionType, MenuAction)] {
        &self.reactions
    }

    pub fn buttons(&self) -> Option<&[(String, MenuButton)]> {
        self.buttons.as_deref()
    }

    /// Position in the owning menu's page list.
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn loading_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// Partition the page's buttons into action rows of at most five,
    /// preserving insertion order and forcing each key into its button's
    /// `custom_id`.
    pub(crate) fn button_rows(&self) -> Vec<CreateActionRow> {
        let Some(buttons) = &self.buttons else {
            return Vec::new();
        };
        buttons
            .chunks(5)
            .map(|chunk| {
                CreateActionRow::Buttons(
                    chunk
                        .iter()
                        .map(|(key, b)| b.button.clone().custom_id(key.clone()))
                        .collect(),
                )
            })
            .collect()
    }
}

/// Assign sequential indices to raw descriptors, producing the menu's fixed
/// page list. Duplicate names are the caller's responsibility; named lookup
/// resolves to the first match.
pub(crate) fn build_pages(specs: Vec<PageSpec>) -> Result<Vec<MenuPage>> {
    if specs.is_empty() {
        return Err(MenuError::EmptyPageList);
    }
    Ok(specs
        .into_iter()
        .enumerate()
        .map(|(index, spec)| MenuPage {
            name: spec.name,
            title: spec.title,
            content: spec.content,
            reactions: spec.reactions,
            buttons: spec.buttons,
            index,
        })
        .collect())
}

/// Does an incoming reaction emoji match a configured key?
///
/// Unicode emojis compare by the literal glyph; custom emojis match on id,
/// falling back to the name (uploaded emojis can be renamed without the id
/// changing).
pub(crate) fn reaction_matches(configured: &ReactionType, incoming: &ReactionType) -> bool {
    match (configured, incoming) {
        (ReactionType::Unicode(a), ReactionType::Unicode(b)) => a == b,
        (
            ReactionType::Custom {
                id: a, name: a_name, ..
            },
            ReactionType::Custom {
                id: b, name: b_name, ..
            },
        ) => a == b || (a_name.is_some() && a_name == b_name),
        _ => false,
    }
}

/// Compare two reaction-key sets, ignoring order. Used to decide whether a
/// page change leaves stale emoji groups behind on the message.
pub(crate) fn same_reaction_keys(a: &[ReactionType], b: &[ReactionType]) -> bool {
    a.len() == b.len() && a.iter().all(|x| b.iter().any(|y| reaction_matches(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::EmojiId;

    fn unicode(s: &str) -> ReactionType {
        ReactionType::Unicode(s.to_string())
    }

    #[test]
    fn build_pages_rejects_an_empty_list() {
        assert!(matches!(
            build_pages(Vec::new()),
            Err(MenuError::EmptyPageList)
        ));
    }

    #[test]
    fn build_pages_assigns_sequential_indices() {
        let pages = build_pages(vec![
            PageSpec::new("a", CreateEmbed::new()),
            PageSpec::new("b", CreateEmbed::new()),
            PageSpec::new("c", CreateEmbed::new()),
        ])
        .unwrap();
        assert_eq!(pages.len(), 3);
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.index(), i);
        }
        assert_eq!(pages[1].name(), "b");
    }

    #[test]
    fn loading_title_falls_back_to_the_page_name() {
        let pages = build_pages(vec![
            PageSpec::new("plain", CreateEmbed::new()),
            PageSpec::new("titled", CreateEmbed::new()).title("Fancy Title"),
        ])
        .unwrap();
        assert_eq!(pages[0].loading_title(), "plain");
        assert_eq!(pages[1].loading_title(), "Fancy Title");
    }

    #[test]
    fn reactions_keep_insertion_order() {
        let spec = PageSpec::new("a", CreateEmbed::new())
            .reaction(unicode("⬅️"), MenuAction::Previous)
            .reaction(unicode("➡️"), MenuAction::Next)
            .reaction(unicode("⏹️"), MenuAction::Stop);
        let pages = build_pages(vec![spec]).unwrap();
        let keys: Vec<&ReactionType> = pages[0].reactions().iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![&unicode("⬅️"), &unicode("➡️"), &unicode("⏹️")]
        );
    }

    #[test]
    fn buttons_partition_into_rows_of_five() {
        let mut spec = PageSpec::new("a", CreateEmbed::new());
        for i in 0..7 {
            spec = spec.button(
                format!("b{i}"),
                CreateButton::new(format!("b{i}")).label(format!("{i}")),
                MenuAction::Next,
            );
        }
        let pages = build_pages(vec![spec]).unwrap();
        let rows = pages[0].button_rows();
        assert_eq!(rows.len(), 2);
        let CreateActionRow::Buttons(first) = &rows[0] else {
            panic!("expected a button row");
        };
        let CreateActionRow::Buttons(second) = &rows[1] else {
            panic!("expected a button row");
        };
        assert_eq!(first.len(), 5);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn a_page_with_no_buttons_has_no_rows() {
        let pages = build_pages(vec![PageSpec::new("a", CreateEmbed::new())]).unwrap();
        assert!(pages[0].button_rows().is_empty());
    }

    #[test]
    fn unicode_reactions_match_on_the_glyph() {
        assert!(reaction_matches(&unicode("➡️"), &unicode("➡️")));
        assert!(!reaction_matches(&unicode("➡️"), &unicode("⬅️")));
    }

    #[test]
    fn custom_reactions_match_on_id_then_name() {
        let configured = ReactionType::Custom {
            animated: false,
            id: EmojiId::new(42),
            name: Some("blob".to_string()),
        };
        let same_id = ReactionType::Custom {
            animated: true,
            id: EmojiId::new(42),
            name: None,
        };
        let same_name = ReactionType::Custom {
            animated: false,
            id: EmojiId::new(99),
            name: Some("blob".to_string()),
        };
        let neither = ReactionType::Custom {
            animated: false,
            id: EmojiId::new(99),
            name: Some("other".to_string()),
        };
        assert!(reaction_matches(&configured, &same_id));
        assert!(reaction_matches(&configured, &same_name));
        assert!(!reaction_matches(&configured, &neither));
        assert!(!reaction_matches(&configured, &unicode("➡️")));
    }

    #[test]
    fn reaction_key_sets_compare_without_order() {
        let a = [unicode("⬅️"), unicode("➡️")];
        let b = [unicode("➡️"), unicode("⬅️")];
        let c = [unicode("➡️")];
        assert!(same_reaction_keys(&a, &b));
        assert!(!same_reaction_keys(&a, &c));
        assert!(same_reaction_keys(&[], &[]));
    }
}
