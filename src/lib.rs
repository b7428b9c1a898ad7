//! Interactive multi-page embed menus for serenity.
//!
//! A menu is an ordered list of pages, each an embed plus mappings from
//! reaction emojis and buttons to actions (navigation directives, named
//! jumps, or callbacks). The menu renders into a guild channel, a DM, or a
//! command reply, and only the authorized user can drive it.
//!
//! ```no_run
//! use embed_menu::{EmbedMenu, MenuAction, MenuOptions, PageSpec, ReplyMethod};
//! use serenity::all::{CommandInteraction, Context, CreateEmbed, ReactionType};
//!
//! async fn open(ctx: &Context, cmd: &CommandInteraction) -> embed_menu::Result<()> {
//!     let pages = vec![
//!         PageSpec::new("intro", CreateEmbed::new().title("Intro").description("Hello!"))
//!             .reaction(ReactionType::Unicode("➡️".to_string()), MenuAction::Next),
//!         PageSpec::new("detail", CreateEmbed::new().title("Detail").description("More."))
//!             .reaction(ReactionType::Unicode("⬅️".to_string()), MenuAction::Previous)
//!             .reaction(ReactionType::Unicode("⏹️".to_string()), MenuAction::Stop),
//!     ];
//!     let mut menu = EmbedMenu::new(ctx, cmd, pages, MenuOptions::default())?;
//!     menu.start(ReplyMethod::Reply).await
//! }
//! ```

pub mod error;
pub mod events;
pub mod logging;
mod menu;
mod page;

pub use error::{MenuError, Result};
pub use events::{MenuEventHandler, PageChange};
pub use menu::{EmbedMenu, MenuOptions, PageTarget, ReplyMethod};
pub use page::{MenuAction, MenuButton, MenuCallback, MenuPage, PageSpec};
