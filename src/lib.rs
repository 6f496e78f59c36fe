//! Expressive terminal messages.
//!
//! Each [`MessageLevel`] pairs an ANSI color with an emoji, and the [`ui`]
//! functions compose those into emotive lines, bold headers, bullet lists,
//! and pretty-printed JSON blocks on stdout.
//!
//! ```no_run
//! use emote_rs::{MessageLevel, ui};
//!
//! ui::emote(MessageLevel::Error, "disk full");
//! ui::emote_with_list(MessageLevel::Info, "affected hosts", &["web-1", "web-2"]);
//! ```

pub mod level;
pub mod ui;

pub use level::{Expression, MessageLevel};
