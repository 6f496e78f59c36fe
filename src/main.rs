use std::collections::HashMap;

use emote_rs::{MessageLevel, ui};

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "emote")]
#[command(
    about = "Print emoji-tagged, colored messages from the shell",
    long_about = "Print expressive terminal messages: each level pairs an ANSI color
with an emoji, and flags compose headers, bullet lists, or key=value
details rendered as pretty JSON.

Examples:
  # An emotive one-liner
  emote_rs error \"disk full\"

  # A bold header with an indented body and a bullet list
  emote_rs warning \"Degraded service\" --header \"Replica lag\" --item db-2 --item db-3

  # A message followed by pretty-printed details
  emote_rs info \"deploy finished\" --field version=1.4.2 --field region=eu-west-1"
)]
struct Cli {
    /// The message level, which selects the color and emoji
    #[arg(value_enum)]
    level: Level,

    /// The message text
    content: String,

    /// Bold header line printed before the message
    #[arg(long, conflicts_with = "body")]
    header: Option<String>,

    /// Bullet list entry printed after the message (repeatable)
    #[arg(long = "item", conflicts_with = "body")]
    items: Vec<String>,

    /// key=value pair rendered as pretty JSON after the message (repeatable)
    #[arg(
        long = "field",
        conflicts_with_all = ["header", "items", "body"]
    )]
    fields: Vec<String>,

    /// Print a plain indented body line, without an emoji
    #[arg(long)]
    body: bool,

    /// Indentation width for --body
    #[arg(long, default_value_t = ui::BODY_INDENT, requires = "body")]
    indent: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum Level {
    Error,
    Success,
    Warning,
    Info,
    Remedy,
}

impl From<Level> for MessageLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Self::Error,
            Level::Success => Self::Success,
            Level::Warning => Self::Warning,
            Level::Info => Self::Info,
            Level::Remedy => Self::Remedy,
        }
    }
}

fn parse_fields(fields: &[String]) -> anyhow::Result<HashMap<String, String>> {
    fields
        .iter()
        .map(|field| {
            field
                .split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| anyhow::anyhow!("invalid field '{}', expected key=value", field))
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = MessageLevel::from(cli.level);

    if cli.body {
        ui::print_body_indented(level, &cli.content, cli.indent);
    } else if !cli.fields.is_empty() {
        let mapping = parse_fields(&cli.fields)?;
        ui::emote_with_pretty_json(level, &cli.content, &mapping);
    } else if let Some(header) = &cli.header {
        if cli.items.is_empty() {
            ui::emote_with_header(level, header, &cli.content);
        } else {
            ui::emote_with_header_and_list(level, header, &cli.content, &cli.items);
        }
    } else if !cli.items.is_empty() {
        ui::emote_with_list(level, &cli.content, &cli.items);
    } else {
        ui::emote(level, &cli.content);
    }

    anyhow::Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fields_splits_on_first_equals() {
        let mapping = parse_fields(&["a=1".into(), "url=http://x/?q=2".into()]).unwrap();
        assert_eq!(mapping["a"], "1");
        assert_eq!(mapping["url"], "http://x/?q=2");
    }

    #[test]
    fn test_parse_fields_rejects_missing_equals() {
        assert!(parse_fields(&["oops".into()]).is_err());
    }
}
