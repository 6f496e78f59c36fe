//! Terminal output formatting keyed by [`MessageLevel`].
//!
//! Every function writes directly to stdout, one `println!` per line. Escape
//! sequences come from the [`colored`] crate, which also handles NO_COLOR and
//! non-tty detection.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

use colored::Colorize;
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::level::{BULLETPOINT, MessageLevel};

pub const BODY_INDENT: usize = 4;
pub const EMOTE_INDENT: usize = 2;

const JSON_INDENT: &[u8] = b"    ";

/// Print an indented line in the level's color, without an emoji.
pub fn print_body(level: MessageLevel, content: &str) {
    print_body_indented(level, content, BODY_INDENT);
}

pub fn print_body_indented(level: MessageLevel, content: &str, indentation: usize) {
    println!("{}", body_line(level, content, indentation));
}

/// Print a line led by the level's emoji, with the content in the level's color.
pub fn emote(level: MessageLevel, content: &str) {
    emote_indented(level, content, EMOTE_INDENT);
}

pub fn emote_indented(level: MessageLevel, content: &str, indentation: usize) {
    println!("{}", emote_line(level, content, indentation));
}

/// Print an emotive line followed by `mapping` rendered as pretty JSON.
///
/// Values are stringified with their `Display` form and keys are emitted in
/// ascending lexical order, whatever the map's own iteration order.
pub fn emote_with_pretty_json<K, V>(level: MessageLevel, content: &str, mapping: &HashMap<K, V>)
where
    K: AsRef<str>,
    V: Display,
{
    emote(level, content);
    println!("{}", pretty_json_block(mapping).color(level.color()));
}

/// Print a bold header line led by the level's emoji, then the content as an
/// indented body line.
pub fn emote_with_header(level: MessageLevel, header: &str, content: &str) {
    println!("{}", header_line(level, header));
    print_body(level, content);
}

/// Print one bulleted line per element, in input order.
pub fn print_list<T: Display>(level: MessageLevel, data: &[T]) {
    for line in list_lines(level, data) {
        println!("{line}");
    }
}

pub fn emote_with_header_and_list<T: Display>(
    level: MessageLevel,
    header: &str,
    content: &str,
    data: &[T],
) {
    emote_with_header(level, header, content);
    print_list(level, data);
}

pub fn emote_with_list<T: Display>(level: MessageLevel, content: &str, data: &[T]) {
    emote(level, content);
    print_list(level, data);
}

fn body_line(level: MessageLevel, content: &str, indentation: usize) -> String {
    format!(
        "{}{}",
        " ".repeat(indentation),
        content.color(level.color())
    )
}

fn emote_line(level: MessageLevel, content: &str, indentation: usize) -> String {
    format!(
        "{}{}{}",
        level.emoji(),
        " ".repeat(indentation),
        content.color(level.color())
    )
}

fn header_line(level: MessageLevel, header: &str) -> String {
    format!("{}  {}", level.emoji(), header.color(level.color()).bold())
}

fn list_lines<T: Display>(level: MessageLevel, data: &[T]) -> Vec<String> {
    data.iter()
        .map(|element| {
            format!("\t{}  {}", BULLETPOINT, element)
                .color(level.color())
                .to_string()
        })
        .collect()
}

fn pretty_json_block<K, V>(mapping: &HashMap<K, V>) -> String
where
    K: AsRef<str>,
    V: Display,
{
    // BTreeMap iteration gives the ascending key order the output promises.
    let text: BTreeMap<&str, String> = mapping
        .iter()
        .map(|(k, v)| (k.as_ref(), v.to_string()))
        .collect();

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    if text.serialize(&mut ser).is_err() {
        return String::from("{}");
    }
    String::from_utf8_lossy(&buf).into_owned()
}
