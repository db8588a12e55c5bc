//! Building blocks shared by the archetypes

use crate::locale::{FontFamily, Localized, SectionKey};
use crate::record::{EducationEntry, ExperienceEntry, Resume};
use crate::stylesheet::Stylesheet;

use super::types::{ContactField, Node, Role, Style, Tag};

/// Root node of every document. The only node that carries `dir`.
pub fn page(locale: &Localized, font: FontFamily, palette: &Stylesheet) -> Node {
    Node::new(Tag::Page).with_style(Style {
        color: Some(palette.resolve_or_default("text-1")),
        background: Some(palette.resolve_or_default("background-1")),
        font: Some(font),
        dir: Some(locale.direction),
        ..Style::default()
    })
}

/// Titled section with its body in order
pub fn section(key: SectionKey, title: Node, body: impl IntoIterator<Item = Node>) -> Node {
    Node::new(Tag::Section)
        .with_role(Role::Section(key))
        .child(title)
        .children(body)
}

/// Section heading carrying the localized label
pub fn section_title(locale: &Localized, key: SectionKey) -> Node {
    Node::text(Tag::Heading(3), locale.label(key))
        .with_role(Role::SectionTitle)
        .with_class("uppercase")
}

/// Non-empty contact fields in display order
pub fn contact_fields(resume: &Resume) -> Vec<(ContactField, &str)> {
    [
        (ContactField::Email, resume.email.as_str()),
        (ContactField::Phone, resume.phone.as_str()),
        (ContactField::Location, resume.location.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.trim().is_empty())
    .map(|(field, value)| (field, value.trim()))
    .collect()
}

pub fn contact_item(field: ContactField, value: &str) -> Node {
    Node::text(Tag::Text, value).with_role(Role::ContactItem(field))
}

/// Inline separator between siblings, e.g. `|` or `•`
pub fn separator(glyph: &str) -> Node {
    Node::text(Tag::Text, glyph).with_role(Role::Separator)
}

/// Interleave `items` with separator nodes
pub fn separated(items: Vec<Node>, glyph: &str) -> Vec<Node> {
    let mut out = Vec::with_capacity(items.len() * 2);
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(separator(glyph));
        }
        out.push(item);
    }
    out
}

/// One token per skill, record order, duplicates kept
pub fn skill_tokens(skills: &[String]) -> Vec<Node> {
    skills
        .iter()
        .map(|skill| Node::text(Tag::Token, skill.as_str()).with_role(Role::Skill))
        .collect()
}

/// Text runs with a block-level break for every embedded newline
pub fn lines(text: &str) -> Vec<Node> {
    let mut out = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push(Node::new(Tag::LineBreak));
        }
        let line = line.strip_suffix('\r').unwrap_or(line);
        if !line.is_empty() {
            out.push(Node::text(Tag::Text, line));
        }
    }
    out
}

/// Paragraph that keeps the line structure of `text`
pub fn paragraph(text: &str, role: Role) -> Node {
    Node::new(Tag::Paragraph).with_role(role).children(lines(text))
}

/// `start - end`, or whichever side is present
pub fn date_range(start: &str, end: &str) -> Option<String> {
    match (start.trim(), end.trim()) {
        ("", "") => None,
        (start, "") => Some(start.to_string()),
        ("", end) => Some(end.to_string()),
        (start, end) => Some(format!("{} - {}", start, end)),
    }
}

pub fn dates(entry: &ExperienceEntry) -> Option<Node> {
    date_range(&entry.start_date, &entry.end_date)
        .map(|range| Node::text(Tag::Text, range).with_role(Role::Dates))
}

/// Empty experience block keyed by the entry id
pub fn experience_block(entry: &ExperienceEntry) -> Node {
    Node::new(Tag::Column)
        .with_role(Role::ExperienceEntry)
        .with_key(entry.id.as_str())
}

/// Empty education block keyed by the entry id
pub fn education_block(entry: &EducationEntry) -> Node {
    Node::new(Tag::Column)
        .with_role(Role::EducationEntry)
        .with_key(entry.id.as_str())
}

/// First character of the name, for the avatar
pub fn initial(full_name: &str) -> Option<String> {
    full_name.trim().chars().next().map(|c| c.to_string())
}
