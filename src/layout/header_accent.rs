//! Header-accent archetype: colored banner over a two-column body
//!
//! The banner carries identity and contact on the accent color. Below it,
//! an 8-of-12 column holds summary and experience and a 4-of-12 card column
//! holds skills and education.

use crate::locale::{Localized, SectionKey};
use crate::record::Resume;
use crate::stylesheet::Stylesheet;

use super::config::HeaderAccentConfig;
use super::parts;
use super::types::{Border, Node, Role, Style, Tag, Weight, Width};

const GRID_COLUMNS: u8 = 12;
const MAIN_SPAN: u8 = 8;
const ASIDE_SPAN: u8 = 4;

pub fn compose(
    resume: &Resume,
    config: &HeaderAccentConfig,
    locale: &Localized,
    palette: &Stylesheet,
) -> Node {
    let body = Node::new(Tag::Row)
        .with_style(Style {
            columns: Some(GRID_COLUMNS),
            ..Style::default()
        })
        .child(main_column(resume, config, locale, palette))
        .child(aside_column(resume, config, locale, palette));

    parts::page(locale, locale.font, palette)
        .child(banner(resume, config, palette))
        .child(body)
}

fn banner(resume: &Resume, config: &HeaderAccentConfig, palette: &Stylesheet) -> Node {
    let items: Vec<Node> = parts::contact_fields(resume)
        .into_iter()
        .map(|(field, value)| parts::contact_item(field, value))
        .collect();
    let contact = (!items.is_empty())
        .then(|| Node::new(Tag::Row).with_role(Role::Contact).children(items));

    Node::new(Tag::Column)
        .with_role(Role::Banner)
        .with_background(config.accent)
        .with_color(palette.resolve_or_default("text-light"))
        .child(
            Node::text(Tag::Heading(1), resume.full_name.as_str())
                .with_role(Role::Name)
                .with_weight(Weight::Bold),
        )
        .child(
            Node::text(Tag::Text, resume.job_title.as_str())
                .with_role(Role::JobTitle)
                .with_class("light"),
        )
        .maybe_child(contact)
}

fn main_column(
    resume: &Resume,
    config: &HeaderAccentConfig,
    locale: &Localized,
    palette: &Stylesheet,
) -> Node {
    let heading = |key| {
        parts::section_title(locale, key)
            .with_color(palette.resolve_or_default("text-strong"))
            .with_border(Border::Bottom, palette.resolve_or_default("rule-2"))
    };

    let summary = parts::section(
        SectionKey::Summary,
        heading(SectionKey::Summary),
        [parts::paragraph(&resume.summary, Role::Summary)
            .with_color(palette.resolve_or_default("text-2"))],
    );

    let entries = resume.experience.iter().map(|entry| {
        parts::experience_block(entry)
            .child(
                Node::new(Tag::Row)
                    .child(
                        Node::text(Tag::Heading(4), entry.title.as_str())
                            .with_role(Role::EntryTitle)
                            .with_weight(Weight::Bold)
                            .with_color(config.accent),
                    )
                    .maybe_child(parts::dates(entry).map(|d| {
                        d.with_background(palette.resolve_or_default("background-2"))
                            .with_color(palette.resolve_or_default("text-2"))
                    })),
            )
            .child(
                Node::text(Tag::Text, entry.company.as_str())
                    .with_role(Role::Company)
                    .with_weight(Weight::Bold)
                    .with_color(palette.resolve_or_default("text-1")),
            )
            .child(
                parts::paragraph(&entry.description, Role::Description)
                    .with_color(palette.resolve_or_default("text-2")),
            )
    });
    let experience = parts::section(
        SectionKey::Experience,
        heading(SectionKey::Experience),
        entries,
    );

    Node::new(Tag::Column)
        .with_role(Role::Main)
        .with_width(Width::Span(MAIN_SPAN))
        .child(summary)
        .child(experience)
}

fn aside_column(
    resume: &Resume,
    config: &HeaderAccentConfig,
    locale: &Localized,
    palette: &Stylesheet,
) -> Node {
    let heading = |key| {
        parts::section_title(locale, key).with_color(palette.resolve_or_default("text-strong"))
    };

    let tokens = parts::skill_tokens(&resume.skills).into_iter().map(|token| {
        token
            .with_class("card")
            .with_background(palette.resolve_or_default("chip-light"))
            .with_border(Border::Start, config.accent)
    });
    let skills = parts::section(
        SectionKey::Skills,
        heading(SectionKey::Skills),
        [Node::new(Tag::Column)
            .with_role(Role::SkillList)
            .children(tokens)],
    );

    let entries = resume.education.iter().map(|entry| {
        parts::education_block(entry)
            .with_border(Border::Start, config.accent)
            .child(
                Node::text(Tag::Text, entry.degree.as_str())
                    .with_role(Role::Degree)
                    .with_weight(Weight::Bold),
            )
            .child(
                Node::text(Tag::Text, entry.school.as_str())
                    .with_role(Role::School)
                    .with_color(palette.resolve_or_default("text-2")),
            )
            .child(
                Node::text(Tag::Text, entry.year.as_str())
                    .with_role(Role::Year)
                    .with_color(palette.resolve_or_default("text-3")),
            )
    });
    let education = parts::section(
        SectionKey::Education,
        heading(SectionKey::Education),
        entries,
    );

    Node::new(Tag::Column)
        .with_role(Role::Aside)
        .with_class("card")
        .with_width(Width::Span(ASIDE_SPAN))
        .with_background(palette.resolve_or_default("background-3"))
        .child(skills)
        .child(education)
}
