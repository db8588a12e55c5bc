//! Sidebar archetype: identity column beside the main column
//!
//! The sidebar (avatar, contact, skills, education) is 32% wide and sits on
//! the trailing edge of the writing direction; the main column (header,
//! summary, experience) takes the rest. Children are emitted in reading
//! order, main first, so a right-to-left surface mirrors the row by itself.

use crate::locale::{Direction, Localized, SectionKey};
use crate::record::Resume;
use crate::stylesheet::Stylesheet;

use super::config::{Contrast, SidebarConfig};
use super::parts;
use super::types::{Align, Border, Node, Role, Side, Tag, Weight, Width};

const SIDEBAR_WIDTH: u8 = 32;
const MAIN_WIDTH: u8 = 68;

/// Physical side the sidebar occupies for a writing direction
pub fn sidebar_side(direction: Direction) -> Side {
    match direction {
        Direction::Ltr => Side::Right,
        Direction::Rtl => Side::Left,
    }
}

/// Colors of sidebar content for one contrast mode
struct Ink {
    heading: String,
    body: String,
    muted: String,
    rule: String,
    chip_background: String,
    chip_border: String,
    chip_text: String,
    avatar_background: String,
}

impl Ink {
    fn new(contrast: Contrast, palette: &Stylesheet) -> Self {
        let c = |token: &str| palette.resolve_or_default(token);
        match contrast {
            Contrast::Dark => Self {
                heading: c("text-light"),
                body: c("text-light-2"),
                muted: c("text-light-3"),
                rule: c("rule-inverse"),
                chip_background: c("chip-dark"),
                chip_border: c("chip-dark"),
                chip_text: c("text-light"),
                avatar_background: c("chip-dark"),
            },
            Contrast::Light => Self {
                heading: c("text-strong"),
                body: c("text-2"),
                muted: c("text-3"),
                rule: c("rule-2"),
                chip_background: c("chip-light"),
                chip_border: c("rule-2"),
                chip_text: c("text-1"),
                avatar_background: c("background-1"),
            },
        }
    }
}

pub fn compose(
    resume: &Resume,
    config: &SidebarConfig,
    locale: &Localized,
    palette: &Stylesheet,
) -> Node {
    let row = Node::new(Tag::Row)
        .child(main_column(resume, config, locale, palette))
        .child(sidebar_column(resume, config, locale, palette));

    parts::page(locale, locale.font, palette).child(row)
}

fn main_column(
    resume: &Resume,
    config: &SidebarConfig,
    locale: &Localized,
    palette: &Stylesheet,
) -> Node {
    let header = Node::new(Tag::Column)
        .with_role(Role::Header)
        .with_border(Border::BottomThick, config.accent)
        .child(
            Node::text(Tag::Heading(1), resume.full_name.as_str())
                .with_role(Role::Name)
                .with_class("uppercase")
                .with_weight(Weight::Black)
                .with_color(config.accent),
        )
        .child(
            Node::text(Tag::Text, resume.job_title.as_str())
                .with_role(Role::JobTitle)
                .with_weight(Weight::Medium)
                .with_color(palette.resolve_or_default("text-3")),
        );

    let heading = |key| {
        parts::section_title(locale, key).with_color(palette.resolve_or_default("text-strong"))
    };

    let summary = parts::section(
        SectionKey::Summary,
        heading(SectionKey::Summary),
        [parts::paragraph(&resume.summary, Role::Summary)
            .with_color(palette.resolve_or_default("text-2"))
            .with_align(Align::Justify)],
    );

    let entries = resume.experience.iter().map(|entry| {
        parts::experience_block(entry)
            .with_border(Border::Start, palette.resolve_or_default("rule-3"))
            .child(
                Node::new(Tag::Row)
                    .child(
                        Node::text(Tag::Heading(4), entry.title.as_str())
                            .with_role(Role::EntryTitle)
                            .with_weight(Weight::Bold),
                    )
                    .maybe_child(parts::dates(entry).map(|d| {
                        d.with_background(palette.resolve_or_default("background-2"))
                            .with_color(palette.resolve_or_default("text-2"))
                    })),
            )
            .child(
                Node::text(Tag::Text, entry.company.as_str())
                    .with_role(Role::Company)
                    .with_weight(Weight::Medium)
                    .with_color(config.accent),
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
        .with_width(Width::Percent(MAIN_WIDTH))
        .child(header)
        .child(summary)
        .child(experience)
}

fn sidebar_column(
    resume: &Resume,
    config: &SidebarConfig,
    locale: &Localized,
    palette: &Stylesheet,
) -> Node {
    let ink = Ink::new(config.contrast, palette);
    let heading = |key| {
        parts::section_title(locale, key)
            .with_color(ink.heading.as_str())
            .with_border(Border::Bottom, ink.rule.as_str())
    };

    let avatar = parts::initial(&resume.full_name).map(|initial| {
        Node::text(Tag::Text, initial)
            .with_role(Role::Avatar)
            .with_weight(Weight::Bold)
            .with_background(ink.avatar_background.as_str())
            .with_border(Border::Outline, ink.rule.as_str())
    });

    let fields = parts::contact_fields(resume);
    let contact = (!fields.is_empty()).then(|| {
        let items = fields
            .into_iter()
            .map(|(field, value)| parts::contact_item(field, value));
        parts::section(
            SectionKey::Contact,
            heading(SectionKey::Contact),
            [Node::new(Tag::Column)
                .with_role(Role::Contact)
                .with_color(ink.body.as_str())
                .children(items)],
        )
    });

    let tokens = parts::skill_tokens(&resume.skills).into_iter().map(|token| {
        token
            .with_class("chip")
            .with_background(ink.chip_background.as_str())
            .with_border(Border::Outline, ink.chip_border.as_str())
            .with_color(ink.chip_text.as_str())
    });
    let skills = parts::section(
        SectionKey::Skills,
        heading(SectionKey::Skills),
        [Node::new(Tag::Row)
            .with_role(Role::SkillList)
            .with_class("wrap")
            .children(tokens)],
    );

    let entries = resume.education.iter().map(|entry| {
        parts::education_block(entry)
            .child(
                Node::text(Tag::Text, entry.degree.as_str())
                    .with_role(Role::Degree)
                    .with_weight(Weight::Bold)
                    .with_color(ink.heading.as_str()),
            )
            .child(
                Node::text(Tag::Text, entry.school.as_str())
                    .with_role(Role::School)
                    .with_color(ink.body.as_str()),
            )
            .child(
                Node::text(Tag::Text, entry.year.as_str())
                    .with_role(Role::Year)
                    .with_color(ink.muted.as_str()),
            )
    });
    let education = parts::section(
        SectionKey::Education,
        heading(SectionKey::Education),
        entries,
    );

    let mut sidebar = Node::new(Tag::Column)
        .with_role(Role::Sidebar)
        .with_width(Width::Percent(SIDEBAR_WIDTH))
        .with_background(config.sidebar_color)
        .with_color(ink.heading.as_str())
        .maybe_child(avatar)
        .maybe_child(contact)
        .child(skills)
        .child(education);
    sidebar.style.side = Some(sidebar_side(locale.direction));
    sidebar
}
