//! Linear archetype: one column, top to bottom
//!
//! Header, summary, experience, education, with skills either right after
//! the summary or last. Nesting is kept shallow so applicant-tracking
//! parsers read it in order.

use crate::locale::{FontFamily, Localized, SectionKey};
use crate::record::Resume;
use crate::stylesheet::Stylesheet;

use super::config::{HeaderStyle, LinearConfig, SkillsPlacement, Typeface};
use super::parts;
use super::types::{Align, Border, Node, Role, Tag, Weight};

/// Font after the serif substitution; Arabic keeps its base family
pub fn font_for(config: &LinearConfig, locale: &Localized) -> FontFamily {
    match (config.typeface, locale.font) {
        (Typeface::Serif, FontFamily::English) => FontFamily::Serif,
        (_, base) => base,
    }
}

pub fn compose(
    resume: &Resume,
    config: &LinearConfig,
    locale: &Localized,
    palette: &Stylesheet,
) -> Node {
    let heading = |key| {
        parts::section_title(locale, key)
            .with_weight(Weight::Bold)
            .with_color(config.accent)
            .with_border(Border::Bottom, palette.resolve_or_default("rule-1"))
    };

    let summary = parts::section(
        SectionKey::Summary,
        heading(SectionKey::Summary),
        [parts::paragraph(&resume.summary, Role::Summary).with_align(Align::Justify)],
    );

    let skills = || {
        let tokens = parts::separated(parts::skill_tokens(&resume.skills), "•");
        parts::section(
            SectionKey::Skills,
            heading(SectionKey::Skills),
            [Node::new(Tag::Paragraph)
                .with_role(Role::SkillList)
                .children(tokens)],
        )
    };

    let entries = resume.experience.iter().map(|entry| {
        parts::experience_block(entry)
            .child(
                Node::new(Tag::Row)
                    .child(
                        Node::text(Tag::Heading(4), entry.title.as_str())
                            .with_role(Role::EntryTitle)
                            .with_weight(Weight::Bold),
                    )
                    .maybe_child(
                        parts::dates(entry)
                            .map(|d| d.with_color(palette.resolve_or_default("text-2"))),
                    ),
            )
            .child(
                Node::text(Tag::Text, entry.company.as_str())
                    .with_role(Role::Company)
                    .with_class("italic")
                    .with_color(palette.resolve_or_default("text-1")),
            )
            .child(parts::paragraph(&entry.description, Role::Description))
    });
    let experience = parts::section(
        SectionKey::Experience,
        heading(SectionKey::Experience),
        entries,
    );

    let entries = resume.education.iter().map(|entry| {
        parts::education_block(entry).child(
            Node::new(Tag::Row)
                .child(
                    Node::new(Tag::Column)
                        .child(
                            Node::text(Tag::Text, entry.degree.as_str())
                                .with_role(Role::Degree)
                                .with_weight(Weight::Bold),
                        )
                        .child(
                            Node::text(Tag::Text, entry.school.as_str())
                                .with_role(Role::School)
                                .with_color(palette.resolve_or_default("text-1")),
                        ),
                )
                .child(
                    Node::text(Tag::Text, entry.year.as_str())
                        .with_role(Role::Year)
                        .with_color(palette.resolve_or_default("text-2")),
                ),
        )
    });
    let education = parts::section(
        SectionKey::Education,
        heading(SectionKey::Education),
        entries,
    );

    let mut page = parts::page(locale, font_for(config, locale), palette)
        .with_color(palette.resolve_or_default("text-strong"))
        .child(header(resume, config, palette))
        .child(summary);
    if config.skills == SkillsPlacement::Top {
        page = page.child(skills());
    }
    page = page.child(experience).child(education);
    if config.skills == SkillsPlacement::Bottom {
        page = page.child(skills());
    }
    page
}

fn header(resume: &Resume, config: &LinearConfig, palette: &Stylesheet) -> Node {
    let muted = palette.resolve_or_default("text-2");

    let items: Vec<Node> = parts::contact_fields(resume)
        .into_iter()
        .map(|(field, value)| parts::contact_item(field, value))
        .collect();
    let contact = (!items.is_empty()).then(|| {
        Node::new(Tag::Row)
            .with_role(Role::Contact)
            .with_color(muted.as_str())
            .children(parts::separated(items, "|"))
    });

    let header = Node::new(Tag::Column)
        .with_role(Role::Header)
        .with_align(Align::Center)
        .child(
            Node::text(Tag::Heading(1), resume.full_name.as_str())
                .with_role(Role::Name)
                .with_class("uppercase")
                .with_weight(Weight::Bold),
        )
        .child(
            Node::text(Tag::Text, resume.job_title.as_str())
                .with_role(Role::JobTitle)
                .with_color(muted.as_str()),
        )
        .maybe_child(contact);

    match config.header {
        HeaderStyle::Bordered => {
            header.with_border(Border::BottomThick, palette.resolve_or_default("rule-strong"))
        }
        HeaderStyle::Plain => header,
    }
}
