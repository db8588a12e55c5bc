//! Core types of the rendered visual tree
//!
//! The tree is structural, not positional: it says which blocks exist, in
//! what order, with which style overrides. Pixel layout belongs to whatever
//! surface consumes it.

use std::fmt::Write as _;

use serde::Serialize;

use crate::locale::{Direction, FontFamily, Language, SectionKey};

use super::Archetype;

/// Structural kind of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    /// Root of a document
    Page,
    /// Children flow along the writing direction
    Row,
    /// Children stack top to bottom
    Column,
    /// Titled group of content
    Section,
    /// Heading of the given level (1 = name)
    Heading(u8),
    /// Inline text run
    Text,
    /// Block of running text
    Paragraph,
    /// Block-level line break inside a paragraph
    LineBreak,
    /// Compact chip, one per skill
    Token,
}

/// Which contact field a contact item shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Email,
    Phone,
    Location,
}

/// Semantic meaning of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Header,
    Banner,
    Sidebar,
    Main,
    /// Secondary column that is not a sidebar
    Aside,
    Avatar,
    Name,
    JobTitle,
    Contact,
    ContactItem(ContactField),
    Section(SectionKey),
    SectionTitle,
    SkillList,
    Skill,
    Separator,
    ExperienceEntry,
    EducationEntry,
    EntryTitle,
    Dates,
    Company,
    Degree,
    School,
    Year,
    Description,
    Summary,
}

impl Role {
    /// Short name used for CSS classes and outlines
    pub fn name(&self) -> &'static str {
        match self {
            Role::Header => "header",
            Role::Banner => "banner",
            Role::Sidebar => "sidebar",
            Role::Main => "main",
            Role::Aside => "aside",
            Role::Avatar => "avatar",
            Role::Name => "name",
            Role::JobTitle => "job-title",
            Role::Contact => "contact",
            Role::ContactItem(field) => match field {
                ContactField::Email => "contact-email",
                ContactField::Phone => "contact-phone",
                ContactField::Location => "contact-location",
            },
            Role::Section(key) => match key {
                SectionKey::Summary => "section-summary",
                SectionKey::Experience => "section-experience",
                SectionKey::Education => "section-education",
                SectionKey::Skills => "section-skills",
                SectionKey::Contact => "section-contact",
            },
            Role::SectionTitle => "section-title",
            Role::SkillList => "skill-list",
            Role::Skill => "skill",
            Role::Separator => "separator",
            Role::ExperienceEntry => "experience-entry",
            Role::EducationEntry => "education-entry",
            Role::EntryTitle => "entry-title",
            Role::Dates => "dates",
            Role::Company => "company",
            Role::Degree => "degree",
            Role::School => "school",
            Role::Year => "year",
            Role::Description => "description",
            Role::Summary => "summary",
        }
    }
}

/// Border drawn around a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Border {
    /// Thin rule under the node
    Bottom,
    /// Heavy rule under the node
    BottomThick,
    /// Rule on the edge where reading starts
    Start,
    /// Box around the node
    Outline,
}

/// Width of a node relative to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Width {
    Percent(u8),
    /// Number of grid columns out of the parent's `columns`
    Span(u8),
}

/// Physical page side, after direction mirroring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Weight {
    Medium,
    Bold,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Center,
    Justify,
}

/// Style overrides carried by a node.
///
/// `color`, `background` and `border_color` are the only color-bearing
/// fields; everything else is structural.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Width>,
    /// Grid columns available to children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<Direction>,
}

impl Style {
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    /// Drop the color-bearing fields, keeping structure
    pub fn without_colors(&self) -> Style {
        Style {
            color: None,
            background: None,
            border_color: None,
            ..self.clone()
        }
    }
}

/// A node of the visual tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub tag: Tag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Stable identity of list entries (the entry id, never an index)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            role: None,
            key: None,
            classes: vec![],
            style: Style::default(),
            text: None,
            children: vec![],
        }
    }

    /// Leaf node carrying text
    pub fn text(tag: Tag, text: impl Into<String>) -> Self {
        let mut node = Self::new(tag);
        node.text = Some(text.into());
        node
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.style.color = Some(color.into());
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.style.background = Some(color.into());
        self
    }

    pub fn with_border(mut self, border: Border, color: impl Into<String>) -> Self {
        self.style.border = Some(border);
        self.style.border_color = Some(color.into());
        self
    }

    pub fn with_width(mut self, width: Width) -> Self {
        self.style.width = Some(width);
        self
    }

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.style.weight = Some(weight);
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.style.align = Some(align);
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append `child` if present
    pub fn maybe_child(mut self, child: Option<Node>) -> Self {
        self.children.extend(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Pre-order iterator over this node and all descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First node (pre-order) with the given role
    pub fn find(&self, role: Role) -> Option<&Node> {
        self.descendants().find(|n| n.role == Some(role))
    }

    /// All nodes (pre-order) with the given role
    pub fn find_all(&self, role: Role) -> Vec<&Node> {
        self.descendants().filter(|n| n.role == Some(role)).collect()
    }

    /// Concatenated text of this subtree; line breaks become `\n`
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in self.descendants() {
            if node.tag == Tag::LineBreak {
                out.push('\n');
            }
            if let Some(text) = &node.text {
                out.push_str(text);
            }
        }
        out
    }

    /// Copy of this subtree with every color-bearing attribute removed
    pub fn without_colors(&self) -> Node {
        Node {
            style: self.style.without_colors(),
            children: self.children.iter().map(Node::without_colors).collect(),
            ..self.clone()
        }
    }
}

/// Pre-order traversal of a node subtree
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A fully composed résumé, ready for a rendering surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub language: Language,
    pub direction: Direction,
    pub archetype: Archetype,
    pub root: Node,
}

impl Document {
    /// Indented outline of roles, keys and texts, one node per line.
    ///
    /// Deterministic for a given tree; handy for debugging and diffs.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "document lang={} dir={} archetype={}",
            self.language.code(),
            self.direction.as_str(),
            self.archetype.as_str()
        );
        outline_node(&self.root, 1, &mut out);
        out
    }
}

fn outline_node(node: &Node, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let _ = write!(out, "{}{:?}", indent, node.tag);
    if let Some(role) = &node.role {
        let _ = write!(out, " .{}", role.name());
    }
    if let Some(key) = &node.key {
        let _ = write!(out, " #{}", key);
    }
    if let Some(text) = &node.text {
        let _ = write!(out, " {:?}", text);
    }
    out.push('\n');
    for child in &node.children {
        outline_node(child, depth + 1, out);
    }
}
