//! HTML generation from rendered documents

use std::fmt::Write as _;

use crate::layout::{Align, Border, Document, Node, Role, Side, Style, Tag, Weight, Width};
use crate::stylesheet::Stylesheet;

use super::HtmlConfig;

/// Build an HTML document incrementally
pub struct HtmlBuilder {
    config: HtmlConfig,
    styles: Vec<String>,
    body: Vec<String>,
    indent: usize,
}

impl HtmlBuilder {
    pub fn new(config: HtmlConfig) -> Self {
        let indent = usize::from(config.standalone);
        Self {
            config,
            styles: vec![],
            body: vec![],
            indent,
        }
    }

    /// Add CSS custom properties from a stylesheet, in token order
    pub fn add_stylesheet(&mut self, stylesheet: &Stylesheet) {
        self.styles.push(":root {".to_string());
        for (token, value) in stylesheet.merged() {
            self.styles
                .push(format!("  --{}: {};", css_value(&token), css_value(&value)));
        }
        self.styles.push("}".to_string());
    }

    /// Add the `@page` rule and the rules behind structural classes
    pub fn add_page_rules(&mut self) {
        let p = self.prefix();
        let page = self.config.page;
        self.styles.push(format!(
            "@page {{ size: {}mm {}mm; margin: 0; }}",
            page.width_mm, page.height_mm
        ));
        self.styles.push(format!(
            ".{p}page {{ box-sizing: border-box; width: {}mm; min-height: {}mm; }}",
            page.width_mm, page.height_mm
        ));
        self.styles
            .push(format!(".{p}row {{ display: flex; gap: 1rem; }}"));
        self.styles
            .push(format!(".{p}column {{ display: flex; flex-direction: column; }}"));
        self.styles.push(format!(".{p}wrap {{ flex-wrap: wrap; }}"));
        self.styles
            .push(format!(".{p}uppercase {{ text-transform: uppercase; }}"));
        self.styles.push(format!(".{p}italic {{ font-style: italic; }}"));
        self.styles
            .push(format!(".{p}token {{ display: inline-block; }}"));
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Attribute string for a node, with a leading space when non-empty
    fn attributes(&self, node: &Node) -> String {
        let prefix = self.prefix();
        let classes: Vec<String> = tag_class(node.tag)
            .into_iter()
            .chain(node.role.as_ref().map(Role::name))
            .chain(node.classes.iter().map(String::as_str))
            .map(|class| format!("{}{}", prefix, class))
            .collect();

        let mut out = String::new();
        if !classes.is_empty() {
            let _ = write!(out, r#" class="{}""#, escape_html(&classes.join(" ")));
        }
        if let Some(key) = &node.key {
            let _ = write!(out, r#" data-key="{}""#, escape_html(key));
        }
        if let Some(dir) = node.style.dir {
            let _ = write!(out, r#" dir="{}""#, dir.as_str());
        }
        if let Some(side) = node.style.side {
            let side = match side {
                Side::Left => "left",
                Side::Right => "right",
            };
            let _ = write!(out, r#" data-side="{}""#, side);
        }
        let css = inline_style(&node.style);
        if !css.is_empty() {
            let _ = write!(out, r#" style="{}""#, escape_html(&css));
        }
        out
    }

    /// Open an element whose children follow
    pub fn start_element(&mut self, name: &str, attrs: &str) {
        self.body
            .push(format!("{}<{}{}>", self.indent_str(), name, attrs));
        self.indent += 1;
    }

    pub fn end_element(&mut self, name: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.body.push(format!("{}</{}>", self.indent_str(), name));
    }

    /// Element with text content and no child elements
    pub fn add_leaf(&mut self, name: &str, attrs: &str, text: &str) {
        self.body.push(format!(
            "{}<{}{}>{}</{}>",
            self.indent_str(),
            name,
            attrs,
            escape_html(text),
            name
        ));
    }

    pub fn add_void(&mut self, name: &str, attrs: &str) {
        self.body
            .push(format!("{}<{}{}>", self.indent_str(), name, attrs));
    }

    pub fn add_text(&mut self, text: &str) {
        self.body
            .push(format!("{}{}", self.indent_str(), escape_html(text)));
    }

    /// Build the final HTML string
    pub fn build(self, document: &Document) -> String {
        let nl = self.newline();
        let pad = |depth: usize| {
            if self.config.pretty_print {
                "  ".repeat(depth)
            } else {
                String::new()
            }
        };

        let mut html = String::new();

        if self.config.standalone {
            html.push_str("<!DOCTYPE html>");
            html.push_str(nl);
            let _ = write!(
                html,
                r#"<html lang="{}" dir="{}">"#,
                document.language.code(),
                document.direction.as_str()
            );
            html.push_str(nl);
            html.push_str("<head>");
            html.push_str(nl);
            let _ = write!(html, r#"{}<meta charset="utf-8">"#, pad(1));
            html.push_str(nl);
            let _ = write!(html, "{}<title>{}</title>", pad(1), escape_html(&title(document)));
            html.push_str(nl);

            if !self.styles.is_empty() {
                let _ = write!(html, "{}<style>", pad(1));
                html.push_str(nl);
                for style in &self.styles {
                    html.push_str(&pad(2));
                    html.push_str(style);
                    html.push_str(nl);
                }
                let _ = write!(html, "{}</style>", pad(1));
                html.push_str(nl);
            }

            html.push_str("</head>");
            html.push_str(nl);
            html.push_str("<body>");
            html.push_str(nl);
        }

        for line in &self.body {
            html.push_str(line);
            html.push_str(nl);
        }

        if self.config.standalone {
            html.push_str("</body>");
            html.push_str(nl);
            html.push_str("</html>");
            html.push_str(nl);
        }

        html
    }
}

/// Render a document to HTML
pub fn render_html(document: &Document, config: &HtmlConfig, stylesheet: &Stylesheet) -> String {
    let mut builder = HtmlBuilder::new(config.clone());

    if config.standalone {
        builder.add_stylesheet(stylesheet);
        builder.add_page_rules();
    }

    render_node(&document.root, &mut builder);

    builder.build(document)
}

fn render_node(node: &Node, builder: &mut HtmlBuilder) {
    let name = element_name(node.tag);
    let attrs = builder.attributes(node);

    if node.tag == Tag::LineBreak {
        builder.add_void(name, &attrs);
        return;
    }

    if node.children.is_empty() {
        builder.add_leaf(name, &attrs, node.text.as_deref().unwrap_or(""));
        return;
    }

    builder.start_element(name, &attrs);
    if let Some(text) = &node.text {
        builder.add_text(text);
    }
    for child in &node.children {
        render_node(child, builder);
    }
    builder.end_element(name);
}

fn element_name(tag: Tag) -> &'static str {
    match tag {
        Tag::Page | Tag::Row | Tag::Column => "div",
        Tag::Section => "section",
        Tag::Heading(0 | 1) => "h1",
        Tag::Heading(2) => "h2",
        Tag::Heading(3) => "h3",
        Tag::Heading(4) => "h4",
        Tag::Heading(5) => "h5",
        Tag::Heading(_) => "h6",
        Tag::Text | Tag::Token => "span",
        Tag::Paragraph => "p",
        Tag::LineBreak => "br",
    }
}

/// Class for tags that share an element name
fn tag_class(tag: Tag) -> Option<&'static str> {
    match tag {
        Tag::Page => Some("page"),
        Tag::Row => Some("row"),
        Tag::Column => Some("column"),
        Tag::Token => Some("token"),
        _ => None,
    }
}

fn weight_value(weight: Weight) -> u16 {
    match weight {
        Weight::Medium => 500,
        Weight::Bold => 700,
        Weight::Black => 900,
    }
}

/// Format a node style as inline CSS declarations
fn inline_style(style: &Style) -> String {
    let mut decls = vec![];
    if let Some(color) = &style.color {
        decls.push(format!("color: {}", css_value(color)));
    }
    if let Some(background) = &style.background {
        decls.push(format!("background: {}", css_value(background)));
    }
    if let Some(border) = style.border {
        let color = style
            .border_color
            .as_deref()
            .map(css_value)
            .unwrap_or_else(|| "currentColor".to_string());
        decls.push(match border {
            Border::Bottom => format!("border-bottom: 1px solid {}", color),
            Border::BottomThick => format!("border-bottom: 4px solid {}", color),
            Border::Start => format!("border-inline-start: 3px solid {}", color),
            Border::Outline => format!("border: 1px solid {}", color),
        });
    }
    match style.width {
        Some(Width::Percent(p)) => decls.push(format!("width: {}%", p)),
        Some(Width::Span(n)) => decls.push(format!("grid-column: span {}", n)),
        None => {}
    }
    if let Some(columns) = style.columns {
        decls.push("display: grid".to_string());
        decls.push(format!(
            "grid-template-columns: repeat({}, minmax(0, 1fr))",
            columns
        ));
    }
    if let Some(font) = style.font {
        decls.push(format!("font-family: {}", font.css_stack()));
    }
    if let Some(weight) = style.weight {
        decls.push(format!("font-weight: {}", weight_value(weight)));
    }
    if let Some(align) = style.align {
        let align = match align {
            Align::Center => "center",
            Align::Justify => "justify",
        };
        decls.push(format!("text-align: {}", align));
    }
    decls.join("; ")
}

/// Text of the name heading, used as the page title
fn title(document: &Document) -> String {
    document
        .root
        .find(Role::Name)
        .map(Node::text_content)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "CV".to_string())
}

/// Strip characters that could end a declaration or a style block
fn css_value(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '<' | '>' | '{' | '}' | ';'))
        .collect()
}

/// Escape special HTML characters
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Archetype;
    use crate::locale::{Direction, Language};

    fn document(root: Node) -> Document {
        Document {
            language: Language::English,
            direction: Direction::Ltr,
            archetype: Archetype::Linear,
            root,
        }
    }

    fn fragment() -> HtmlConfig {
        HtmlConfig::new()
            .with_standalone(false)
            .with_pretty_print(false)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b"), "a &lt; b");
        assert_eq!(escape_html("R&D"), "R&amp;D");
        assert_eq!(escape_html(r#""quoted" 'single'"#), "&quot;quoted&quot; &#39;single&#39;");
    }

    #[test]
    fn test_inline_style() {
        let style = Style {
            color: Some("#000".to_string()),
            border: Some(Border::Start),
            border_color: Some("#10B981".to_string()),
            width: Some(Width::Percent(32)),
            weight: Some(Weight::Bold),
            ..Style::default()
        };
        assert_eq!(
            inline_style(&style),
            "color: #000; border-inline-start: 3px solid #10B981; width: 32%; font-weight: 700"
        );
    }

    #[test]
    fn test_fragment_snapshot() {
        let root = Node::new(Tag::Page)
            .with_style(Style {
                dir: Some(Direction::Ltr),
                ..Style::default()
            })
            .child(
                Node::text(Tag::Heading(1), "Tom & Jerry")
                    .with_role(Role::Name)
                    .with_color("#000"),
            );
        let html = render_html(&document(root), &fragment(), &Stylesheet::default());
        insta::assert_snapshot!(html, @r#"<div class="cv-page" dir="ltr"><h1 class="cv-name" style="color: #000">Tom &amp; Jerry</h1></div>"#);
    }

    #[test]
    fn test_line_breaks_and_keys() {
        let root = Node::new(Tag::Column)
            .with_role(Role::ExperienceEntry)
            .with_key("exp-1")
            .child(
                Node::new(Tag::Paragraph)
                    .with_role(Role::Description)
                    .child(Node::text(Tag::Text, "a"))
                    .child(Node::new(Tag::LineBreak))
                    .child(Node::text(Tag::Text, "b")),
            );
        let html = render_html(&document(root), &fragment(), &Stylesheet::default());
        assert_eq!(
            html,
            r#"<div class="cv-column cv-experience-entry" data-key="exp-1"><p class="cv-description"><span>a</span><br><span>b</span></p></div>"#
        );
    }

    #[test]
    fn test_side_becomes_data_attribute() {
        let mut sidebar = Node::new(Tag::Column).with_role(Role::Sidebar);
        sidebar.style.side = Some(Side::Left);
        let html = render_html(&document(sidebar), &fragment(), &Stylesheet::default());
        assert!(html.contains(r#"data-side="left""#));
    }

    #[test]
    fn test_standalone_head() {
        let root = Node::new(Tag::Page).child(Node::text(Tag::Heading(1), "Sara").with_role(Role::Name));
        let mut doc = document(root);
        doc.language = Language::Arabic;
        doc.direction = Direction::Rtl;
        let html = render_html(&doc, &HtmlConfig::default(), &Stylesheet::default());

        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
        assert!(html.contains("<title>Sara</title>"));
        assert!(html.contains("@page { size: 210mm 297mm; margin: 0; }"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_custom_properties_are_sorted() {
        let html = render_html(
            &document(Node::new(Tag::Page)),
            &HtmlConfig::default(),
            &Stylesheet::default(),
        );
        let background = html.find("--background-1:").unwrap();
        let chip = html.find("--chip-dark:").unwrap();
        let text = html.find("--text-1:").unwrap();
        assert!(background < chip && chip < text);
    }

    #[test]
    fn test_without_prefix() {
        let config = fragment().without_class_prefix();
        let html = render_html(&document(Node::new(Tag::Row)), &config, &Stylesheet::default());
        assert_eq!(html, r#"<div class="row"></div>"#);
    }
}
