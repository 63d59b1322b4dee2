//! Directive tree.
//!
//! Leaves carry text, whitespace runs and self-closing directives. Styled
//! spans and boxes own the nodes between their `on` and `off` markers.
//! Parameters are already coerced to the types the directive takes.

use crate::protocol::text::Style;

/// Every directive name the markup understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Pragma,
    Init,
    SoftWrap,
    Style(Style),
    Box,
    Justification,
    Symbol,
    Font,
    Cpi,
    LineSpacing,
    Margin,
    PageLength,
}

impl Directive {
    pub fn from_name(name: &str) -> Option<Self> {
        let directive = match name {
            "pragma" => Self::Pragma,
            "init" => Self::Init,
            "soft-wrap" => Self::SoftWrap,
            "bold" => Self::Style(Style::Bold),
            "italic" => Self::Style(Style::Italic),
            "underline" => Self::Style(Style::Underline),
            "condensed" => Self::Style(Style::Condensed),
            "proportional" => Self::Style(Style::Proportional),
            "double-width" => Self::Style(Style::DoubleWidth),
            "double-height" => Self::Style(Style::DoubleHeight),
            "box" => Self::Box,
            "justification" => Self::Justification,
            "symbol" => Self::Symbol,
            "font" => Self::Font,
            "cpi" => Self::Cpi,
            "line-spacing" => Self::LineSpacing,
            "margin" => Self::Margin,
            "page-length" => Self::PageLength,
            _ => return None,
        };
        Some(directive)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Pragma => "pragma",
            Self::Init => "init",
            Self::SoftWrap => "soft-wrap",
            Self::Style(style) => style.name(),
            Self::Box => "box",
            Self::Justification => "justification",
            Self::Symbol => "symbol",
            Self::Font => "font",
            Self::Cpi => "cpi",
            Self::LineSpacing => "line-spacing",
            Self::Margin => "margin",
            Self::PageLength => "page-length",
        }
    }

    /// Directives that wrap content between `[name:on]` and `[name:off]`.
    pub fn is_paired(self) -> bool {
        matches!(self, Self::Style(_) | Self::Box)
    }
}

/// Border style of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxThickness {
    #[default]
    Single,
    Double,
}

/// A node of the directive tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Root(Vec<Node>),
    /// Whitespace-free run of text.
    Text(String),
    /// Run of `n` spaces.
    Space(usize),
    /// Run of `n` newlines.
    Newline(usize),
    /// Pragma name followed by its optional arguments.
    Pragma(Vec<String>),
    Init,
    SoftWrap(bool),
    Styled {
        style: Style,
        children: Vec<Node>,
    },
    Boxed {
        thickness: BoxThickness,
        children: Vec<Node>,
    },
    Justification(Vec<String>),
    Symbol(Vec<String>),
    Font(Vec<String>),
    Cpi(u8),
    LineSpacing(u8, u16),
    Margin(String, u8),
    PageLength(String, u16),
}

impl Node {
    /// Kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Root(_) => "root",
            Node::Text(_) => "text",
            Node::Space(_) => "space",
            Node::Newline(_) => "newline",
            Node::Pragma(_) => Directive::Pragma.name(),
            Node::Init => Directive::Init.name(),
            Node::SoftWrap(_) => Directive::SoftWrap.name(),
            Node::Styled { style, .. } => style.name(),
            Node::Boxed { .. } => Directive::Box.name(),
            Node::Justification(_) => Directive::Justification.name(),
            Node::Symbol(_) => Directive::Symbol.name(),
            Node::Font(_) => Directive::Font.name(),
            Node::Cpi(_) => Directive::Cpi.name(),
            Node::LineSpacing(..) => Directive::LineSpacing.name(),
            Node::Margin(..) => Directive::Margin.name(),
            Node::PageLength(..) => Directive::PageLength.name(),
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root(children)
            | Node::Styled { children, .. }
            | Node::Boxed { children, .. } => children,
            _ => &[],
        }
    }
}
