//! Recursive-descent parser from tokens to a directive tree.
//!
//! The parser walks index ranges of the immutable token slice. A paired
//! directive (`[bold:on] … [bold:off]`) becomes a node whose children are
//! the tokens strictly between its two bracket groups.
//!
//! Spans of different kinds may interleave in the source:
//!
//! ```text
//! [bold:on]a[underline:on]b[bold:off]c[underline:off]
//! ```
//!
//! A span whose close lies beyond its parent's close is cut at the parent's
//! end and reopened right after it, which yields the properly nested tree
//! `bold{a underline{b}} underline{c}`.

use std::ops::RangeInclusive;
use std::str::FromStr;

use super::lexer::Token;
use super::node::{BoxThickness, Directive, Node};
use crate::error::{EscpError, Result};
use crate::protocol::text::Style;

/// Parse a token sequence into a [`Node::Root`].
pub fn parse(tokens: &[Token<'_>]) -> Result<Node> {
    let parser = Parser { tokens };
    let (children, carried) = parser.parse_range(0, tokens.len(), Vec::new())?;
    debug_assert!(carried.is_empty(), "every close lies inside the document");
    tracing::debug!(
        tokens = tokens.len(),
        nodes = children.len(),
        "parsed directive tree"
    );
    Ok(Node::Root(children))
}

/// A bracket group `[name:arg:arg…]`.
struct Group<'a> {
    name: &'a str,
    args: Vec<&'a str>,
    /// Index just past the closing `]`.
    end: usize,
}

/// What a paired directive wraps its children in.
#[derive(Debug, Clone, Copy)]
enum SpanKind {
    Style(Style),
    Box(BoxThickness),
}

/// An opened paired directive and the index of its closing group.
#[derive(Debug, Clone)]
struct OpenSpan {
    kind: SpanKind,
    close: usize,
}

impl OpenSpan {
    fn node(&self, children: Vec<Node>) -> Node {
        match self.kind {
            SpanKind::Style(style) => Node::Styled { style, children },
            SpanKind::Box(thickness) => Node::Boxed {
                thickness,
                children,
            },
        }
    }
}

struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
}

impl<'a> Parser<'_, 'a> {
    /// Parse `tokens[lo..hi]`, first reopening the spans in `reopen`
    /// (outermost first).
    ///
    /// Returns the nodes and the spans that were still open at `hi`,
    /// outermost first.
    fn parse_range(
        &self,
        lo: usize,
        hi: usize,
        reopen: Vec<OpenSpan>,
    ) -> Result<(Vec<Node>, Vec<OpenSpan>)> {
        let mut nodes = Vec::new();
        let mut carried = reopen;
        let mut i = lo;

        loop {
            if !carried.is_empty() {
                if i >= hi {
                    return Ok((nodes, carried));
                }
                let inner = carried.split_off(1);
                let open = carried.remove(0);
                let (node, still_open, next) = self.span(open, i, hi, inner)?;
                nodes.push(node);
                carried = still_open;
                i = next;
                continue;
            }
            if i >= hi {
                break;
            }

            match self.tokens[i] {
                Token::OpenBracket => {
                    let group = self.group(i)?;
                    let directive = Directive::from_name(group.name)
                        .ok_or_else(|| EscpError::UnknownDirective(group.name.to_string()))?;
                    if directive.is_paired() {
                        let open = self.open_span(directive, &group)?;
                        let (node, still_open, next) =
                            self.span(open, group.end, hi, Vec::new())?;
                        nodes.push(node);
                        carried = still_open;
                        i = next;
                    } else {
                        nodes.push(leaf(directive, &group)?);
                        i = group.end;
                    }
                }
                Token::Space => {
                    let run = self.run_length(i, hi, Token::Space);
                    nodes.push(Node::Space(run));
                    i += run;
                }
                Token::Newline => {
                    let run = self.run_length(i, hi, Token::Newline);
                    nodes.push(Node::Newline(run));
                    i += run;
                }
                _ => {
                    let mut text = String::new();
                    while i < hi
                        && !matches!(
                            self.tokens[i],
                            Token::OpenBracket | Token::Space | Token::Newline
                        )
                    {
                        text.push_str(self.tokens[i].as_str());
                        i += 1;
                    }
                    let text = text.trim();
                    if !text.is_empty() {
                        nodes.push(Node::Text(text.to_string()));
                    }
                }
            }
        }

        Ok((nodes, Vec::new()))
    }

    /// Build the node for `open`, whose content starts at `body`, inside a
    /// range ending at `hi`.
    ///
    /// Returns the node, the spans still open where it ends, and the index
    /// parsing resumes at.
    fn span(
        &self,
        open: OpenSpan,
        body: usize,
        hi: usize,
        reopen: Vec<OpenSpan>,
    ) -> Result<(Node, Vec<OpenSpan>, usize)> {
        if open.close < hi {
            let (children, carried) = self.parse_range(body, open.close, reopen)?;
            let next = self.group(open.close)?.end;
            Ok((open.node(children), carried, next))
        } else {
            let (children, mut carried) = self.parse_range(body, hi, reopen)?;
            let node = open.node(children);
            carried.insert(0, open);
            Ok((node, carried, hi))
        }
    }

    fn open_span(&self, directive: Directive, group: &Group<'a>) -> Result<OpenSpan> {
        let name = directive.name();
        match group.args.first() {
            Some(&"on") => {}
            Some(&"off") => return Err(EscpError::UnmatchedDirective(format!("{name}:off"))),
            Some(other) => {
                return Err(EscpError::invalid_argument(
                    name,
                    format!("expected 'on' or 'off', got '{other}'"),
                ));
            }
            None => return Err(EscpError::invalid_argument(name, "expected 'on' or 'off'")),
        }

        let kind = match directive {
            Directive::Style(style) => SpanKind::Style(style),
            Directive::Box => SpanKind::Box(box_thickness(&group.args[1..])?),
            _ => unreachable!("only paired directives open spans"),
        };
        let close = self.find_close(group.end, name)?;
        Ok(OpenSpan { kind, close })
    }

    /// Index of the `[name:off…]` group matching an open whose content
    /// starts at `from`. Same-name spans in between nest.
    fn find_close(&self, from: usize, name: &str) -> Result<usize> {
        let mut depth = 0usize;
        for k in from..self.tokens.len() {
            if self.tokens[k] != Token::OpenBracket
                || self.tokens.get(k + 1) != Some(&Token::Text(name))
                || self.tokens.get(k + 2) != Some(&Token::Colon)
            {
                continue;
            }
            match self.tokens.get(k + 3) {
                Some(Token::Text("on")) => depth += 1,
                Some(Token::Text("off")) if depth == 0 => return Ok(k),
                Some(Token::Text("off")) => depth -= 1,
                _ => {}
            }
        }
        Err(EscpError::UnmatchedDirective(format!("{name}:on")))
    }

    /// Read the bracket group opening at `open`.
    fn group(&self, open: usize) -> Result<Group<'a>> {
        let malformed = |position, reason: &str| EscpError::MalformedDirective {
            position,
            reason: reason.to_string(),
        };

        let mut parts = Vec::new();
        for k in open + 1..self.tokens.len() {
            match self.tokens[k] {
                Token::Text(text) => parts.push(text),
                Token::Colon => {}
                Token::CloseBracket => {
                    let Some((name, args)) = parts.split_first() else {
                        return Err(malformed(open, "empty directive"));
                    };
                    return Ok(Group {
                        name: *name,
                        args: args.to_vec(),
                        end: k + 1,
                    });
                }
                Token::Space | Token::Newline => {
                    return Err(malformed(k, "whitespace inside directive"));
                }
                Token::OpenBracket => return Err(malformed(k, "'[' inside directive")),
            }
        }
        Err(malformed(open, "unterminated directive"))
    }

    fn run_length(&self, from: usize, hi: usize, token: Token<'_>) -> usize {
        self.tokens[from..hi]
            .iter()
            .take_while(|t| **t == token)
            .count()
    }
}

/// Build a self-closing directive node, checking arity and types.
fn leaf(directive: Directive, group: &Group<'_>) -> Result<Node> {
    let name = directive.name();
    let args = &group.args;
    let strings = || args.iter().map(|a| a.to_string()).collect::<Vec<_>>();

    let node = match directive {
        Directive::Pragma => {
            arity(name, args, 1..=2)?;
            Node::Pragma(strings())
        }
        Directive::Init => {
            arity(name, args, 0..=0)?;
            Node::Init
        }
        Directive::SoftWrap => {
            arity(name, args, 1..=1)?;
            Node::SoftWrap(on_off(name, args[0])?)
        }
        Directive::Justification => {
            arity(name, args, 1..=usize::MAX)?;
            Node::Justification(strings())
        }
        Directive::Symbol => {
            arity(name, args, 1..=usize::MAX)?;
            Node::Symbol(strings())
        }
        Directive::Font => {
            arity(name, args, 1..=usize::MAX)?;
            Node::Font(strings())
        }
        Directive::Cpi => {
            arity(name, args, 1..=1)?;
            Node::Cpi(integer(name, args[0])?)
        }
        Directive::LineSpacing => {
            arity(name, args, 2..=2)?;
            Node::LineSpacing(integer(name, args[0])?, integer(name, args[1])?)
        }
        Directive::Margin => {
            arity(name, args, 2..=2)?;
            Node::Margin(args[0].to_string(), integer(name, args[1])?)
        }
        Directive::PageLength => {
            arity(name, args, 2..=2)?;
            Node::PageLength(args[0].to_string(), integer(name, args[1])?)
        }
        Directive::Style(_) | Directive::Box => {
            unreachable!("paired directives are parsed as spans")
        }
    };
    Ok(node)
}

fn arity(directive: &str, args: &[&str], expected: RangeInclusive<usize>) -> Result<()> {
    if expected.contains(&args.len()) {
        return Ok(());
    }
    let wanted = match (*expected.start(), *expected.end()) {
        (lo, hi) if lo == hi => format!("{lo}"),
        (lo, usize::MAX) => format!("at least {lo}"),
        (lo, hi) => format!("{lo} to {hi}"),
    };
    Err(EscpError::invalid_argument(
        directive,
        format!("expected {wanted} argument(s), got {}", args.len()),
    ))
}

fn on_off(directive: &str, arg: &str) -> Result<bool> {
    match arg {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(EscpError::invalid_argument(
            directive,
            format!("expected 'on' or 'off', got '{other}'"),
        )),
    }
}

fn integer<T: FromStr>(directive: &str, arg: &str) -> Result<T> {
    arg.parse().map_err(|_| {
        EscpError::invalid_argument(
            directive,
            format!("'{arg}' is not a valid integer for this parameter"),
        )
    })
}

/// Read `thickness:<1|2>` options of a box.
fn box_thickness(options: &[&str]) -> Result<BoxThickness> {
    let mut thickness = BoxThickness::default();
    for pair in options.chunks(2) {
        match pair {
            ["thickness", value] => {
                thickness = match integer::<u8>("box", value)? {
                    1 => BoxThickness::Single,
                    2 => BoxThickness::Double,
                    other => {
                        return Err(EscpError::invalid_argument(
                            "box",
                            format!("thickness must be 1 or 2, got {other}"),
                        ));
                    }
                };
            }
            [key, _] => {
                return Err(EscpError::invalid_argument(
                    "box",
                    format!("unknown option '{key}'"),
                ));
            }
            [key] => {
                return Err(EscpError::invalid_argument(
                    "box",
                    format!("option '{key}' has no value"),
                ));
            }
            _ => unreachable!("chunks(2) yields one or two items"),
        }
    }
    Ok(thickness)
}
