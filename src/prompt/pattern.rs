//! Text patterns with named placeholders
//!
//! Syntax: `{name}` is a placeholder, `{{` and `}}` are literal braces.
//! Names are non-empty runs of ASCII letters, digits, and underscores.

use std::fmt;
use std::mem;

use crate::error::{ChainError, Result};

use super::bindings::PlaceholderBindings;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed text pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPattern {
    source: String,
    segments: Vec<Segment>,
}

impl TextPattern {
    /// Parse a pattern, rejecting unbalanced braces and invalid names.
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' => {
                    if matches!(chars.peek(), Some((_, '{'))) {
                        chars.next();
                        literal.push('{');
                        continue;
                    }

                    let mut name = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }

                    if !closed {
                        return Err(ChainError::template_syntax(
                            pos,
                            "unterminated placeholder",
                        ));
                    }
                    if !is_valid_name(&name) {
                        return Err(ChainError::template_syntax(
                            pos,
                            format!("invalid placeholder name '{name}'"),
                        ));
                    }

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name));
                }
                '}' => {
                    if matches!(chars.peek(), Some((_, '}'))) {
                        chars.next();
                        literal.push('}');
                        continue;
                    }
                    return Err(ChainError::template_syntax(
                        pos,
                        "single '}' is not allowed, use '}}' for a literal brace",
                    ));
                }
                c => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { source, segments })
    }

    /// The pattern text as written
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholder names in order of appearance, repeats included
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute bindings in a single pass.
    ///
    /// Values are inserted as-is and never scanned for placeholders.
    pub fn render(&self, template: &str, values: &PlaceholderBindings) -> Result<String> {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = values
                        .get(name)
                        .ok_or_else(|| ChainError::missing_placeholder(template, name.as_str()))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for TextPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
