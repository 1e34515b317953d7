//! Single-pass scanner for the path language.
//!
//! The scanner knows nothing about which attributes are distinguishing; it
//! produces raw `(name, attributes)` segments that a [`Grammar`] then turns
//! into canonical nodes.
//!
//! [`Grammar`]: super::Grammar

use crate::error::{Error, Result};

/// A scanned segment before grammar classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawNode {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl RawNode {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: Vec::new(),
        }
    }

    /// Later occurrences of an attribute replace earlier ones.
    fn push(&mut self, name: String, value: String) {
        self.attributes.retain(|(n, _)| *n != name);
        self.attributes.push((name, value));
    }
}

#[derive(Debug, Clone, Copy)]
enum State {
    /// Reading an element name that started at the given offset.
    Name(usize),
    /// Just read `[`, expecting `@`.
    Bracket,
    /// Reading an attribute name that started at the given offset.
    AttrName(usize),
    /// Just read `=`, expecting a quote.
    Equals,
    /// Inside a quoted value: quote char and value start.
    Value(char, usize),
    /// Just closed a value, expecting `]`.
    AfterValue,
    /// Just read `]`, expecting `[`, `/` or the end.
    AfterBracket,
}

/// Whether a path string is absolute (`//`) or a relative step (`/`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Anchor {
    Absolute,
    Relative,
}

/// Scans `input` into raw segments.
pub(crate) fn scan(input: &str, anchor: Anchor) -> Result<Vec<RawNode>> {
    let start = match anchor {
        Anchor::Absolute if input.starts_with("//") => 2,
        Anchor::Relative if input.starts_with('/') && !input.starts_with("//") => 1,
        _ => return Err(Error::malformed(input, 0)),
    };

    let mut nodes = Vec::new();
    let mut current: Option<RawNode> = None;
    let mut attr_name = String::new();
    let mut state = State::Name(start);

    for (i, c) in input.char_indices().skip_while(|(i, _)| *i < start) {
        state = match (state, c) {
            (State::Name(from), '/') => {
                let name = &input[from..i];
                if name.is_empty() {
                    return Err(Error::malformed(input, i));
                }
                nodes.push(RawNode::new(name));
                State::Name(i + 1)
            }
            (State::Name(from), '[') => {
                let name = &input[from..i];
                if name.is_empty() {
                    return Err(Error::malformed(input, i));
                }
                current = Some(RawNode::new(name));
                State::Bracket
            }
            (State::Name(_), ']' | '@' | '=' | '"' | '\'') => {
                return Err(Error::malformed(input, i));
            }
            (State::Name(from), _) => State::Name(from),

            (State::Bracket, '@') => State::AttrName(i + 1),
            (State::Bracket, _) => return Err(Error::malformed(input, i)),

            (State::AttrName(from), '=') => {
                if from == i {
                    return Err(Error::malformed(input, i));
                }
                attr_name = input[from..i].to_string();
                State::Equals
            }
            (State::AttrName(_), '/' | '[' | ']' | '@' | '"' | '\'') => {
                return Err(Error::malformed(input, i));
            }
            (State::AttrName(from), _) => State::AttrName(from),

            (State::Equals, q @ ('"' | '\'')) => State::Value(q, i + 1),
            (State::Equals, _) => return Err(Error::malformed(input, i)),

            (State::Value(q, from), c) if c == q => {
                let node = current
                    .as_mut()
                    .ok_or_else(|| Error::malformed(input, i))?;
                node.push(std::mem::take(&mut attr_name), input[from..i].to_string());
                State::AfterValue
            }
            (State::Value(q, from), _) => State::Value(q, from),

            (State::AfterValue, ']') => State::AfterBracket,
            (State::AfterValue, _) => return Err(Error::malformed(input, i)),

            (State::AfterBracket, '[') => State::Bracket,
            (State::AfterBracket, '/') => {
                let node = current.take().ok_or_else(|| Error::malformed(input, i))?;
                nodes.push(node);
                State::Name(i + 1)
            }
            (State::AfterBracket, _) => return Err(Error::malformed(input, i)),
        };
    }

    match state {
        State::Name(from) if from < input.len() => nodes.push(RawNode::new(&input[from..])),
        State::AfterBracket => {
            if let Some(node) = current {
                nodes.push(node);
            }
        }
        _ => return Err(Error::malformed(input, input.len())),
    }

    Ok(nodes)
}
