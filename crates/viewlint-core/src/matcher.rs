//! Textual matching of modifier invocations against specifications.
//!
//! The matcher operates on a node's rendered signature rather than a
//! resolved expression graph: the upstream syntax representation mixes
//! literal, symbolic, and call-expression arguments, and the rendered text
//! is the common denominator. A signature like
//!
//! ```text
//! Text("Hello").onTapGesture(count: 1) { play() }.hoverEffect(.automatic)
//! ```
//!
//! is scanned at nesting depth zero into an invocation chain; each
//! invocation carries its argument slots (parenthesized arguments, then
//! trailing closures, then labeled trailing closures). Bracket nesting and
//! string literals (including escapes) are respected, so closure bodies and
//! interpolated strings never leak segments into the chain.
//!
//! Every query here is total: absence of a match is an ordinary `false` or
//! `None`, never an error.

use crate::modifier::{ArgumentSpec, ModifierSpec};
use crate::node::Node;

/// One argument slot parsed out of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argument<'a> {
    /// Slot label, `None` for positional arguments and trailing closures.
    pub label: Option<&'a str>,
    /// Raw slot text, trimmed; closure slots carry the text between braces.
    pub value: &'a str,
}

/// One invocation parsed out of a rendered chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    /// The invocation's identifier.
    pub name: &'a str,
    /// Argument slots in source order, trailing closures last.
    pub arguments: Vec<Argument<'a>>,
}

impl<'a> Invocation<'a> {
    /// Returns true if this invocation satisfies `spec`.
    ///
    /// Argument specifications are consumed in order against the slots:
    /// a slot whose label matches the current specification must satisfy
    /// its accepted values; a non-required specification with no matching
    /// slot is skipped; surplus slots after the specification list are
    /// tolerated.
    #[must_use]
    pub fn satisfies(&self, spec: &ModifierSpec) -> bool {
        if self.name != spec.name() {
            return false;
        }
        let mut slot = 0;
        for arg_spec in spec.arguments() {
            match self.arguments.get(slot) {
                Some(argument) if label_matches(argument, arg_spec) => {
                    if !arg_spec.accepts(argument.value) {
                        return false;
                    }
                    slot += 1;
                }
                _ => {
                    if arg_spec.is_required() {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Returns the single unnamed argument's text, or `None` when the
    /// invocation carries zero or several unnamed arguments.
    #[must_use]
    pub fn single_unnamed_argument(&self) -> Option<&'a str> {
        let mut unnamed = self.arguments.iter().filter(|a| a.label.is_none());
        match (unnamed.next(), unnamed.next()) {
            (Some(argument), None) => Some(argument.value),
            _ => None,
        }
    }

    /// Returns the value of the slot labeled `label`, if present.
    #[must_use]
    pub fn labeled_argument(&self, label: &str) -> Option<&'a str> {
        self.arguments
            .iter()
            .find(|a| a.label == Some(label))
            .map(|a| a.value)
    }
}

/// An unnamed specification matches an unlabeled slot; a named one
/// matches a slot with the same label.
fn label_matches(argument: &Argument<'_>, spec: &ArgumentSpec) -> bool {
    match argument.label {
        None => spec.name().is_empty(),
        Some(label) => label == spec.name(),
    }
}

/// Returns true if the node's signature satisfies at least one of the
/// alternative specifications.
#[must_use]
pub fn matches(node: &Node, specs: &[ModifierSpec]) -> bool {
    let Some(signature) = node.name() else {
        return false;
    };
    let chain = invocations(signature);
    specs
        .iter()
        .any(|spec| chain.iter().any(|invocation| invocation.satisfies(spec)))
}

/// Returns the raw text of the single unnamed argument of the node's
/// outermost (last) invocation.
///
/// Used for substring-level secondary checks on trailing closures and
/// content blocks. Returns `None` when the signature has no invocation or
/// the invocation's unnamed argument is absent or ambiguous.
#[must_use]
pub fn single_unnamed_argument(node: &Node) -> Option<&str> {
    invocations(node.name()?)
        .last()
        .and_then(Invocation::single_unnamed_argument)
}

/// Returns the raw text of the single unnamed argument of the invocation
/// named `name` anywhere in the node's chain.
///
/// The first invocation with that identifier and an unambiguous unnamed
/// argument wins.
#[must_use]
pub fn single_unnamed_argument_of<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    let chain = invocations(node.name()?);
    chain
        .iter()
        .filter(|invocation| invocation.name == name)
        .find_map(Invocation::single_unnamed_argument)
}

/// Returns the value of the `label`-labeled argument of the invocation
/// named `invocation` in the node's chain.
#[must_use]
pub fn labeled_argument<'a>(node: &'a Node, invocation: &str, label: &str) -> Option<&'a str> {
    let chain = invocations(node.name()?);
    chain
        .iter()
        .filter(|inv| inv.name == invocation)
        .find_map(|inv| inv.labeled_argument(label))
}

/// Parses a rendered signature into its top-level invocation chain.
///
/// Identifier segments without call syntax are kept (a builder may supply
/// a partial rendering); their argument lists are simply empty.
#[must_use]
pub fn invocations(signature: &str) -> Vec<Invocation<'_>> {
    let bytes = signature.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'"' {
            i = skip_string(bytes, i);
        } else if is_ident_start(b) {
            let start = i;
            i += 1;
            while i < bytes.len() && is_ident_continue(bytes[i]) {
                i += 1;
            }
            let name = &signature[start..i];
            let mut arguments = Vec::new();
            if i < bytes.len() && bytes[i] == b'(' {
                match matching_delimiter(bytes, i) {
                    Some(close) => {
                        split_arguments(&signature[i + 1..close], &mut arguments);
                        i = close + 1;
                    }
                    None => i = bytes.len(),
                }
            }
            i = parse_trailing_closures(signature, i, &mut arguments);
            out.push(Invocation { name, arguments });
        } else {
            i += 1;
        }
    }
    out
}

/// Consumes trailing closure blocks after an invocation: first unlabeled
/// `{ … }` blocks, then `label: { … }` blocks. Returns the new position.
fn parse_trailing_closures<'a>(
    signature: &'a str,
    mut i: usize,
    arguments: &mut Vec<Argument<'a>>,
) -> usize {
    let bytes = signature.as_bytes();
    loop {
        let j = skip_whitespace(bytes, i);
        if j < bytes.len() && bytes[j] == b'{' {
            let Some(close) = matching_delimiter(bytes, j) else {
                return bytes.len();
            };
            arguments.push(Argument {
                label: None,
                value: signature[j + 1..close].trim(),
            });
            i = close + 1;
            continue;
        }
        if let Some((label_start, label_end, brace)) = labeled_closure_at(bytes, j) {
            let Some(close) = matching_delimiter(bytes, brace) else {
                return bytes.len();
            };
            arguments.push(Argument {
                label: Some(&signature[label_start..label_end]),
                value: signature[brace + 1..close].trim(),
            });
            i = close + 1;
            continue;
        }
        return i;
    }
}

/// Recognizes `label : {` starting at `i`; returns the label's byte range
/// and the opening brace position.
fn labeled_closure_at(bytes: &[u8], i: usize) -> Option<(usize, usize, usize)> {
    if i >= bytes.len() || !is_ident_start(bytes[i]) {
        return None;
    }
    let start = i;
    let mut j = i + 1;
    while j < bytes.len() && is_ident_continue(bytes[j]) {
        j += 1;
    }
    let end = j;
    j = skip_whitespace(bytes, j);
    if j < bytes.len() && bytes[j] == b':' {
        let k = skip_whitespace(bytes, j + 1);
        if k < bytes.len() && bytes[k] == b'{' {
            return Some((start, end, k));
        }
    }
    None
}

/// Splits a parenthesized argument list into labeled/unlabeled slots at
/// top-level commas.
fn split_arguments<'a>(text: &'a str, out: &mut Vec<Argument<'a>>) {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                i = skip_string(bytes, i);
                continue;
            }
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                push_slot(&text[start..i], out);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    push_slot(&text[start..], out);
}

fn push_slot<'a>(slot: &'a str, out: &mut Vec<Argument<'a>>) {
    let slot = slot.trim();
    if slot.is_empty() {
        return;
    }
    match split_label(slot) {
        Some((label, value)) => out.push(Argument {
            label: Some(label),
            value,
        }),
        None => out.push(Argument {
            label: None,
            value: slot,
        }),
    }
}

/// Splits a `label: value` slot; `None` if the slot is positional.
fn split_label(slot: &str) -> Option<(&str, &str)> {
    let bytes = slot.as_bytes();
    if bytes.is_empty() || !is_ident_start(bytes[0]) {
        return None;
    }
    let mut i = 1;
    while i < bytes.len() && is_ident_continue(bytes[i]) {
        i += 1;
    }
    let label_end = i;
    let j = skip_whitespace(bytes, i);
    if j < bytes.len() && bytes[j] == b':' && bytes.get(j + 1) != Some(&b':') {
        return Some((&slot[..label_end], slot[j + 1..].trim()));
    }
    None
}

/// Returns the index of the delimiter closing the one at `open`, scanning
/// over nested brackets and string literals. `None` if unbalanced.
fn matching_delimiter(bytes: &[u8], open: usize) -> Option<usize> {
    let close = match bytes[open] {
        b'(' => b')',
        b'[' => b']',
        b'{' => b'}',
        _ => return None,
    };
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                i = skip_string(bytes, i);
                continue;
            }
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return (bytes[i] == close).then_some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Returns the index just past a string literal starting at `start`.
/// Backslash escapes (including interpolation openers) are skipped.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    i
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
