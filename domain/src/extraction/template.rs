//! Literal transformation templates for Chinese clauses.
//!
//! Each template reads `[marker] X verb Y`. `X` is the shortest non-empty
//! text before the verb; `Y` is the shortest non-empty text before the next
//! boundary token (see [`TARGET_BOUNDARIES`]) or the end of the clause.
//! Matching is a bounded scan over the clause, not a regex: the target
//! capture needs a look-ahead that `regex` does not offer.

use crate::operation::{KeyedOperations, Operation};
use crate::vocabulary::Vocabulary;
use crate::vocabulary::builtin::{POSSESSIVE_PARTICLE, TARGET_BOUNDARIES};

/// One `[marker] X verb Y` template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformTemplate {
    /// Leading marker such as `把`; `None` means `X` starts anywhere.
    pub marker: Option<&'static str>,
    /// Verbs accepted between `X` and `Y`, tried in order.
    pub verbs: &'static [&'static str],
}

/// Templates in priority order.
pub const TRANSFORM_TEMPLATES: &[TransformTemplate] = &[
    TransformTemplate {
        marker: Some("把"),
        verbs: &["变成"],
    },
    TransformTemplate {
        marker: Some("将"),
        verbs: &["变成"],
    },
    TransformTemplate {
        marker: Some("把"),
        verbs: &["改为", "改成"],
    },
    TransformTemplate {
        marker: Some("将"),
        verbs: &["改为", "改成"],
    },
    TransformTemplate {
        marker: Some("使"),
        verbs: &["成为"],
    },
    TransformTemplate {
        marker: None,
        verbs: &["变成"],
    },
];

/// A raw template match. Byte offsets index the scanned clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateMatch<'a> {
    pub start: usize,
    pub end: usize,
    pub source: &'a str,
    pub target: &'a str,
}

fn skip_whitespace(text: &str, pos: usize) -> usize {
    let rest = &text[pos..];
    pos + (rest.len() - rest.trim_start().len())
}

fn next_char_end(text: &str, pos: usize) -> Option<usize> {
    text[pos..].chars().next().map(|c| pos + c.len_utf8())
}

/// Char boundaries of `text` at or after `from`, including `text.len()`.
fn boundaries(text: &str, from: usize) -> impl Iterator<Item = usize> + '_ {
    text[from..]
        .char_indices()
        .map(move |(i, _)| from + i)
        .chain(std::iter::once(text.len()))
}

/// End of the target: the first boundary token at or after `from`, else the
/// end of the text.
fn target_end(text: &str, from: usize) -> usize {
    boundaries(text, from)
        .find(|&pos| {
            let rest = &text[pos..];
            TARGET_BOUNDARIES.iter().any(|b| rest.starts_with(b))
        })
        .unwrap_or(text.len())
}

impl TransformTemplate {
    /// All non-overlapping matches, left to right.
    pub fn find_iter<'a>(&self, text: &'a str) -> Vec<TemplateMatch<'a>> {
        let mut matches = Vec::new();
        let mut cursor = 0;
        while cursor < text.len() {
            match self.find_at(text, cursor) {
                Some(found) => {
                    cursor = found.end;
                    matches.push(found);
                }
                None => break,
            }
        }
        matches
    }

    /// Leftmost match starting at or after `from`.
    ///
    /// If the earliest candidate start fails, every later one fails too:
    /// it can only see a subset of the verbs. So at most one start is tried.
    pub fn find_at<'a>(&self, text: &'a str, from: usize) -> Option<TemplateMatch<'a>> {
        if from >= text.len() {
            return None;
        }
        let (start, source_start) = match self.marker {
            Some(marker) => {
                let start = from + text[from..].find(marker)?;
                (start, skip_whitespace(text, start + marker.len()))
            }
            None => (from, from),
        };
        self.match_body(text, start, source_start)
    }

    /// Earliest verb starting at or after `from`; ties go to the verb listed
    /// first.
    fn find_verb(&self, text: &str, from: usize) -> Option<(usize, &'static str)> {
        boundaries(text, from).find_map(|pos| {
            let rest = &text[pos..];
            self.verbs
                .iter()
                .find(|v| rest.starts_with(**v))
                .map(|v| (pos, *v))
        })
    }

    fn match_body<'a>(
        &self,
        text: &'a str,
        start: usize,
        source_start: usize,
    ) -> Option<TemplateMatch<'a>> {
        let min_source_end = next_char_end(text, source_start)?;
        let mut search_from = min_source_end;

        while let Some((verb_start, verb)) = self.find_verb(text, search_from) {
            let target_start = skip_whitespace(text, verb_start + verb.len());
            if let Some(min_target_end) = next_char_end(text, target_start) {
                let source_end = text[..verb_start].trim_end().len().max(min_source_end);
                let end = target_end(text, min_target_end);
                return Some(TemplateMatch {
                    start,
                    end,
                    source: &text[source_start..source_end],
                    target: &text[target_start..end],
                });
            }
            // Nothing after this verb; a later one may still have a target.
            search_from = next_char_end(text, verb_start)?;
        }
        None
    }
}

/// The longest leading part of `target` that is a known color.
///
/// Strips surrounding whitespace and one trailing `的` first, so `蓝的`,
/// `蓝色了` and `蓝色吧` all resolve to their color.
fn resolve_target<'a>(target: &'a str, vocabulary: &Vocabulary) -> Option<&'a str> {
    let target = target.trim();
    let target = target.strip_suffix(POSSESSIVE_PARTICLE).unwrap_or(target);
    target
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .map(|end| &target[..end])
        .find(|prefix| vocabulary.is_color(prefix))
}

/// Apply every template to the clause, in priority order.
///
/// Results are keyed by source phrase: a later match for the same source
/// replaces the target but keeps the first position. Matches whose source is
/// blank or whose target does not start with a known color are ignored; the
/// recorded target is that color alone.
pub fn match_templates(clause: &str, vocabulary: &Vocabulary) -> Vec<Operation> {
    let mut operations = KeyedOperations::new();

    for template in TRANSFORM_TEMPLATES {
        for found in template.find_iter(clause) {
            let source = found.source.trim();
            if source.is_empty() {
                continue;
            }
            if let Some(target) = resolve_target(found.target, vocabulary) {
                operations.record(Operation::new(source, target));
            }
        }
    }

    operations.into_operations()
}
