//! Part-of-speech driven extraction over a tagged clause.
//!
//! Used when no transformation template matched. The scan looks for a color
//! word followed by a noun phrase (`红色 大 立方体`), then for the nearest verb
//! after the phrase, then for a color within a short window after that verb.

use super::tagged::TaggedWord;
use crate::operation::{KeyedOperations, Operation};
use crate::vocabulary::Vocabulary;

/// How many tokens after the verb are searched for the target color.
pub const DEFAULT_TARGET_WINDOW: usize = 5;

fn extends_phrase(word: &TaggedWord, vocabulary: &Vocabulary) -> bool {
    vocabulary.is_modifier(&word.word) || vocabulary.is_object(&word.word) || word.is_nominal()
}

/// Target color after the nearest verb in `rest`, if any.
///
/// Only the first verb is considered; a verb with no color in its window
/// ends the search.
fn find_target<'a>(
    rest: &'a [TaggedWord],
    vocabulary: &Vocabulary,
    target_window: usize,
) -> Option<&'a str> {
    let verb = rest.iter().position(TaggedWord::is_verbal)?;
    rest[verb + 1..]
        .iter()
        .take(target_window)
        .find(|w| vocabulary.is_color(&w.word))
        .map(|w| w.word.as_str())
}

/// Scan a tagged clause left to right for `color+phrase … verb … color`.
///
/// A phrase must hold more than the color itself. Results are keyed by
/// source like the template matcher.
pub fn scan_tagged(
    words: &[TaggedWord],
    vocabulary: &Vocabulary,
    target_window: usize,
) -> Vec<Operation> {
    let mut operations = KeyedOperations::new();
    let mut i = 0;

    while i < words.len() {
        if !vocabulary.is_color(&words[i].word) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < words.len() && extends_phrase(&words[j], vocabulary) {
            j += 1;
        }

        if j - i > 1 {
            let source: String = words[i..j].iter().map(|w| w.word.as_str()).collect();
            if let Some(target) = find_target(&words[j..], vocabulary, target_window) {
                operations.record(Operation::new(source, target));
            }
        }
        i = j;
    }

    operations.into_operations()
}
