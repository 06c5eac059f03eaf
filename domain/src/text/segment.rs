//! Sentence and clause segmentation.

use crate::vocabulary::builtin::{CONNECTIVES, SENTENCE_TERMINATORS};

/// Split text into sentences on runs of terminal punctuation.
///
/// Pieces are trimmed; empty pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split a sentence into clauses on connective words and commas.
///
/// Connectives are matched wherever they occur, earliest first and in
/// [`CONNECTIVES`] order at a given position. Fragments are trimmed; empty
/// fragments and fragments that are themselves a connective are dropped.
pub fn split_clauses(sentence: &str) -> Vec<&str> {
    let mut clauses = Vec::new();
    let mut fragment_start = 0;
    let mut pos = 0;

    while pos < sentence.len() {
        let rest = &sentence[pos..];
        if let Some(connective) = CONNECTIVES.iter().find(|c| rest.starts_with(**c)) {
            push_clause(&mut clauses, &sentence[fragment_start..pos]);
            pos += connective.len();
            fragment_start = pos;
        } else {
            pos += rest.chars().next().map_or(1, char::len_utf8);
        }
    }
    push_clause(&mut clauses, &sentence[fragment_start..]);

    clauses
}

fn push_clause<'a>(clauses: &mut Vec<&'a str>, fragment: &'a str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() && !CONNECTIVES.contains(&fragment) {
        clauses.push(fragment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences() {
        assert_eq!(
            split_sentences("把红球变成蓝色。 将方块改为绿色！！ ok?"),
            vec!["把红球变成蓝色", "将方块改为绿色", "ok"]
        );
    }

    #[test]
    fn test_split_sentences_mixed_terminators() {
        assert_eq!(split_sentences("a；b;c\nd？e"), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_split_sentences_drops_empty() {
        assert!(split_sentences("。。 ！").is_empty());
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn test_split_clauses_on_connectives() {
        assert_eq!(
            split_clauses("把红球变成蓝的,然后黄色大立方体改成绿色,再把金属小球变成紫色"),
            vec!["把红球变成蓝的", "黄色大立方体改成绿色", "把金属小球变成紫色"]
        );
    }

    #[test]
    fn test_split_clauses_whitespace_padded() {
        assert_eq!(
            split_clauses("红球变成蓝色 和 绿球变成黄色"),
            vec!["红球变成蓝色", "绿球变成黄色"]
        );
    }

    #[test]
    fn test_split_clauses_adjacent_connectives() {
        assert_eq!(
            split_clauses("红球变成蓝色，同时 并 绿球变成黄色"),
            vec!["红球变成蓝色", "绿球变成黄色"]
        );
    }

    #[test]
    fn test_split_clauses_without_connective() {
        assert_eq!(split_clauses("红球变成蓝色"), vec!["红球变成蓝色"]);
        assert!(split_clauses("然后").is_empty());
    }
}
