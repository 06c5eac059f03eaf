//! jieba-rs backed part-of-speech tagger.
//!
//! The stock jieba dictionary does not know every vocabulary word (or knows
//! it with a tag the fallback cannot use), so the tagger is primed with the
//! vocabulary before use: colors and objects as nouns, modifiers as
//! adjectives, and the transformation verbs as verbs.

use jieba_rs::Jieba;
use multiedit_application::{PosTagger, TaggerError};
use multiedit_domain::{TaggedWord, Vocabulary, WordCategory};
use tracing::debug;

/// Verbs that introduce the target color in a recoloring clause.
pub const TRANSFORM_VERBS: &[&str] = &[
    "变成", "变为", "改成", "改为", "换成", "涂成", "染成", "成为",
];

const NOUN_TAG: &str = "n";
const ADJECTIVE_TAG: &str = "a";
const VERB_TAG: &str = "v";

/// Let jieba's HMM discover words missing from the dictionary.
const USE_HMM: bool = true;

/// Chinese part-of-speech tagger adapter
pub struct JiebaTagger {
    jieba: Jieba,
}

impl JiebaTagger {
    /// Load the default dictionary and register the vocabulary.
    pub fn new(vocabulary: &Vocabulary) -> Self {
        let mut jieba = Jieba::new();
        let mut registered = 0;

        for (category, tag) in [
            (WordCategory::Color, NOUN_TAG),
            (WordCategory::Object, NOUN_TAG),
            (WordCategory::Modifier, ADJECTIVE_TAG),
        ] {
            for word in vocabulary.words(category) {
                // English words never reach the Chinese path.
                if word.is_ascii() {
                    continue;
                }
                jieba.add_word(word, None, Some(tag));
                registered += 1;
            }
        }
        for verb in TRANSFORM_VERBS {
            jieba.add_word(verb, None, Some(VERB_TAG));
            registered += 1;
        }

        debug!("jieba tagger primed with {} words", registered);
        Self { jieba }
    }
}

impl PosTagger for JiebaTagger {
    fn name(&self) -> &str {
        "jieba"
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>, TaggerError> {
        Ok(self
            .jieba
            .tag(text, USE_HMM)
            .into_iter()
            .map(|t| TaggedWord::new(t.word, t.tag))
            .collect())
    }
}
