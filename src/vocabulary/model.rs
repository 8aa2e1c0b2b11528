/*!
 * Vocabulary document model.
 *
 * The serialized shape is consumed directly by the flashcard front-end:
 * an array of `{ "chapter", "words": [{ "latin", "translation", "pos", "gender" }] }`.
 */

use serde::{Deserialize, Serialize};

/// A single vocabulary line after parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Latin headword with principal parts, gender marker removed
    pub latin: String,

    /// English gloss
    pub translation: String,

    /// Part of speech, empty when none was detected
    #[serde(default)]
    pub pos: String,

    /// Gender/number marker, empty when none was detected
    #[serde(default)]
    pub gender: String,
}

impl WordEntry {
    pub fn new(
        latin: impl Into<String>,
        translation: impl Into<String>,
        pos: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            latin: latin.into(),
            translation: translation.into(),
            pos: pos.into(),
            gender: gender.into(),
        }
    }
}

/// A textbook chapter and its words in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Normalized chapter title (e.g. "CHAPTER 4")
    pub chapter: String,

    /// Words in the order they appear in the source
    #[serde(default)]
    pub words: Vec<WordEntry>,
}

impl Chapter {
    /// Create an empty chapter with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            chapter: title.into(),
            words: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.chapter
    }
}

/// The full converted vocabulary, serialized as a bare JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VocabularyDocument {
    pub chapters: Vec<Chapter>,
}

impl VocabularyDocument {
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Self { chapters }
    }

    /// Number of chapters
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Total number of words across all chapters
    pub fn word_count(&self) -> usize {
        self.chapters.iter().map(|c| c.words.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}
