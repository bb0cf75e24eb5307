//! Read-only content catalogs: practice sentences and vocabulary words.

pub mod practice;
pub mod vocabulary;

use rand::seq::SliceRandom;
use serde::Serialize;

pub use practice::{PracticeText, PRACTICE_TEXTS};
pub use vocabulary::{category_for, Category, VocabularyWord};

/// Learner proficiency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

/// Source of practice content served to clients.
pub trait Catalog: Send + Sync {
    fn practice_texts(&self) -> Vec<PracticeText>;

    /// Vocabulary filtered by category (`None` or `"all"` means no filter).
    fn vocabulary_words(&self, category: Option<&str>) -> Vec<VocabularyWord>;
}

/// Catalog backed by the compiled-in lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl Catalog for StaticCatalog {
    fn practice_texts(&self) -> Vec<PracticeText> {
        PRACTICE_TEXTS.to_vec()
    }

    fn vocabulary_words(&self, category: Option<&str>) -> Vec<VocabularyWord> {
        vocabulary::words_in_category(category)
    }
}

/// Vocabulary in a fresh random order on every call.
pub fn shuffled_vocabulary(catalog: &dyn Catalog, category: Option<&str>) -> Vec<VocabularyWord> {
    let mut words = catalog.vocabulary_words(category);
    words.shuffle(&mut rand::thread_rng());
    words
}
