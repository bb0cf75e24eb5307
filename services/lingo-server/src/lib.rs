//! lingo-server - Pronunciation analysis and practice content for English learners.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod analysis;
pub mod catalog;
pub mod error;
pub mod provider;
pub mod routes;

pub use analysis::{
    AnalysisOrchestrator, IncorrectWord, Interpretation, SentenceAnalysisRequest,
    SentenceAnalysisResult, WordAnalysisRequest, WordAnalysisResult,
};
pub use catalog::{Catalog, Category, Level, PracticeText, StaticCatalog, VocabularyWord};
pub use error::ApiError;
pub use provider::{create_provider, GeminiProvider, ModelError, Provider};
pub use routes::{build_router, AppState};
