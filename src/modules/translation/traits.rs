use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Port (interface) for batch text translation services.
///
/// Implementations translate all submitted texts in one request and return
/// the results in submission order.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate_batch(&self, texts: &[String]) -> AppResult<Vec<String>>;
}

/// Which branch a translation-dependent operation actually took.
///
/// The browse pipeline degrades to the original-language labels when the
/// translation service fails; the tag makes that branch observable instead
/// of a silent catch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationOutcome {
    Translated,
    OriginalFallback,
}
