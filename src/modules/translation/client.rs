use crate::shared::config::ApiConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::HttpHandler;
use async_trait::async_trait;
use reqwest::Client;

use super::dto::{TranslateRequest, TranslateResponse};
use super::traits::TranslationProvider;

pub struct GoogleTranslateClient {
    client: Client,
    base_url: String,
    api_key: String,
    target_lang: String,
}

impl GoogleTranslateClient {
    pub fn new(api_key: String, target_lang: String) -> AppResult<Self> {
        let client = HttpHandler::create_client(30, "FitPal/1.0")?;

        Ok(Self {
            client,
            base_url: "https://translation.googleapis.com/language/translate/v2".to_string(),
            api_key,
            target_lang,
        })
    }

    pub fn from_config(config: &ApiConfig) -> AppResult<Self> {
        Self::new(config.google_api_key.clone(), config.target_lang.clone())
    }

    /// Translate a batch of texts in a single request.
    ///
    /// The service returns translations in submission order; the length is
    /// verified before the result is handed back so callers can splice
    /// positionally.
    pub async fn translate_batch(&self, texts: &[String]) -> AppResult<Vec<String>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}?key={}", self.base_url, self.api_key);
        let request = TranslateRequest {
            q: texts.to_vec(),
            target: self.target_lang.clone(),
            format: "text".to_string(),
        };

        log::debug!(
            "Translating {} texts into '{}'",
            texts.len(),
            self.target_lang
        );

        let response = self.client.post(&url).json(&request).send().await?;
        HttpHandler::check_status(response.status(), "Google Translate")?;

        let translate_response = response.json::<TranslateResponse>().await.map_err(|e| {
            AppError::ApiError(format!("Failed to parse Google Translate response: {}", e))
        })?;

        let translated: Vec<String> = translate_response
            .data
            .translations
            .into_iter()
            .map(|t| t.translated_text)
            .collect();

        if translated.len() != texts.len() {
            return Err(AppError::ApiError(format!(
                "Google Translate returned {} translations for {} inputs",
                translated.len(),
                texts.len()
            )));
        }

        Ok(translated)
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateClient {
    async fn translate_batch(&self, texts: &[String]) -> AppResult<Vec<String>> {
        self.translate_batch(texts).await
    }
}
