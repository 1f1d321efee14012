use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct TranslateRequest {
    pub q: Vec<String>,
    pub target: String,
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslateResponse {
    pub data: TranslateData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslateData {
    pub translations: Vec<Translation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Translation {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}
