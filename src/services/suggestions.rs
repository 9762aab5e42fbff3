//! AI spending suggestions
//!
//! Asks the Gemini generateContent API what to do with a positive monthly
//! surplus, constrained to a JSON response schema of suggestion/rationale
//! pairs. This is the only network call in the application; a single request,
//! no retries.

use serde::Deserialize;
use serde_json::json;

use crate::error::{QbudgetError, QbudgetResult};
use crate::models::{Money, SpendingSuggestion};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Client for the Gemini spending-suggestion call
pub struct SuggestionService {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl SuggestionService {
    /// Create a service with an explicit API key
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    /// Create a service reading the API key from the environment
    pub fn from_env(model: impl Into<String>) -> QbudgetResult<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            QbudgetError::Suggestion(format!(
                "Gemini API key not configured. Set the {} environment variable.",
                API_KEY_ENV
            ))
        })?;
        Ok(Self::new(api_key, model))
    }

    /// Override the API base URL (used by tests)
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch 3-5 spending suggestions for a positive surplus
    pub fn fetch(&self, surplus: Money, interests: &str) -> QbudgetResult<Vec<SpendingSuggestion>> {
        if !surplus.is_positive() {
            return Err(QbudgetError::Validation(
                "No surplus to spend: expenses meet or exceed income".into(),
            ));
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = json!({
            "contents": [{
                "parts": [{ "text": build_prompt(surplus, interests) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "suggestion": {
                                "type": "STRING",
                                "description": "A concise, actionable suggestion for spending or investing money."
                            },
                            "rationale": {
                                "type": "STRING",
                                "description": "A brief explanation of why this is a good idea for the user."
                            }
                        },
                        "required": ["suggestion", "rationale"]
                    }
                }
            }
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| QbudgetError::Suggestion(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(QbudgetError::Suggestion(format!(
                "Gemini API returned {}. Check your API key and network connection.",
                response.status()
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .map_err(|e| QbudgetError::Suggestion(format!("Malformed API response: {}", e)))?;

        parse_suggestions(&parsed)
    }
}

/// Build the suggestion prompt for a surplus and free-text interests
fn build_prompt(surplus: Money, interests: &str) -> String {
    let interests = if interests.trim().is_empty() {
        "general well-being"
    } else {
        interests.trim()
    };

    format!(
        "I have a monthly surplus of {}. My personal interests include: {}. \
         Provide 3 to 5 creative and practical suggestions on how to best use \
         this money. This could include investments, purchases, or experiences \
         that align with my interests.",
        surplus, interests
    )
}

/// Pull the suggestion list out of a generateContent response
fn parse_suggestions(
    response: &GenerateContentResponse,
) -> QbudgetResult<Vec<SpendingSuggestion>> {
    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.trim())
        .ok_or_else(|| QbudgetError::Suggestion("Empty response from Gemini".into()))?;

    let suggestions: Vec<SpendingSuggestion> = serde_json::from_str(text).map_err(|e| {
        QbudgetError::Suggestion(format!("Could not parse suggestions from response: {}", e))
    })?;

    if suggestions.is_empty() {
        return Err(QbudgetError::Suggestion(
            "Gemini returned no suggestions".into(),
        ));
    }

    Ok(suggestions)
}
