use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::errors::TranslationError;
use crate::providers::CompletionClient;

// @module: Vocabulary translation enrichment

/// System instruction for the completion call
const SYSTEM_PROMPT: &str = "You are a helpful Korean language teacher assistant.";

/// Substitute translation when a completion cannot be coerced into a record
const UNPARSED_TRANSLATION: &str = "Could not parse translation data";

/// A paired example sentence
///
/// The legacy `korean`/`english` key names are accepted on input because
/// older completion payloads used them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleSentence {
    /// Example sentence in the source language
    #[serde(alias = "korean")]
    pub source: String,

    /// Example sentence in the target language
    #[serde(alias = "english")]
    pub target: String,
}

/// Structured translation data for a single vocabulary item
///
/// Every field is always populated: when the completion cannot be parsed,
/// the record carries placeholder values instead of being omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    /// The English translation
    pub translated_text: String,

    /// Romanized pronunciation
    #[serde(default)]
    pub pronunciation: String,

    /// Part of speech (noun, verb, adjective, ...)
    #[serde(default)]
    pub part_of_speech: String,

    /// Example sentences using the word
    #[serde(default)]
    pub examples: Vec<ExampleSentence>,
}

impl TranslationRecord {
    /// The placeholder record substituted when coercion fails
    pub fn unparsed() -> Self {
        Self {
            translated_text: UNPARSED_TRANSLATION.to_string(),
            pronunciation: String::new(),
            part_of_speech: String::new(),
            examples: Vec::new(),
        }
    }

    /// Coerce a completion's text payload into a record
    ///
    /// A payload that fails to parse, or parses without a translation,
    /// resolves to the placeholder record. This is a recovered failure and
    /// never an error.
    pub fn from_completion_text(text: &str) -> Self {
        match serde_json::from_str::<TranslationRecord>(text) {
            Ok(record) => record,
            Err(e) => {
                warn!("Error parsing completion response: {}", e);
                Self::unparsed()
            }
        }
    }
}

/// Boundary shape handed to the fronting layer
#[derive(Debug, Clone, Serialize)]
pub struct TranslationResponse {
    /// The structured translation data
    pub translation: TranslationRecord,
}

/// Vocabulary translation over a completion provider
///
/// The enricher builds the fixed instructional prompt for a single word,
/// runs a JSON-object-constrained completion, and coerces the payload into
/// a `TranslationRecord`. Only transport-level failure of the completion
/// call surfaces as an error; malformed payloads degrade to the
/// placeholder record.
#[derive(Debug)]
pub struct TranslationEnricher<C: CompletionClient> {
    /// Completion provider, constructed once at process start
    client: C,
}

impl<C: CompletionClient> TranslationEnricher<C> {
    /// Create a new enricher over the given completion provider
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Translate a single Korean word or phrase
    pub async fn translate(&self, word: &str) -> Result<TranslationResponse, TranslationError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(TranslationError::InvalidRequest("Word parameter".to_string()));
        }

        info!("Translating Korean word: {:?}", word);

        let prompt = build_translation_prompt(word);
        let payload = self.client.complete_json(SYSTEM_PROMPT, &prompt).await?;

        Ok(TranslationResponse {
            translation: TranslationRecord::from_completion_text(&payload),
        })
    }
}

/// Build the fixed instructional prompt embedding the word
fn build_translation_prompt(word: &str) -> String {
    format!(
        r#"I want you to act as a Korean language teacher. I will provide a Korean word or phrase.
Please provide:
1. The English translation
2. The pronunciation in romanized form (if applicable)
3. The part of speech (noun, verb, adjective, etc.)
4. 2-3 example sentences in both Korean and English that use this word

Format your response as a JSON object with these properties:
- translatedText: the English translation
- pronunciation: romanized pronunciation
- partOfSpeech: part of speech
- examples: array of objects with "source" (Korean) and "target" (English) properties for example sentences

The Korean word or phrase is: {}"#,
        word
    )
}
