/*!
 * Provider implementations for the completion service.
 *
 * This module contains the client used for vocabulary translation:
 * - OpenAI: chat-completions API with JSON-object-constrained output
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for completion providers
///
/// This trait defines the one completion shape the translation service
/// issues: a system instruction plus a user prompt, with the output
/// constrained to a JSON object. Implementations own their model choice
/// and transport details, so the translation service can be used with any
/// provider (or a mock) interchangeably.
#[async_trait]
pub trait CompletionClient: Send + Sync + Debug {
    /// Run a JSON-object-constrained completion and return the text payload
    ///
    /// # Arguments
    /// * `system` - The system instruction guiding the model
    /// * `prompt` - The user prompt
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The completion text or an error
    async fn complete_json(&self, system: &str, prompt: &str) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the connection is successful, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod openai;
