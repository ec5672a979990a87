/*!
 * # subfluent
 *
 * A Rust library for aggregating dual-language video captions and
 * enriching vocabulary with AI translation data.
 *
 * ## Features
 *
 * - Fetch timed captions from the unofficial timed-text endpoint
 * - Normalize the inconsistent upstream XML into a uniform cue list
 * - List available caption languages with English/Korean availability flags
 * - Fetch English and Korean tracks concurrently with independent
 *   failure tolerance (best-effort both, fail only if both fail)
 * - Translate single Korean vocabulary items into structured records via a
 *   JSON-constrained completion call, with a placeholder fallback when the
 *   completion cannot be parsed
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_parser`: Timed-text and track-list XML decoding
 * - `timedtext`: Transport for the unofficial timed-text endpoint
 * - `subtitle_service`: The subtitle read operations (list languages,
 *   single-language fetch, concurrent dual-language fetch)
 * - `translation_service`: Vocabulary translation enrichment
 * - `providers`: Client implementations for completion services:
 *   - `providers::openai`: OpenAI chat completions client
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * The HTTP layer fronting these operations lives outside this crate; it
 * calls the async operations and maps errors to statuses via
 * `status_code()`.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod subtitle_parser;
pub mod subtitle_service;
pub mod timedtext;
pub mod translation_service;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ProviderError, SubtitleError, TranslationError};
pub use subtitle_parser::{Cue, LanguageTrack};
pub use subtitle_service::SubtitleService;
pub use timedtext::{TimedTextClient, TimedTextFetcher};
pub use translation_service::{TranslationEnricher, TranslationRecord};
