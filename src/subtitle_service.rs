use futures::future;
use log::{info, warn};
use serde::Serialize;

use crate::errors::SubtitleError;
use crate::language_utils;
use crate::subtitle_parser::{self, Cue};
use crate::timedtext::TimedTextFetcher;

// @module: Subtitle read operations over the timed-text endpoint

/// Language fetched when the caller does not name one
const DEFAULT_LANGUAGE: &str = "en";

/// Fixed language pair served by the dual-subtitle operation
const ENGLISH: &str = "en";
const KOREAN: &str = "ko";

/// Available caption languages for a video
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageListResponse {
    /// The video the list was fetched for
    pub video_id: String,
    /// Language codes exactly as advertised upstream
    pub languages: Vec<String>,
    /// Whether an English track is available
    pub has_english: bool,
    /// Whether a Korean track is available
    pub has_korean: bool,
}

/// Caption cues for a video in one language
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleResponse {
    /// The video the cues were fetched for
    pub video_id: String,
    /// The caption language
    pub language: String,
    /// Cues in upstream document order
    pub subtitles: Vec<Cue>,
}

/// One side of a dual-subtitle response
#[derive(Debug, Clone, Serialize)]
pub struct DualTrack {
    /// Whether this language produced usable cues
    pub available: bool,
    /// Cues for this language, empty when unavailable
    pub subtitles: Vec<Cue>,
}

/// English and Korean caption cues fetched together
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DualSubtitleResponse {
    /// The video the cues were fetched for
    pub video_id: String,
    /// English side outcome
    pub english: DualTrack,
    /// Korean side outcome
    pub korean: DualTrack,
}

/// Subtitle read operations composed over a timed-text transport
///
/// The service owns the three read paths: listing available caption
/// languages, fetching one language's cue list, and fetching the fixed
/// English/Korean pair concurrently with independent failure tolerance.
/// Request validation happens before any transport call, so a blank video
/// id never reaches the endpoint.
#[derive(Debug)]
pub struct SubtitleService<F: TimedTextFetcher> {
    /// Transport for the timed-text endpoint
    fetcher: F,
}

impl<F: TimedTextFetcher> SubtitleService<F> {
    /// Create a new subtitle service over the given transport
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// List the caption languages available for a video
    ///
    /// A reachable endpoint that advertises no tracks is a valid empty
    /// result, not an error.
    pub async fn list_languages(&self, video_id: &str) -> Result<LanguageListResponse, SubtitleError> {
        let video_id = require_video_id(video_id)?;

        let body = self.fetcher.fetch_language_list(video_id).await?;
        let tracks = subtitle_parser::parse_track_list(&body)?;

        let has_english = tracks
            .iter()
            .any(|track| language_utils::language_codes_match(&track.code, ENGLISH));
        let has_korean = tracks
            .iter()
            .any(|track| language_utils::language_codes_match(&track.code, KOREAN));

        info!("Found {} subtitle languages for video {}", tracks.len(), video_id);
        info!("English available: {}, Korean available: {}", has_english, has_korean);

        Ok(LanguageListResponse {
            video_id: video_id.to_string(),
            languages: tracks.into_iter().map(|track| track.code).collect(),
            has_english,
            has_korean,
        })
    }

    /// Fetch the cue list for a video in one language
    ///
    /// The language defaults to English when the caller passes `None`. An
    /// empty cue list is a terminal `NoCaptionsFound`, never an empty
    /// success.
    pub async fn get_subtitles(
        &self,
        video_id: &str,
        language: Option<&str>,
    ) -> Result<SubtitleResponse, SubtitleError> {
        let video_id = require_video_id(video_id)?;
        let language = language.unwrap_or(DEFAULT_LANGUAGE);

        info!("Fetching subtitles for video {} in language {}", video_id, language);

        let body = self.fetcher.fetch_track(video_id, language).await?;
        let cues = subtitle_parser::parse_transcript(&body)?;

        if cues.is_empty() {
            return Err(SubtitleError::NoCaptionsFound(format!(
                "No {} subtitles found for this video",
                language
            )));
        }

        Ok(SubtitleResponse {
            video_id: video_id.to_string(),
            language: language.to_string(),
            subtitles: cues,
        })
    }

    /// Fetch English and Korean cue lists concurrently
    ///
    /// The two fetches run together and their outcomes stay independent: a
    /// failure on one side never aborts or delays the other. Any per-side
    /// failure downgrades to `available: false`; the call only fails when
    /// both sides come back unusable.
    pub async fn get_dual_subtitles(&self, video_id: &str) -> Result<DualSubtitleResponse, SubtitleError> {
        let video_id = require_video_id(video_id)?;

        info!("Fetching both English and Korean subtitles for video {}", video_id);

        let (english, korean) = future::join(
            self.get_subtitles(video_id, Some(ENGLISH)),
            self.get_subtitles(video_id, Some(KOREAN)),
        )
        .await;

        let english = dual_track_outcome(ENGLISH, english);
        let korean = dual_track_outcome(KOREAN, korean);

        if !english.available && !korean.available {
            return Err(SubtitleError::NoCaptionsFound(
                "No English or Korean subtitles found for this video".to_string(),
            ));
        }

        Ok(DualSubtitleResponse {
            video_id: video_id.to_string(),
            english,
            korean,
        })
    }
}

/// Reject a blank video id before any transport call
fn require_video_id(video_id: &str) -> Result<&str, SubtitleError> {
    let trimmed = video_id.trim();
    if trimmed.is_empty() {
        return Err(SubtitleError::InvalidRequest("Video ID".to_string()));
    }
    Ok(trimmed)
}

/// Collapse one side's outcome into its dual-response shape
fn dual_track_outcome(language: &str, outcome: Result<SubtitleResponse, SubtitleError>) -> DualTrack {
    match outcome {
        Ok(response) => DualTrack {
            available: true,
            subtitles: response.subtitles,
        },
        Err(e) => {
            warn!("Error fetching {} subtitles: {}", language, e);
            DualTrack {
                available: false,
                subtitles: Vec::new(),
            }
        }
    }
}
