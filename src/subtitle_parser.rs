use log::debug;
use roxmltree::{Document, Node};
use serde::{Deserialize, Serialize};

use crate::errors::SubtitleError;

// @module: Timed-text payload parsing

/// A single timed caption cue.
///
/// Cues are kept in upstream document order and have no identity beyond
/// their position. `duration` is zero when the upstream document omits the
/// `dur` attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    // @field: Start time in seconds
    pub start: f64,

    // @field: Duration in seconds
    #[serde(rename = "dur")]
    pub duration: f64,

    // @field: Caption text
    pub text: String,
}

/// An available caption track advertised by the track-list document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageTrack {
    // @field: Language code (ISO-like tag)
    pub code: String,

    // @field: Human-readable track name
    pub display_name: String,
}

/// Parse a transcript document into an ordered cue list.
///
/// The upstream endpoint answers with a `transcript` root holding repeated
/// `text` elements, or with an empty body when the requested language has
/// no captions. An empty body, an empty root, or an unexpected root all
/// decode to an empty cue list; "no captions" is a service-level concern,
/// not a parse failure. Malformed XML and malformed numeric attributes are
/// parse failures.
pub fn parse_transcript(xml: &str) -> Result<Vec<Cue>, SubtitleError> {
    if xml.trim().is_empty() {
        return Ok(Vec::new());
    }

    let doc = Document::parse(xml)
        .map_err(|e| SubtitleError::ParseError(format!("invalid transcript XML: {}", e)))?;

    let root = doc.root_element();
    if root.tag_name().name() != "transcript" {
        debug!("Unexpected transcript root element <{}>", root.tag_name().name());
        return Ok(Vec::new());
    }

    let mut cues = Vec::new();
    for child in root.children().filter(|n| n.is_element()) {
        if child.tag_name().name() != "text" {
            continue;
        }
        cues.push(parse_cue(&child)?);
    }

    Ok(cues)
}

/// Parse a single `text` element into a cue.
fn parse_cue(node: &Node) -> Result<Cue, SubtitleError> {
    let start = match node.attribute("start") {
        Some(raw) => parse_seconds(raw, "start")?,
        None => {
            return Err(SubtitleError::ParseError(
                "text element missing start attribute".to_string(),
            ));
        }
    };

    // dur is frequently absent upstream; treat as a zero-length cue
    let duration = match node.attribute("dur") {
        Some(raw) => parse_seconds(raw, "dur")?,
        None => 0.0,
    };

    let text: String = node
        .children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();

    Ok(Cue { start, duration, text })
}

fn parse_seconds(raw: &str, attribute: &str) -> Result<f64, SubtitleError> {
    raw.trim().parse::<f64>().map_err(|_| {
        SubtitleError::ParseError(format!("invalid {} attribute: {:?}", attribute, raw))
    })
}

/// Parse a track-list document into the set of available caption tracks.
///
/// The root is a `transcript_list` container with zero or more `track`
/// entries. A single entry decodes to a one-element list, never a bare
/// value. Display name resolution order: `lang_original`, else
/// `lang_translated`, else the language code itself. Tracks without a
/// `lang_code` attribute are skipped. An empty body or absent container
/// decodes to an empty list.
pub fn parse_track_list(xml: &str) -> Result<Vec<LanguageTrack>, SubtitleError> {
    if xml.trim().is_empty() {
        return Ok(Vec::new());
    }

    let doc = Document::parse(xml)
        .map_err(|e| SubtitleError::ParseError(format!("invalid track-list XML: {}", e)))?;

    let root = doc.root_element();
    if root.tag_name().name() != "transcript_list" {
        debug!("Unexpected track-list root element <{}>", root.tag_name().name());
        return Ok(Vec::new());
    }

    let mut tracks = Vec::new();
    for child in root.children().filter(|n| n.is_element()) {
        if child.tag_name().name() != "track" {
            continue;
        }

        let Some(code) = child.attribute("lang_code") else {
            debug!("Skipping track entry without lang_code attribute");
            continue;
        };

        let display_name = child
            .attribute("lang_original")
            .filter(|name| !name.is_empty())
            .or_else(|| child.attribute("lang_translated").filter(|name| !name.is_empty()))
            .unwrap_or(code);

        tracks.push(LanguageTrack {
            code: code.to_string(),
            display_name: display_name.to_string(),
        });
    }

    Ok(tracks)
}
