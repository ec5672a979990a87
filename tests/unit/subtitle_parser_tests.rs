/*!
 * Tests for timed-text payload parsing
 */

use subfluent::errors::SubtitleError;
use subfluent::subtitle_parser::{Cue, parse_track_list, parse_transcript};

use crate::common;

/// Test transcript parsing with the canonical two-entry document
#[test]
fn test_parse_transcript_withTwoEntries_shouldReturnOrderedCues() {
    let xml = common::hello_world_transcript();

    let cues = parse_transcript(&xml).unwrap();

    assert_eq!(
        cues,
        vec![
            Cue { start: 0.0, duration: 2.5, text: "Hello".to_string() },
            Cue { start: 2.5, duration: 3.0, text: "World".to_string() },
        ]
    );
}

/// A single text element must decode to a one-element sequence, not a scalar
#[test]
fn test_parse_transcript_withSingleEntry_shouldReturnOneElementSequence() {
    let xml = common::transcript_xml(&[(1.2, Some(0.8), "Only one")]);

    let cues = parse_transcript(&xml).unwrap();

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].text, "Only one");
}

#[test]
fn test_parse_transcript_withEmptyBody_shouldReturnEmpty() {
    assert!(parse_transcript("").unwrap().is_empty());
    assert!(parse_transcript("   \n  ").unwrap().is_empty());
}

#[test]
fn test_parse_transcript_withEmptyRoot_shouldReturnEmpty() {
    let cues = parse_transcript("<transcript></transcript>").unwrap();
    assert!(cues.is_empty());
}

#[test]
fn test_parse_transcript_withUnexpectedRoot_shouldReturnEmpty() {
    let cues = parse_transcript("<something_else><text start=\"0\">x</text></something_else>").unwrap();
    assert!(cues.is_empty());
}

/// A missing dur attribute is a zero-length cue, not an error
#[test]
fn test_parse_transcript_withMissingDur_shouldDefaultToZero() {
    let xml = common::transcript_xml(&[(4.0, None, "No duration")]);

    let cues = parse_transcript(&xml).unwrap();

    assert_eq!(cues[0].start, 4.0);
    assert_eq!(cues[0].duration, 0.0);
}

#[test]
fn test_parse_transcript_withEmptyTextElement_shouldYieldEmptyString() {
    let xml = "<transcript><text start=\"0\" dur=\"1\"></text></transcript>";

    let cues = parse_transcript(xml).unwrap();

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].text, "");
}

/// Malformed numeric attributes fail parsing rather than silently defaulting
#[test]
fn test_parse_transcript_withMalformedStart_shouldFail() {
    let xml = "<transcript><text start=\"abc\" dur=\"1.0\">x</text></transcript>";

    let result = parse_transcript(xml);

    assert!(matches!(result, Err(SubtitleError::ParseError(_))));
}

#[test]
fn test_parse_transcript_withMalformedDur_shouldFail() {
    let xml = "<transcript><text start=\"1.0\" dur=\"later\">x</text></transcript>";

    assert!(matches!(parse_transcript(xml), Err(SubtitleError::ParseError(_))));
}

/// Only dur has a documented default; a text element without start is malformed
#[test]
fn test_parse_transcript_withMissingStart_shouldFail() {
    let xml = "<transcript><text dur=\"1.0\">x</text></transcript>";

    assert!(matches!(parse_transcript(xml), Err(SubtitleError::ParseError(_))));
}

#[test]
fn test_parse_transcript_withMalformedXml_shouldFail() {
    let result = parse_transcript("<transcript><text start=\"0\"");

    assert!(matches!(result, Err(SubtitleError::ParseError(_))));
}

/// Entity references in cue text are resolved by the decoder
#[test]
fn test_parse_transcript_withEntityReferences_shouldDecodeText() {
    let xml = "<transcript><text start=\"0\" dur=\"1\">Tom &amp; Jerry&#39;s</text></transcript>";

    let cues = parse_transcript(xml).unwrap();

    assert_eq!(cues[0].text, "Tom & Jerry's");
}

/// Cue wire names are start/dur/text
#[test]
fn test_cue_serialization_shouldUseWireNames() {
    let cue = Cue { start: 0.5, duration: 2.0, text: "Hi".to_string() };

    let json = serde_json::to_value(&cue).unwrap();

    assert_eq!(json["start"], 0.5);
    assert_eq!(json["dur"], 2.0);
    assert_eq!(json["text"], "Hi");
}

/// Track-list parsing returns exactly N descriptors for N entries
#[test]
fn test_parse_track_list_withThreeTracks_shouldReturnAllDescriptors() {
    let xml = common::track_list_xml(&[("en", "English"), ("ko", "Korean"), ("fr", "French")]);

    let tracks = parse_track_list(&xml).unwrap();

    assert_eq!(tracks.len(), 3);
    assert_eq!(tracks[0].code, "en");
    assert_eq!(tracks[0].display_name, "English");
    assert_eq!(tracks[2].code, "fr");
}

/// A single track entry must decode to a one-element set, never a bare object
#[test]
fn test_parse_track_list_withSingleTrack_shouldReturnOneElementSequence() {
    let xml = common::track_list_xml(&[("ko", "Korean")]);

    let tracks = parse_track_list(&xml).unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].code, "ko");
}

#[test]
fn test_parse_track_list_withEmptyBody_shouldReturnEmpty() {
    assert!(parse_track_list("").unwrap().is_empty());
}

#[test]
fn test_parse_track_list_withNoTracks_shouldReturnEmpty() {
    let tracks = parse_track_list("<transcript_list></transcript_list>").unwrap();
    assert!(tracks.is_empty());
}

/// Display name resolution order: lang_original, lang_translated, code
#[test]
fn test_parse_track_list_withDisplayNameFallbacks_shouldResolveInOrder() {
    let xml = r#"<transcript_list>
        <track lang_code="en" lang_original="English" lang_translated="Anglais" />
        <track lang_code="ko" lang_translated="Korean" />
        <track lang_code="fr" />
    </transcript_list>"#;

    let tracks = parse_track_list(xml).unwrap();

    assert_eq!(tracks[0].display_name, "English");
    assert_eq!(tracks[1].display_name, "Korean");
    assert_eq!(tracks[2].display_name, "fr");
}

#[test]
fn test_parse_track_list_withMissingLangCode_shouldSkipTrack() {
    let xml = r#"<transcript_list>
        <track lang_original="Mystery" />
        <track lang_code="en" lang_original="English" />
    </transcript_list>"#;

    let tracks = parse_track_list(xml).unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].code, "en");
}

#[test]
fn test_parse_track_list_withMalformedXml_shouldFail() {
    assert!(matches!(
        parse_track_list("<transcript_list><track"),
        Err(SubtitleError::ParseError(_))
    ));
}
