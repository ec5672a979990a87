/*!
 * Integration tests for the vocabulary translation workflow
 */

use subfluent::translation_service::TranslationEnricher;

use crate::common::mock_providers::MockCompletion;

/// End-to-end: a full completion payload becomes the boundary response
#[tokio::test]
async fn test_translation_workflow_withFullPayload_shouldProduceBoundaryShape() {
    let payload = r#"{
        "translatedText": "friend",
        "pronunciation": "chingu",
        "partOfSpeech": "noun",
        "examples": [
            {"source": "그는 내 친구예요", "target": "He is my friend"},
            {"source": "친구를 만나요", "target": "I meet a friend"}
        ]
    }"#;
    let mock = MockCompletion::new(payload);
    let tracker = mock.tracker();
    let enricher = TranslationEnricher::new(mock);

    let response = enricher.translate("친구").await.unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["translation"]["translatedText"], "friend");
    assert_eq!(json["translation"]["pronunciation"], "chingu");
    assert_eq!(json["translation"]["partOfSpeech"], "noun");
    assert_eq!(json["translation"]["examples"].as_array().unwrap().len(), 2);
    assert_eq!(json["translation"]["examples"][0]["source"], "그는 내 친구예요");
    assert_eq!(json["translation"]["examples"][0]["target"], "He is my friend");

    assert_eq!(tracker.lock().unwrap().call_count, 1);
}

/// A degraded completion still answers with the placeholder record
#[tokio::test]
async fn test_translation_workflow_withUnparsablePayload_shouldRecoverWithPlaceholder() {
    let enricher = TranslationEnricher::new(MockCompletion::new("I am not JSON at all"));

    let response = enricher.translate("친구").await.unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["translation"]["translatedText"], "Could not parse translation data");
    assert_eq!(json["translation"]["pronunciation"], "");
    assert_eq!(json["translation"]["partOfSpeech"], "");
    assert_eq!(json["translation"]["examples"].as_array().unwrap().len(), 0);
}
