use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{
    app, Dictionary, Entry, EntryPreview, ErrorBody, NearbyEntries, Pronunciation, RelatedEntries,
    SearchEntries, Suggestions, Thesaurus, TopicFull, ACCESS_KEY,
};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("accessKey", ACCESS_KEY)
        .body(String::new())
        .unwrap()
}

// --- authentication ---

#[tokio::test]
async fn missing_access_key_rejected_with_envelope() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/dictionaries")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let err: ErrorBody = body_json(resp).await;
    assert_eq!(err.error_code, "401");
}

// --- dictionaries ---

#[tokio::test]
async fn list_dictionaries_ok() {
    let resp = app().oneshot(get("/api/v1/dictionaries")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let dicts: Vec<Dictionary> = body_json(resp).await;
    assert_eq!(dicts.len(), 2);
    assert_eq!(dicts[0].dictionary_code, "british");
}

#[tokio::test]
async fn get_dictionary_ok() {
    let resp = app()
        .oneshot(get("/api/v1/dictionaries/british"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let dict: Dictionary = body_json(resp).await;
    assert_eq!(dict.dictionary_name, "British English");
}

#[tokio::test]
async fn unknown_dictionary_returns_error_envelope() {
    let resp = app()
        .oneshot(get("/api/v1/dictionaries/not-a-real-dict"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let bytes = body_bytes(resp).await;
    let err: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(err.error_code, "404");
    assert_eq!(err.error_message, "Dictionary not found");
}

// --- search ---

#[tokio::test]
async fn search_matches_by_prefix() {
    let resp = app()
        .oneshot(get(
            "/api/v1/dictionaries/british/search?q=apple&pagesize=10&pageindex=1",
        ))
        .await
        .unwrap();

    let page: SearchEntries = body_json(resp).await;
    assert_eq!(page.result_number, 1);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].entry_id, "apple");
    assert_eq!(page.results[0].entry_url, "/dictionary/british/apple");
}

#[tokio::test]
async fn search_paginates() {
    let resp = app()
        .oneshot(get(
            "/api/v1/dictionaries/british/search?q=ap&pagesize=2&pageindex=2",
        ))
        .await
        .unwrap();

    let page: SearchEntries = body_json(resp).await;
    assert_eq!(page.result_number, 4);
    assert_eq!(page.page_number, 2);
    assert_eq!(page.current_page_index, 2);
    let ids: Vec<&str> = page.results.iter().map(|r| r.entry_id.as_str()).collect();
    assert_eq!(ids, ["apply", "apricot"]);
}

#[tokio::test]
async fn search_no_match_returns_empty_page() {
    let resp = app()
        .oneshot(get("/api/v1/dictionaries/british/search?q=zzz"))
        .await
        .unwrap();

    let page: SearchEntries = body_json(resp).await;
    assert_eq!(page.result_number, 0);
    assert!(page.results.is_empty());
}

#[tokio::test]
async fn did_you_mean_caps_suggestions() {
    let resp = app()
        .oneshot(get(
            "/api/v1/dictionaries/british/search/didyoumean?q=aple&entrynumber=2",
        ))
        .await
        .unwrap();

    let s: Suggestions = body_json(resp).await;
    assert_eq!(s.search_term, "aple");
    assert_eq!(s.suggestions, ["apple", "application"]);
}

#[tokio::test]
async fn search_first_returns_best_match() {
    let resp = app()
        .oneshot(get(
            "/api/v1/dictionaries/british/search/first?q=app&format=html",
        ))
        .await
        .unwrap();

    let entry: Entry = body_json(resp).await;
    assert_eq!(entry.entry_id, "apple");
    assert!(entry.entry_content.starts_with("<div"));
}

// --- entries ---

#[tokio::test]
async fn entry_renders_requested_format() {
    let resp = app()
        .oneshot(get("/api/v1/dictionaries/british/entries/apple?format=xml"))
        .await
        .unwrap();

    let entry: Entry = body_json(resp).await;
    assert_eq!(entry.format, "xml");
    assert!(entry.entry_content.starts_with("<entry"));
    assert_eq!(entry.topics.len(), 1);
}

#[tokio::test]
async fn unknown_entry_returns_error_envelope() {
    let resp = app()
        .oneshot(get("/api/v1/dictionaries/british/entries/zebra"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err: ErrorBody = body_json(resp).await;
    assert_eq!(err.error_message, "Entry not found");
}

#[tokio::test]
async fn nearby_entries_slice_the_neighborhood() {
    let resp = app()
        .oneshot(get(
            "/api/v1/dictionaries/british/entries/apply/nearbyentries?entrynumber=2",
        ))
        .await
        .unwrap();

    let nearby: NearbyEntries = body_json(resp).await;
    let preceding: Vec<&str> = nearby
        .nearby_preceding_entries
        .iter()
        .map(|r| r.entry_id.as_str())
        .collect();
    let following: Vec<&str> = nearby
        .nearby_following_entries
        .iter()
        .map(|r| r.entry_id.as_str())
        .collect();
    assert_eq!(preceding, ["apple", "application"]);
    assert_eq!(following, ["apricot", "banana"]);
}

#[tokio::test]
async fn pronunciations_filter_by_lang() {
    let resp = app()
        .oneshot(get(
            "/api/v1/dictionaries/british/entries/apple/pronunciations?lang=uk",
        ))
        .await
        .unwrap();

    let prons: Vec<Pronunciation> = body_json(resp).await;
    assert_eq!(prons.len(), 1);
    assert_eq!(prons[0].lang, "uk");

    let resp = app()
        .oneshot(get(
            "/api/v1/dictionaries/british/entries/apple/pronunciations",
        ))
        .await
        .unwrap();
    let prons: Vec<Pronunciation> = body_json(resp).await;
    assert_eq!(prons.len(), 2);
}

#[tokio::test]
async fn related_entries_exclude_the_entry_itself() {
    let resp = app()
        .oneshot(get(
            "/api/v1/dictionaries/british/entries/apple/relatedentries",
        ))
        .await
        .unwrap();

    let related: RelatedEntries = body_json(resp).await;
    assert_eq!(related.entry_id, "apple");
    assert!(!related.related_entries.is_empty());
    assert!(related
        .related_entries
        .iter()
        .all(|r| r.entry_id != "apple"));
}

// --- topics ---

#[tokio::test]
async fn topics_list_thesauri() {
    let resp = app()
        .oneshot(get("/api/v1/dictionaries/british/topics"))
        .await
        .unwrap();

    let thesauri: Vec<Thesaurus> = body_json(resp).await;
    assert_eq!(thesauri.len(), 1);
    assert_eq!(thesauri[0].thesaurus, "food");
}

#[tokio::test]
async fn topic_detail_includes_entries_and_subtopics() {
    let resp = app()
        .oneshot(get("/api/v1/dictionaries/british/topics/food/fruit"))
        .await
        .unwrap();

    let topic: TopicFull = body_json(resp).await;
    assert_eq!(topic.topic_id, "fruit");
    assert_eq!(topic.entries.len(), 3);
    assert_eq!(topic.sub_topics[0].sub_topic_id, "citrus");
}

#[tokio::test]
async fn unknown_topic_returns_error_envelope() {
    let resp = app()
        .oneshot(get("/api/v1/dictionaries/british/topics/food/furniture"))
        .await
        .unwrap();

    let err: ErrorBody = body_json(resp).await;
    assert_eq!(err.error_message, "Topic not found");
}

// --- word of the day ---

#[tokio::test]
async fn word_of_the_day_global_and_scoped() {
    let resp = app().oneshot(get("/api/v1/wordoftheday")).await.unwrap();
    let entry: Entry = body_json(resp).await;
    assert_eq!(entry.entry_id, "apricot");
    assert_eq!(entry.dictionary_code, "british");

    let resp = app()
        .oneshot(get(
            "/api/v1/dictionaries/american-english/wordoftheday?format=xml",
        ))
        .await
        .unwrap();
    let entry: Entry = body_json(resp).await;
    assert_eq!(entry.dictionary_code, "american-english");
    assert_eq!(entry.format, "xml");
}

#[tokio::test]
async fn word_of_the_day_preview_has_both_previews() {
    let resp = app()
        .oneshot(get("/api/v1/wordoftheday/preview?day=2016-01-12"))
        .await
        .unwrap();

    let preview: EntryPreview = body_json(resp).await;
    assert_eq!(preview.entry_id, "apricot");
    assert_eq!(preview.text_entry_preview, "apricot");
    assert!(preview.html_entry_preview.starts_with("<p>"));
}
