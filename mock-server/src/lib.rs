//! Mock dictionary service for driving the client end-to-end.
//!
//! Serves the full `/api/v1` endpoint surface from a static fixture: two
//! dictionaries, a handful of alphabetically ordered `british` entries,
//! pronunciations in both variants, and one thesaurus with a topic tree.
//! Failures are reported the way the real service reports them, as an
//! `errorCode`/`errorMessage` JSON body; the HTTP status mirrors the code
//! but clients are expected to go by the body.
//!
//! DTOs here are defined independently of the `dict-core` crate; the core's
//! integration tests catch schema drift between the two.

use axum::{
    extract::{Path, Query, Request},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// The access key every request must present in the `accessKey` header.
pub const ACCESS_KEY: &str = "mock-access-key";

/// Entry ids served under the `british` dictionary, alphabetically ordered;
/// `nearbyentries` depends on the order.
pub const ENTRIES: &[&str] = &["apple", "application", "apply", "apricot", "banana"];

const WOTD_ID: &str = "apricot";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dictionary {
    pub dictionary_name: String,
    pub dictionary_code: String,
    pub dictionary_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRef {
    pub entry_label: String,
    pub entry_url: String,
    pub entry_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub entry_label: String,
    pub entry_url: String,
    pub entry_id: String,
    pub dictionary_code: String,
    pub format: String,
    pub entry_content: String,
    pub topics: Vec<Topic>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPreview {
    pub entry_label: String,
    pub entry_url: String,
    pub entry_id: String,
    pub dictionary_code: String,
    pub format: String,
    pub html_entry_preview: String,
    pub text_entry_preview: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntries {
    pub dictionary_code: String,
    pub results: Vec<EntryRef>,
    pub result_number: u32,
    pub current_page_index: u32,
    pub page_number: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestions {
    pub dictionary_code: String,
    pub search_term: String,
    pub suggestions: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyEntries {
    pub dictionary_code: String,
    pub entry_id: String,
    pub nearby_preceding_entries: Vec<EntryRef>,
    pub nearby_following_entries: Vec<EntryRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pronunciation {
    pub dictionary_code: String,
    pub entry_id: String,
    pub lang: String,
    pub pronunciation_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Related {
    pub entry_label: String,
    pub entry_url: String,
    pub entry_id: String,
    pub dictionary_code: String,
    pub dictionary_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedEntries {
    pub dictionary_code: String,
    pub entry_id: String,
    pub related_entries: Vec<Related>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub topic_id: String,
    pub topic_thesaurus_name: String,
    pub topic_label: String,
    pub topic_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicFull {
    pub topic_id: String,
    pub topic_thesaurus_name: String,
    pub topic_label: String,
    pub topic_url: String,
    pub dictionary_code: String,
    pub entries: Vec<EntryRef>,
    pub sub_topics: Vec<Subtopic>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtopic {
    pub sub_topic_id: String,
    pub sub_topic_label: String,
    pub sub_topic_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thesaurus {
    pub thesaurus: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_code: String,
    pub error_message: String,
}

pub fn app() -> Router {
    let api = Router::new()
        .route("/dictionaries", get(list_dictionaries))
        .route("/dictionaries/{dict}", get(get_dictionary))
        .route("/dictionaries/{dict}/search", get(search))
        .route("/dictionaries/{dict}/search/didyoumean", get(did_you_mean))
        .route("/dictionaries/{dict}/search/first", get(search_first))
        .route("/dictionaries/{dict}/entries/{entry}", get(get_entry))
        .route(
            "/dictionaries/{dict}/entries/{entry}/nearbyentries",
            get(nearby_entries),
        )
        .route(
            "/dictionaries/{dict}/entries/{entry}/pronunciations",
            get(pronunciations),
        )
        .route(
            "/dictionaries/{dict}/entries/{entry}/relatedentries",
            get(related_entries),
        )
        .route("/dictionaries/{dict}/topics", get(topics))
        .route("/dictionaries/{dict}/topics/{thesaurus}/{topic}", get(topic_detail))
        .route("/dictionaries/{dict}/wordoftheday", get(word_of_the_day_in))
        .route(
            "/dictionaries/{dict}/wordoftheday/preview",
            get(word_of_the_day_preview_in),
        )
        .route("/wordoftheday", get(word_of_the_day))
        .route("/wordoftheday/preview", get(word_of_the_day_preview))
        .layer(middleware::from_fn(require_access_key));
    Router::new().nest("/api/v1", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn require_access_key(request: Request, next: Next) -> Response {
    let presented = request
        .headers()
        .get("accessKey")
        .and_then(|v| v.to_str().ok());
    if presented == Some(ACCESS_KEY) {
        next.run(request).await
    } else {
        service_error(StatusCode::UNAUTHORIZED, "401", "Invalid access key")
    }
}

fn service_error(status: StatusCode, code: &str, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error_code: code.to_string(),
            error_message: message.to_string(),
        }),
    )
        .into_response()
}

fn dictionary_not_found() -> Response {
    service_error(StatusCode::NOT_FOUND, "404", "Dictionary not found")
}

fn entry_not_found() -> Response {
    service_error(StatusCode::NOT_FOUND, "404", "Entry not found")
}

fn all_dictionaries() -> Vec<Dictionary> {
    vec![
        Dictionary {
            dictionary_name: "British English".to_string(),
            dictionary_code: "british".to_string(),
            dictionary_url: "/dictionaries/british".to_string(),
        },
        Dictionary {
            dictionary_name: "American English".to_string(),
            dictionary_code: "american-english".to_string(),
            dictionary_url: "/dictionaries/american-english".to_string(),
        },
    ]
}

fn find_dictionary(code: &str) -> Option<Dictionary> {
    all_dictionaries()
        .into_iter()
        .find(|d| d.dictionary_code == code)
}

fn entry_ref(dict: &str, id: &str) -> EntryRef {
    EntryRef {
        entry_label: id.to_string(),
        entry_url: format!("/dictionary/{dict}/{id}"),
        entry_id: id.to_string(),
    }
}

fn render_content(id: &str, format: &str) -> String {
    match format {
        "xml" => format!("<entry id=\"{id}\"><headword>{id}</headword></entry>"),
        _ => format!("<div class=\"entry\" id=\"{id}\"><h1>{id}</h1></div>"),
    }
}

fn full_entry(dict: &str, id: &str, format: &str) -> Entry {
    let topics = if id == "apple" || id == "apricot" || id == "banana" {
        vec![Topic {
            topic_id: "fruit".to_string(),
            topic_thesaurus_name: "food".to_string(),
            topic_label: "Fruit".to_string(),
            topic_url: "/topics/food/fruit".to_string(),
        }]
    } else {
        Vec::new()
    };
    Entry {
        entry_label: id.to_string(),
        entry_url: format!("/dictionary/{dict}/{id}"),
        entry_id: id.to_string(),
        dictionary_code: dict.to_string(),
        format: format.to_string(),
        entry_content: render_content(id, format),
        topics,
    }
}

fn entry_preview(dict: &str, id: &str) -> EntryPreview {
    EntryPreview {
        entry_label: id.to_string(),
        entry_url: format!("/dictionary/{dict}/{id}"),
        entry_id: id.to_string(),
        dictionary_code: dict.to_string(),
        format: "html".to_string(),
        html_entry_preview: format!("<p>{id}</p>"),
        text_entry_preview: id.to_string(),
    }
}

fn default_pagesize() -> u32 {
    10
}

fn one() -> u32 {
    1
}

fn default_entrynumber() -> u32 {
    5
}

fn default_format() -> String {
    "html".to_string()
}

#[derive(Deserialize)]
struct SearchParams {
    q: String,
    #[serde(default = "default_pagesize")]
    pagesize: u32,
    #[serde(default = "one")]
    pageindex: u32,
}

#[derive(Deserialize)]
struct DidYouMeanParams {
    q: String,
    #[serde(default = "default_entrynumber")]
    entrynumber: u32,
}

#[derive(Deserialize)]
struct FirstParams {
    q: String,
    #[serde(default = "default_format")]
    format: String,
}

#[derive(Deserialize)]
struct FormatParams {
    #[serde(default = "default_format")]
    format: String,
}

#[derive(Deserialize)]
struct NearbyParams {
    #[serde(default = "one")]
    entrynumber: u32,
}

#[derive(Deserialize)]
struct PronunciationParams {
    lang: Option<String>,
}

#[derive(Deserialize)]
struct WotdParams {
    #[allow(dead_code)]
    day: Option<String>,
    #[serde(default = "default_format")]
    format: String,
}

#[derive(Deserialize)]
struct WotdPreviewParams {
    #[allow(dead_code)]
    day: Option<String>,
}

async fn list_dictionaries() -> Json<Vec<Dictionary>> {
    Json(all_dictionaries())
}

async fn get_dictionary(Path(dict): Path<String>) -> Response {
    match find_dictionary(&dict) {
        Some(d) => Json(d).into_response(),
        None => dictionary_not_found(),
    }
}

async fn search(Path(dict): Path<String>, Query(p): Query<SearchParams>) -> Response {
    if find_dictionary(&dict).is_none() {
        return dictionary_not_found();
    }
    let q = p.q.to_lowercase();
    let matches: Vec<EntryRef> = ENTRIES
        .iter()
        .filter(|id| id.starts_with(&q))
        .map(|id| entry_ref(&dict, id))
        .collect();
    let total = matches.len() as u32;
    let pagesize = p.pagesize.max(1);
    let pageindex = p.pageindex.max(1);
    let results = matches
        .into_iter()
        .skip(((pageindex - 1) * pagesize) as usize)
        .take(pagesize as usize)
        .collect();
    Json(SearchEntries {
        dictionary_code: dict,
        results,
        result_number: total,
        current_page_index: pageindex,
        page_number: total.div_ceil(pagesize),
    })
    .into_response()
}

async fn did_you_mean(Path(dict): Path<String>, Query(p): Query<DidYouMeanParams>) -> Response {
    if find_dictionary(&dict).is_none() {
        return dictionary_not_found();
    }
    // Suggestions share the query's first letter.
    let first = p.q.to_lowercase().chars().next();
    let suggestions = ENTRIES
        .iter()
        .filter(|id| first.is_some_and(|c| id.starts_with(c)))
        .map(|id| id.to_string())
        .take(p.entrynumber as usize)
        .collect();
    Json(Suggestions {
        dictionary_code: dict,
        search_term: p.q,
        suggestions,
    })
    .into_response()
}

async fn search_first(Path(dict): Path<String>, Query(p): Query<FirstParams>) -> Response {
    if find_dictionary(&dict).is_none() {
        return dictionary_not_found();
    }
    let q = p.q.to_lowercase();
    match ENTRIES.iter().find(|id| id.starts_with(&q)) {
        Some(id) => Json(full_entry(&dict, id, &p.format)).into_response(),
        None => entry_not_found(),
    }
}

async fn get_entry(
    Path((dict, entry)): Path<(String, String)>,
    Query(p): Query<FormatParams>,
) -> Response {
    if find_dictionary(&dict).is_none() {
        return dictionary_not_found();
    }
    if !ENTRIES.contains(&entry.as_str()) {
        return entry_not_found();
    }
    Json(full_entry(&dict, &entry, &p.format)).into_response()
}

async fn nearby_entries(
    Path((dict, entry)): Path<(String, String)>,
    Query(p): Query<NearbyParams>,
) -> Response {
    if find_dictionary(&dict).is_none() {
        return dictionary_not_found();
    }
    let Some(idx) = ENTRIES.iter().position(|id| **id == entry) else {
        return entry_not_found();
    };
    let n = p.entrynumber as usize;
    let preceding = ENTRIES[idx.saturating_sub(n)..idx]
        .iter()
        .map(|id| entry_ref(&dict, id))
        .collect();
    let following = ENTRIES[idx + 1..ENTRIES.len().min(idx + 1 + n)]
        .iter()
        .map(|id| entry_ref(&dict, id))
        .collect();
    Json(NearbyEntries {
        dictionary_code: dict,
        entry_id: entry,
        nearby_preceding_entries: preceding,
        nearby_following_entries: following,
    })
    .into_response()
}

async fn pronunciations(
    Path((dict, entry)): Path<(String, String)>,
    Query(p): Query<PronunciationParams>,
) -> Response {
    if find_dictionary(&dict).is_none() {
        return dictionary_not_found();
    }
    if !ENTRIES.contains(&entry.as_str()) {
        return entry_not_found();
    }
    let all: Vec<Pronunciation> = ["us", "uk"]
        .iter()
        .map(|lang| Pronunciation {
            dictionary_code: dict.clone(),
            entry_id: entry.clone(),
            lang: lang.to_string(),
            pronunciation_url: format!("/media/{lang}/{entry}.mp3"),
        })
        .collect();
    let filtered: Vec<Pronunciation> = match &p.lang {
        Some(lang) => {
            let lang = lang.to_lowercase();
            all.into_iter().filter(|pr| pr.lang == lang).collect()
        }
        None => all,
    };
    Json(filtered).into_response()
}

async fn related_entries(Path((dict, entry)): Path<(String, String)>) -> Response {
    if find_dictionary(&dict).is_none() {
        return dictionary_not_found();
    }
    if !ENTRIES.contains(&entry.as_str()) {
        return entry_not_found();
    }
    // Everything except the entry itself, attributed to the other dictionary.
    let related = ENTRIES
        .iter()
        .filter(|id| **id != entry)
        .take(2)
        .map(|id| Related {
            entry_label: id.to_string(),
            entry_url: format!("/dictionary/american-english/{id}"),
            entry_id: id.to_string(),
            dictionary_code: "american-english".to_string(),
            dictionary_name: "American English".to_string(),
        })
        .collect();
    Json(RelatedEntries {
        dictionary_code: dict,
        entry_id: entry,
        related_entries: related,
    })
    .into_response()
}

async fn topics(Path(dict): Path<String>) -> Response {
    if find_dictionary(&dict).is_none() {
        return dictionary_not_found();
    }
    Json(vec![Thesaurus {
        thesaurus: "food".to_string(),
    }])
    .into_response()
}

async fn topic_detail(Path((dict, thesaurus, topic)): Path<(String, String, String)>) -> Response {
    if find_dictionary(&dict).is_none() {
        return dictionary_not_found();
    }
    if thesaurus != "food" || topic != "fruit" {
        return service_error(StatusCode::NOT_FOUND, "404", "Topic not found");
    }
    let entries = ["apple", "apricot", "banana"]
        .iter()
        .map(|id| entry_ref(&dict, id))
        .collect();
    Json(TopicFull {
        topic_id: "fruit".to_string(),
        topic_thesaurus_name: "food".to_string(),
        topic_label: "Fruit".to_string(),
        topic_url: "/topics/food/fruit".to_string(),
        dictionary_code: dict,
        entries,
        sub_topics: vec![Subtopic {
            sub_topic_id: "citrus".to_string(),
            sub_topic_label: "Citrus fruit".to_string(),
            sub_topic_url: "/topics/food/fruit/citrus".to_string(),
        }],
    })
    .into_response()
}

async fn word_of_the_day(Query(p): Query<WotdParams>) -> Response {
    Json(full_entry("british", WOTD_ID, &p.format)).into_response()
}

async fn word_of_the_day_in(Path(dict): Path<String>, Query(p): Query<WotdParams>) -> Response {
    if find_dictionary(&dict).is_none() {
        return dictionary_not_found();
    }
    Json(full_entry(&dict, WOTD_ID, &p.format)).into_response()
}

async fn word_of_the_day_preview(Query(_p): Query<WotdPreviewParams>) -> Response {
    Json(entry_preview("british", WOTD_ID)).into_response()
}

async fn word_of_the_day_preview_in(
    Path(dict): Path<String>,
    Query(_p): Query<WotdPreviewParams>,
) -> Response {
    if find_dictionary(&dict).is_none() {
        return dictionary_not_found();
    }
    Json(entry_preview(&dict, WOTD_ID)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_serializes_to_camel_case() {
        let json = serde_json::to_value(all_dictionaries()).unwrap();
        assert_eq!(json[0]["dictionaryCode"], "british");
        assert_eq!(json[0]["dictionaryName"], "British English");
        assert!(json[0].get("dictionary_code").is_none());
    }

    #[test]
    fn error_body_uses_service_field_names() {
        let body = ErrorBody {
            error_code: "404".to_string(),
            error_message: "Dictionary not found".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["errorCode"], "404");
        assert_eq!(json["errorMessage"], "Dictionary not found");
    }

    #[test]
    fn fixture_entries_are_sorted() {
        let mut sorted = ENTRIES.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, ENTRIES);
    }

    #[test]
    fn render_content_switches_on_format() {
        assert!(render_content("apple", "html").starts_with("<div"));
        assert!(render_content("apple", "xml").starts_with("<entry"));
    }

    #[test]
    fn full_entry_attaches_fruit_topics() {
        assert_eq!(full_entry("british", "apple", "html").topics.len(), 1);
        assert!(full_entry("british", "apply", "html").topics.is_empty());
    }

    #[test]
    fn search_params_default_to_first_page() {
        let p: SearchParams = serde_json::from_value(serde_json::json!({"q": "app"})).unwrap();
        assert_eq!(p.pagesize, 10);
        assert_eq!(p.pageindex, 1);
    }
}
