//! Blocking client for the dictionary web service.
//!
//! # Design
//! `DictionaryClient` holds the service credential and base URL and no other
//! state, so one instance can be shared freely across threads. Each operation
//! is split into a `build_*` method that produces an [`HttpRequest`] and a
//! public call that executes one blocking GET and parses the body. Request
//! building never touches the network, which keeps URL and query construction
//! deterministic and unit-testable.
//!
//! Response handling is uniform across operations: first the body is tried
//! against the service's error envelope, then against the expected payload.
//! See [`parse_payload`].

use std::borrow::Cow;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{self, HttpRequest};
use crate::types::{
    Dictionary, Entry, EntryPreview, ErrorEnvelope, Format, Lang, NearbyEntries, Pronunciation,
    RelatedEntries, SearchEntries, Suggestions, Thesaurus, TopicFull,
};

const BASE_URL: &str = "https://dictionary.cambridge.org/api/v1";

/// Synchronous client for the dictionary API.
///
/// Holds only the immutable access key and base URL; every call opens its own
/// connection and owns its own response buffer, so concurrent use needs no
/// extra synchronization.
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    base_url: String,
    access_key: String,
}

impl DictionaryClient {
    /// Client against the production endpoint.
    pub fn new(access_key: &str) -> Self {
        Self::with_base_url(BASE_URL, access_key)
    }

    /// Client against an alternative endpoint, e.g. a local test server.
    pub fn with_base_url(base_url: &str, access_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_key: access_key.to_string(),
        }
    }

    fn request(&self, path: &str) -> HttpRequest {
        HttpRequest::new(format!("{}/{path}", self.base_url))
            .header("accessKey", &self.access_key)
            .header("Content-Type", "application/json")
    }

    pub fn build_dictionaries(&self) -> HttpRequest {
        self.request("dictionaries")
    }

    pub fn build_dictionary(&self, dict_code: &str) -> HttpRequest {
        self.request(&format!("dictionaries/{}", segment(dict_code)))
    }

    pub fn build_search_entries(
        &self,
        dict_code: &str,
        q: &str,
        pagesize: u32,
        pageindex: u32,
    ) -> HttpRequest {
        self.request(&format!("dictionaries/{}/search", segment(dict_code)))
            .query("q", q)
            .query("pagesize", pagesize)
            .query("pageindex", pageindex)
    }

    pub fn build_did_you_mean(&self, dict_code: &str, q: &str, entrynumber: u32) -> HttpRequest {
        self.request(&format!(
            "dictionaries/{}/search/didyoumean",
            segment(dict_code)
        ))
        .query("q", q)
        .query("entrynumber", entrynumber)
    }

    pub fn build_search_first(&self, dict_code: &str, q: &str, format: Format) -> HttpRequest {
        self.request(&format!("dictionaries/{}/search/first", segment(dict_code)))
            .query("q", q)
            .query("format", format)
    }

    pub fn build_entry(&self, dict_code: &str, entry_id: &str, format: Format) -> HttpRequest {
        self.request(&format!(
            "dictionaries/{}/entries/{}",
            segment(dict_code),
            segment(entry_id)
        ))
        .query("format", format)
    }

    pub fn build_nearby_entries(
        &self,
        dict_code: &str,
        entry_id: &str,
        entrynumber: u32,
    ) -> HttpRequest {
        self.request(&format!(
            "dictionaries/{}/entries/{}/nearbyentries",
            segment(dict_code),
            segment(entry_id)
        ))
        .query("entrynumber", entrynumber)
    }

    pub fn build_pronunciations(
        &self,
        dict_code: &str,
        entry_id: &str,
        lang: Option<Lang>,
    ) -> HttpRequest {
        let req = self.request(&format!(
            "dictionaries/{}/entries/{}/pronunciations",
            segment(dict_code),
            segment(entry_id)
        ));
        match lang {
            Some(lang) => req.query("lang", lang),
            None => req,
        }
    }

    pub fn build_related_entries(&self, dict_code: &str, entry_id: &str) -> HttpRequest {
        self.request(&format!(
            "dictionaries/{}/entries/{}/relatedentries",
            segment(dict_code),
            segment(entry_id)
        ))
    }

    pub fn build_topics(&self, dict_code: &str) -> HttpRequest {
        self.request(&format!("dictionaries/{}/topics", segment(dict_code)))
    }

    pub fn build_topic(
        &self,
        dict_code: &str,
        thesaurus_name: &str,
        topic_id: &str,
    ) -> HttpRequest {
        self.request(&format!(
            "dictionaries/{}/topics/{}/{}",
            segment(dict_code),
            segment(thesaurus_name),
            segment(topic_id)
        ))
    }

    pub fn build_word_of_the_day(&self, day: Option<&str>, format: Format) -> HttpRequest {
        with_day(self.request("wordoftheday"), day).query("format", format)
    }

    pub fn build_word_of_the_day_in(
        &self,
        dict_code: &str,
        day: Option<&str>,
        format: Format,
    ) -> HttpRequest {
        let req = self.request(&format!("dictionaries/{}/wordoftheday", segment(dict_code)));
        with_day(req, day).query("format", format)
    }

    pub fn build_word_of_the_day_preview(&self, day: Option<&str>) -> HttpRequest {
        with_day(self.request("wordoftheday/preview"), day)
    }

    pub fn build_word_of_the_day_preview_in(
        &self,
        dict_code: &str,
        day: Option<&str>,
    ) -> HttpRequest {
        let req = self.request(&format!(
            "dictionaries/{}/wordoftheday/preview",
            segment(dict_code)
        ));
        with_day(req, day)
    }

    /// List every dictionary the service offers.
    pub fn dictionaries(&self) -> Result<Vec<Dictionary>, ApiError> {
        fetch(self.build_dictionaries())
    }

    pub fn dictionary(&self, dict_code: &str) -> Result<Dictionary, ApiError> {
        fetch(self.build_dictionary(dict_code))
    }

    /// Search `dict_code` for `q`, returning one page of results.
    /// `pageindex` is 1-based.
    pub fn search_entries(
        &self,
        dict_code: &str,
        q: &str,
        pagesize: u32,
        pageindex: u32,
    ) -> Result<SearchEntries, ApiError> {
        fetch(self.build_search_entries(dict_code, q, pagesize, pageindex))
    }

    /// Spelling suggestions for `q`, at most `entrynumber` of them.
    pub fn did_you_mean(
        &self,
        dict_code: &str,
        q: &str,
        entrynumber: u32,
    ) -> Result<Suggestions, ApiError> {
        fetch(self.build_did_you_mean(dict_code, q, entrynumber))
    }

    /// The best search match for `q`, rendered in `format`.
    pub fn search_first(
        &self,
        dict_code: &str,
        q: &str,
        format: Format,
    ) -> Result<Entry, ApiError> {
        fetch(self.build_search_first(dict_code, q, format))
    }

    pub fn entry(
        &self,
        dict_code: &str,
        entry_id: &str,
        format: Format,
    ) -> Result<Entry, ApiError> {
        fetch(self.build_entry(dict_code, entry_id, format))
    }

    /// Entries alphabetically adjacent to `entry_id`, up to `entrynumber` in
    /// each direction.
    pub fn nearby_entries(
        &self,
        dict_code: &str,
        entry_id: &str,
        entrynumber: u32,
    ) -> Result<NearbyEntries, ApiError> {
        fetch(self.build_nearby_entries(dict_code, entry_id, entrynumber))
    }

    /// Pronunciations for `entry_id`, all variants when `lang` is `None`.
    pub fn pronunciations(
        &self,
        dict_code: &str,
        entry_id: &str,
        lang: Option<Lang>,
    ) -> Result<Vec<Pronunciation>, ApiError> {
        fetch(self.build_pronunciations(dict_code, entry_id, lang))
    }

    pub fn related_entries(
        &self,
        dict_code: &str,
        entry_id: &str,
    ) -> Result<RelatedEntries, ApiError> {
        fetch(self.build_related_entries(dict_code, entry_id))
    }

    /// The thesauri available for a dictionary.
    pub fn topics(&self, dict_code: &str) -> Result<Vec<Thesaurus>, ApiError> {
        fetch(self.build_topics(dict_code))
    }

    /// Full detail for one topic, including member entries and subtopics.
    pub fn topic(
        &self,
        dict_code: &str,
        thesaurus_name: &str,
        topic_id: &str,
    ) -> Result<TopicFull, ApiError> {
        fetch(self.build_topic(dict_code, thesaurus_name, topic_id))
    }

    /// Word of the day across all dictionaries. `day` selects a date
    /// (`YYYY-MM-DD`); `None` means the service's current day.
    pub fn word_of_the_day(&self, day: Option<&str>, format: Format) -> Result<Entry, ApiError> {
        fetch(self.build_word_of_the_day(day, format))
    }

    /// Word of the day scoped to one dictionary.
    pub fn word_of_the_day_in(
        &self,
        dict_code: &str,
        day: Option<&str>,
        format: Format,
    ) -> Result<Entry, ApiError> {
        fetch(self.build_word_of_the_day_in(dict_code, day, format))
    }

    pub fn word_of_the_day_preview(&self, day: Option<&str>) -> Result<EntryPreview, ApiError> {
        fetch(self.build_word_of_the_day_preview(day))
    }

    pub fn word_of_the_day_preview_in(
        &self,
        dict_code: &str,
        day: Option<&str>,
    ) -> Result<EntryPreview, ApiError> {
        fetch(self.build_word_of_the_day_preview_in(dict_code, day))
    }
}

/// Percent-encode a caller-supplied identifier as a single path segment, so
/// reserved characters cannot splice extra segments into the path.
fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

fn with_day(req: HttpRequest, day: Option<&str>) -> HttpRequest {
    match day {
        Some(day) => req.query("day", day),
        None => req,
    }
}

fn fetch<T: DeserializeOwned>(request: HttpRequest) -> Result<T, ApiError> {
    let response = http::execute(&request)?;
    parse_payload(&response.body)
}

/// Parse a response body per the service contract: the error envelope wins,
/// otherwise the expected payload, otherwise the raw body is handed back.
///
/// The two parse attempts are independent. An envelope shape mismatch (list
/// endpoints return a top-level array) falls through silently; only a failed
/// payload parse surfaces an error. Public so callers running their own
/// transport can reuse the contract.
pub fn parse_payload<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        let code = envelope.error_code.unwrap_or_default();
        let message = envelope.error_message.unwrap_or_default();
        if !code.is_empty() || !message.is_empty() {
            return Err(ApiError::Service { code, message });
        }
    }
    serde_json::from_str(body).map_err(|_| ApiError::InvalidResponse {
        body: body.to_string(),
    })
}
