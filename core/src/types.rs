//! Typed response shapes for the dictionary service.
//!
//! # Design
//! Every struct here is populated only by deserializing a response body;
//! none are constructed by client logic. JSON field names are camelCase.
//! The service's base-record-plus-extension shapes are modeled as
//! composition: the shared [`EntryRef`] (and [`Topic`]) is embedded by value
//! with `#[serde(flatten)]` rather than through any subtyping. Array fields
//! default to empty so callers can iterate unconditionally.

use std::fmt;

use serde::{Deserialize, Serialize};

// Dictionary codes known to be served. The client does not enforce this
// list; any code is passed through.
pub const DICT_BRITISH: &str = "british";
pub const DICT_TURKISH: &str = "turkish";
pub const DICT_AMERICAN_ENGLISH: &str = "american-english";
pub const DICT_BUSINESS_ENGLISH: &str = "business-english";
pub const DICT_LEARNER_ENGLISH: &str = "learner-english";

/// One dictionary dataset served by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Dictionary {
    pub dictionary_name: String,
    pub dictionary_code: String,
    pub dictionary_url: String,
}

/// Reference to a single entry: the shared base of search results, nearby
/// entries, and the richer entry records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntryRef {
    pub entry_label: String,
    pub entry_url: String,
    pub entry_id: String,
}

/// A headword's full content record, rendered in the requested format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(flatten)]
    pub entry: EntryRef,
    pub dictionary_code: String,
    pub format: String,
    pub entry_content: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// Preview-only variant of an entry, as served by word-of-the-day previews.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntryPreview {
    #[serde(flatten)]
    pub entry: EntryRef,
    pub dictionary_code: String,
    pub format: String,
    pub html_entry_preview: String,
    pub text_entry_preview: String,
}

/// One page of search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntries {
    pub dictionary_code: String,
    #[serde(default)]
    pub results: Vec<EntryRef>,
    pub result_number: u32,
    pub current_page_index: u32,
    pub page_number: u32,
}

/// "Did you mean" spelling suggestions for a search term.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestions {
    pub dictionary_code: String,
    pub search_term: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Entries alphabetically adjacent to a given entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NearbyEntries {
    pub dictionary_code: String,
    pub entry_id: String,
    #[serde(default)]
    pub nearby_preceding_entries: Vec<EntryRef>,
    #[serde(default)]
    pub nearby_following_entries: Vec<EntryRef>,
}

/// Audio pronunciation for an entry in one language variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pronunciation {
    pub dictionary_code: String,
    pub entry_id: String,
    pub lang: String,
    pub pronunciation_url: String,
}

/// An entry related to another, possibly from a different dictionary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Related {
    #[serde(flatten)]
    pub entry: EntryRef,
    pub dictionary_code: String,
    pub dictionary_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelatedEntries {
    pub dictionary_code: String,
    pub entry_id: String,
    #[serde(default)]
    pub related_entries: Vec<Related>,
}

/// Thesaurus topic descriptor, also attached to entries.
///
/// `topic_thesaurus_name` and `topic_parent_id` are absent for topics listed
/// outside a thesaurus and for root topics respectively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub topic_id: String,
    pub topic_thesaurus_name: Option<String>,
    pub topic_label: String,
    pub topic_url: String,
    pub topic_parent_id: Option<String>,
}

/// Full topic detail: the topic itself plus its member entries and subtopics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopicFull {
    #[serde(flatten)]
    pub topic: Topic,
    pub dictionary_code: String,
    #[serde(default)]
    pub entries: Vec<EntryRef>,
    #[serde(default)]
    pub sub_topics: Vec<Subtopic>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subtopic {
    pub sub_topic_id: String,
    pub sub_topic_label: String,
    pub sub_topic_url: String,
}

/// A named thesaurus grouping entries by subject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Thesaurus {
    pub thesaurus: String,
}

/// The service's in-body failure shape. Either field present and non-empty
/// marks the whole response as failed, whatever else the body contains.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}

/// Rendering format for entry content. Renders in lowercase wire form when
/// serialized into a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Xml,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Xml => "xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pronunciation language variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Us,
    Uk,
}

impl Lang {
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Us => "us",
            Lang::Uk => "uk",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
