//! Blocking client core for the Cambridge dictionary web service.
//!
//! # Overview
//! Builds authenticated GET requests against the service's fixed endpoint
//! set, executes one blocking round-trip per operation, and deserializes the
//! JSON body into typed results. Service failures arrive inside the body as
//! an `errorCode`/`errorMessage` envelope and are normalized into
//! [`ApiError::Service`].
//!
//! # Design
//! - [`DictionaryClient`] holds only the credential and base URL; it is
//!   `Clone` and safe to share across threads.
//! - Each operation pairs a `build_*` method (produces a request, no I/O)
//!   with a blocking call that executes and parses, so request construction
//!   stays deterministic and unit-testable.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{parse_payload, DictionaryClient};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use types::{
    Dictionary, Entry, EntryPreview, EntryRef, ErrorEnvelope, Format, Lang, NearbyEntries,
    Pronunciation, Related, RelatedEntries, SearchEntries, Subtopic, Suggestions, Thesaurus, Topic,
    TopicFull, DICT_AMERICAN_ENGLISH, DICT_BRITISH, DICT_BUSINESS_ENGLISH, DICT_LEARNER_ENGLISH,
    DICT_TURKISH,
};
