//! Content adapters - fetching scenario source material.

mod html_text;
mod http_extractor;
mod url_guard;

pub use html_text::html_to_text;
pub use http_extractor::HttpContentExtractor;
pub use url_guard::{check_url, validate_external_url};
