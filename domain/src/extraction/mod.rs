//! Operation extraction.
//!
//! - [`english::EnglishExtractor`]: single composite pattern per fragment
//! - [`template::match_templates`]: Chinese transformation templates
//! - [`pos_scan::scan_tagged`]: Chinese fallback over tagged words

pub mod english;
pub mod pos_scan;
pub mod tagged;
pub mod template;

pub use english::EnglishExtractor;
pub use pos_scan::{DEFAULT_TARGET_WINDOW, scan_tagged};
pub use tagged::TaggedWord;
pub use template::{TRANSFORM_TEMPLATES, TemplateMatch, TransformTemplate, match_templates};
