//! OCR stat-text extraction.

pub mod extractor;
pub mod fields;
pub mod record;

pub use extractor::{extract_stats, StatExtractor};
pub use fields::{CaptureOrder, StatField, StatFieldSpec, STAT_FIELD_TABLE};
pub use record::ExtractedStatRecord;
