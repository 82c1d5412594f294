//! Best-effort stat recovery from OCR text.
//!
//! Every line is matched against every field of [`STAT_FIELD_TABLE`]. A line
//! that yields a number for a field overwrites what earlier lines produced,
//! so summary rows at the bottom of a screenshot win over the raw rows above
//! them.

use once_cell::sync::Lazy;
use regex::Regex;

use super::fields::{StatField, StatFieldSpec, STAT_FIELD_TABLE};
use super::record::ExtractedStatRecord;

/// Compiled patterns for one table row.
#[derive(Debug)]
struct FieldMatcher {
    field: StatField,
    patterns: Vec<Regex>,
}

impl FieldMatcher {
    fn compile(spec: &StatFieldSpec) -> Self {
        let patterns = spec
            .capture_order
            .iter()
            .map(|order| {
                Regex::new(&order.pattern(spec.keyword)).expect("stat field patterns are static")
            })
            .collect();
        Self { field: spec.field, patterns }
    }

    /// First capture on `line` that parses as a `u32`.
    fn read(&self, line: &str) -> Option<u32> {
        self.patterns.iter().find_map(|pattern| {
            pattern
                .captures(line)
                .and_then(|caps| caps.get(1))
                .and_then(|m| m.as_str().parse::<u32>().ok())
        })
    }
}

static FIELD_MATCHERS: Lazy<Vec<FieldMatcher>> =
    Lazy::new(|| STAT_FIELD_TABLE.iter().map(FieldMatcher::compile).collect());

/// Extractor restricted to a subset of fields.
#[derive(Debug, Clone)]
pub struct StatExtractor {
    fields: Vec<StatField>,
}

impl Default for StatExtractor {
    fn default() -> Self {
        Self { fields: StatField::all().to_vec() }
    }
}

impl StatExtractor {
    pub fn new(fields: &[StatField]) -> Self {
        Self { fields: fields.to_vec() }
    }

    pub fn fields(&self) -> &[StatField] {
        &self.fields
    }

    /// Never fails; text with nothing recognizable gives an empty record.
    pub fn extract(&self, text: &str) -> ExtractedStatRecord {
        let matchers: Vec<&FieldMatcher> =
            FIELD_MATCHERS.iter().filter(|m| self.fields.contains(&m.field)).collect();

        let mut record = ExtractedStatRecord::default();
        for (line_no, line) in text.lines().enumerate() {
            for matcher in &matchers {
                if let Some(value) = matcher.read(line) {
                    if let Some(previous) = record.get(matcher.field) {
                        log::debug!(
                            "line {}: {} {} replaces earlier {}",
                            line_no + 1,
                            matcher.field.key(),
                            value,
                            previous
                        );
                    }
                    record.set(matcher.field, value);
                }
            }
        }

        log::debug!("extracted {} stat field(s) from {} bytes", record.len(), text.len());
        record
    }
}

/// Extract with every known field enabled.
pub fn extract_stats(text: &str) -> ExtractedStatRecord {
    StatExtractor::default().extract(text)
}
