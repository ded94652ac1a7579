use crate::IrError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Location of a node in its source file, as reported by the upstream parser.
///
/// Deserializes from either the field-named object or the compiler's compact
/// `"start:length:file"` string. The compact form carries no line or column,
/// so both stay `0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SpanRepr")]
pub struct SourceSpan {
    pub line: u32,
    pub column: u32,
    pub start: u32,
    pub end: u32,
    pub length: u32,
    pub parent_index: i64,
}

impl SourceSpan {
    pub fn new(line: u32, column: u32, start: u32, length: u32) -> Self {
        Self {
            line,
            column,
            start,
            end: start.saturating_add(length),
            length,
            parent_index: 0,
        }
    }

    pub fn with_parent(mut self, parent_index: i64) -> Self {
        self.parent_index = parent_index;
        self
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.length > 0
    }

    pub fn contains(&self, other: &SourceSpan) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

impl FromStr for SourceSpan {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, IrError> {
        let invalid = || IrError::InvalidSourceLocation(s.to_string());

        let mut parts = s.split(':');
        let start = parts.next().and_then(|p| p.parse::<u32>().ok()).ok_or_else(invalid)?;
        let length = parts.next().and_then(|p| p.parse::<u32>().ok()).ok_or_else(invalid)?;
        match parts.next() {
            None => {}
            Some(file) if file.parse::<i64>().is_ok() => {}
            Some(_) => return Err(invalid()),
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(SourceSpan::new(0, 0, start, length))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SpanRepr {
    Compact(String),
    Fields(SpanFields),
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SpanFields {
    line: u32,
    column: u32,
    start: u32,
    end: u32,
    length: u32,
    parent_index: i64,
}

impl TryFrom<SpanRepr> for SourceSpan {
    type Error = IrError;

    fn try_from(repr: SpanRepr) -> Result<Self, IrError> {
        match repr {
            SpanRepr::Compact(src) => src.parse(),
            SpanRepr::Fields(fields) => Ok(SourceSpan {
                line: fields.line,
                column: fields.column,
                start: fields.start,
                end: fields.end,
                length: fields.length,
                parent_index: fields.parent_index,
            }),
        }
    }
}
