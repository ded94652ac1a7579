use super::descriptor::{EventSignature, FunctionSignature, StandardDescriptor};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    #[default]
    None = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

impl ConfidenceLevel {
    pub const MEDIUM_THRESHOLD: f64 = 0.5;
    pub const LOW_THRESHOLD: f64 = 0.25;

    pub fn from_score(score: f64) -> Self {
        if score >= 1.0 {
            ConfidenceLevel::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            ConfidenceLevel::Medium
        } else if score >= Self::LOW_THRESHOLD {
            ConfidenceLevel::Low
        } else {
            ConfidenceLevel::None
        }
    }

    /// Only the maximum tier classifies a contract.
    pub fn is_maximum(self) -> bool {
        self == ConfidenceLevel::High
    }

    pub fn tag(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceLevel::None => "none",
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Discovery {
    pub signature: String,
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Confidence {
    pub level: ConfidenceLevel,
    pub score: f64,
    pub found_tokens: usize,
    pub max_tokens: usize,
    pub functions: Vec<Discovery>,
    pub events: Vec<Discovery>,
}

/// Flattened signature view of one contract.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractMatcher {
    pub name: String,
    pub functions: Vec<FunctionSignature>,
    pub events: Vec<EventSignature>,
}

fn function_tokens(expected: &FunctionSignature, candidate: &FunctionSignature) -> usize {
    if expected.name != candidate.name {
        return 0;
    }
    if expected.inputs.len() != candidate.inputs.len()
        || expected.outputs.len() != candidate.outputs.len()
    {
        return 1;
    }

    let inputs = expected
        .inputs
        .iter()
        .zip(&candidate.inputs)
        .filter(|(a, b)| a == b)
        .count();
    let outputs = expected
        .outputs
        .iter()
        .zip(&candidate.outputs)
        .filter(|(a, b)| a == b)
        .count();

    1 + inputs + outputs
}

fn event_tokens(expected: &EventSignature, candidate: &EventSignature) -> usize {
    if expected.name != candidate.name {
        return 0;
    }
    if expected.inputs.len() != candidate.inputs.len() {
        return 1;
    }

    1 + expected
        .inputs
        .iter()
        .zip(&candidate.inputs)
        .filter(|(a, b)| a.type_name == b.type_name && a.indexed == b.indexed)
        .count()
}

/// Scores `matcher` against `standard`. Overloads compete: the best-scoring
/// same-named candidate is credited.
pub fn confidence_check(standard: &StandardDescriptor, matcher: &ContractMatcher) -> (Confidence, bool) {
    let max_tokens = standard.token_count();
    let mut confidence = Confidence {
        max_tokens,
        ..Default::default()
    };

    for expected in &standard.functions {
        let found = matcher
            .functions
            .iter()
            .map(|candidate| function_tokens(expected, candidate))
            .max()
            .unwrap_or(0);
        confidence.found_tokens += found;
        confidence.functions.push(Discovery {
            signature: expected.to_string(),
            matched: found == expected.token_count(),
        });
    }

    for expected in &standard.events {
        let found = matcher
            .events
            .iter()
            .map(|candidate| event_tokens(expected, candidate))
            .max()
            .unwrap_or(0);
        confidence.found_tokens += found;
        confidence.events.push(Discovery {
            signature: expected.to_string(),
            matched: found == expected.token_count(),
        });
    }

    if max_tokens == 0 {
        return (confidence, false);
    }

    confidence.score = confidence.found_tokens as f64 / max_tokens as f64;
    confidence.level = ConfidenceLevel::from_score(confidence.score);

    let matched = confidence.level > ConfidenceLevel::None;
    (confidence, matched)
}
