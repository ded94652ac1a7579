use serde::{Deserialize, Serialize};

/// Switches for the finishing passes of a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub process_standards: bool,
    pub process_links: bool,
    /// Build even when the AST carries upstream parse or reference errors.
    pub allow_upstream_errors: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            process_standards: true,
            process_links: true,
            allow_upstream_errors: false,
        }
    }
}

impl BuilderConfig {
    pub fn structural_only() -> Self {
        Self {
            process_standards: false,
            process_links: false,
            ..Default::default()
        }
    }
}
