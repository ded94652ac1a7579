/*! Registry of interface standards a contract can be scored against.
 *
 * Standards are plain descriptors: ordered function and event shapes. The registry keeps them in a
 * caller-defined precedence order and owns the confidence check, so callers can swap the set of
 * standards without touching the matcher.
 */

pub mod builtin;
pub mod confidence;
pub mod descriptor;

pub use confidence::{confidence_check, Confidence, ConfidenceLevel, ContractMatcher, Discovery};
pub use descriptor::{
    EventInput, EventSignature, FunctionSignature, StandardDescriptor, StandardKind,
};

use crate::{IrError, Result};

#[derive(Debug, Clone)]
pub struct StandardsRegistry {
    standards: Vec<StandardDescriptor>,
}

impl StandardsRegistry {
    /// Registry over `standards`; their order is the precedence order.
    pub fn new(standards: Vec<StandardDescriptor>) -> Result<Self> {
        for (idx, standard) in standards.iter().enumerate() {
            if standards[..idx].iter().any(|s| s.kind == standard.kind) {
                return Err(IrError::RegistryError(format!(
                    "Standard {} registered twice",
                    standard.kind
                )));
            }
        }
        Ok(Self { standards })
    }

    pub fn builtin() -> Self {
        Self {
            standards: builtin::all(),
        }
    }

    pub fn empty() -> Self {
        Self {
            standards: Vec::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &StandardDescriptor> {
        self.standards.iter()
    }

    pub fn get(&self, kind: &StandardKind) -> Option<&StandardDescriptor> {
        self.standards.iter().find(|s| &s.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.standards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standards.is_empty()
    }

    pub fn confidence_check(
        &self,
        standard: &StandardDescriptor,
        matcher: &ContractMatcher,
    ) -> (Confidence, bool) {
        confidence_check(standard, matcher)
    }
}

impl Default for StandardsRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
