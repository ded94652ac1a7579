use crate::contract::Contract;
use crate::link::Link;
use crate::standards::{Confidence, StandardDescriptor, StandardKind};
use crate::types::{NodeId, NodeType};
use serde::{Deserialize, Serialize};

/// A standard detected on a contract together with the evidence for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standard {
    pub contract_id: NodeId,
    pub contract_name: String,
    pub confidence: Confidence,
    pub standard: StandardDescriptor,
}

impl Standard {
    pub fn kind(&self) -> &StandardKind {
        &self.standard.kind
    }
}

/// Top of the IR tree for one build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootSourceUnit {
    pub node_type: NodeType,
    pub entry_contract_id: NodeId,
    pub entry_contract_name: String,
    pub contracts_count: usize,
    pub contracts: Vec<Contract>,
    pub standards: Vec<Standard>,
    pub links: Vec<Link>,
}

impl Default for RootSourceUnit {
    fn default() -> Self {
        Self {
            node_type: NodeType::RootSourceUnit,
            entry_contract_id: 0,
            entry_contract_name: String::new(),
            contracts_count: 0,
            contracts: Vec::new(),
            standards: Vec::new(),
            links: Vec::new(),
        }
    }
}

impl RootSourceUnit {
    pub fn new(entry_contract_id: NodeId, entry_contract_name: impl Into<String>) -> Self {
        Self {
            entry_contract_id,
            entry_contract_name: entry_contract_name.into(),
            ..Default::default()
        }
    }

    pub fn add_contract(&mut self, contract: Contract) {
        self.contracts.push(contract);
        self.contracts_count = self.contracts.len();
    }

    pub fn has_contracts(&self) -> bool {
        !self.contracts.is_empty()
    }

    /// Contract declared by the entry source unit.
    pub fn entry_contract(&self) -> Option<&Contract> {
        self.contracts
            .iter()
            .find(|c| c.source_unit_id == self.entry_contract_id)
    }

    pub fn entry_contract_mut(&mut self) -> Option<&mut Contract> {
        let entry = self.entry_contract_id;
        self.contracts
            .iter_mut()
            .find(|c| c.source_unit_id == entry)
    }

    pub fn contract_by_id(&self, id: NodeId) -> Option<&Contract> {
        self.contracts.iter().find(|c| c.id == id)
    }

    pub fn contract_by_name(&self, name: &str) -> Option<&Contract> {
        self.contracts.iter().find(|c| c.name == name)
    }

    pub fn has_standard(&self, kind: &StandardKind) -> bool {
        self.standards.iter().any(|s| s.kind() == kind)
    }

    pub fn get_standard(&self, kind: &StandardKind) -> Option<&Standard> {
        self.standards.iter().find(|s| s.kind() == kind)
    }
}
