use crate::function::Parameter;
use crate::source_location::SourceSpan;
use crate::types::{NodeId, NodeType, StateMutability, StorageLocation, TypeDescription, Visibility};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StateVariable {
    pub id: NodeId,
    pub contract_id: NodeId,
    pub node_type: NodeType,
    pub name: String,
    pub visibility: Visibility,
    pub constant: bool,
    pub immutable: bool,
    pub storage_location: StorageLocation,
    pub state_mutability: StateMutability,
    pub type_name: String,
    pub type_description: TypeDescription,
    pub src: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Struct {
    pub id: NodeId,
    pub node_type: NodeType,
    pub name: String,
    pub canonical_name: String,
    pub visibility: Visibility,
    pub storage_location: StorageLocation,
    pub members: Vec<Parameter>,
    pub type_description: TypeDescription,
    pub src: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Enum {
    pub id: NodeId,
    pub node_type: NodeType,
    pub name: String,
    pub canonical_name: String,
    pub members: Vec<EnumMember>,
    pub src: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnumMember {
    pub id: NodeId,
    pub node_type: NodeType,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Event {
    pub id: NodeId,
    pub node_type: NodeType,
    pub name: String,
    pub anonymous: bool,
    pub parameters: Vec<Parameter>,
    pub src: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Error {
    pub id: NodeId,
    pub node_type: NodeType,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub type_description: TypeDescription,
    pub src: SourceSpan,
}
