use crate::source_location::SourceSpan;
use crate::types::{CallKind, NodeId, NodeType, TypeDescription};
use serde::{Deserialize, Serialize};

/// Lowered body of a function. Only call statements are captured.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    pub id: NodeId,
    pub node_type: NodeType,
    pub src: SourceSpan,
    pub statements: Vec<Statement>,
}

impl Body {
    pub fn function_calls(&self) -> impl Iterator<Item = &FunctionCall> {
        self.statements.iter().map(|statement| match statement {
            Statement::FunctionCall(call) => call,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "statement")]
pub enum Statement {
    FunctionCall(FunctionCall),
}

impl Statement {
    pub fn id(&self) -> NodeId {
        match self {
            Statement::FunctionCall(call) => call.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionCall {
    pub id: NodeId,
    pub node_type: NodeType,
    pub kind: CallKind,
    pub name: String,
    pub argument_types: Vec<TypeDescription>,
    pub external: bool,
    pub external_contract_id: NodeId,
    pub external_contract_name: String,
    pub reference_statement_id: NodeId,
    pub type_description: TypeDescription,
    pub src: SourceSpan,
}

impl FunctionCall {
    pub fn is_resolved(&self) -> bool {
        self.reference_statement_id != 0
    }
}
