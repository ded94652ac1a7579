use crate::declarations::{Enum, Error, Event, StateVariable, Struct};
use crate::function::{CallableRef, Constructor, Fallback, Function, Receive};
use crate::source_location::SourceSpan;
use crate::standards::StandardKind;
use crate::types::{ContractKind, Language, NodeId, NodeType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contract {
    pub id: NodeId,
    pub node_type: NodeType,
    pub kind: ContractKind,
    pub source_unit_id: NodeId,
    pub name: String,
    pub license: String,
    pub language: Language,
    pub absolute_path: String,
    pub src: SourceSpan,
    pub symbols: Vec<Symbol>,
    pub imports: Vec<Import>,
    pub pragmas: Vec<Pragma>,
    pub state_variables: Vec<StateVariable>,
    pub structs: Vec<Struct>,
    pub enums: Vec<Enum>,
    pub events: Vec<Event>,
    pub errors: Vec<Error>,
    pub constructor: Option<Constructor>,
    pub functions: Vec<Function>,
    pub fallback: Option<Fallback>,
    pub receive: Option<Receive>,
    pub standard_type: Option<StandardKind>,
}

impl Contract {
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            node_type: NodeType::ContractDefinition,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn get_function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn get_event(&self, name: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.name == name)
    }

    /// Every callable in declaration order: constructor, functions, fallback, receive.
    pub fn callables(&self) -> Vec<CallableRef<'_>> {
        let mut callables = Vec::with_capacity(self.functions.len() + 3);
        if let Some(constructor) = &self.constructor {
            callables.push(CallableRef::Constructor(constructor));
        }
        callables.extend(self.functions.iter().map(CallableRef::Function));
        if let Some(fallback) = &self.fallback {
            callables.push(CallableRef::Fallback(fallback));
        }
        if let Some(receive) = &self.receive {
            callables.push(CallableRef::Receive(receive));
        }
        callables
    }

    pub fn has_external_calls(&self) -> bool {
        self.functions
            .iter()
            .flat_map(|f| f.body.function_calls())
            .any(|call| call.external)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Symbol {
    pub id: NodeId,
    pub node_type: NodeType,
    pub name: String,
    pub absolute_path: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Import {
    pub id: NodeId,
    pub node_type: NodeType,
    pub absolute_path: String,
    pub file: String,
    pub unit_alias: String,
    pub source_unit_id: NodeId,
    pub src: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pragma {
    pub id: NodeId,
    pub node_type: NodeType,
    pub literals: Vec<String>,
    pub text: String,
    pub src: SourceSpan,
}

impl Pragma {
    /// Version requirement for `pragma solidity` directives.
    pub fn version(&self) -> Option<String> {
        match self.literals.split_first() {
            Some((head, rest)) if head == "solidity" => Some(rest.concat()),
            _ => None,
        }
    }
}
