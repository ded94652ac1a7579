/*! Id-addressable Solidity AST consumed by the IR builder.
 *
 * The upstream parser hands over a typed tree in compiler-style JSON: ordered source units, each
 * declaring one contract, with every node carrying an integer id and the id of its enclosing scope.
 * This crate models that tree and indexes it so any declaration can be found by id.
 */

pub mod expressions;
pub mod nodes;

pub use expressions::{
    Block, EmitStatement, Expression, ExpressionStatement, FunctionCall, Identifier, Literal,
    MemberAccess, Operation, ReturnStatement, Statement, VariableDeclarationStatement,
};
pub use nodes::{
    AstIssue, AstRoot, Comment, ContractDefinition, Declaration, EnumDefinition, EnumValue,
    ErrorDefinition, EventDefinition, ExportedSymbol, FunctionDefinition, IdentifierPath,
    ImportDirective, ModifierInvocation, OverrideSpecifier, ParameterList, PragmaDirective,
    SourceUnit, StructDefinition, TypeName, UserDefinedValueTypeDefinition, VariableDeclaration,
};

use indexmap::IndexMap;
use solir_core::{NodeId, NodeType, TypeDescription};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AstError {
    #[error("Invalid AST JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Duplicate node id {0}")]
    DuplicateId(NodeId),
}

pub type Result<T> = std::result::Result<T, AstError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeLocation {
    SourceUnit(usize),
    Contract(usize),
    Declaration(usize, usize),
    Variable(usize, usize, VariableSlot, usize),
    EnumValue(usize, usize, usize),
}

/// Which variable list of a declaration a nested variable sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VariableSlot {
    Parameters,
    ReturnParameters,
    Members,
}

const VARIABLE_SLOTS: [VariableSlot; 3] = [
    VariableSlot::Parameters,
    VariableSlot::ReturnParameters,
    VariableSlot::Members,
];

fn variables_in(declaration: &Declaration, slot: VariableSlot) -> &[VariableDeclaration] {
    match (declaration, slot) {
        (Declaration::FunctionDefinition(f), VariableSlot::Parameters) => &f.parameters.parameters,
        (Declaration::FunctionDefinition(f), VariableSlot::ReturnParameters) => {
            &f.return_parameters.parameters
        }
        (Declaration::EventDefinition(e), VariableSlot::Parameters) => &e.parameters.parameters,
        (Declaration::ErrorDefinition(e), VariableSlot::Parameters) => &e.parameters.parameters,
        (Declaration::StructDefinition(s), VariableSlot::Members) => &s.members,
        _ => &[],
    }
}

fn enum_values_in(declaration: &Declaration) -> &[EnumValue] {
    match declaration {
        Declaration::EnumDefinition(e) => &e.members,
        _ => &[],
    }
}

/// Borrowed view of an indexed node.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    SourceUnit(&'a SourceUnit),
    Contract(&'a ContractDefinition),
    Function(&'a FunctionDefinition),
    /// State variable, parameter, return parameter or struct member.
    Variable(&'a VariableDeclaration),
    Struct(&'a StructDefinition),
    Enum(&'a EnumDefinition),
    EnumValue(&'a EnumValue),
    Event(&'a EventDefinition),
    Error(&'a ErrorDefinition),
    ValueType(&'a UserDefinedValueTypeDefinition),
}

impl<'a> NodeRef<'a> {
    fn from_declaration(declaration: &'a Declaration) -> Option<Self> {
        match declaration {
            Declaration::FunctionDefinition(f) => Some(NodeRef::Function(f)),
            Declaration::VariableDeclaration(v) => Some(NodeRef::Variable(v)),
            Declaration::StructDefinition(s) => Some(NodeRef::Struct(s)),
            Declaration::EnumDefinition(e) => Some(NodeRef::Enum(e)),
            Declaration::EventDefinition(e) => Some(NodeRef::Event(e)),
            Declaration::ErrorDefinition(e) => Some(NodeRef::Error(e)),
            Declaration::UserDefinedValueTypeDefinition(v) => Some(NodeRef::ValueType(v)),
            Declaration::Other => None,
        }
    }

    pub fn id(&self) -> NodeId {
        match *self {
            NodeRef::SourceUnit(n) => n.id,
            NodeRef::Contract(n) => n.id,
            NodeRef::Function(n) => n.id,
            NodeRef::Variable(n) => n.id,
            NodeRef::Struct(n) => n.id,
            NodeRef::Enum(n) => n.id,
            NodeRef::EnumValue(n) => n.id,
            NodeRef::Event(n) => n.id,
            NodeRef::Error(n) => n.id,
            NodeRef::ValueType(n) => n.id,
        }
    }

    pub fn node_type(&self) -> NodeType {
        match *self {
            NodeRef::SourceUnit(_) => NodeType::SourceUnit,
            NodeRef::Contract(_) => NodeType::ContractDefinition,
            NodeRef::Function(_) => NodeType::FunctionDefinition,
            NodeRef::Variable(_) => NodeType::VariableDeclaration,
            NodeRef::Struct(_) => NodeType::StructDefinition,
            NodeRef::Enum(_) => NodeType::EnumDefinition,
            NodeRef::EnumValue(_) => NodeType::EnumValue,
            NodeRef::Event(_) => NodeType::EventDefinition,
            NodeRef::Error(_) => NodeType::ErrorDefinition,
            NodeRef::ValueType(_) => NodeType::UserDefinedValueTypeDefinition,
        }
    }

    /// Id of the nearest enclosing declaration. `0` for source units and enum
    /// values, which the upstream tree does not scope.
    pub fn scope(&self) -> NodeId {
        match *self {
            NodeRef::SourceUnit(_) | NodeRef::EnumValue(_) => 0,
            NodeRef::Contract(n) => n.scope,
            NodeRef::Function(n) => n.scope,
            NodeRef::Variable(n) => n.scope,
            NodeRef::Struct(n) => n.scope,
            NodeRef::Enum(n) => n.scope,
            NodeRef::Event(n) => n.scope,
            NodeRef::Error(n) => n.scope,
            NodeRef::ValueType(n) => n.scope,
        }
    }

    pub fn type_description(&self) -> Option<&'a TypeDescription> {
        match *self {
            NodeRef::Function(n) => Some(&n.type_description),
            NodeRef::Variable(n) => Some(&n.type_description),
            NodeRef::Struct(n) => Some(&n.type_description),
            NodeRef::Error(n) => Some(&n.type_description),
            NodeRef::ValueType(n) => Some(&n.underlying_type.type_description),
            NodeRef::SourceUnit(_)
            | NodeRef::Contract(_)
            | NodeRef::Enum(_)
            | NodeRef::EnumValue(_)
            | NodeRef::Event(_) => None,
        }
    }

    /// Direct children: a unit's contract, a contract's declarations, the
    /// parameters of functions, events and errors, struct members, enum values.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        match *self {
            NodeRef::SourceUnit(unit) => unit.contract.iter().map(NodeRef::Contract).collect(),
            NodeRef::Contract(contract) => contract
                .nodes
                .iter()
                .filter_map(NodeRef::from_declaration)
                .collect(),
            NodeRef::Function(function) => function
                .parameters
                .parameters
                .iter()
                .chain(&function.return_parameters.parameters)
                .map(NodeRef::Variable)
                .collect(),
            NodeRef::Event(event) => event.parameters.parameters.iter().map(NodeRef::Variable).collect(),
            NodeRef::Error(error) => error.parameters.parameters.iter().map(NodeRef::Variable).collect(),
            NodeRef::Struct(definition) => definition.members.iter().map(NodeRef::Variable).collect(),
            NodeRef::Enum(definition) => definition.members.iter().map(NodeRef::EnumValue).collect(),
            NodeRef::Variable(_) | NodeRef::EnumValue(_) | NodeRef::ValueType(_) => Vec::new(),
        }
    }

    /// Narrows to a contract, interface or library node.
    pub fn as_contract(&self) -> Option<&'a ContractDefinition> {
        match *self {
            NodeRef::Contract(contract) => Some(contract),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&'a FunctionDefinition> {
        match *self {
            NodeRef::Function(function) => Some(function),
            _ => None,
        }
    }
}

/// An AST together with its by-id index. Read-only once built.
#[derive(Debug, Clone)]
pub struct Ast {
    root: AstRoot,
    index: IndexMap<NodeId, NodeLocation>,
}

impl Ast {
    pub fn new(root: AstRoot) -> Result<Self> {
        let mut index = IndexMap::new();

        for (unit_idx, unit) in root.source_units.iter().enumerate() {
            Self::insert(&mut index, unit.id, NodeLocation::SourceUnit(unit_idx))?;

            if let Some(contract) = &unit.contract {
                Self::insert(&mut index, contract.id, NodeLocation::Contract(unit_idx))?;

                for (decl_idx, declaration) in contract.nodes.iter().enumerate() {
                    if let Some(id) = declaration.id() {
                        Self::insert(&mut index, id, NodeLocation::Declaration(unit_idx, decl_idx))?;
                    }

                    for slot in VARIABLE_SLOTS {
                        for (var_idx, variable) in variables_in(declaration, slot).iter().enumerate() {
                            let location = NodeLocation::Variable(unit_idx, decl_idx, slot, var_idx);
                            Self::insert(&mut index, variable.id, location)?;
                        }
                    }
                    for (value_idx, value) in enum_values_in(declaration).iter().enumerate() {
                        let location = NodeLocation::EnumValue(unit_idx, decl_idx, value_idx);
                        Self::insert(&mut index, value.id, location)?;
                    }
                }
            }
        }

        Ok(Self { root, index })
    }

    fn insert(
        index: &mut IndexMap<NodeId, NodeLocation>,
        id: NodeId,
        location: NodeLocation,
    ) -> Result<()> {
        if id == 0 {
            return Ok(());
        }
        if index.insert(id, location).is_some() {
            return Err(AstError::DuplicateId(id));
        }
        Ok(())
    }

    pub fn empty() -> Self {
        Self {
            root: AstRoot::default(),
            index: IndexMap::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let root: AstRoot = serde_json::from_str(json)?;
        Self::new(root)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let root: AstRoot = serde_json::from_value(value)?;
        Self::new(root)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn root(&self) -> &AstRoot {
        &self.root
    }

    pub fn source_units(&self) -> &[SourceUnit] {
        &self.root.source_units
    }

    pub fn entry_source_unit(&self) -> Option<&SourceUnit> {
        self.source_units()
            .iter()
            .find(|unit| unit.id == self.root.entry_source_unit)
    }

    pub fn comments(&self) -> &[Comment] {
        &self.root.comments
    }

    pub fn errors(&self) -> &[AstIssue] {
        &self.root.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.root.errors.is_empty()
    }

    /// Replaces the root comments, e.g. with comments collected from raw source.
    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.root.comments = comments;
        self
    }

    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        let location = *self.index.get(&id)?;
        let units = &self.root.source_units;
        let declaration = |unit_idx: usize, decl_idx: usize| {
            units[unit_idx]
                .contract
                .as_ref()
                .and_then(|contract| contract.nodes.get(decl_idx))
        };

        match location {
            NodeLocation::SourceUnit(unit_idx) => Some(NodeRef::SourceUnit(&units[unit_idx])),
            NodeLocation::Contract(unit_idx) => {
                units[unit_idx].contract.as_ref().map(NodeRef::Contract)
            }
            NodeLocation::Declaration(unit_idx, decl_idx) => {
                declaration(unit_idx, decl_idx).and_then(NodeRef::from_declaration)
            }
            NodeLocation::Variable(unit_idx, decl_idx, slot, var_idx) => {
                declaration(unit_idx, decl_idx)
                    .and_then(|d| variables_in(d, slot).get(var_idx))
                    .map(NodeRef::Variable)
            }
            NodeLocation::EnumValue(unit_idx, decl_idx, value_idx) => {
                declaration(unit_idx, decl_idx)
                    .and_then(|d| enum_values_in(d).get(value_idx))
                    .map(NodeRef::EnumValue)
            }
        }
    }

    pub fn contract_by_id(&self, id: NodeId) -> Option<&ContractDefinition> {
        self.node(id).and_then(|node| node.as_contract())
    }

    /// Every indexed node in source order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.index.keys().filter_map(|id| self.node(*id))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Default for Ast {
    fn default() -> Self {
        Self::empty()
    }
}
