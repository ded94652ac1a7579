use crate::expressions::Block;
use serde::{Deserialize, Serialize};
use solir_core::{
    ContractKind, FunctionKind, NodeId, NodeType, SourceSpan, StateMutability, StorageLocation,
    TypeDescription, Visibility,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AstRoot {
    pub id: NodeId,
    pub entry_source_unit: NodeId,
    pub source_units: Vec<SourceUnit>,
    pub comments: Vec<Comment>,
    pub errors: Vec<AstIssue>,
}

/// Problem reported by the upstream parser or reference resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AstIssue {
    pub message: String,
    pub src: SourceSpan,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Comment {
    pub id: NodeId,
    pub text: String,
    pub src: SourceSpan,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceUnit {
    pub id: NodeId,
    pub name: String,
    pub license: String,
    pub absolute_path: String,
    pub src: SourceSpan,
    pub exported_symbols: Vec<ExportedSymbol>,
    pub imports: Vec<ImportDirective>,
    pub pragmas: Vec<PragmaDirective>,
    pub contract: Option<ContractDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportedSymbol {
    pub id: NodeId,
    pub name: String,
    pub absolute_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportDirective {
    pub id: NodeId,
    pub absolute_path: String,
    pub file: String,
    pub unit_alias: String,
    pub source_unit: NodeId,
    pub src: SourceSpan,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PragmaDirective {
    pub id: NodeId,
    pub literals: Vec<String>,
    pub text: String,
    pub src: SourceSpan,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContractDefinition {
    pub id: NodeId,
    pub name: String,
    #[serde(rename = "contractKind")]
    pub kind: ContractKind,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    pub scope: NodeId,
    pub src: SourceSpan,
    pub nodes: Vec<Declaration>,
}

impl ContractDefinition {
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDefinition> {
        self.nodes.iter().filter_map(|node| match node {
            Declaration::FunctionDefinition(f) => Some(f),
            _ => None,
        })
    }

    fn callable_of_kind(&self, kind: FunctionKind) -> Option<&FunctionDefinition> {
        self.functions().find(|f| f.kind == kind)
    }

    pub fn constructor(&self) -> Option<&FunctionDefinition> {
        self.callable_of_kind(FunctionKind::Constructor)
    }

    pub fn fallback(&self) -> Option<&FunctionDefinition> {
        self.callable_of_kind(FunctionKind::Fallback)
    }

    pub fn receive(&self) -> Option<&FunctionDefinition> {
        self.callable_of_kind(FunctionKind::Receive)
    }

    pub fn state_variables(&self) -> impl Iterator<Item = &VariableDeclaration> {
        self.nodes.iter().filter_map(|node| match node {
            Declaration::VariableDeclaration(v) => Some(v),
            _ => None,
        })
    }

    pub fn structs(&self) -> impl Iterator<Item = &StructDefinition> {
        self.nodes.iter().filter_map(|node| match node {
            Declaration::StructDefinition(s) => Some(s),
            _ => None,
        })
    }

    pub fn enums(&self) -> impl Iterator<Item = &EnumDefinition> {
        self.nodes.iter().filter_map(|node| match node {
            Declaration::EnumDefinition(e) => Some(e),
            _ => None,
        })
    }

    pub fn events(&self) -> impl Iterator<Item = &EventDefinition> {
        self.nodes.iter().filter_map(|node| match node {
            Declaration::EventDefinition(e) => Some(e),
            _ => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &ErrorDefinition> {
        self.nodes.iter().filter_map(|node| match node {
            Declaration::ErrorDefinition(e) => Some(e),
            _ => None,
        })
    }

    pub fn value_types(&self) -> impl Iterator<Item = &UserDefinedValueTypeDefinition> {
        self.nodes.iter().filter_map(|node| match node {
            Declaration::UserDefinedValueTypeDefinition(v) => Some(v),
            _ => None,
        })
    }
}

/// Contract-level declaration, tagged by `nodeType` as in compiler JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType")]
pub enum Declaration {
    FunctionDefinition(FunctionDefinition),
    VariableDeclaration(VariableDeclaration),
    StructDefinition(StructDefinition),
    EnumDefinition(EnumDefinition),
    EventDefinition(EventDefinition),
    ErrorDefinition(ErrorDefinition),
    UserDefinedValueTypeDefinition(UserDefinedValueTypeDefinition),
    #[serde(other)]
    Other,
}

impl Declaration {
    pub fn id(&self) -> Option<NodeId> {
        match self {
            Declaration::FunctionDefinition(f) => Some(f.id),
            Declaration::VariableDeclaration(v) => Some(v.id),
            Declaration::StructDefinition(s) => Some(s.id),
            Declaration::EnumDefinition(e) => Some(e.id),
            Declaration::EventDefinition(e) => Some(e.id),
            Declaration::ErrorDefinition(e) => Some(e.id),
            Declaration::UserDefinedValueTypeDefinition(v) => Some(v.id),
            Declaration::Other => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FunctionDefinition {
    pub id: NodeId,
    pub name: String,
    pub kind: FunctionKind,
    pub scope: NodeId,
    pub src: SourceSpan,
    pub implemented: bool,
    pub visibility: Visibility,
    pub state_mutability: StateMutability,
    #[serde(rename = "virtual")]
    pub is_virtual: bool,
    pub modifiers: Vec<ModifierInvocation>,
    pub overrides: Option<OverrideSpecifier>,
    pub parameters: ParameterList,
    pub return_parameters: ParameterList,
    pub body: Option<Block>,
    #[serde(rename = "typeDescriptions")]
    pub type_description: TypeDescription,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParameterList {
    pub id: NodeId,
    pub parameters: Vec<VariableDeclaration>,
}

/// Parameters, struct members and state variables all share this node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariableDeclaration {
    pub id: NodeId,
    pub name: String,
    pub scope: NodeId,
    pub src: SourceSpan,
    pub type_name: Option<TypeName>,
    pub storage_location: StorageLocation,
    pub visibility: Visibility,
    pub constant: bool,
    pub mutability: Option<StateMutability>,
    pub indexed: bool,
    pub state_variable: bool,
    #[serde(rename = "typeDescriptions")]
    pub type_description: TypeDescription,
}

/// Any type-name production. Elementary types carry `name`; user defined
/// types leave it empty and name themselves through `path_node`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeName {
    pub id: NodeId,
    pub node_type: NodeType,
    pub name: String,
    pub path_node: Option<IdentifierPath>,
    #[serde(rename = "typeDescriptions")]
    pub type_description: TypeDescription,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdentifierPath {
    pub id: NodeId,
    pub name: String,
    pub referenced_declaration: NodeId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModifierInvocation {
    pub id: NodeId,
    pub modifier_name: IdentifierPath,
    pub arguments: Vec<crate::expressions::Expression>,
    pub src: SourceSpan,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverrideSpecifier {
    pub id: NodeId,
    pub overrides: Vec<IdentifierPath>,
    #[serde(rename = "typeDescriptions")]
    pub type_description: TypeDescription,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StructDefinition {
    pub id: NodeId,
    pub name: String,
    pub canonical_name: String,
    pub visibility: Visibility,
    pub storage_location: StorageLocation,
    pub scope: NodeId,
    pub src: SourceSpan,
    pub members: Vec<VariableDeclaration>,
    #[serde(rename = "typeDescriptions")]
    pub type_description: TypeDescription,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnumDefinition {
    pub id: NodeId,
    pub name: String,
    pub canonical_name: String,
    pub scope: NodeId,
    pub src: SourceSpan,
    pub members: Vec<EnumValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnumValue {
    pub id: NodeId,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventDefinition {
    pub id: NodeId,
    pub name: String,
    pub anonymous: bool,
    pub scope: NodeId,
    pub src: SourceSpan,
    pub parameters: ParameterList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorDefinition {
    pub id: NodeId,
    pub name: String,
    pub scope: NodeId,
    pub src: SourceSpan,
    pub parameters: ParameterList,
    #[serde(rename = "typeDescriptions")]
    pub type_description: TypeDescription,
}

/// `type Price is uint128;`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserDefinedValueTypeDefinition {
    pub id: NodeId,
    pub name: String,
    pub canonical_name: String,
    pub scope: NodeId,
    pub src: SourceSpan,
    pub underlying_type: TypeName,
}
