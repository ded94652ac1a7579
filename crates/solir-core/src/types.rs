use serde::{Deserialize, Serialize};

/// Identifier of an AST node. IR nodes keep the id of the node they were
/// lowered from; `0` means "no node".
pub type NodeId = i64;

/// Type identifier of the `address` primitive.
pub const ADDRESS_TYPE_IDENTIFIER: &str = "t_address";

/// Marker carried by type identifiers of contract-typed values.
pub const CONTRACT_TYPE_MARKER: &str = "t_contract";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NodeType {
    RootSourceUnit = 1,
    SourceUnit = 2,
    ContractDefinition = 3,
    FunctionDefinition = 4,
    ParameterList = 5,
    VariableDeclaration = 6,
    ModifierInvocation = 7,
    OverrideSpecifier = 8,
    PragmaDirective = 9,
    ImportDirective = 10,
    StructDefinition = 11,
    EnumDefinition = 12,
    EnumValue = 13,
    EventDefinition = 14,
    ErrorDefinition = 15,
    Block = 16,
    UncheckedBlock = 17,
    ExpressionStatement = 18,
    FunctionCall = 19,
    Identifier = 20,
    IdentifierPath = 21,
    MemberAccess = 22,
    Literal = 23,
    ElementaryTypeName = 24,
    UserDefinedTypeName = 25,
    Mapping = 26,
    ArrayTypeName = 27,
    FunctionTypeName = 28,
    Comment = 29,
    Symbol = 30,
    UserDefinedValueTypeDefinition = 31,
    #[default]
    #[serde(other)]
    Unknown = 0,
}

impl NodeType {
    /// Integer tag used by the schema-typed projection.
    pub fn tag(self) -> i32 {
        self as i32
    }
}

/// Type information attached to an AST node by the upstream type checker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeDescription {
    pub type_identifier: String,
    pub type_string: String,
}

impl TypeDescription {
    pub fn new(type_identifier: impl Into<String>, type_string: impl Into<String>) -> Self {
        Self {
            type_identifier: type_identifier.into(),
            type_string: type_string.into(),
        }
    }

    pub fn is_address(&self) -> bool {
        self.type_identifier == ADDRESS_TYPE_IDENTIFIER
    }

    pub fn is_contract(&self) -> bool {
        self.type_identifier.contains(CONTRACT_TYPE_MARKER)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public = 1,
    External = 2,
    #[default]
    Internal = 3,
    Private = 4,
}

impl Visibility {
    pub fn tag(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::External => "external",
            Visibility::Internal => "internal",
            Visibility::Private => "private",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateMutability {
    Pure = 1,
    View = 2,
    #[default]
    #[serde(rename = "nonpayable")]
    NonPayable = 3,
    Payable = 4,
    Mutable = 5,
    Immutable = 6,
    Constant = 7,
}

impl StateMutability {
    pub fn tag(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StateMutability::Pure => "pure",
            StateMutability::View => "view",
            StateMutability::NonPayable => "nonpayable",
            StateMutability::Payable => "payable",
            StateMutability::Mutable => "mutable",
            StateMutability::Immutable => "immutable",
            StateMutability::Constant => "constant",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageLocation {
    #[default]
    Default = 1,
    Memory = 2,
    Storage = 3,
    Calldata = 4,
}

impl StorageLocation {
    pub fn tag(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    #[default]
    Contract = 1,
    Interface = 2,
    Library = 3,
}

impl ContractKind {
    pub fn tag(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContractKind::Contract => "contract",
            ContractKind::Interface => "interface",
            ContractKind::Library => "library",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKind {
    #[default]
    Function = 1,
    Constructor = 2,
    Fallback = 3,
    Receive = 4,
}

impl FunctionKind {
    pub fn tag(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallKind {
    #[default]
    FunctionCall = 1,
    TypeConversion = 2,
    StructConstructorCall = 3,
}

impl CallKind {
    pub fn tag(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Solidity = 1,
}

impl Language {
    pub fn tag(self) -> i32 {
        self as i32
    }
}
