use crate::abi::AbiTypes;
use crate::body::Body;
use crate::source_location::SourceSpan;
use crate::types::{
    FunctionKind, NodeId, NodeType, StateMutability, StorageLocation, TypeDescription, Visibility,
};
use serde::{Deserialize, Serialize};
use tiny_keccak::{Hasher, Keccak};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Parameter {
    pub id: NodeId,
    pub node_type: NodeType,
    pub name: String,
    pub type_name: String,
    pub type_description: TypeDescription,
    pub storage_location: StorageLocation,
    pub indexed: bool,
    pub src: SourceSpan,
    /// Canonical ABI type, resolved against the declared structs and value
    /// types when the parameter was lowered. Empty when never resolved.
    #[serde(default)]
    pub abi_type: String,
}

impl Parameter {
    /// ABI type of the parameter as it appears in a canonical signature.
    pub fn canonical_type(&self) -> String {
        if !self.abi_type.is_empty() {
            return self.abi_type.clone();
        }
        AbiTypes::new().parameter_type(self)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModifierInvocation {
    pub id: NodeId,
    pub node_type: NodeType,
    pub name: String,
    pub argument_types: Vec<TypeDescription>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Override {
    pub id: NodeId,
    pub node_type: NodeType,
    pub name: String,
    pub referenced_declaration_id: NodeId,
    pub type_description: TypeDescription,
}

/// Structure shared by every callable declaration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CallableShape {
    pub id: NodeId,
    pub node_type: NodeType,
    pub kind: FunctionKind,
    pub src: SourceSpan,
    pub implemented: bool,
    pub visibility: Visibility,
    pub state_mutability: StateMutability,
    #[serde(rename = "virtual")]
    pub is_virtual: bool,
    pub modifiers: Vec<ModifierInvocation>,
    pub overrides: Vec<Override>,
    pub parameters: Vec<Parameter>,
    pub return_parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Function {
    #[serde(flatten)]
    pub shape: CallableShape,
    pub name: String,
    pub signature: String,
    pub selector: String,
    pub referenced_declaration_id: NodeId,
    pub body: Body,
}

impl Function {
    pub fn new(name: impl Into<String>, shape: CallableShape) -> Self {
        let name = name.into();
        let signature = canonical_signature(&name, &shape.parameters);
        let selector = selector(&signature);
        Self {
            shape,
            name,
            signature,
            selector,
            referenced_declaration_id: 0,
            body: Body::default(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.shape.id
    }

    pub fn input_types(&self) -> Vec<String> {
        self.shape
            .parameters
            .iter()
            .map(Parameter::canonical_type)
            .collect()
    }

    pub fn output_types(&self) -> Vec<String> {
        self.shape
            .return_parameters
            .iter()
            .map(Parameter::canonical_type)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Constructor {
    #[serde(flatten)]
    pub shape: CallableShape,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Fallback {
    #[serde(flatten)]
    pub shape: CallableShape,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Receive {
    #[serde(flatten)]
    pub shape: CallableShape,
}

/// Borrowed view over any callable of a contract.
#[derive(Debug, Clone, Copy)]
pub enum CallableRef<'a> {
    Function(&'a Function),
    Constructor(&'a Constructor),
    Fallback(&'a Fallback),
    Receive(&'a Receive),
}

impl<'a> CallableRef<'a> {
    pub fn shape(&self) -> &'a CallableShape {
        match self {
            CallableRef::Function(f) => &f.shape,
            CallableRef::Constructor(c) => &c.shape,
            CallableRef::Fallback(f) => &f.shape,
            CallableRef::Receive(r) => &r.shape,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            CallableRef::Function(f) => &f.name,
            CallableRef::Constructor(_) => "constructor",
            CallableRef::Fallback(_) => "fallback",
            CallableRef::Receive(_) => "receive",
        }
    }

    pub fn body(&self) -> Option<&'a Body> {
        match self {
            CallableRef::Function(f) => Some(&f.body),
            CallableRef::Constructor(_) | CallableRef::Fallback(_) | CallableRef::Receive(_) => {
                None
            }
        }
    }
}

pub fn canonical_signature(name: &str, parameters: &[Parameter]) -> String {
    let types: Vec<String> = parameters.iter().map(Parameter::canonical_type).collect();
    format!("{}({})", name, types.join(","))
}

/// First four bytes of the keccak-256 hash of `signature`, hex encoded with a `0x` prefix.
pub fn selector(signature: &str) -> String {
    let mut hasher = Keccak::v256();
    let mut digest = [0u8; 32];
    hasher.update(signature.as_bytes());
    hasher.finalize(&mut digest);

    let hex: String = digest[..4].iter().map(|b| format!("{:02x}", b)).collect();
    format!("0x{}", hex)
}
