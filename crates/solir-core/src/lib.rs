/*! Core IR types for smart contract analysis.
 *
 * The IR is a normalized, serializable tree lowered from a Solidity AST: contracts with their
 * declarations in source order, callables sharing one structural shape, and function bodies reduced
 * to the call sites that matter for cross-contract analysis. The standards registry lives here too,
 * since detected standards are part of the tree.
 */

pub mod abi;
pub mod body;
pub mod contract;
pub mod declarations;
pub mod function;
pub mod ir_persist;
pub mod link;
pub mod root;
pub mod schema;
pub mod source_location;
pub mod standards;
pub mod types;

pub use abi::AbiTypes;
pub use body::{Body, FunctionCall, Statement};
pub use contract::{Contract, Import, Pragma, Symbol};
pub use declarations::{Enum, EnumMember, Error, Event, StateVariable, Struct};
pub use function::{
    CallableRef, CallableShape, Constructor, Fallback, Function, ModifierInvocation, Override,
    Parameter, Receive,
};
pub use link::{Link, Platform};
pub use root::{RootSourceUnit, Standard};
pub use schema::ToSchema;
pub use source_location::SourceSpan;
pub use standards::{StandardDescriptor, StandardKind, StandardsRegistry};
pub use types::{
    CallKind, ContractKind, FunctionKind, Language, NodeId, NodeType, StateMutability,
    StorageLocation, TypeDescription, Visibility,
};

#[derive(thiserror::Error, Debug)]
pub enum IrError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Registry error: {0}")]
    RegistryError(String),
    #[error("Invalid source location: {0}")]
    InvalidSourceLocation(String),
}

pub type Result<T> = std::result::Result<T, IrError>;

#[cfg(test)]
mod tests;
