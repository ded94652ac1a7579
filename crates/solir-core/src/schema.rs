/*! Schema-typed projection of the IR.
 *
 * Mirrors the external message schema consumers exchange: enum fields become integer tags, optional
 * scalars collapse to their zero value, and every collection is a flat repeated field. The
 * projection reads IR fields only; nothing is resolved here.
 */

use crate::body::{Body, FunctionCall, Statement};
use crate::contract::{Contract, Import, Pragma, Symbol};
use crate::declarations::{Enum, Error, Event, StateVariable, Struct};
use crate::function::{CallableShape, Function, ModifierInvocation, Override, Parameter};
use crate::link::Link;
use crate::root::{RootSourceUnit, Standard};
use crate::source_location::SourceSpan;
use crate::standards::{Confidence, Discovery, StandardDescriptor};
use crate::types::TypeDescription;
use serde::{Deserialize, Serialize};

pub mod ir_pb {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Src {
        pub line: i64,
        pub column: i64,
        pub start: i64,
        pub end: i64,
        pub length: i64,
        pub parent_index: i64,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct TypeDescription {
        pub type_identifier: String,
        pub type_string: String,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Parameter {
        pub id: i64,
        pub node_type: i32,
        pub name: String,
        pub type_name: String,
        pub type_description: TypeDescription,
        pub storage_location: i32,
        pub indexed: bool,
        pub src: Src,
        pub abi_type: String,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct ModifierInvocation {
        pub id: i64,
        pub node_type: i32,
        pub name: String,
        pub argument_types: Vec<TypeDescription>,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Override {
        pub id: i64,
        pub node_type: i32,
        pub name: String,
        pub referenced_declaration_id: i64,
        pub type_description: TypeDescription,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Callable {
        pub id: i64,
        pub node_type: i32,
        pub kind: i32,
        pub src: Src,
        pub implemented: bool,
        pub visibility: i32,
        pub state_mutability: i32,
        pub is_virtual: bool,
        pub modifiers: Vec<ModifierInvocation>,
        pub overrides: Vec<Override>,
        pub parameters: Vec<Parameter>,
        pub return_parameters: Vec<Parameter>,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct FunctionCall {
        pub id: i64,
        pub node_type: i32,
        pub kind: i32,
        pub name: String,
        pub argument_types: Vec<TypeDescription>,
        pub external: bool,
        pub external_contract_id: i64,
        pub external_contract_name: String,
        pub reference_statement_id: i64,
        pub type_description: TypeDescription,
        pub src: Src,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Statement {
        pub function_call: Option<FunctionCall>,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Body {
        pub id: i64,
        pub node_type: i32,
        pub src: Src,
        pub statements: Vec<Statement>,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Function {
        pub callable: Callable,
        pub name: String,
        pub signature: String,
        pub selector: String,
        pub referenced_declaration_id: i64,
        pub body: Body,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct StateVariable {
        pub id: i64,
        pub contract_id: i64,
        pub node_type: i32,
        pub name: String,
        pub visibility: i32,
        pub constant: bool,
        pub immutable: bool,
        pub storage_location: i32,
        pub state_mutability: i32,
        pub type_name: String,
        pub type_description: TypeDescription,
        pub src: Src,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Struct {
        pub id: i64,
        pub node_type: i32,
        pub name: String,
        pub canonical_name: String,
        pub visibility: i32,
        pub storage_location: i32,
        pub members: Vec<Parameter>,
        pub type_description: TypeDescription,
        pub src: Src,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct EnumMember {
        pub id: i64,
        pub node_type: i32,
        pub name: String,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Enum {
        pub id: i64,
        pub node_type: i32,
        pub name: String,
        pub canonical_name: String,
        pub members: Vec<EnumMember>,
        pub src: Src,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Event {
        pub id: i64,
        pub node_type: i32,
        pub name: String,
        pub anonymous: bool,
        pub parameters: Vec<Parameter>,
        pub src: Src,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Error {
        pub id: i64,
        pub node_type: i32,
        pub name: String,
        pub parameters: Vec<Parameter>,
        pub type_description: TypeDescription,
        pub src: Src,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Symbol {
        pub id: i64,
        pub node_type: i32,
        pub name: String,
        pub absolute_path: String,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Import {
        pub id: i64,
        pub node_type: i32,
        pub absolute_path: String,
        pub file: String,
        pub unit_alias: String,
        pub source_unit_id: i64,
        pub src: Src,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Pragma {
        pub id: i64,
        pub node_type: i32,
        pub literals: Vec<String>,
        pub text: String,
        pub src: Src,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Contract {
        pub id: i64,
        pub node_type: i32,
        pub kind: i32,
        pub source_unit_id: i64,
        pub name: String,
        pub license: String,
        pub language: i32,
        pub absolute_path: String,
        pub src: Src,
        pub symbols: Vec<Symbol>,
        pub imports: Vec<Import>,
        pub pragmas: Vec<Pragma>,
        pub state_variables: Vec<StateVariable>,
        pub structs: Vec<Struct>,
        pub enums: Vec<Enum>,
        pub events: Vec<Event>,
        pub errors: Vec<Error>,
        pub constructor: Option<Callable>,
        pub functions: Vec<Function>,
        pub fallback: Option<Callable>,
        pub receive: Option<Callable>,
        pub standard_type: String,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Discovery {
        pub signature: String,
        pub matched: bool,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Confidence {
        pub level: i32,
        pub score: f64,
        pub found_tokens: i64,
        pub max_tokens: i64,
        pub functions: Vec<Discovery>,
        pub events: Vec<Discovery>,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct FunctionSignature {
        pub name: String,
        pub inputs: Vec<String>,
        pub outputs: Vec<String>,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct EventInput {
        pub type_name: String,
        pub indexed: bool,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct EventSignature {
        pub name: String,
        pub inputs: Vec<EventInput>,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct StandardDescriptor {
        pub standard_type: String,
        pub name: String,
        pub url: String,
        pub functions: Vec<FunctionSignature>,
        pub events: Vec<EventSignature>,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Standard {
        pub contract_id: i64,
        pub contract_name: String,
        pub confidence: Confidence,
        pub standard: StandardDescriptor,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Link {
        pub url: String,
        pub social: bool,
        pub platform: String,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct Root {
        pub node_type: i32,
        pub entry_contract_id: i64,
        pub entry_contract_name: String,
        pub contracts_count: i64,
        pub contracts: Vec<Contract>,
        pub standards: Vec<Standard>,
        pub links: Vec<Link>,
    }
}

/// Projection of an IR value onto its schema message.
pub trait ToSchema {
    type Message: Serialize + for<'de> Deserialize<'de>;

    fn to_schema(&self) -> Self::Message;
}

fn list<T: ToSchema>(items: &[T]) -> Vec<T::Message> {
    items.iter().map(ToSchema::to_schema).collect()
}

impl ToSchema for SourceSpan {
    type Message = ir_pb::Src;

    fn to_schema(&self) -> ir_pb::Src {
        ir_pb::Src {
            line: self.line as i64,
            column: self.column as i64,
            start: self.start as i64,
            end: self.end as i64,
            length: self.length as i64,
            parent_index: self.parent_index,
        }
    }
}

impl ToSchema for TypeDescription {
    type Message = ir_pb::TypeDescription;

    fn to_schema(&self) -> ir_pb::TypeDescription {
        ir_pb::TypeDescription {
            type_identifier: self.type_identifier.clone(),
            type_string: self.type_string.clone(),
        }
    }
}

impl ToSchema for Parameter {
    type Message = ir_pb::Parameter;

    fn to_schema(&self) -> ir_pb::Parameter {
        ir_pb::Parameter {
            id: self.id,
            node_type: self.node_type.tag(),
            name: self.name.clone(),
            type_name: self.type_name.clone(),
            type_description: self.type_description.to_schema(),
            storage_location: self.storage_location.tag(),
            indexed: self.indexed,
            src: self.src.to_schema(),
            abi_type: self.abi_type.clone(),
        }
    }
}

impl ToSchema for ModifierInvocation {
    type Message = ir_pb::ModifierInvocation;

    fn to_schema(&self) -> ir_pb::ModifierInvocation {
        ir_pb::ModifierInvocation {
            id: self.id,
            node_type: self.node_type.tag(),
            name: self.name.clone(),
            argument_types: list(&self.argument_types),
        }
    }
}

impl ToSchema for Override {
    type Message = ir_pb::Override;

    fn to_schema(&self) -> ir_pb::Override {
        ir_pb::Override {
            id: self.id,
            node_type: self.node_type.tag(),
            name: self.name.clone(),
            referenced_declaration_id: self.referenced_declaration_id,
            type_description: self.type_description.to_schema(),
        }
    }
}

impl ToSchema for CallableShape {
    type Message = ir_pb::Callable;

    fn to_schema(&self) -> ir_pb::Callable {
        ir_pb::Callable {
            id: self.id,
            node_type: self.node_type.tag(),
            kind: self.kind.tag(),
            src: self.src.to_schema(),
            implemented: self.implemented,
            visibility: self.visibility.tag(),
            state_mutability: self.state_mutability.tag(),
            is_virtual: self.is_virtual,
            modifiers: list(&self.modifiers),
            overrides: list(&self.overrides),
            parameters: list(&self.parameters),
            return_parameters: list(&self.return_parameters),
        }
    }
}

impl ToSchema for FunctionCall {
    type Message = ir_pb::FunctionCall;

    fn to_schema(&self) -> ir_pb::FunctionCall {
        ir_pb::FunctionCall {
            id: self.id,
            node_type: self.node_type.tag(),
            kind: self.kind.tag(),
            name: self.name.clone(),
            argument_types: list(&self.argument_types),
            external: self.external,
            external_contract_id: self.external_contract_id,
            external_contract_name: self.external_contract_name.clone(),
            reference_statement_id: self.reference_statement_id,
            type_description: self.type_description.to_schema(),
            src: self.src.to_schema(),
        }
    }
}

impl ToSchema for Statement {
    type Message = ir_pb::Statement;

    fn to_schema(&self) -> ir_pb::Statement {
        match self {
            Statement::FunctionCall(call) => ir_pb::Statement {
                function_call: Some(call.to_schema()),
            },
        }
    }
}

impl ToSchema for Body {
    type Message = ir_pb::Body;

    fn to_schema(&self) -> ir_pb::Body {
        ir_pb::Body {
            id: self.id,
            node_type: self.node_type.tag(),
            src: self.src.to_schema(),
            statements: list(&self.statements),
        }
    }
}

impl ToSchema for Function {
    type Message = ir_pb::Function;

    fn to_schema(&self) -> ir_pb::Function {
        ir_pb::Function {
            callable: self.shape.to_schema(),
            name: self.name.clone(),
            signature: self.signature.clone(),
            selector: self.selector.clone(),
            referenced_declaration_id: self.referenced_declaration_id,
            body: self.body.to_schema(),
        }
    }
}

impl ToSchema for StateVariable {
    type Message = ir_pb::StateVariable;

    fn to_schema(&self) -> ir_pb::StateVariable {
        ir_pb::StateVariable {
            id: self.id,
            contract_id: self.contract_id,
            node_type: self.node_type.tag(),
            name: self.name.clone(),
            visibility: self.visibility.tag(),
            constant: self.constant,
            immutable: self.immutable,
            storage_location: self.storage_location.tag(),
            state_mutability: self.state_mutability.tag(),
            type_name: self.type_name.clone(),
            type_description: self.type_description.to_schema(),
            src: self.src.to_schema(),
        }
    }
}

impl ToSchema for Struct {
    type Message = ir_pb::Struct;

    fn to_schema(&self) -> ir_pb::Struct {
        ir_pb::Struct {
            id: self.id,
            node_type: self.node_type.tag(),
            name: self.name.clone(),
            canonical_name: self.canonical_name.clone(),
            visibility: self.visibility.tag(),
            storage_location: self.storage_location.tag(),
            members: list(&self.members),
            type_description: self.type_description.to_schema(),
            src: self.src.to_schema(),
        }
    }
}

impl ToSchema for Enum {
    type Message = ir_pb::Enum;

    fn to_schema(&self) -> ir_pb::Enum {
        ir_pb::Enum {
            id: self.id,
            node_type: self.node_type.tag(),
            name: self.name.clone(),
            canonical_name: self.canonical_name.clone(),
            members: self
                .members
                .iter()
                .map(|m| ir_pb::EnumMember {
                    id: m.id,
                    node_type: m.node_type.tag(),
                    name: m.name.clone(),
                })
                .collect(),
            src: self.src.to_schema(),
        }
    }
}

impl ToSchema for Event {
    type Message = ir_pb::Event;

    fn to_schema(&self) -> ir_pb::Event {
        ir_pb::Event {
            id: self.id,
            node_type: self.node_type.tag(),
            name: self.name.clone(),
            anonymous: self.anonymous,
            parameters: list(&self.parameters),
            src: self.src.to_schema(),
        }
    }
}

impl ToSchema for Error {
    type Message = ir_pb::Error;

    fn to_schema(&self) -> ir_pb::Error {
        ir_pb::Error {
            id: self.id,
            node_type: self.node_type.tag(),
            name: self.name.clone(),
            parameters: list(&self.parameters),
            type_description: self.type_description.to_schema(),
            src: self.src.to_schema(),
        }
    }
}

impl ToSchema for Symbol {
    type Message = ir_pb::Symbol;

    fn to_schema(&self) -> ir_pb::Symbol {
        ir_pb::Symbol {
            id: self.id,
            node_type: self.node_type.tag(),
            name: self.name.clone(),
            absolute_path: self.absolute_path.clone(),
        }
    }
}

impl ToSchema for Import {
    type Message = ir_pb::Import;

    fn to_schema(&self) -> ir_pb::Import {
        ir_pb::Import {
            id: self.id,
            node_type: self.node_type.tag(),
            absolute_path: self.absolute_path.clone(),
            file: self.file.clone(),
            unit_alias: self.unit_alias.clone(),
            source_unit_id: self.source_unit_id,
            src: self.src.to_schema(),
        }
    }
}

impl ToSchema for Pragma {
    type Message = ir_pb::Pragma;

    fn to_schema(&self) -> ir_pb::Pragma {
        ir_pb::Pragma {
            id: self.id,
            node_type: self.node_type.tag(),
            literals: self.literals.clone(),
            text: self.text.clone(),
            src: self.src.to_schema(),
        }
    }
}

impl ToSchema for Contract {
    type Message = ir_pb::Contract;

    fn to_schema(&self) -> ir_pb::Contract {
        ir_pb::Contract {
            id: self.id,
            node_type: self.node_type.tag(),
            kind: self.kind.tag(),
            source_unit_id: self.source_unit_id,
            name: self.name.clone(),
            license: self.license.clone(),
            language: self.language.tag(),
            absolute_path: self.absolute_path.clone(),
            src: self.src.to_schema(),
            symbols: list(&self.symbols),
            imports: list(&self.imports),
            pragmas: list(&self.pragmas),
            state_variables: list(&self.state_variables),
            structs: list(&self.structs),
            enums: list(&self.enums),
            events: list(&self.events),
            errors: list(&self.errors),
            constructor: self.constructor.as_ref().map(|c| c.shape.to_schema()),
            functions: list(&self.functions),
            fallback: self.fallback.as_ref().map(|f| f.shape.to_schema()),
            receive: self.receive.as_ref().map(|r| r.shape.to_schema()),
            standard_type: self
                .standard_type
                .as_ref()
                .map(|kind| kind.to_string())
                .unwrap_or_default(),
        }
    }
}

impl ToSchema for Discovery {
    type Message = ir_pb::Discovery;

    fn to_schema(&self) -> ir_pb::Discovery {
        ir_pb::Discovery {
            signature: self.signature.clone(),
            matched: self.matched,
        }
    }
}

impl ToSchema for Confidence {
    type Message = ir_pb::Confidence;

    fn to_schema(&self) -> ir_pb::Confidence {
        ir_pb::Confidence {
            level: self.level.tag(),
            score: self.score,
            found_tokens: self.found_tokens as i64,
            max_tokens: self.max_tokens as i64,
            functions: list(&self.functions),
            events: list(&self.events),
        }
    }
}

impl ToSchema for StandardDescriptor {
    type Message = ir_pb::StandardDescriptor;

    fn to_schema(&self) -> ir_pb::StandardDescriptor {
        ir_pb::StandardDescriptor {
            standard_type: self.kind.to_string(),
            name: self.name.clone(),
            url: self.url.clone(),
            functions: self
                .functions
                .iter()
                .map(|f| ir_pb::FunctionSignature {
                    name: f.name.clone(),
                    inputs: f.inputs.clone(),
                    outputs: f.outputs.clone(),
                })
                .collect(),
            events: self
                .events
                .iter()
                .map(|e| ir_pb::EventSignature {
                    name: e.name.clone(),
                    inputs: e
                        .inputs
                        .iter()
                        .map(|i| ir_pb::EventInput {
                            type_name: i.type_name.clone(),
                            indexed: i.indexed,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl ToSchema for Standard {
    type Message = ir_pb::Standard;

    fn to_schema(&self) -> ir_pb::Standard {
        ir_pb::Standard {
            contract_id: self.contract_id,
            contract_name: self.contract_name.clone(),
            confidence: self.confidence.to_schema(),
            standard: self.standard.to_schema(),
        }
    }
}

impl ToSchema for Link {
    type Message = ir_pb::Link;

    fn to_schema(&self) -> ir_pb::Link {
        ir_pb::Link {
            url: self.url.clone(),
            social: self.social,
            platform: self.platform_name().to_string(),
        }
    }
}

impl ToSchema for RootSourceUnit {
    type Message = ir_pb::Root;

    fn to_schema(&self) -> ir_pb::Root {
        ir_pb::Root {
            node_type: self.node_type.tag(),
            entry_contract_id: self.entry_contract_id,
            entry_contract_name: self.entry_contract_name.clone(),
            contracts_count: self.contracts_count as i64,
            contracts: list(&self.contracts),
            standards: list(&self.standards),
            links: list(&self.links),
        }
    }
}
