//! Structural lowering of leaf AST shapes. Nothing here resolves references.

use solir_ast::{
    EnumDefinition, ErrorDefinition, EventDefinition, ExportedSymbol, FunctionDefinition,
    ImportDirective, ModifierInvocation, OverrideSpecifier, ParameterList, PragmaDirective,
    StructDefinition, VariableDeclaration,
};
use solir_core::{
    AbiTypes, CallableShape, Enum, EnumMember, Error, Event, Import, NodeId, NodeType, Override,
    Parameter, Pragma, StateMutability, StateVariable, Struct, Symbol,
};

/// Declared type name of a variable. User defined types carry no elementary
/// name, so the path identifier and then the checker's type string stand in.
pub fn type_name_of(variable: &VariableDeclaration) -> String {
    let Some(type_name) = &variable.type_name else {
        return variable.type_description.type_string.clone();
    };

    if !type_name.name.is_empty() {
        return type_name.name.clone();
    }

    match &type_name.path_node {
        Some(path) if !path.name.is_empty() => path.name.clone(),
        _ if !type_name.type_description.type_string.is_empty() => {
            type_name.type_description.type_string.clone()
        }
        _ => variable.type_description.type_string.clone(),
    }
}

/// Parameter without its ABI type; struct members feed the ABI type table in this form.
pub fn lower_parameter(variable: &VariableDeclaration) -> Parameter {
    Parameter {
        id: variable.id,
        node_type: NodeType::VariableDeclaration,
        name: variable.name.clone(),
        type_name: type_name_of(variable),
        type_description: variable.type_description.clone(),
        storage_location: variable.storage_location,
        indexed: variable.indexed,
        src: variable.src,
        abi_type: String::new(),
    }
}

pub fn build_parameter(variable: &VariableDeclaration, types: &AbiTypes) -> Parameter {
    let mut parameter = lower_parameter(variable);
    parameter.abi_type = types.parameter_type(&parameter);
    parameter
}

pub fn build_parameters(list: &ParameterList, types: &AbiTypes) -> Vec<Parameter> {
    list.parameters
        .iter()
        .map(|variable| build_parameter(variable, types))
        .collect()
}

pub fn build_modifier(invocation: &ModifierInvocation) -> solir_core::ModifierInvocation {
    solir_core::ModifierInvocation {
        id: invocation.id,
        node_type: NodeType::ModifierInvocation,
        name: invocation.modifier_name.name.clone(),
        argument_types: invocation
            .arguments
            .iter()
            .filter_map(|argument| argument.type_description().cloned())
            .collect(),
    }
}

pub fn build_overrides(specifier: Option<&OverrideSpecifier>) -> Vec<Override> {
    let Some(specifier) = specifier else {
        return Vec::new();
    };

    specifier
        .overrides
        .iter()
        .map(|path| Override {
            id: path.id,
            node_type: NodeType::OverrideSpecifier,
            name: path.name.clone(),
            referenced_declaration_id: path.referenced_declaration,
            type_description: specifier.type_description.clone(),
        })
        .collect()
}

/// Shape shared by functions, constructors, fallbacks and receives.
pub fn build_callable_shape(function: &FunctionDefinition, types: &AbiTypes) -> CallableShape {
    CallableShape {
        id: function.id,
        node_type: NodeType::FunctionDefinition,
        kind: function.kind,
        src: function.src,
        implemented: function.implemented,
        visibility: function.visibility,
        state_mutability: function.state_mutability,
        is_virtual: function.is_virtual,
        modifiers: function.modifiers.iter().map(build_modifier).collect(),
        overrides: build_overrides(function.overrides.as_ref()),
        parameters: build_parameters(&function.parameters, types),
        return_parameters: build_parameters(&function.return_parameters, types),
    }
}

pub fn build_pragma(directive: &PragmaDirective) -> Pragma {
    Pragma {
        id: directive.id,
        node_type: NodeType::PragmaDirective,
        literals: directive.literals.clone(),
        text: directive.text.clone(),
        src: directive.src,
    }
}

pub fn build_import(directive: &ImportDirective) -> Import {
    Import {
        id: directive.id,
        node_type: NodeType::ImportDirective,
        absolute_path: directive.absolute_path.clone(),
        file: directive.file.clone(),
        unit_alias: directive.unit_alias.clone(),
        source_unit_id: directive.source_unit,
        src: directive.src,
    }
}

pub fn build_symbol(symbol: &ExportedSymbol) -> Symbol {
    Symbol {
        id: symbol.id,
        node_type: NodeType::Symbol,
        name: symbol.name.clone(),
        absolute_path: symbol.absolute_path.clone(),
    }
}

pub fn build_struct(definition: &StructDefinition, types: &AbiTypes) -> Struct {
    Struct {
        id: definition.id,
        node_type: NodeType::StructDefinition,
        name: definition.name.clone(),
        canonical_name: definition.canonical_name.clone(),
        visibility: definition.visibility,
        storage_location: definition.storage_location,
        members: definition
            .members
            .iter()
            .map(|member| build_parameter(member, types))
            .collect(),
        type_description: definition.type_description.clone(),
        src: definition.src,
    }
}

pub fn build_enum(definition: &EnumDefinition) -> Enum {
    Enum {
        id: definition.id,
        node_type: NodeType::EnumDefinition,
        name: definition.name.clone(),
        canonical_name: definition.canonical_name.clone(),
        members: definition
            .members
            .iter()
            .map(|member| EnumMember {
                id: member.id,
                node_type: NodeType::EnumValue,
                name: member.name.clone(),
            })
            .collect(),
        src: definition.src,
    }
}

pub fn build_event(definition: &EventDefinition, types: &AbiTypes) -> Event {
    Event {
        id: definition.id,
        node_type: NodeType::EventDefinition,
        name: definition.name.clone(),
        anonymous: definition.anonymous,
        parameters: build_parameters(&definition.parameters, types),
        src: definition.src,
    }
}

pub fn build_error(definition: &ErrorDefinition, types: &AbiTypes) -> Error {
    Error {
        id: definition.id,
        node_type: NodeType::ErrorDefinition,
        name: definition.name.clone(),
        parameters: build_parameters(&definition.parameters, types),
        type_description: definition.type_description.clone(),
        src: definition.src,
    }
}

pub fn build_state_variable(contract_id: NodeId, variable: &VariableDeclaration) -> StateVariable {
    let immutable = variable.mutability == Some(StateMutability::Immutable);
    let state_mutability = match variable.mutability {
        Some(mutability) => mutability,
        None if variable.constant => StateMutability::Constant,
        None => StateMutability::Mutable,
    };

    StateVariable {
        id: variable.id,
        contract_id,
        node_type: NodeType::VariableDeclaration,
        name: variable.name.clone(),
        visibility: variable.visibility,
        constant: variable.constant,
        immutable,
        storage_location: variable.storage_location,
        state_mutability,
        type_name: type_name_of(variable),
        type_description: variable.type_description.clone(),
        src: variable.src,
    }
}
