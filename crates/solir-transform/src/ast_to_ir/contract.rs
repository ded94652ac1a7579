use super::body::build_body;
use super::function_call::FunctionCallResolver;
use super::nodes::{
    build_callable_shape, build_enum, build_error, build_event, build_import, build_pragma,
    build_state_variable, build_struct, build_symbol,
};
use solir_ast::{Declaration, FunctionDefinition, SourceUnit};
use solir_core::{
    AbiTypes, Constructor, Contract, Fallback, Function, FunctionKind, Language, NodeType, Receive,
};
use tracing::debug;

/// Assembles one Contract per source unit.
pub struct ContractBuilder<'a> {
    resolver: FunctionCallResolver<'a>,
    types: AbiTypes,
}

impl<'a> ContractBuilder<'a> {
    pub fn new(resolver: FunctionCallResolver<'a>, types: AbiTypes) -> Self {
        Self { resolver, types }
    }

    /// `None` when the unit declares no contract, interface or library.
    pub fn build(&self, unit: &SourceUnit) -> Option<Contract> {
        let definition = unit.contract.as_ref()?;

        let mut contract = Contract {
            id: definition.id,
            node_type: NodeType::ContractDefinition,
            kind: definition.kind,
            source_unit_id: unit.id,
            name: definition.name.clone(),
            license: unit.license.clone(),
            language: Language::Solidity,
            absolute_path: unit.absolute_path.clone(),
            src: definition.src,
            symbols: unit.exported_symbols.iter().map(build_symbol).collect(),
            imports: unit.imports.iter().map(build_import).collect(),
            pragmas: unit.pragmas.iter().map(build_pragma).collect(),
            ..Default::default()
        };

        for declaration in &definition.nodes {
            match declaration {
                Declaration::FunctionDefinition(function) => {
                    self.add_callable(&mut contract, function);
                }
                Declaration::VariableDeclaration(variable) => contract
                    .state_variables
                    .push(build_state_variable(definition.id, variable)),
                Declaration::StructDefinition(s) => {
                    contract.structs.push(build_struct(s, &self.types))
                }
                Declaration::EnumDefinition(e) => contract.enums.push(build_enum(e)),
                Declaration::EventDefinition(e) => {
                    contract.events.push(build_event(e, &self.types))
                }
                Declaration::ErrorDefinition(e) => {
                    contract.errors.push(build_error(e, &self.types))
                }
                Declaration::UserDefinedValueTypeDefinition(_) | Declaration::Other => {}
            }
        }

        debug!(
            contract = %contract.name,
            kind = contract.kind.as_str(),
            functions = contract.functions.len(),
            state_variables = contract.state_variables.len(),
            events = contract.events.len(),
            "Built contract"
        );

        Some(contract)
    }

    fn add_callable(&self, contract: &mut Contract, function: &FunctionDefinition) {
        let shape = build_callable_shape(function, &self.types);

        match function.kind {
            FunctionKind::Function => {
                let mut lowered = Function::new(function.name.clone(), shape);
                lowered.referenced_declaration_id = function.id;
                lowered.body = build_body(&self.resolver, function);
                contract.functions.push(lowered);
            }
            FunctionKind::Constructor if contract.constructor.is_none() => {
                contract.constructor = Some(Constructor { shape });
            }
            FunctionKind::Fallback if contract.fallback.is_none() => {
                contract.fallback = Some(Fallback { shape });
            }
            FunctionKind::Receive if contract.receive.is_none() => {
                contract.receive = Some(Receive { shape });
            }
            kind => {
                debug!(
                    contract = %contract.name,
                    id = function.id,
                    ?kind,
                    "Ignoring second special callable"
                );
            }
        }
    }
}
