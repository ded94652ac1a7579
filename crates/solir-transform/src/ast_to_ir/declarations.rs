use super::nodes::lower_parameter;
use solir_ast::{Ast, FunctionDefinition};
use solir_core::abi::elementary_type;
use solir_core::{AbiTypes, FunctionKind};

/// By-name lookup of function declarations across every source unit.
///
/// The first function with a matching name wins, in source-unit order and then
/// declaration order. Lookups are not scoped to a contract and do not consider
/// overloads, so a name declared by two contracts always resolves to the one
/// that appears first. Nothing is cached; each lookup rescans the tree.
#[derive(Debug, Clone, Copy)]
pub struct DeclarationTable<'a> {
    ast: &'a Ast,
}

impl<'a> DeclarationTable<'a> {
    pub fn new(ast: &'a Ast) -> Self {
        Self { ast }
    }

    pub fn lookup_function(&self, name: &str) -> Option<&'a FunctionDefinition> {
        self.ast
            .source_units()
            .iter()
            .filter_map(|unit| unit.contract.as_ref())
            .flat_map(|contract| contract.functions())
            .find(|function| function.kind == FunctionKind::Function && function.name == name)
    }
}

/// Struct members and value-type underlying types declared by every contract,
/// so parameters of types declared in another unit still get their ABI spelling.
pub fn abi_types(ast: &Ast) -> AbiTypes {
    let mut types = AbiTypes::new();

    for contract in ast.source_units().iter().filter_map(|unit| unit.contract.as_ref()) {
        for definition in contract.structs() {
            types.add_struct(
                definition.id,
                definition.members.iter().map(lower_parameter).collect(),
            );
        }
        for definition in contract.value_types() {
            let underlying = &definition.underlying_type;
            let spelled = types
                .resolve(&underlying.type_description.type_identifier)
                .unwrap_or_else(|| elementary_type(&underlying.name));
            types.add_value_type(definition.id, spelled);
        }
    }

    types
}
