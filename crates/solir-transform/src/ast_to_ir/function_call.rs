use super::declarations::DeclarationTable;
use solir_ast::{Ast, FunctionDefinition};
use solir_core::{FunctionCall, NodeType};
use tracing::trace;

/// Classifies call sites as internal or external and attributes external
/// calls to a contract.
///
/// Two independent heuristics mark a call external:
/// - the callee resolves by name to a declaration whose type identifier
///   carries the contract marker;
/// - any argument is typed exactly as the `address` primitive, whether or not
///   the callee resolved.
///
/// Either one attributes the call to the contract that the enclosing callable
/// is scoped to. Without an enclosing callable the call can be external with
/// no attributable contract.
#[derive(Debug, Clone, Copy)]
pub struct FunctionCallResolver<'a> {
    ast: &'a Ast,
    declarations: DeclarationTable<'a>,
}

impl<'a> FunctionCallResolver<'a> {
    pub fn new(ast: &'a Ast) -> Self {
        Self {
            ast,
            declarations: DeclarationTable::new(ast),
        }
    }

    pub fn resolve(
        &self,
        call: &solir_ast::FunctionCall,
        function: Option<&FunctionDefinition>,
    ) -> FunctionCall {
        let mut lowered = FunctionCall {
            id: call.id,
            node_type: NodeType::FunctionCall,
            kind: call.kind,
            name: call.expression.simple_name().unwrap_or_default().to_string(),
            argument_types: call
                .arguments
                .iter()
                .map(|argument| argument.type_description().cloned().unwrap_or_default())
                .collect(),
            type_description: call.type_description.clone(),
            src: call.src,
            ..Default::default()
        };

        if let Some(callee) = call
            .expression
            .simple_name()
            .and_then(|name| self.declarations.lookup_function(name))
        {
            lowered.reference_statement_id = callee.id;

            if callee.type_description.is_contract() {
                lowered.external = true;
                self.attribute_external(&mut lowered, function);
                trace!(
                    call = lowered.id,
                    callee = callee.id,
                    "External call through contract-typed callee"
                );
            }
        } else {
            trace!(call = lowered.id, name = %lowered.name, "Callee not declared in any source unit");
        }

        let has_address_argument = call
            .arguments
            .iter()
            .filter_map(|argument| argument.type_description())
            .any(|description| description.is_address());

        if has_address_argument {
            lowered.external = true;
            self.attribute_external(&mut lowered, function);
            trace!(call = lowered.id, "External call through address argument");
        }

        lowered
    }

    fn attribute_external(&self, call: &mut FunctionCall, function: Option<&FunctionDefinition>) {
        let Some(function) = function else {
            return;
        };

        if let Some(contract) = self.ast.contract_by_id(function.scope) {
            call.external_contract_id = contract.id;
            call.external_contract_name = contract.name.clone();
        }
    }
}
