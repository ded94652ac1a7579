use super::function_call::FunctionCallResolver;
use solir_ast::{FunctionDefinition, Statement as AstStatement};
use solir_core::{Body, NodeType, Statement};

/// Lowers a callable's body to its call statements, in source order.
/// Nested and unchecked blocks only group statements and are flattened.
pub fn build_body(resolver: &FunctionCallResolver<'_>, function: &FunctionDefinition) -> Body {
    let Some(block) = &function.body else {
        return Body::default();
    };

    let mut statements = Vec::new();
    collect_statements(resolver, function, &block.statements, &mut statements);

    Body {
        id: block.id,
        node_type: NodeType::Block,
        src: block.src,
        statements,
    }
}

fn collect_statements(
    resolver: &FunctionCallResolver<'_>,
    function: &FunctionDefinition,
    statements: &[AstStatement],
    lowered: &mut Vec<Statement>,
) {
    for statement in statements {
        match statement {
            AstStatement::ExpressionStatement(statement) => {
                if let Some(call) = statement.expression.as_function_call() {
                    lowered.push(Statement::FunctionCall(resolver.resolve(call, Some(function))));
                }
            }
            AstStatement::Block(block) | AstStatement::UncheckedBlock(block) => {
                collect_statements(resolver, function, &block.statements, lowered);
            }
            AstStatement::EmitStatement(_)
            | AstStatement::Return(_)
            | AstStatement::VariableDeclarationStatement(_)
            | AstStatement::Other => {}
        }
    }
}
