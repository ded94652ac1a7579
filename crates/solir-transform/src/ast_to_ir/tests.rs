use super::*;
use pretty_assertions::assert_eq;
use solir_ast::{
    AstRoot, Block, ContractDefinition, Declaration, Expression, ExpressionStatement,
    FunctionCall as CallExpression, FunctionDefinition, Identifier, MemberAccess, SourceUnit,
    Statement as AstStatement,
};
use solir_core::standards::StandardDescriptor;
use solir_core::{ContractKind, FunctionKind, StandardKind, TypeDescription};

const CONTRACT_CALLEE: &str = "t_function_external_nonpayable$_t_contract$_IERC20_$40";
const INTERNAL_CALLEE: &str = "t_function_internal_nonpayable$_t_uint256_$returns$__$";

fn ident(id: i64, name: &str, type_identifier: &str) -> Expression {
    Expression::Identifier(Identifier {
        id,
        name: name.to_string(),
        type_description: TypeDescription::new(type_identifier, ""),
        ..Default::default()
    })
}

fn member(id: i64, base: Expression, member_name: &str) -> Expression {
    Expression::MemberAccess(MemberAccess {
        id,
        expression: Box::new(base),
        member_name: member_name.to_string(),
        ..Default::default()
    })
}

fn call(id: i64, callee: Expression, arguments: Vec<Expression>) -> CallExpression {
    CallExpression {
        id,
        expression: Box::new(callee),
        arguments,
        ..Default::default()
    }
}

fn call_statement(call: CallExpression) -> AstStatement {
    AstStatement::ExpressionStatement(ExpressionStatement {
        id: call.id - 1,
        expression: Expression::FunctionCall(call),
    })
}

fn function(
    id: i64,
    scope: i64,
    name: &str,
    type_identifier: &str,
    statements: Vec<AstStatement>,
) -> FunctionDefinition {
    FunctionDefinition {
        id,
        name: name.to_string(),
        kind: FunctionKind::Function,
        scope,
        implemented: !statements.is_empty(),
        body: Some(Block {
            id: id + 1,
            statements,
            ..Default::default()
        }),
        type_description: TypeDescription::new(type_identifier, ""),
        ..Default::default()
    }
}

fn unit(id: i64, name: &str, contract_id: i64, functions: Vec<FunctionDefinition>) -> SourceUnit {
    SourceUnit {
        id,
        name: name.to_string(),
        contract: Some(ContractDefinition {
            id: contract_id,
            name: name.to_string(),
            scope: id,
            nodes: functions
                .into_iter()
                .map(Declaration::FunctionDefinition)
                .collect(),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn ast(units: Vec<SourceUnit>) -> Ast {
    let entry = units.first().map(|u| u.id).unwrap_or_default();
    Ast::new(AstRoot {
        entry_source_unit: entry,
        source_units: units,
        ..Default::default()
    })
    .unwrap()
}

/// Vault (entry) calls into an IERC20 interface declared by a second unit.
fn vault_ast(statements: Vec<AstStatement>) -> Ast {
    let vault = unit(1, "Vault", 10, vec![function(11, 10, "deposit", INTERNAL_CALLEE, statements)]);
    let token = unit(
        30,
        "IERC20",
        40,
        vec![function(41, 40, "transferFrom", CONTRACT_CALLEE, vec![])],
    );
    ast(vec![vault, token])
}

fn first_call(root: &RootSourceUnit) -> &solir_core::FunctionCall {
    root.contracts[0].functions[0]
        .body
        .function_calls()
        .next()
        .unwrap()
}

#[test]
fn test_contract_typed_callee_is_external() {
    let transfer = call(
        101,
        member(102, ident(103, "token", "t_contract$_IERC20_$40"), "transferFrom"),
        vec![ident(104, "amount", "t_uint256")],
    );
    let ast = vault_ast(vec![call_statement(transfer)]);
    let registry = StandardsRegistry::empty();
    let mut builder = Builder::new(&ast, &registry);
    let root = builder.build();

    let lowered = first_call(root);
    assert_eq!(lowered.name, "transferFrom");
    assert_eq!(lowered.reference_statement_id, 41);
    assert!(lowered.external);
    assert_eq!(lowered.external_contract_id, 10);
    assert_eq!(lowered.external_contract_name, "Vault");
    assert_eq!(lowered.argument_types[0].type_identifier, "t_uint256");
}

#[test]
fn test_external_without_enclosing_function() {
    let ast = vault_ast(vec![]);
    let resolver = FunctionCallResolver::new(&ast);
    let transfer = call(101, ident(102, "transferFrom", ""), vec![]);

    let lowered = resolver.resolve(&transfer, None);
    assert!(lowered.external);
    assert_eq!(lowered.reference_statement_id, 41);
    assert_eq!(lowered.external_contract_id, 0);
    assert_eq!(lowered.external_contract_name, "");
}

#[test]
fn test_address_argument_marks_external() {
    let send = call(
        101,
        ident(102, "sendValue", ""),
        vec![ident(103, "recipient", "t_address"), ident(104, "amount", "t_uint256")],
    );
    let ast = vault_ast(vec![call_statement(send)]);
    let registry = StandardsRegistry::empty();
    let mut builder = Builder::new(&ast, &registry);

    let lowered = first_call(builder.build());
    assert!(!lowered.is_resolved());
    assert!(lowered.external);
    assert_eq!(lowered.external_contract_id, 10);
}

#[test]
fn test_address_payable_is_not_address() {
    let ast = vault_ast(vec![]);
    let resolver = FunctionCallResolver::new(&ast);
    let send = call(101, ident(102, "sendValue", ""), vec![ident(103, "to", "t_address_payable")]);

    assert!(!resolver.resolve(&send, None).external);
}

#[test]
fn test_internal_and_builtin_calls() {
    let vault = unit(
        1,
        "Vault",
        10,
        vec![
            function(
                11,
                10,
                "deposit",
                INTERNAL_CALLEE,
                vec![
                    call_statement(call(101, ident(102, "require", ""), vec![ident(103, "ok", "t_bool")])),
                    call_statement(call(111, ident(112, "_credit", ""), vec![ident(113, "x", "t_uint256")])),
                ],
            ),
            function(20, 10, "_credit", INTERNAL_CALLEE, vec![]),
        ],
    );
    let ast = ast(vec![vault]);
    let registry = StandardsRegistry::empty();
    let mut builder = Builder::new(&ast, &registry);
    let root = builder.build();

    let calls: Vec<_> = root.contracts[0].functions[0].body.function_calls().collect();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].name, "require");
    assert!(!calls[0].is_resolved());
    assert!(!calls[0].external);
    assert_eq!(calls[1].reference_statement_id, 20);
    assert!(!calls[1].external);
}

#[test]
fn test_first_declaration_wins_across_units() {
    let first = unit(1, "Base", 10, vec![function(11, 10, "helper", INTERNAL_CALLEE, vec![])]);
    let second = unit(
        20,
        "Derived",
        30,
        vec![
            function(
                31,
                30,
                "run",
                INTERNAL_CALLEE,
                vec![call_statement(call(101, ident(102, "helper", ""), vec![]))],
            ),
            function(32, 30, "helper", INTERNAL_CALLEE, vec![]),
        ],
    );
    let ast = ast(vec![first, second]);

    assert_eq!(DeclarationTable::new(&ast).lookup_function("helper").unwrap().id, 11);
    assert!(DeclarationTable::new(&ast).lookup_function("assert").is_none());

    let registry = StandardsRegistry::empty();
    let mut builder = Builder::new(&ast, &registry);
    let root = builder.build();
    let run = root.contracts[1].get_function("run").unwrap();
    assert_eq!(run.body.function_calls().next().unwrap().reference_statement_id, 11);
}

#[test]
fn test_nested_blocks_are_flattened() {
    let nested = AstStatement::Block(Block {
        id: 200,
        statements: vec![
            call_statement(call(201, ident(202, "a", ""), vec![])),
            AstStatement::UncheckedBlock(Block {
                id: 210,
                statements: vec![call_statement(call(211, ident(212, "b", ""), vec![]))],
                ..Default::default()
            }),
        ],
        ..Default::default()
    });
    let ast = vault_ast(vec![
        call_statement(call(101, ident(102, "first", ""), vec![])),
        AstStatement::Other,
        nested,
        call_statement(call(301, ident(302, "last", ""), vec![])),
    ]);
    let registry = StandardsRegistry::empty();
    let mut builder = Builder::new(&ast, &registry);
    let root = builder.build();

    let body = &root.contracts[0].functions[0].body;
    let names: Vec<&str> = body.function_calls().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["first", "a", "b", "last"]);
    assert_eq!(body.id, 12);
}

#[test]
fn test_empty_ast_builds_empty_root() {
    let ast = Ast::empty();
    let registry = StandardsRegistry::builtin();
    let mut builder = Builder::new(&ast, &registry);
    let root = builder.build();

    assert_eq!(root.contracts_count, 0);
    assert!(root.contracts.is_empty());
    assert_eq!(root.entry_contract_id, 0);
    assert!(root.standards.is_empty());
    assert!(root.links.is_empty());
}

#[test]
fn test_units_without_contract_are_skipped() {
    let mut units = vec![unit(1, "Vault", 10, vec![])];
    units.push(SourceUnit {
        id: 2,
        name: "Constants".to_string(),
        ..Default::default()
    });
    units.push(unit(3, "Token", 30, vec![]));
    let ast = ast(units);
    let registry = StandardsRegistry::empty();
    let mut builder = Builder::new(&ast, &registry);
    let root = builder.build();

    let names: Vec<&str> = root.contracts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Vault", "Token"]);
    assert_eq!(root.contracts_count, 2);
    assert_eq!(root.entry_contract_id, 1);
    assert_eq!(root.entry_contract_name, "Vault");
}

#[test]
fn test_special_callables() {
    let mut constructor = function(50, 10, "", "", vec![]);
    constructor.kind = FunctionKind::Constructor;
    let mut receive = function(51, 10, "", "", vec![]);
    receive.kind = FunctionKind::Receive;
    let mut second_constructor = function(52, 10, "", "", vec![]);
    second_constructor.kind = FunctionKind::Constructor;

    let ast = ast(vec![unit(
        1,
        "Vault",
        10,
        vec![constructor, receive, second_constructor],
    )]);
    let registry = StandardsRegistry::empty();
    let mut builder = Builder::new(&ast, &registry);
    let contract = &builder.build().contracts[0];

    assert_eq!(contract.constructor.as_ref().unwrap().shape.id, 50);
    assert_eq!(contract.receive.as_ref().unwrap().shape.id, 51);
    assert!(contract.fallback.is_none());
    assert!(contract.functions.is_empty());
    assert_eq!(contract.kind, ContractKind::Contract);
}

fn named(kind: &str, function_name: &str) -> StandardDescriptor {
    StandardDescriptor::new(StandardKind::Custom(kind.to_string()), kind)
        .function(function_name, &[], &["uint256"])
}

fn precedence_registry() -> StandardsRegistry {
    StandardsRegistry::new(vec![
        named("A", "missing"),
        named("B", "deposit"),
        named("C", "deposit"),
    ])
    .unwrap()
}

fn deposit_ast() -> Ast {
    let mut deposit = function(11, 10, "deposit", INTERNAL_CALLEE, vec![]);
    deposit.return_parameters.parameters.push(solir_ast::VariableDeclaration {
        id: 15,
        type_name: Some(solir_ast::TypeName {
            name: "uint256".to_string(),
            ..Default::default()
        }),
        type_description: TypeDescription::new("t_uint256", "uint256"),
        ..Default::default()
    });
    ast(vec![unit(1, "Vault", 10, vec![deposit])])
}

#[test]
fn test_first_maximum_match_classifies() {
    let ast = deposit_ast();
    let registry = precedence_registry();
    let mut builder = Builder::new(&ast, &registry);
    let root = builder.build();

    let kinds: Vec<&str> = root.standards.iter().map(|s| s.kind().as_str()).collect();
    assert_eq!(kinds, vec!["B", "C"]);
    assert_eq!(
        root.contracts[0].standard_type,
        Some(StandardKind::Custom("B".to_string()))
    );
    assert!(root.standards.iter().all(|s| s.confidence.level.is_maximum()));
    assert_eq!(root.standards[0].contract_id, 10);
}

#[test]
fn test_standards_pass_is_idempotent() {
    let ast = deposit_ast();
    let registry = precedence_registry();
    let mut builder = Builder::new(&ast, &registry);
    let mut root = builder.build().clone();

    process_standards(&mut root, &registry);
    process_standards(&mut root, &registry);

    assert_eq!(root.standards.len(), 2);
    assert_eq!(
        root.contracts[0].standard_type,
        Some(StandardKind::Custom("B".to_string()))
    );
}

#[test]
fn test_rebuild_starts_fresh() {
    let ast = deposit_ast();
    let registry = precedence_registry();
    let mut builder = Builder::new(&ast, &registry);

    let first = builder.build().clone();
    let second = builder.build().clone();
    assert_eq!(first, second);
    assert_eq!(builder.root().unwrap().standards.len(), 2);
}

#[test]
fn test_structural_only_config() {
    let ast = deposit_ast();
    let registry = precedence_registry();
    let mut builder = Builder::with_config(&ast, &registry, BuilderConfig::structural_only());
    let root = builder.build();

    assert!(root.standards.is_empty());
    assert!(root.contracts[0].standard_type.is_none());
}

#[test]
fn test_upstream_errors_rejected_unless_allowed() {
    let root = AstRoot {
        errors: vec![solir_ast::AstIssue {
            message: "Undeclared identifier".to_string(),
            ..Default::default()
        }],
        ..Default::default()
    };
    let ast = Ast::new(root).unwrap();
    let registry = StandardsRegistry::builtin();

    let err = build_from_ast(&ast, &registry, BuilderConfig::default()).unwrap_err();
    assert!(err.to_string().contains("Undeclared identifier"));

    let config = BuilderConfig {
        allow_upstream_errors: true,
        ..Default::default()
    };
    let built = build_from_ast(&ast, &registry, config).unwrap();
    assert_eq!(built.contracts_count, 0);
}
