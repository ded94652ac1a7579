use crate::body::{Body, FunctionCall, Statement};
use crate::contract::Contract;
use crate::function::{CallableShape, Function};
use crate::link::{Link, Platform};
use crate::root::{RootSourceUnit, Standard};
use crate::schema::{ir_pb, ToSchema};
use crate::standards::{builtin, Confidence, ConfidenceLevel, StandardKind};
use crate::types::{CallKind, Visibility};
use pretty_assertions::assert_eq;

fn sample_root() -> RootSourceUnit {
    let mut root = RootSourceUnit::new(100, "Token");

    let mut contract = Contract::new(101, "Token");
    contract.source_unit_id = 100;
    contract.standard_type = Some(StandardKind::Erc20);

    let mut function = Function::new(
        "transfer",
        CallableShape {
            id: 102,
            visibility: Visibility::External,
            ..Default::default()
        },
    );
    function.body = Body {
        id: 103,
        statements: vec![Statement::FunctionCall(FunctionCall {
            id: 104,
            kind: CallKind::FunctionCall,
            name: "_transfer".to_string(),
            reference_statement_id: 105,
            ..Default::default()
        })],
        ..Default::default()
    };
    contract.functions.push(function);
    root.add_contract(contract);

    root.standards.push(Standard {
        contract_id: 101,
        contract_name: "Token".to_string(),
        confidence: Confidence {
            level: ConfidenceLevel::High,
            score: 1.0,
            found_tokens: 30,
            max_tokens: 30,
            ..Default::default()
        },
        standard: builtin::erc20(),
    });
    root.links.push(Link {
        url: "https://t.me/token".to_string(),
        social: true,
        platform: Some(Platform::Telegram),
    });
    root
}

#[test]
fn test_schema_projection_carries_same_tree() {
    let root = sample_root();
    let message = root.to_schema();

    assert_eq!(message.entry_contract_id, root.entry_contract_id);
    assert_eq!(message.entry_contract_name, root.entry_contract_name);
    assert_eq!(message.contracts_count, 1);
    assert_eq!(message.contracts[0].standard_type, "ERC20");
    assert_eq!(message.contracts[0].functions[0].callable.visibility, 2);

    let call = message.contracts[0].functions[0].body.statements[0]
        .function_call
        .as_ref()
        .unwrap();
    assert_eq!(call.id, 104);
    assert_eq!(call.reference_statement_id, 105);
    assert_eq!(message.standards[0].confidence.level, 3);
    assert_eq!(message.links[0].platform, "telegram");
}

#[test]
fn test_both_projections_round_trip() {
    let root = sample_root();

    let json = serde_json::to_string(&root).unwrap();
    let decoded: RootSourceUnit = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, root);

    let schema_json = serde_json::to_string(&root.to_schema()).unwrap();
    let decoded_schema: ir_pb::Root = serde_json::from_str(&schema_json).unwrap();
    assert_eq!(decoded_schema, root.to_schema());

    assert_eq!(decoded_schema.entry_contract_id, decoded.entry_contract_id);
    assert_eq!(decoded_schema.contracts_count as usize, decoded.contracts_count);
    for (message, contract) in decoded_schema.contracts.iter().zip(&decoded.contracts) {
        assert_eq!(message.id, contract.id);
        assert_eq!(message.name, contract.name);
        assert_eq!(message.functions.len(), contract.functions.len());
    }
}

#[test]
fn test_absent_link_platform_is_empty_string() {
    let link = Link {
        url: "https://example.org".to_string(),
        social: false,
        platform: None,
    };
    assert_eq!(link.to_schema().platform, "");
}
