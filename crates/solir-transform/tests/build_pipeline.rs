use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use solir_core::standards::ConfidenceLevel;
use solir_core::{Platform, StandardKind, StandardsRegistry, ToSchema};
use solir_transform::{build_from_json, build_with_source, BuilderConfig};

fn type_description(type_name: &str) -> Value {
    json!({ "typeIdentifier": format!("t_{}", type_name), "typeString": type_name })
}

fn variable(id: i64, name: &str, type_name: &str, indexed: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "indexed": indexed,
        "typeName": { "id": id + 1, "nodeType": "ElementaryTypeName", "name": type_name, "typeDescriptions": type_description(type_name) },
        "typeDescriptions": type_description(type_name)
    })
}

fn parameters(id: i64, types: &[&str]) -> Value {
    let parameters: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(idx, ty)| variable(id + idx as i64 + 1, &format!("arg{}", idx), ty, false))
        .collect();
    json!({ "id": id, "parameters": parameters })
}

fn function(id: i64, name: &str, inputs: &[&str], outputs: &[&str], statements: Vec<Value>) -> Value {
    json!({
        "nodeType": "FunctionDefinition",
        "id": id,
        "name": name,
        "kind": "function",
        "scope": 100,
        "implemented": true,
        "visibility": "public",
        "stateMutability": if outputs.is_empty() { "nonpayable" } else { "view" },
        "parameters": parameters(id * 100 + 10, inputs),
        "returnParameters": parameters(id * 100 + 50, outputs),
        "body": { "id": id + 3000, "statements": statements },
        "typeDescriptions": { "typeIdentifier": "t_function_internal_view", "typeString": "function" }
    })
}

fn event(id: i64, name: &str, inputs: &[(&str, bool)]) -> Value {
    let parameters: Vec<Value> = inputs
        .iter()
        .enumerate()
        .map(|(idx, (ty, indexed))| variable(id * 100 + idx as i64 + 1, &format!("arg{}", idx), ty, *indexed))
        .collect();
    json!({
        "nodeType": "EventDefinition",
        "id": id,
        "name": name,
        "scope": 100,
        "parameters": { "id": id * 100, "parameters": parameters }
    })
}

fn transfer_call(id: i64) -> Value {
    json!({
        "nodeType": "ExpressionStatement",
        "id": id,
        "expression": {
            "nodeType": "FunctionCall",
            "id": id + 1,
            "kind": "functionCall",
            "expression": {
                "nodeType": "MemberAccess",
                "id": id + 2,
                "memberName": "safeTransfer",
                "expression": { "nodeType": "Identifier", "id": id + 3, "name": "reserve", "typeDescriptions": { "typeIdentifier": "t_contract$_Reserve_$200", "typeString": "contract Reserve" } }
            },
            "arguments": [
                { "nodeType": "Identifier", "id": id + 4, "name": "to", "typeDescriptions": { "typeIdentifier": "t_address", "typeString": "address" } },
                { "nodeType": "Identifier", "id": id + 5, "name": "value", "typeDescriptions": { "typeIdentifier": "t_uint256", "typeString": "uint256" } }
            ],
            "typeDescriptions": { "typeIdentifier": "t_tuple$__$", "typeString": "tuple()" }
        }
    })
}

fn token_ast(comments: Value) -> String {
    json!({
        "id": 1,
        "entrySourceUnit": 10,
        "comments": comments,
        "sourceUnits": [
            {
                "id": 10,
                "name": "Token",
                "license": "MIT",
                "absolutePath": "contracts/Token.sol",
                "pragmas": [{ "id": 11, "literals": ["solidity", "^", "0.8", ".20"], "text": "pragma solidity ^0.8.20;" }],
                "exportedSymbols": [{ "id": 100, "name": "Token", "absolutePath": "contracts/Token.sol" }],
                "imports": [{ "id": 12, "absolutePath": "contracts/Reserve.sol", "file": "./Reserve.sol", "sourceUnit": 20 }],
                "contract": {
                    "id": 100,
                    "name": "Token",
                    "contractKind": "contract",
                    "scope": 10,
                    "nodes": [
                        event(101, "Transfer", &[("address", true), ("address", true), ("uint256", false)]),
                        {
                            "nodeType": "VariableDeclaration",
                            "id": 102,
                            "name": "totalSupply",
                            "scope": 100,
                            "stateVariable": true,
                            "visibility": "public",
                            "typeName": { "id": 103, "nodeType": "ElementaryTypeName", "name": "uint256" },
                            "typeDescriptions": type_description("uint256")
                        },
                        function(110, "totalSupply", &[], &["uint256"], vec![]),
                        function(120, "balanceOf", &["address"], &["uint256"], vec![]),
                        function(130, "transfer", &["address", "uint256"], &["bool"], vec![transfer_call(5000)]),
                        function(140, "transferFrom", &["address", "address", "uint256"], &["bool"], vec![]),
                        event(150, "Approval", &[("address", true), ("address", true), ("uint256", false)]),
                        function(160, "approve", &["address", "uint256"], &["bool"], vec![]),
                        function(170, "allowance", &["address", "address"], &["uint256"], vec![])
                    ]
                }
            },
            {
                "id": 20,
                "name": "Reserve",
                "contract": {
                    "id": 200,
                    "name": "Reserve",
                    "contractKind": "library",
                    "scope": 20,
                    "nodes": [
                        {
                            "nodeType": "FunctionDefinition",
                            "id": 210,
                            "name": "safeTransfer",
                            "kind": "function",
                            "scope": 200,
                            "visibility": "internal",
                            "typeDescriptions": { "typeIdentifier": "t_function_internal_nonpayable$_t_contract$_Reserve_$200_$returns$__$", "typeString": "function (contract Reserve)" }
                        }
                    ]
                }
            }
        ]
    })
    .to_string()
}

#[test]
fn test_erc20_token_is_classified() {
    let registry = StandardsRegistry::builtin();
    let root = build_from_json(&token_ast(json!([])), &registry, BuilderConfig::default()).unwrap();

    assert_eq!(root.entry_contract_id, 10);
    assert_eq!(root.entry_contract_name, "Token");
    assert_eq!(root.contracts_count, 2);

    let token = root.entry_contract().unwrap();
    assert_eq!(token.standard_type, Some(StandardKind::Erc20));

    let erc20 = root.get_standard(&StandardKind::Erc20).unwrap();
    assert_eq!(erc20.contract_id, 100);
    assert_eq!(erc20.confidence.level, ConfidenceLevel::High);
    assert_eq!(erc20.confidence.found_tokens, erc20.confidence.max_tokens);
    assert_eq!(root.standards[0].kind(), &StandardKind::Erc20);

    let transfer = token.get_function("transfer").unwrap();
    assert_eq!(transfer.signature, "transfer(address,uint256)");
    assert_eq!(transfer.selector, "0xa9059cbb");
}

#[test]
fn test_order_is_preserved() {
    let registry = StandardsRegistry::builtin();
    let root = build_from_json(&token_ast(json!([])), &registry, BuilderConfig::default()).unwrap();
    let token = &root.contracts[0];

    let functions: Vec<&str> = token.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        functions,
        vec!["totalSupply", "balanceOf", "transfer", "transferFrom", "approve", "allowance"]
    );
    let events: Vec<&str> = token.events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(events, vec!["Transfer", "Approval"]);

    let transfer_event = &token.events[0];
    let indexed: Vec<bool> = transfer_event.parameters.iter().map(|p| p.indexed).collect();
    assert_eq!(indexed, vec![true, true, false]);

    assert_eq!(token.state_variables[0].name, "totalSupply");
    assert_eq!(token.state_variables[0].contract_id, 100);
    assert_eq!(token.pragmas[0].version().unwrap(), "^0.8.20");
    assert_eq!(token.imports[0].source_unit_id, 20);
    assert_eq!(token.license, "MIT");
    assert_eq!(root.contracts[1].name, "Reserve");
}

#[test]
fn test_cross_contract_call_is_attributed() {
    let registry = StandardsRegistry::empty();
    let root = build_from_json(&token_ast(json!([])), &registry, BuilderConfig::default()).unwrap();

    let transfer = root.contracts[0].get_function("transfer").unwrap();
    let call = transfer.body.function_calls().next().unwrap();
    assert_eq!(call.name, "safeTransfer");
    assert_eq!(call.reference_statement_id, 210);
    assert!(call.external);
    assert_eq!(call.external_contract_id, 100);
    assert_eq!(call.external_contract_name, "Token");
    assert_eq!(call.argument_types.len(), 2);
    assert!(root.contracts[0].has_external_calls());
}

#[test]
fn test_links_from_ast_comments() {
    let comments = json!([
        { "id": 0, "text": "// Follow us on https://twitter.com/ and https://t.me/unpackdev" },
        { "id": 0, "text": "// SPDX-License-Identifier: MIT" }
    ]);
    let registry = StandardsRegistry::builtin();
    let root = build_from_json(&token_ast(comments), &registry, BuilderConfig::default()).unwrap();

    assert_eq!(root.links.len(), 2);
    assert_eq!(root.links[0].platform, Some(Platform::TwitterX));
    assert_eq!(root.links[1].url, "https://t.me/unpackdev");
}

#[test]
fn test_links_from_solidity_source() {
    let source = "// SPDX-License-Identifier: MIT\n/// Docs: https://github.com/unpackdev/token\ncontract Token {}\n";
    let registry = StandardsRegistry::builtin();
    let root = build_with_source(&token_ast(json!([])), source, &registry, BuilderConfig::default())
        .unwrap();

    assert_eq!(root.links.len(), 1);
    assert_eq!(root.links[0].platform, Some(Platform::Github));
    assert!(root.links[0].social);
}

#[test]
fn test_projections_agree() {
    let registry = StandardsRegistry::builtin();
    let root = build_from_json(&token_ast(json!([])), &registry, BuilderConfig::default()).unwrap();

    let json = serde_json::to_string(&root).unwrap();
    let decoded: solir_core::RootSourceUnit = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.contracts, root.contracts);
    assert_eq!(decoded.links, root.links);

    let schema = serde_json::to_string(&root.to_schema()).unwrap();
    let message: solir_core::schema::ir_pb::Root = serde_json::from_str(&schema).unwrap();

    assert_eq!(message.entry_contract_id, decoded.entry_contract_id);
    assert_eq!(message.contracts_count as usize, decoded.contracts_count);
    assert_eq!(message.contracts.len(), decoded.contracts.len());
    assert_eq!(message.standards.len(), decoded.standards.len());
    for (projected, contract) in message.contracts.iter().zip(&decoded.contracts) {
        assert_eq!(projected.id, contract.id);
        assert_eq!(projected.name, contract.name);
        assert_eq!(projected.functions.len(), contract.functions.len());
        assert_eq!(projected.events.len(), contract.events.len());
    }
    assert_eq!(message.contracts[0].standard_type, "ERC20");
}

fn typed_variable(id: i64, name: &str, type_identifier: &str, type_string: &str, type_name: Value) -> Value {
    json!({
        "id": id,
        "name": name,
        "typeName": type_name,
        "typeDescriptions": { "typeIdentifier": type_identifier, "typeString": type_string }
    })
}

fn user_type(id: i64, name: &str, declaration: i64) -> Value {
    json!({
        "id": id,
        "nodeType": "UserDefinedTypeName",
        "pathNode": { "id": id + 1, "name": name, "referencedDeclaration": declaration }
    })
}

/// Exchange (entry) takes an `Order` struct and a `Price` value type declared
/// by a separate library unit.
fn exchange_ast() -> String {
    let order = typed_variable(
        501,
        "order",
        "t_struct$_Order_$710_calldata_ptr",
        "struct Book.Order",
        user_type(502, "Order", 710),
    );
    let orders = typed_variable(
        511,
        "orders",
        "t_array$_t_struct$_Order_$710_memory_ptr_$dyn_memory_ptr",
        "struct Book.Order[]",
        json!({ "id": 512, "nodeType": "ArrayTypeName", "typeDescriptions": { "typeIdentifier": "t_array$_t_struct$_Order_$710_storage_$dyn_storage_ptr", "typeString": "struct Book.Order[]" } }),
    );
    let limit = typed_variable(
        521,
        "limit",
        "t_userDefinedValueType$_Price_$720",
        "Book.Price",
        user_type(522, "Price", 720),
    );
    let tokens = typed_variable(
        531,
        "tokens",
        "t_array$_t_contract$_IERC20_$800_$dyn_calldata_ptr",
        "contract IERC20[]",
        json!({ "id": 532, "nodeType": "ArrayTypeName" }),
    );

    let callable = |id: i64, name: &str, inputs: Vec<Value>| {
        json!({
            "nodeType": "FunctionDefinition",
            "id": id,
            "name": name,
            "kind": "function",
            "scope": 400,
            "implemented": true,
            "visibility": "external",
            "parameters": { "id": id + 1, "parameters": inputs }
        })
    };

    json!({
        "entrySourceUnit": 30,
        "sourceUnits": [
            {
                "id": 30,
                "name": "Exchange",
                "src": "0:400:0",
                "contract": {
                    "id": 400,
                    "name": "Exchange",
                    "contractKind": "contract",
                    "scope": 30,
                    "nodes": [
                        callable(410, "fill", vec![order]),
                        callable(420, "settle", vec![orders, limit]),
                        callable(430, "sweep", vec![tokens]),
                        {
                            "nodeType": "EventDefinition",
                            "id": 440,
                            "name": "OrderFilled",
                            "scope": 400,
                            "parameters": { "id": 441, "parameters": [typed_variable(
                                442,
                                "order",
                                "t_struct$_Order_$710_memory_ptr",
                                "struct Book.Order",
                                user_type(443, "Order", 710),
                            )] }
                        }
                    ]
                }
            },
            {
                "id": 70,
                "name": "Book",
                "src": "0:200:1",
                "contract": {
                    "id": 700,
                    "name": "Book",
                    "contractKind": "library",
                    "scope": 70,
                    "nodes": [
                        {
                            "nodeType": "StructDefinition",
                            "id": 710,
                            "name": "Order",
                            "canonicalName": "Book.Order",
                            "scope": 700,
                            "members": [
                                variable(711, "amount", "uint256", false),
                                variable(713, "maker", "address", false)
                            ]
                        },
                        {
                            "nodeType": "UserDefinedValueTypeDefinition",
                            "id": 720,
                            "name": "Price",
                            "canonicalName": "Book.Price",
                            "underlyingType": { "id": 721, "nodeType": "ElementaryTypeName", "name": "uint128", "typeDescriptions": type_description("uint128") }
                        }
                    ]
                }
            }
        ]
    })
    .to_string()
}

#[test]
fn test_user_defined_parameter_types_use_abi_spelling() {
    let registry = StandardsRegistry::empty();
    let root = build_from_json(&exchange_ast(), &registry, BuilderConfig::default()).unwrap();
    let exchange = root.entry_contract().unwrap();

    let fill = exchange.get_function("fill").unwrap();
    assert_eq!(fill.signature, "fill((uint256,address))");
    assert_eq!(fill.selector, "0x1e59bc25");
    assert_eq!(fill.shape.parameters[0].type_name, "Order");

    let settle = exchange.get_function("settle").unwrap();
    assert_eq!(settle.signature, "settle((uint256,address)[],uint128)");
    assert_eq!(settle.selector, "0x069062e0");

    let sweep = exchange.get_function("sweep").unwrap();
    assert_eq!(sweep.signature, "sweep(address[])");
    assert_eq!(sweep.selector, "0x780469bb");

    assert_eq!(exchange.events[0].parameters[0].canonical_type(), "(uint256,address)");

    let book = &root.contracts[1];
    assert_eq!(book.structs[0].members[1].abi_type, "address");
    assert!(book.functions.is_empty());
}
