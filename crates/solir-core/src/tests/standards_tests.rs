use crate::standards::{
    builtin, confidence_check, ConfidenceLevel, ContractMatcher, EventSignature,
    FunctionSignature, StandardDescriptor, StandardKind, StandardsRegistry,
};
use pretty_assertions::assert_eq;

fn erc20_matcher() -> ContractMatcher {
    ContractMatcher {
        name: "Token".to_string(),
        functions: vec![
            FunctionSignature::new("totalSupply", &[], &["uint256"]),
            FunctionSignature::new("balanceOf", &["address"], &["uint256"]),
            FunctionSignature::new("transfer", &["address", "uint256"], &["bool"]),
            FunctionSignature::new(
                "transferFrom",
                &["address", "address", "uint256"],
                &["bool"],
            ),
            FunctionSignature::new("approve", &["address", "uint256"], &["bool"]),
            FunctionSignature::new("allowance", &["address", "address"], &["uint256"]),
        ],
        events: vec![
            EventSignature::new(
                "Transfer",
                &[("address", true), ("address", true), ("uint256", false)],
            ),
            EventSignature::new(
                "Approval",
                &[("address", true), ("address", true), ("uint256", false)],
            ),
        ],
    }
}

#[test]
fn test_full_erc20_match() {
    let (confidence, matched) = confidence_check(&builtin::erc20(), &erc20_matcher());

    assert!(matched);
    assert_eq!(confidence.level, ConfidenceLevel::High);
    assert_eq!(confidence.found_tokens, 30);
    assert_eq!(confidence.max_tokens, 30);
    assert_eq!(confidence.score, 1.0);
    assert!(confidence.functions.iter().all(|d| d.matched));
    assert!(confidence.events.iter().all(|d| d.matched));
}

#[test]
fn test_functions_without_events_is_medium() {
    let mut matcher = erc20_matcher();
    matcher.events.clear();

    let (confidence, matched) = confidence_check(&builtin::erc20(), &matcher);

    assert!(matched);
    assert_eq!(confidence.level, ConfidenceLevel::Medium);
    assert_eq!(confidence.found_tokens, 22);
    assert!(confidence.events.iter().all(|d| !d.matched));
}

#[test]
fn test_sparse_overlap_does_not_match() {
    let matcher = ContractMatcher {
        name: "Vault".to_string(),
        functions: vec![
            FunctionSignature::new("transfer", &["address", "uint256"], &["bool"]),
            FunctionSignature::new("balanceOf", &["address"], &["uint256"]),
        ],
        events: vec![],
    };

    let (confidence, matched) = confidence_check(&builtin::erc20(), &matcher);

    assert!(!matched);
    assert_eq!(confidence.level, ConfidenceLevel::None);
    assert_eq!(confidence.found_tokens, 7);
}

#[test]
fn test_arity_mismatch_only_credits_name() {
    let standard = StandardDescriptor::new(StandardKind::Erc165, "ERC-165")
        .function("supportsInterface", &["bytes4"], &["bool"]);
    let matcher = ContractMatcher {
        name: "Odd".to_string(),
        functions: vec![FunctionSignature::new(
            "supportsInterface",
            &["bytes4", "uint256"],
            &["bool"],
        )],
        events: vec![],
    };

    let (confidence, _) = confidence_check(&standard, &matcher);
    assert_eq!(confidence.found_tokens, 1);
    assert_eq!(confidence.max_tokens, 3);
}

#[test]
fn test_best_overload_is_credited() {
    let standard = StandardDescriptor::new(StandardKind::Custom("SAFE".into()), "Safe")
        .function("safeTransferFrom", &["address", "address", "uint256"], &[]);
    let matcher = ContractMatcher {
        name: "Nft".to_string(),
        functions: vec![
            FunctionSignature::new(
                "safeTransferFrom",
                &["address", "address", "uint256", "bytes"],
                &[],
            ),
            FunctionSignature::new("safeTransferFrom", &["address", "address", "uint256"], &[]),
        ],
        events: vec![],
    };

    let (confidence, matched) = confidence_check(&standard, &matcher);
    assert!(matched);
    assert_eq!(confidence.level, ConfidenceLevel::High);
}

#[test]
fn test_event_indexed_flag_must_match() {
    let mut matcher = erc20_matcher();
    matcher.events[0] = EventSignature::new(
        "Transfer",
        &[("address", true), ("address", true), ("uint256", true)],
    );

    let (confidence, matched) = confidence_check(&builtin::erc20(), &matcher);

    assert!(matched);
    assert_eq!(confidence.found_tokens, 29);
    assert_eq!(confidence.level, ConfidenceLevel::Medium);
    assert!(!confidence.events[0].matched);
    assert!(confidence.events[1].matched);
}

#[test]
fn test_empty_standard_never_matches() {
    let standard = StandardDescriptor::new(StandardKind::Custom("EMPTY".into()), "Empty");
    let (confidence, matched) = confidence_check(&standard, &erc20_matcher());
    assert!(!matched);
    assert_eq!(confidence.max_tokens, 0);
}

#[test]
fn test_confidence_levels_from_score() {
    assert_eq!(ConfidenceLevel::from_score(1.0), ConfidenceLevel::High);
    assert_eq!(ConfidenceLevel::from_score(0.99), ConfidenceLevel::Medium);
    assert_eq!(ConfidenceLevel::from_score(0.5), ConfidenceLevel::Medium);
    assert_eq!(ConfidenceLevel::from_score(0.25), ConfidenceLevel::Low);
    assert_eq!(ConfidenceLevel::from_score(0.1), ConfidenceLevel::None);
    assert!(ConfidenceLevel::High.is_maximum());
    assert!(!ConfidenceLevel::Medium.is_maximum());
}

#[test]
fn test_builtin_registry_order() {
    let registry = StandardsRegistry::builtin();
    let kinds: Vec<String> = registry.iter().map(|s| s.kind.to_string()).collect();

    assert_eq!(
        kinds,
        vec![
            "ERC20", "ERC721", "ERC1155", "ERC777", "ERC4626", "ERC2981", "ERC165", "ERC1820",
            "ERC1822", "OWNABLE",
        ]
    );
    assert!(registry.get(&StandardKind::Erc721).is_some());
    assert!(registry
        .get(&StandardKind::Custom("ERC9999".into()))
        .is_none());
}

#[test]
fn test_registry_rejects_duplicate_kinds() {
    let result = StandardsRegistry::new(vec![builtin::erc20(), builtin::erc721(), builtin::erc20()]);
    assert!(result.is_err());

    let registry = StandardsRegistry::new(vec![builtin::ownable(), builtin::erc20()]).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.iter().next().unwrap().kind, StandardKind::Ownable);
}

#[test]
fn test_standard_kind_wire_format() {
    assert_eq!(
        serde_json::to_string(&StandardKind::Erc1155).unwrap(),
        "\"ERC1155\""
    );
    assert_eq!(
        serde_json::from_str::<StandardKind>("\"OWNABLE\"").unwrap(),
        StandardKind::Ownable
    );
    assert_eq!(
        serde_json::from_str::<StandardKind>("\"GOVERNOR\"").unwrap(),
        StandardKind::Custom("GOVERNOR".to_string())
    );
}
