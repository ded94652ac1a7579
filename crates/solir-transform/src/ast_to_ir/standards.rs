use solir_core::standards::{ContractMatcher, EventInput, EventSignature, FunctionSignature};
use solir_core::{Contract, RootSourceUnit, Standard, StandardKind, StandardsRegistry};
use tracing::{debug, trace};

/// Flattened signature view of a contract, in declaration order.
pub fn contract_matcher(contract: &Contract) -> ContractMatcher {
    ContractMatcher {
        name: contract.name.clone(),
        functions: contract
            .functions
            .iter()
            .map(|function| FunctionSignature {
                name: function.name.clone(),
                inputs: function.input_types(),
                outputs: function.output_types(),
            })
            .collect(),
        events: contract
            .events
            .iter()
            .map(|event| EventSignature {
                name: event.name.clone(),
                inputs: event
                    .parameters
                    .iter()
                    .map(|parameter| EventInput {
                        type_name: parameter.canonical_type(),
                        indexed: parameter.indexed,
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Scores the entry contract against every registered standard.
///
/// Standards already recorded on the root are skipped, so repeated passes add
/// nothing. The first maximum-confidence match in registry order classifies
/// the contract; later maximum matches are recorded but do not reclassify it.
pub fn process_standards(root: &mut RootSourceUnit, registry: &StandardsRegistry) {
    let Some(contract) = root.entry_contract() else {
        debug!("No entry contract, skipping standards");
        return;
    };

    let matcher = contract_matcher(contract);
    let contract_id = contract.id;
    let mut classification: Option<StandardKind> = None;
    let mut found = Vec::new();

    for standard in registry.iter() {
        if root.has_standard(&standard.kind) {
            trace!(standard = %standard.kind, "Standard already recorded");
            continue;
        }

        let (confidence, matched) = registry.confidence_check(standard, &matcher);
        trace!(
            standard = %standard.kind,
            found = confidence.found_tokens,
            max = confidence.max_tokens,
            level = ?confidence.level,
            "Confidence check"
        );
        if !matched {
            continue;
        }

        if classification.is_none() && confidence.level.is_maximum() {
            classification = Some(standard.kind.clone());
        }

        found.push(Standard {
            contract_id,
            contract_name: matcher.name.clone(),
            confidence,
            standard: standard.clone(),
        });
    }

    debug!(
        contract = %matcher.name,
        matched = found.len(),
        classification = ?classification,
        "Processed standards"
    );

    root.standards.extend(found);

    if let Some(kind) = classification {
        if let Some(contract) = root.entry_contract_mut() {
            contract.standard_type = Some(kind);
        }
    }
}
