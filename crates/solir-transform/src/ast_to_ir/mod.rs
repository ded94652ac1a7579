/*! Lower a Solidity AST into solir IR.
 *
 * The upstream parser already resolved scopes and types; what it does not say is which calls leave
 * the contract, or which interface standard a contract implements. The builder lowers every source
 * unit into a Contract, classifies each call site while lowering function bodies, and then runs two
 * finishing passes over the completed tree: standards matching and link extraction from comments.
 */

mod body;
mod comments;
mod config;
mod contract;
mod declarations;
mod errors;
mod function_call;
mod links;
mod nodes;
mod standards;

use anyhow::{anyhow, Result};
use solir_ast::Ast;
use solir_core::{RootSourceUnit, StandardsRegistry};
use tracing::debug;

pub use body::build_body;
pub use comments::collect_comments;
pub use config::BuilderConfig;
pub use contract::ContractBuilder;
pub use declarations::{abi_types, DeclarationTable};
pub use errors::TransformError;
pub use function_call::FunctionCallResolver;
pub use links::{extract_links, process_links};
pub use nodes::type_name_of;
pub use standards::{contract_matcher, process_standards};

/// Builds the IR tree for one AST.
///
/// Each call to [`Builder::build`] starts from a fresh root; the previous
/// root is replaced only once the new tree and its finishing passes are done.
pub struct Builder<'a> {
    ast: &'a Ast,
    registry: &'a StandardsRegistry,
    config: BuilderConfig,
    root: Option<RootSourceUnit>,
}

impl<'a> Builder<'a> {
    pub fn new(ast: &'a Ast, registry: &'a StandardsRegistry) -> Self {
        Self::with_config(ast, registry, BuilderConfig::default())
    }

    pub fn with_config(ast: &'a Ast, registry: &'a StandardsRegistry, config: BuilderConfig) -> Self {
        Self {
            ast,
            registry,
            config,
            root: None,
        }
    }

    pub fn ast(&self) -> &'a Ast {
        self.ast
    }

    pub fn registry(&self) -> &'a StandardsRegistry {
        self.registry
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn build(&mut self) -> &RootSourceUnit {
        let mut root = self.build_root();

        if self.config.process_standards {
            process_standards(&mut root, self.registry);
        }
        if self.config.process_links {
            process_links(&mut root, self.ast.comments());
        }

        self.root.insert(root)
    }

    /// Last published root, if any.
    pub fn root(&self) -> Option<&RootSourceUnit> {
        self.root.as_ref()
    }

    pub fn into_root(self) -> Option<RootSourceUnit> {
        self.root
    }

    fn build_root(&self) -> RootSourceUnit {
        let mut root = match self.ast.entry_source_unit() {
            Some(entry) => RootSourceUnit::new(entry.id, entry.name.clone()),
            None => RootSourceUnit::default(),
        };

        let contracts =
            ContractBuilder::new(FunctionCallResolver::new(self.ast), abi_types(self.ast));
        for unit in self.ast.source_units() {
            match contracts.build(unit) {
                Some(contract) => root.add_contract(contract),
                None => debug!(source_unit = unit.id, name = %unit.name, "Source unit declares no contract"),
            }
        }

        debug!(
            entry = %root.entry_contract_name,
            contracts = root.contracts_count,
            "Built root"
        );
        root
    }
}

/// Builds the IR for `ast`, refusing input the upstream stage flagged as
/// broken unless the configuration allows it.
pub fn build_from_ast(
    ast: &Ast,
    registry: &StandardsRegistry,
    config: BuilderConfig,
) -> Result<RootSourceUnit> {
    if ast.has_errors() && !config.allow_upstream_errors {
        return Err(TransformError::UpstreamErrors(ast.errors().to_vec()).into());
    }

    let mut builder = Builder::with_config(ast, registry, config);
    builder.build();
    builder
        .into_root()
        .ok_or_else(|| anyhow!("Builder finished without a root"))
}

pub fn build_from_json(
    json: &str,
    registry: &StandardsRegistry,
    config: BuilderConfig,
) -> Result<RootSourceUnit> {
    let ast = Ast::from_json(json).map_err(TransformError::from)?;
    build_from_ast(&ast, registry, config)
}

/// Like [`build_from_json`], taking comments from the Solidity `source` when
/// the AST carries none.
pub fn build_with_source(
    json: &str,
    source: &str,
    registry: &StandardsRegistry,
    config: BuilderConfig,
) -> Result<RootSourceUnit> {
    let mut ast = Ast::from_json(json).map_err(TransformError::from)?;
    if ast.comments().is_empty() {
        ast = ast.with_comments(collect_comments(source)?);
    }
    build_from_ast(&ast, registry, config)
}

#[cfg(test)]
mod tests;
