/*! Unified interface for Solidity IR building.
 *
 * Single import for the whole pipeline: loading a compiler-style AST, lowering it into IR with call
 * classification and standards detection, and rendering the result. Batteries-included entry point
 * for contract analysis workflows.
 */

pub use solir_ast as ast;
pub use solir_core as core;
pub use solir_emit as emit;
pub use solir_transform as transform;

pub use solir_ast::Ast;

pub use solir_core::{
    Contract, Function, FunctionCall, Link, Platform, RootSourceUnit, Standard, StandardKind,
    StandardsRegistry,
};

pub use solir_emit::{render, EmitterConfig, IrEmitter, OutputFormat};

pub use solir_transform::{build_from_ast, build_from_json, Builder, BuilderConfig};
