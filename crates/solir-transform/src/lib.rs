/*! Lower Solidity ASTs into solir IR.
 *
 * A parsed Solidity tree says what each contract declares, but not which calls cross into other
 * contracts or which token standard a contract implements. This crate builds the IR tree from the
 * AST, classifies call sites as it lowers function bodies, and scores the entry contract against a
 * registry of interface standards.
 */

pub mod ast_to_ir;

pub use ast_to_ir::{
    build_from_ast, build_from_json, build_with_source, collect_comments, extract_links, Builder,
    BuilderConfig, TransformError,
};
