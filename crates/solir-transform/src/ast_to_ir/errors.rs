use solir_ast::{AstError, AstIssue};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("AST reports {} upstream error(s): {}", .0.len(), summarize(.0))]
    UpstreamErrors(Vec<AstIssue>),

    #[error("AST error: {0}")]
    Ast(#[from] AstError),

    #[error("Comment parse error: {0}")]
    CommentParse(String),

    #[error("Failed to set language: {0}")]
    Language(#[from] tree_sitter::LanguageError),
}

fn summarize(issues: &[AstIssue]) -> String {
    issues
        .iter()
        .map(|issue| match issue.src.line {
            0 => issue.message.clone(),
            line => format!("line {}: {}", line, issue.message),
        })
        .collect::<Vec<_>>()
        .join("; ")
}
