use super::errors::TransformError;
use solir_ast::Comment;
use solir_core::SourceSpan;
use tree_sitter::{Language, Node, Parser};

/// Collects every comment in a Solidity source text, in source order.
///
/// Used when the upstream AST was produced without comments. The grammar
/// recovers from syntax errors, so a partially broken file still yields the
/// comments that could be located.
pub fn collect_comments(source: &str) -> Result<Vec<Comment>, TransformError> {
    let mut parser = Parser::new();
    let language: Language = tree_sitter_solidity::LANGUAGE.into();
    parser.set_language(&language)?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| TransformError::CommentParse("parser returned no tree".to_string()))?;

    let mut comments = Vec::new();
    collect_from_node(tree.root_node(), source, &mut comments)?;
    Ok(comments)
}

fn collect_from_node(
    node: Node,
    source: &str,
    comments: &mut Vec<Comment>,
) -> Result<(), TransformError> {
    if node.kind() == "comment" {
        let text = node
            .utf8_text(source.as_bytes())
            .map_err(|e| TransformError::CommentParse(e.to_string()))?;
        let start = node.start_position();

        comments.push(Comment {
            id: 0,
            text: text.to_string(),
            src: SourceSpan::new(
                start.row as u32 + 1,
                start.column as u32 + 1,
                node.start_byte() as u32,
                (node.end_byte() - node.start_byte()) as u32,
            ),
        });
        return Ok(());
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_from_node(child, source, comments)?;
    }
    Ok(())
}
