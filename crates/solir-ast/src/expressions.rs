use serde::{Deserialize, Serialize};
use solir_core::{CallKind, NodeId, SourceSpan, TypeDescription};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Block {
    pub id: NodeId,
    pub src: SourceSpan,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType")]
pub enum Statement {
    ExpressionStatement(ExpressionStatement),
    Block(Block),
    UncheckedBlock(Block),
    EmitStatement(EmitStatement),
    Return(ReturnStatement),
    VariableDeclarationStatement(VariableDeclarationStatement),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpressionStatement {
    pub id: NodeId,
    pub expression: Expression,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmitStatement {
    pub id: NodeId,
    pub event_call: Expression,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReturnStatement {
    pub id: NodeId,
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariableDeclarationStatement {
    pub id: NodeId,
    pub initial_value: Option<Expression>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType")]
pub enum Expression {
    Identifier(Identifier),
    MemberAccess(MemberAccess),
    FunctionCall(FunctionCall),
    Literal(Literal),
    BinaryOperation(Operation),
    UnaryOperation(Operation),
    Assignment(Operation),
    IndexAccess(Operation),
    Conditional(Operation),
    TupleExpression(Operation),
    ElementaryTypeNameExpression(Operation),
    NewExpression(Operation),
    FunctionCallOptions(Operation),
    #[default]
    #[serde(other)]
    Unknown,
}

impl Expression {
    pub fn id(&self) -> NodeId {
        match self {
            Expression::Identifier(e) => e.id,
            Expression::MemberAccess(e) => e.id,
            Expression::FunctionCall(e) => e.id,
            Expression::Literal(e) => e.id,
            Expression::BinaryOperation(e)
            | Expression::UnaryOperation(e)
            | Expression::Assignment(e)
            | Expression::IndexAccess(e)
            | Expression::Conditional(e)
            | Expression::TupleExpression(e)
            | Expression::ElementaryTypeNameExpression(e)
            | Expression::NewExpression(e)
            | Expression::FunctionCallOptions(e) => e.id,
            Expression::Unknown => 0,
        }
    }

    pub fn type_description(&self) -> Option<&TypeDescription> {
        match self {
            Expression::Identifier(e) => Some(&e.type_description),
            Expression::MemberAccess(e) => Some(&e.type_description),
            Expression::FunctionCall(e) => Some(&e.type_description),
            Expression::Literal(e) => Some(&e.type_description),
            Expression::BinaryOperation(e)
            | Expression::UnaryOperation(e)
            | Expression::Assignment(e)
            | Expression::IndexAccess(e)
            | Expression::Conditional(e)
            | Expression::TupleExpression(e)
            | Expression::ElementaryTypeNameExpression(e)
            | Expression::NewExpression(e)
            | Expression::FunctionCallOptions(e) => Some(&e.type_description),
            Expression::Unknown => None,
        }
    }

    /// Plain name of the expression: an identifier's name or the member name
    /// of a member access.
    pub fn simple_name(&self) -> Option<&str> {
        match self {
            Expression::Identifier(e) if !e.name.is_empty() => Some(&e.name),
            Expression::MemberAccess(e) if !e.member_name.is_empty() => Some(&e.member_name),
            _ => None,
        }
    }

    pub fn as_function_call(&self) -> Option<&FunctionCall> {
        match self {
            Expression::FunctionCall(call) => Some(call),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Identifier {
    pub id: NodeId,
    pub name: String,
    pub referenced_declaration: NodeId,
    pub src: SourceSpan,
    #[serde(rename = "typeDescriptions")]
    pub type_description: TypeDescription,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MemberAccess {
    pub id: NodeId,
    pub expression: Box<Expression>,
    pub member_name: String,
    pub referenced_declaration: NodeId,
    pub src: SourceSpan,
    #[serde(rename = "typeDescriptions")]
    pub type_description: TypeDescription,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FunctionCall {
    pub id: NodeId,
    pub kind: CallKind,
    pub expression: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub src: SourceSpan,
    #[serde(rename = "typeDescriptions")]
    pub type_description: TypeDescription,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Literal {
    pub id: NodeId,
    pub kind: String,
    pub value: String,
    pub src: SourceSpan,
    #[serde(rename = "typeDescriptions")]
    pub type_description: TypeDescription,
}

/// Expression shapes whose operands are not inspected; only identity and type are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Operation {
    pub id: NodeId,
    pub src: SourceSpan,
    #[serde(rename = "typeDescriptions")]
    pub type_description: TypeDescription,
}
