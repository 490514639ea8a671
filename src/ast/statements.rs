use super::{expressions::Expression, types::Type};

/// `Type name`, used for local declarations and parameter lists.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    pub ty: Type,
    pub name: String,
}

impl VariableDecl {
    pub fn new(ty: Type, name: impl Into<String>) -> Self {
        VariableDecl {
            ty,
            name: name.into(),
        }
    }
}

/// One `case State { ... }` arm of a switch.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub state_name: String,
    pub body: Vec<Statement>,
}

/// Statement nodes.
///
/// Any expression may stand as a statement; whether it is useful there, or
/// whether an assignment target is assignable, is left to later passes.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expression(Expression),
    VariableDecl(VariableDecl),
    Return,
    ReturnExpr(Expression),
    /// `-> State;`
    Transition(String),
    /// `(target, value)`
    Assignment(Expression, Expression),
    Throw,
    If(Expression, Vec<Statement>),
    IfThenElse(Expression, Vec<Statement>, Vec<Statement>),
    TryCatch(Vec<Statement>, Vec<Statement>),
    Switch(Expression, Vec<SwitchCase>),
}

impl From<Expression> for Statement {
    fn from(expression: Expression) -> Self {
        Statement::Expression(expression)
    }
}
