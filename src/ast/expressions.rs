use std::fmt::Display;

/// Expression nodes.
///
/// Every binary variant holds `(left, right)`. Children are owned, so a tree
/// never shares nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Variable(String),
    NumLiteral(i64),

    Conjunction(Box<Expression>, Box<Expression>),
    Disjunction(Box<Expression>, Box<Expression>),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    Equals(Box<Expression>, Box<Expression>),
    NotEquals(Box<Expression>, Box<Expression>),
    GreaterThan(Box<Expression>, Box<Expression>),
    GreaterThanOrEquals(Box<Expression>, Box<Expression>),
    LessThan(Box<Expression>, Box<Expression>),
    LessThanOrEquals(Box<Expression>, Box<Expression>),

    LogicalNegation(Box<Expression>),

    /// `base.field`
    Dereference(Box<Expression>, String),
    /// `name(args)`, a call on the enclosing contract
    LocalInvocation(String, Vec<Expression>),
    /// `recipient.method(args)`
    Invocation(Box<Expression>, String, Vec<Expression>),
    /// `new Type(args)`
    Construction(String, Vec<Expression>),
}

impl Expression {
    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    /// Splits a binary node into its operator spelling and operands.
    pub fn as_binary(&self) -> Option<(&'static str, &Expression, &Expression)> {
        let (operator, left, right) = match self {
            Expression::Conjunction(l, r) => ("and", l, r),
            Expression::Disjunction(l, r) => ("or", l, r),
            Expression::Add(l, r) => ("+", l, r),
            Expression::Subtract(l, r) => ("-", l, r),
            Expression::Multiply(l, r) => ("*", l, r),
            Expression::Divide(l, r) => ("/", l, r),
            Expression::Equals(l, r) => ("==", l, r),
            Expression::NotEquals(l, r) => ("!=", l, r),
            Expression::GreaterThan(l, r) => (">", l, r),
            Expression::GreaterThanOrEquals(l, r) => (">=", l, r),
            Expression::LessThan(l, r) => ("<", l, r),
            Expression::LessThanOrEquals(l, r) => ("<=", l, r),
            _ => return None,
        };
        Some((operator, left.as_ref(), right.as_ref()))
    }

    /// Whether the node must be parenthesised when it appears as an operand.
    fn needs_grouping(&self) -> bool {
        self.as_binary().is_some() || matches!(self, Expression::LogicalNegation(_))
    }
}

struct Operand<'a>(&'a Expression);

impl Display for Operand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.needs_grouping() {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

struct Arguments<'a>(&'a [Expression]);

impl Display for Arguments<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Variable(name) => write!(f, "{}", name),
            Expression::NumLiteral(value) => write!(f, "{}", value),
            Expression::LogicalNegation(inner) => write!(f, "not {}", Operand(inner)),
            Expression::Dereference(base, field) => write!(f, "{}.{}", Operand(base), field),
            Expression::LocalInvocation(name, args) => write!(f, "{}{}", name, Arguments(args)),
            Expression::Invocation(recipient, method, args) => {
                write!(f, "{}.{}{}", Operand(recipient), method, Arguments(args))
            }
            Expression::Construction(type_name, args) => {
                write!(f, "new {}{}", type_name, Arguments(args))
            }
            binary => match binary.as_binary() {
                Some((operator, left, right)) => {
                    write!(f, "{} {} {}", Operand(left), operator, Operand(right))
                }
                None => Ok(()),
            },
        }
    }
}
