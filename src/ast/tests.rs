//! Unit tests for the AST helpers and the printer.

use super::{
    ast::{ContractDecl, Declaration, FieldDecl, FuncDecl, Program, StateDecl},
    expressions::Expression,
    printer::print_program,
    statements::{Statement, SwitchCase, VariableDecl},
    types::{Type, TypeModifier},
};

fn var(name: &str) -> Box<Expression> {
    Box::new(Expression::variable(name))
}

#[test]
fn test_type_display() {
    let ty = Type::with_modifiers(vec![TypeModifier::Linear, TypeModifier::Shared], "Coin");

    assert_eq!(ty.to_string(), "linear shared Coin");
    assert_eq!(Type::new("int").to_string(), "int");
}

#[test]
fn test_type_modifiers() {
    let ty = Type::with_modifiers(vec![TypeModifier::Unique, TypeModifier::Unique], "Coin");

    assert!(ty.has_modifier(TypeModifier::Unique));
    assert!(!ty.is_linear());
    assert_eq!(ty.modifiers.len(), 2);
}

#[test]
fn test_expression_display_groups_operands() {
    let expr = Expression::Add(
        Box::new(Expression::Add(var("a"), var("b"))),
        Box::new(Expression::Multiply(var("c"), Box::new(Expression::NumLiteral(2)))),
    );

    assert_eq!(expr.to_string(), "(a + b) + (c * 2)");
}

#[test]
fn test_expression_display_postfix_and_calls() {
    let expr = Expression::Invocation(
        Box::new(Expression::Dereference(
            Box::new(Expression::LogicalNegation(var("x"))),
            String::from("f"),
        )),
        String::from("g"),
        vec![
            Expression::LocalInvocation(String::from("h"), vec![]),
            Expression::Construction(String::from("T"), vec![Expression::NumLiteral(1)]),
        ],
    );

    assert_eq!(expr.to_string(), "(not x).f.g(h(), new T(1))");
}

#[test]
fn test_expression_as_binary() {
    let expr = Expression::GreaterThanOrEquals(var("a"), var("b"));
    let (operator, left, right) = expr.as_binary().unwrap();

    assert_eq!(operator, ">=");
    assert_eq!(*left, Expression::variable("a"));
    assert_eq!(*right, Expression::variable("b"));
    assert!(Expression::variable("a").as_binary().is_none());
}

#[test]
fn test_statement_from_expression() {
    let statement: Statement = Expression::variable("x").into();

    assert_eq!(statement, Statement::Expression(Expression::variable("x")));
}

#[test]
fn test_print_program() {
    let program = Program {
        contracts: vec![ContractDecl {
            name: String::from("C"),
            declarations: vec![
                Declaration::Field(FieldDecl {
                    ty: Type::with_modifiers(vec![TypeModifier::Final], "int"),
                    name: String::from("n"),
                }),
                Declaration::State(StateDecl {
                    name: String::from("S"),
                    declarations: vec![Declaration::Func(FuncDecl {
                        name: String::from("f"),
                        params: vec![
                            VariableDecl::new(Type::new("int"), "a"),
                            VariableDecl::new(Type::new("int"), "b"),
                        ],
                        body: vec![
                            Statement::Switch(
                                Expression::variable("a"),
                                vec![SwitchCase {
                                    state_name: String::from("S"),
                                    body: vec![Statement::Throw],
                                }],
                            ),
                            Statement::IfThenElse(
                                Expression::variable("b"),
                                vec![Statement::Return],
                                vec![Statement::Transition(String::from("S"))],
                            ),
                        ],
                    })],
                }),
            ],
        }],
    };

    let expected = "\
contract C {
    final int n;
    state S {
        function f(int a, int b) {
            switch a {
                case S {
                    throw;
                }
            }
            if b {
                return;
            }
            else {
                -> S;
            }
        }
    }
}
";
    assert_eq!(print_program(&program), expected);
    assert_eq!(program.to_string(), expected);
}

#[test]
fn test_declaration_name_and_queries() {
    let contract = ContractDecl {
        name: String::from("C"),
        declarations: vec![
            Declaration::Field(FieldDecl {
                ty: Type::new("int"),
                name: String::from("x"),
            }),
            Declaration::State(StateDecl {
                name: String::from("Open"),
                declarations: vec![],
            }),
        ],
    };

    assert_eq!(contract.declarations[0].name(), "x");
    assert_eq!(contract.fields().count(), 1);
    assert_eq!(contract.functions().count(), 0);
    assert!(contract.state("Open").is_some());
    assert!(contract.state("Closed").is_none());
}
