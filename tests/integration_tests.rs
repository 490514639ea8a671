//! Integration tests for end-to-end parsing.
//!
//! These tests run complete sources through tokenization and parsing, and
//! check that printed trees parse back to the same tree.

use contract_parser::{
    ast::{
        ast::{ContractDecl, Declaration, FieldDecl, FuncDecl, Program, StateDecl, TransactionDecl},
        expressions::Expression,
        printer::print_program,
        statements::{Statement, SwitchCase, VariableDecl},
        types::{Type, TypeModifier},
    },
    lexer::lexer::tokenize,
    parse_source,
    parser::parser::parse,
    Position,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn var(name: &str) -> Box<Expression> {
    Box::new(Expression::variable(name))
}

fn num(value: i64) -> Box<Expression> {
    Box::new(Expression::NumLiteral(value))
}

const AUCTION: &str = r#"
// A sealed-bid auction moving through three states.
contract Auction {
    shared Seller seller;

    state Open {
        linear unique Bid highest;

        transaction bid(linear Bid offer, int amount) {
            if amount > highest.amount() {
                highest.refund();
                highest = offer;
            } else {
                offer.refund();
            }
        }

        transaction close() {
            -> Closed;
        }
    }

    state Closed {
        function winner() {
            return highest.bidder;
        }
    }

    transaction settle() {
        switch this {
            case Open {
                throw;
            }
            case Closed {
                try {
                    final Money m = new Money(highest.amount() * 95 / 100);
                    seller.pay(m);
                } catch {
                    -> Open;
                }
            }
        }
    }
}

contract Seller {
    function pay(linear Money m) {
        balance = balance + m.value;
    }
}
"#;

#[test]
fn test_parse_complete_program() {
    init_logging();
    let program = parse_source(AUCTION).unwrap();

    assert_eq!(program.contracts.len(), 2);
    let auction = program.contract("Auction").unwrap();

    let names: Vec<&str> = auction.declarations.iter().map(Declaration::name).collect();
    assert_eq!(names, vec!["seller", "Open", "Closed", "settle"]);

    let open = auction.state("Open").unwrap();
    assert_eq!(
        open.declarations[0],
        Declaration::Field(FieldDecl {
            ty: Type::with_modifiers(vec![TypeModifier::Linear, TypeModifier::Unique], "Bid"),
            name: String::from("highest"),
        })
    );

    let Declaration::Transaction(bid) = &open.declarations[1] else {
        panic!("expected the bid transaction");
    };
    assert_eq!(
        bid.body,
        vec![Statement::IfThenElse(
            Expression::GreaterThan(
                var("amount"),
                Box::new(Expression::Invocation(var("highest"), String::from("amount"), vec![]))
            ),
            vec![
                Statement::Expression(Expression::Invocation(
                    var("highest"),
                    String::from("refund"),
                    vec![]
                )),
                Statement::Assignment(Expression::variable("highest"), Expression::variable("offer")),
            ],
            vec![Statement::Expression(Expression::Invocation(
                var("offer"),
                String::from("refund"),
                vec![]
            ))]
        )]
    );
}

#[test]
fn test_parse_nested_switch_and_try() {
    let program = parse_source(AUCTION).unwrap();
    let auction = program.contract("Auction").unwrap();
    let settle = auction.transactions().next().unwrap();

    let Statement::Switch(subject, cases) = &settle.body[0] else {
        panic!("expected a switch");
    };
    assert_eq!(*subject, Expression::variable("this"));
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].body, vec![Statement::Throw]);

    let Statement::TryCatch(try_body, catch_body) = &cases[1].body[0] else {
        panic!("expected try/catch");
    };
    assert_eq!(
        try_body[..2].to_vec(),
        vec![
            Statement::VariableDecl(VariableDecl::new(
                Type::with_modifiers(vec![TypeModifier::Final], "Money"),
                "m"
            )),
            Statement::Assignment(
                Expression::variable("m"),
                Expression::Construction(
                    String::from("Money"),
                    vec![Expression::Multiply(
                        Box::new(Expression::Invocation(
                            var("highest"),
                            String::from("amount"),
                            vec![]
                        )),
                        Box::new(Expression::Divide(num(95), num(100)))
                    )]
                )
            ),
        ]
    );
    assert_eq!(try_body.len(), 3);
    assert_eq!(*catch_body, vec![Statement::Transition(String::from("Open"))]);
}

#[test]
fn test_round_trip_parsed_program() {
    let program = parse_source(AUCTION).unwrap();
    let printed = print_program(&program);

    assert_eq!(parse_source(&printed).unwrap(), program);
}

#[test]
fn test_round_trip_hand_built_program() {
    init_logging();
    let program = Program {
        contracts: vec![ContractDecl {
            name: String::from("Counter"),
            declarations: vec![
                Declaration::Field(FieldDecl {
                    ty: Type::with_modifiers(
                        vec![TypeModifier::Shared, TypeModifier::Final],
                        "int",
                    ),
                    name: String::from("limit"),
                }),
                Declaration::Transaction(TransactionDecl {
                    name: String::from("step"),
                    params: vec![VariableDecl::new(Type::new("int"), "by")],
                    body: vec![
                        Statement::VariableDecl(VariableDecl::new(Type::new("int"), "next")),
                        Statement::Assignment(
                            Expression::variable("next"),
                            // Left-nested trees only survive printing through parentheses.
                            Expression::Add(
                                Box::new(Expression::Add(var("count"), var("by"))),
                                num(1),
                            ),
                        ),
                        Statement::If(
                            Expression::Conjunction(
                                Box::new(Expression::LogicalNegation(Box::new(
                                    Expression::LogicalNegation(var("open")),
                                ))),
                                Box::new(Expression::LessThanOrEquals(var("next"), var("limit"))),
                            ),
                            vec![Statement::Assignment(
                                Expression::Dereference(var("this"), String::from("count")),
                                Expression::variable("next"),
                            )],
                        ),
                        Statement::Switch(
                            Expression::LocalInvocation(String::from("current"), vec![]),
                            vec![
                                SwitchCase {
                                    state_name: String::from("Idle"),
                                    body: vec![Statement::Transition(String::from("Busy"))],
                                },
                                SwitchCase {
                                    state_name: String::from("Busy"),
                                    body: vec![],
                                },
                            ],
                        ),
                        Statement::TryCatch(
                            vec![Statement::Expression(Expression::Invocation(
                                Box::new(Expression::Subtract(var("a"), var("b"))),
                                String::from("check"),
                                vec![Expression::NotEquals(var("a"), num(0))],
                            ))],
                            vec![Statement::Throw],
                        ),
                        Statement::ReturnExpr(Expression::Disjunction(
                            Box::new(Expression::Equals(var("next"), var("limit"))),
                            Box::new(Expression::GreaterThan(var("next"), num(3))),
                        )),
                    ],
                }),
                Declaration::State(StateDecl {
                    name: String::from("Idle"),
                    declarations: vec![Declaration::Func(FuncDecl {
                        name: String::from("reset"),
                        params: vec![],
                        body: vec![Statement::Return],
                    })],
                }),
            ],
        }],
    };

    let printed = print_program(&program);
    let tokens = tokenize(printed.clone()).unwrap();
    let reparsed = parse(tokens).unwrap();

    assert_eq!(reparsed, program, "printed as:\n{}", printed);
}

#[test]
fn test_parse_on_multiple_threads() {
    let sources: Vec<String> = (0..4)
        .map(|i| format!("contract C{} {{ function f() {{ return {} + x; }} }}", i, i))
        .collect();

    let handles: Vec<_> = sources
        .into_iter()
        .map(|source| std::thread::spawn(move || parse_source(&source)))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let program = handle.join().unwrap().unwrap();
        let func = program.contracts[0].functions().next().unwrap();

        assert_eq!(program.contracts[0].name, format!("C{}", i));
        assert_eq!(
            func.body,
            vec![Statement::ReturnExpr(Expression::Add(num(i as i64), var("x")))]
        );
    }
}

#[test]
fn test_committed_error_stops_parse() {
    let source = "contract A {\n    state S {\n        function f() { -> ; }\n    }\n}\n";
    let error = parse_source(source).unwrap_err();

    assert!(error.is_committed());
    assert_eq!(*error.get_position(), Position::new(3, 27));
    assert_eq!(
        error.to_string(),
        "Error: identifier expected but `;` found at 3:27"
    );
}

#[test]
fn test_unclosed_contract() {
    let error = parse_source("contract A {\n    int x;\n").unwrap_err();

    assert!(error.is_committed());
    assert_eq!(*error.get_position(), Position::new(3, 1));
    assert_eq!(
        error.to_string(),
        "Error: `}` expected but end of input found at 3:1"
    );
}

#[test]
fn test_comment_only_source_is_a_failure() {
    let error = parse_source("// nothing here\n").unwrap_err();

    assert!(!error.is_committed());
    assert!(error.to_string().starts_with("FAILURE: "));
}
