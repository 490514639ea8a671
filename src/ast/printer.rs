//! Pretty-printer from the AST back to concrete syntax.
//!
//! Output re-lexes and re-parses to an equal tree: nested binary and negated
//! operands are parenthesised, and a declaration-with-initializer is already
//! split into a declaration and an assignment in the tree, so it prints as
//! two statements. Negative literals have no concrete syntax and are printed
//! as-is.

use std::fmt::Display;

use super::{
    ast::{ContractDecl, Declaration, Program, StateDecl},
    statements::{Statement, SwitchCase, VariableDecl},
};

const INDENT: &str = "    ";

pub struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    pub fn new() -> Self {
        Printer {
            out: String::new(),
            indent: 0,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, text: impl Display) {
        for _ in 0..self.indent {
            self.out.push_str(INDENT);
        }
        self.out.push_str(&text.to_string());
        self.out.push('\n');
    }

    fn block(&mut self, header: impl Display, body: impl FnOnce(&mut Printer)) {
        self.line(format_args!("{} {{", header));
        self.indent += 1;
        body(self);
        self.indent -= 1;
        self.line("}");
    }

    pub fn program(&mut self, program: &Program) {
        for contract in &program.contracts {
            self.contract(contract);
        }
    }

    pub fn contract(&mut self, contract: &ContractDecl) {
        self.block(format_args!("contract {}", contract.name), |p| {
            p.declarations(&contract.declarations)
        });
    }

    fn state(&mut self, state: &StateDecl) {
        self.block(format_args!("state {}", state.name), |p| {
            p.declarations(&state.declarations)
        });
    }

    fn declarations(&mut self, declarations: &[Declaration]) {
        for declaration in declarations {
            self.declaration(declaration);
        }
    }

    pub fn declaration(&mut self, declaration: &Declaration) {
        match declaration {
            Declaration::Field(field) => self.line(format_args!("{} {};", field.ty, field.name)),
            Declaration::Func(func) => self.block(
                format_args!("function {}({})", func.name, Params(&func.params)),
                |p| p.body(&func.body),
            ),
            Declaration::Transaction(transaction) => self.block(
                format_args!(
                    "transaction {}({})",
                    transaction.name,
                    Params(&transaction.params)
                ),
                |p| p.body(&transaction.body),
            ),
            Declaration::State(state) => self.state(state),
            Declaration::Contract(contract) => self.contract(contract),
        }
    }

    fn body(&mut self, body: &[Statement]) {
        for statement in body {
            self.statement(statement);
        }
    }

    pub fn statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Expression(expression) => self.line(format_args!("{};", expression)),
            Statement::VariableDecl(decl) => self.line(format_args!("{} {};", decl.ty, decl.name)),
            Statement::Return => self.line("return;"),
            Statement::ReturnExpr(expression) => self.line(format_args!("return {};", expression)),
            Statement::Transition(state) => self.line(format_args!("-> {};", state)),
            Statement::Assignment(target, value) => {
                self.line(format_args!("{} = {};", target, value))
            }
            Statement::Throw => self.line("throw;"),
            Statement::If(condition, body) => {
                self.block(format_args!("if {}", condition), |p| p.body(body))
            }
            Statement::IfThenElse(condition, then_body, else_body) => {
                self.block(format_args!("if {}", condition), |p| p.body(then_body));
                self.block("else", |p| p.body(else_body));
            }
            Statement::TryCatch(try_body, catch_body) => {
                self.block("try", |p| p.body(try_body));
                self.block("catch", |p| p.body(catch_body));
            }
            Statement::Switch(expression, cases) => {
                self.block(format_args!("switch {}", expression), |p| {
                    for case in cases {
                        p.switch_case(case);
                    }
                })
            }
        }
    }

    fn switch_case(&mut self, case: &SwitchCase) {
        self.block(format_args!("case {}", case.state_name), |p| {
            p.body(&case.body)
        });
    }
}

impl Default for Printer {
    fn default() -> Self {
        Printer::new()
    }
}

struct Params<'a>(&'a [VariableDecl]);

impl Display for Params<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, param) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} {}", param.ty, param.name)?;
        }
        Ok(())
    }
}

pub fn print_program(program: &Program) -> String {
    let mut printer = Printer::new();
    printer.program(program);
    printer.finish()
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", print_program(self))
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut printer = Printer::new();
        printer.declaration(self);
        write!(f, "{}", printer.finish())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut printer = Printer::new();
        printer.statement(self);
        write!(f, "{}", printer.finish())
    }
}
