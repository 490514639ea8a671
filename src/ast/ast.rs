use super::{
    statements::{Statement, VariableDecl},
    types::Type,
};

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub ty: Type,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub name: String,
    pub params: Vec<VariableDecl>,
    pub body: Vec<Statement>,
}

/// Same shape as a function, but an externally invocable atomic operation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDecl {
    pub name: String,
    pub params: Vec<VariableDecl>,
    pub body: Vec<Statement>,
}

/// One typestate of a contract and the declarations valid in it.
#[derive(Debug, Clone, PartialEq)]
pub struct StateDecl {
    pub name: String,
    pub declarations: Vec<Declaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContractDecl {
    pub name: String,
    pub declarations: Vec<Declaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Field(FieldDecl),
    Func(FuncDecl),
    Transaction(TransactionDecl),
    State(StateDecl),
    Contract(ContractDecl),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Field(decl) => &decl.name,
            Declaration::Func(decl) => &decl.name,
            Declaration::Transaction(decl) => &decl.name,
            Declaration::State(decl) => &decl.name,
            Declaration::Contract(decl) => &decl.name,
        }
    }
}

impl ContractDecl {
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Field(field) => Some(field),
            _ => None,
        })
    }

    pub fn functions(&self) -> impl Iterator<Item = &FuncDecl> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Func(func) => Some(func),
            _ => None,
        })
    }

    pub fn transactions(&self) -> impl Iterator<Item = &TransactionDecl> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Transaction(transaction) => Some(transaction),
            _ => None,
        })
    }

    /// Finds a directly nested state by name.
    pub fn state(&self, name: &str) -> Option<&StateDecl> {
        self.declarations.iter().find_map(|decl| match decl {
            Declaration::State(state) if state.name == name => Some(state),
            _ => None,
        })
    }
}

/// A parsed source file: one or more contracts in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub contracts: Vec<ContractDecl>,
}

impl Program {
    pub fn contract(&self, name: &str) -> Option<&ContractDecl> {
        self.contracts.iter().find(|contract| contract.name == name)
    }
}
