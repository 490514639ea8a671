/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Declarations and the Program root
/// - expressions: Expression nodes
/// - statements: Statement nodes
/// - types: Declared types and their modifiers
/// - printer: Rendering a tree back to source
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;
