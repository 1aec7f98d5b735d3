/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The expression and top-level statement enums
/// - expressions: Definitions for the expression node kinds
/// - statements: Prototypes, function definitions and imports
/// - types: Literal values
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
