/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The expression sum type and its uniform node view
/// - expressions: One struct per language construct
/// - printer: S-expression rendering
pub mod ast;
pub mod expressions;
pub mod printer;
