// AST definitions for the Python-subset translator

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Statements allowed inside a function body.
///
/// The grammar admits exactly one body shape: `print(<string> + <identifier>)`.
/// `left` keeps its enclosing quotes so both generators can splice it into
/// their output verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    PrintConcat {
        left: String,
        right: String,
        location: SourceLocation,
    },
}

/// Top-level AST nodes.
///
/// A function's declared parameter and the identifier referenced inside its
/// body are deliberately not checked against each other; the generators
/// trust the written names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    FunctionDef {
        name: String,
        param: String,
        body: Vec<Statement>,
        location: SourceLocation,
    },
    Call {
        name: String,
        argument: String,
        location: SourceLocation,
    },
}

impl AstNode {
    /// Get the source location of this node
    pub fn location(&self) -> &SourceLocation {
        match self {
            AstNode::FunctionDef { location, .. } => location,
            AstNode::Call { location, .. } => location,
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub nodes: Vec<AstNode>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}
