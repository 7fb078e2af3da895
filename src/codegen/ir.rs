//! Intermediate code generation
//!
//! Emits one flat, human-readable instruction per line in AST traversal
//! order:
//!
//! ```text
//! func greet(name)
//! t1 = "Hello " + name
//! print t1
//! endfunc
//! call greet("World")
//! ```

use crate::parser::ast::{AstNode, Program, Statement};

/// Generate intermediate code for a parsed program.
///
/// Lines are joined with `\n` and carry no trailing newline. The temporary
/// is always literally `t1`: the grammar permits at most one statement per
/// function body, so no fresh-temporary allocation is needed.
pub fn generate_ir(program: &Program) -> String {
    let mut lines = Vec::new();

    for node in &program.nodes {
        match node {
            AstNode::FunctionDef {
                name, param, body, ..
            } => {
                lines.push(format!("func {}({})", name, param));
                for stmt in body {
                    match stmt {
                        Statement::PrintConcat { left, right, .. } => {
                            lines.push(format!("t1 = {} + {}", left, right));
                            lines.push("print t1".to_string());
                        }
                    }
                }
                lines.push("endfunc".to_string());
            }
            AstNode::Call { name, argument, .. } => {
                lines.push(format!("call {}({})", name, argument));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parser::Parser;

    fn ir_for(source: &str) -> String {
        let program = Parser::new(source).unwrap().parse_program().unwrap();
        generate_ir(&program)
    }

    #[test]
    fn test_function_with_print_body() {
        let ir = ir_for("def greet(name):\n    print(\"Hello \" + name)\ngreet(\"World\")");
        assert_eq!(
            ir,
            "func greet(name)\nt1 = \"Hello \" + name\nprint t1\nendfunc\ncall greet(\"World\")"
        );
    }

    #[test]
    fn test_empty_body_emits_only_frame() {
        assert_eq!(ir_for("def noop(x):"), "func noop(x)\nendfunc");
    }

    #[test]
    fn test_bare_call() {
        assert_eq!(ir_for("shout(\"hi\")"), "call shout(\"hi\")");
    }

    #[test]
    fn test_generation_is_pure() {
        let program = Parser::new("def f(x):\n    print(\"a\" + x)")
            .unwrap()
            .parse_program()
            .unwrap();
        assert_eq!(generate_ir(&program), generate_ir(&program));
    }
}
