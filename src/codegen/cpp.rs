//! C++ source generation
//!
//! Emits a complete, compilable C++ translation unit. Function definitions
//! become `void` functions over `std::string`; top-level call statements are
//! gathered into a synthesized `main`, which is opened lazily on the first
//! call statement and never emitted when no call statements exist.

use crate::parser::ast::{AstNode, Program, Statement};

const PREAMBLE: [&str; 4] = [
    "#include <iostream>",
    "#include <string>",
    "using namespace std;",
    "",
];

/// Generate C++ source for a parsed program.
///
/// Nodes are emitted in traversal order into a single line sequence, so a
/// call statement keeps its position relative to surrounding function
/// definitions; no reordering pass is performed. String literals still carry
/// their quotes from the lexer and are spliced in verbatim.
pub fn generate_cpp(program: &Program) -> String {
    let mut lines: Vec<String> = PREAMBLE.iter().map(|s| s.to_string()).collect();
    let mut main_opened = false;

    for node in &program.nodes {
        match node {
            AstNode::FunctionDef {
                name, param, body, ..
            } => {
                lines.push(format!("void {}(string {}) {{", name, param));
                for stmt in body {
                    match stmt {
                        Statement::PrintConcat { left, right, .. } => {
                            lines.push(format!("    cout << {} + {} << endl;", left, right));
                        }
                    }
                }
                lines.push("}".to_string());
            }
            AstNode::Call { name, argument, .. } => {
                if !main_opened {
                    lines.push(String::new());
                    lines.push("int main() {".to_string());
                    main_opened = true;
                }
                lines.push(format!("    {}({});", name, argument));
            }
        }
    }

    if main_opened {
        lines.push("    return 0;".to_string());
        lines.push("}".to_string());
    }

    lines.join("\n")
}
