//! Code generation backends
//!
//! Both backends walk the same parsed [`Program`](crate::parser::ast::Program)
//! independently; neither depends on the other's output:
//! - [`ir`]: flat three-address-style intermediate code, one instruction per line
//! - [`cpp`]: compilable C++ source text
//!
//! Each backend is a pure function of the AST. Malformed input cannot reach
//! this stage, so there are no failure modes here.

pub mod cpp;
pub mod ir;
