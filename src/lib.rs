//! QuarryDB - A minimal in-memory Datalog join engine written in Rust
//!
//! This library provides the core components of a small Datalog query engine:
//! - Rule parsing (lexer, parser, AST)
//! - Literal interning (catalog)
//! - Relation storage and database image loading
//! - Query execution (planner, join executor, result materialization)
//! - An explicit session handle owning all engine state

pub mod catalog;
pub mod datalog;
pub mod error;
pub mod executor;
pub mod session;
pub mod storage;

pub use error::{Error, Result};
pub use session::Session;
