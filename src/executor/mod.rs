//! Query execution module
//!
//! This module contains the join planner, the join executor, and the
//! result table.

pub mod executor;
pub mod planner;
pub mod result;

pub use executor::JoinExecutor;
pub use planner::{JoinPlan, JoinStep, Planner};
pub use result::ResultTable;
