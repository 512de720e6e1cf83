//! Join planner for QuarryDB
//!
//! This module lowers a parsed rule into an executable join plan. All
//! semantic validation happens here, before any scanning starts: every
//! atom's relation must exist with matching arity, filter constants must
//! match their column types, and every head variable must be bound
//! somewhere in the body.
//!
//! Atoms are evaluated left-to-right in the order they appear in the rule
//! body; there is no cost-based reordering.

use crate::catalog::{ColumnType, LiteralCatalog};
use crate::datalog::ast::{Arg, Atom, Const, Rule};
use crate::error::{Error, Result};
use crate::storage::{RelationStore, Value};
use std::collections::HashMap;
use tracing::debug;

/// One step of a join plan, consuming one body atom
///
/// Variable slots are numbered in first-occurrence order across the whole
/// rule, so a partial binding is always a prefix vector of slot values.
#[derive(Debug, Clone)]
pub struct JoinStep {
    /// Relation to scan
    pub relation: String,
    /// Columns that must equal a constant
    pub filters: Vec<(usize, Value)>,
    /// Columns that must agree with an already-bound slot
    pub checks: Vec<(usize, usize)>,
    /// Columns that bind a new slot, in slot order
    pub binds: Vec<(usize, usize)>,
}

/// An executable join plan
#[derive(Debug, Clone)]
pub struct JoinPlan {
    /// Result name from the rule head
    pub head_name: String,
    /// Head variable names, in output column order
    pub output_columns: Vec<String>,
    /// Slot projected into each output column
    pub output_slots: Vec<usize>,
    /// Join steps, one per body atom, in body order
    pub steps: Vec<JoinStep>,
    /// Total number of variable slots
    pub slot_count: usize,
}

/// Join planner
pub struct Planner<'a> {
    store: &'a RelationStore,
    literals: &'a mut LiteralCatalog,
}

impl<'a> Planner<'a> {
    /// Create a new planner over a loaded store
    pub fn new(store: &'a RelationStore, literals: &'a mut LiteralCatalog) -> Self {
        Self { store, literals }
    }

    /// Compile a rule into a join plan
    pub fn compile(&mut self, rule: &Rule) -> Result<JoinPlan> {
        if rule.body.is_empty() {
            return Err(Error::EmptyRuleBody);
        }

        let mut var_slots: HashMap<String, usize> = HashMap::new();
        let mut steps = Vec::with_capacity(rule.body.len());

        for atom in &rule.body {
            let relation = self.store.get(&atom.relation)?;
            if atom.args.len() != relation.arity() {
                return Err(Error::ArityMismatch {
                    relation: atom.relation.clone(),
                    expected: relation.arity(),
                    found: atom.args.len(),
                });
            }

            let mut step = JoinStep {
                relation: atom.relation.clone(),
                filters: Vec::new(),
                checks: Vec::new(),
                binds: Vec::new(),
            };

            for (col, arg) in atom.args.iter().enumerate() {
                let var = match arg {
                    Arg::Variable(var) => var,
                    Arg::Bound { var, value } => {
                        let constant =
                            self.compile_constant(value, relation.columns()[col], atom, col)?;
                        step.filters.push((col, constant));
                        var
                    }
                };

                // Shared variables become join checks; first occurrences
                // bind a fresh slot.
                match var_slots.get(var) {
                    Some(&slot) => step.checks.push((col, slot)),
                    None => {
                        let slot = var_slots.len();
                        var_slots.insert(var.clone(), slot);
                        step.binds.push((col, slot));
                    }
                }
            }

            steps.push(step);
        }

        let mut output_slots = Vec::with_capacity(rule.head.vars.len());
        for var in &rule.head.vars {
            let slot = var_slots
                .get(var)
                .copied()
                .ok_or_else(|| Error::UnboundHeadVariable(var.clone()))?;
            output_slots.push(slot);
        }

        debug!(
            head = %rule.head.name,
            atoms = steps.len(),
            slots = var_slots.len(),
            "rule compiled"
        );

        Ok(JoinPlan {
            head_name: rule.head.name.clone(),
            output_columns: rule.head.vars.clone(),
            output_slots,
            steps,
            slot_count: var_slots.len(),
        })
    }

    fn compile_constant(
        &mut self,
        value: &Const,
        column: ColumnType,
        atom: &Atom,
        col: usize,
    ) -> Result<Value> {
        match (value, column) {
            (Const::String(s), ColumnType::Literal) => Ok(Value::Literal(self.literals.intern(s))),
            (Const::Integer(n), ColumnType::Integer) => Ok(Value::Integer(*n)),
            _ => Err(Error::ConstantTypeMismatch {
                relation: atom.relation.clone(),
                column: col,
                expected: column.to_string(),
            }),
        }
    }
}
