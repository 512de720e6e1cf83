//! Join executor for QuarryDB
//!
//! This module evaluates a join plan against the relation store as a
//! nested-loop multi-way join. The working set starts as a single empty
//! binding; each step scans its relation once per surviving binding and
//! extends the bindings that pass every filter and join check. Equality
//! is the only supported predicate, compared on native values.

use crate::error::Result;
use crate::executor::planner::{JoinPlan, JoinStep};
use crate::storage::{RelationStore, Tuple, Value};
use tracing::debug;

/// Join executor over a read-only store
pub struct JoinExecutor<'a> {
    store: &'a RelationStore,
}

impl<'a> JoinExecutor<'a> {
    /// Create a new executor
    pub fn new(store: &'a RelationStore) -> Self {
        Self { store }
    }

    /// Execute a plan, producing head-projected rows in discovery order
    pub fn execute(&self, plan: &JoinPlan) -> Result<Vec<Tuple>> {
        let mut bindings: Vec<Vec<Value>> = vec![Vec::new()];

        for (index, step) in plan.steps.iter().enumerate() {
            let relation = self.store.get(&step.relation)?;

            let mut next = Vec::new();
            for binding in &bindings {
                self.extend_bindings(step, binding, relation.tuples(), &mut next);
            }

            debug!(
                step = index,
                relation = %step.relation,
                bindings = next.len(),
                "join step complete"
            );

            if next.is_empty() {
                // Nothing can extend an empty working set; skip the
                // remaining atoms.
                return Ok(Vec::new());
            }
            bindings = next;
        }

        let rows = bindings
            .iter()
            .map(|binding| {
                plan.output_slots
                    .iter()
                    .map(|&slot| binding[slot].clone())
                    .collect()
            })
            .collect();
        Ok(rows)
    }

    /// Scan one relation for one partial binding, pushing every valid
    /// extension into `next`
    fn extend_bindings(
        &self,
        step: &JoinStep,
        binding: &[Value],
        tuples: &[Tuple],
        next: &mut Vec<Vec<Value>>,
    ) {
        'tuples: for tuple in tuples {
            let fields = tuple.values();

            for (col, constant) in &step.filters {
                if &fields[*col] != constant {
                    continue 'tuples;
                }
            }

            // Checks against slots bound by earlier atoms
            for (col, slot) in &step.checks {
                if *slot < binding.len() && fields[*col] != binding[*slot] {
                    continue 'tuples;
                }
            }

            let mut extended = Vec::with_capacity(binding.len() + step.binds.len());
            extended.extend_from_slice(binding);
            for (col, slot) in &step.binds {
                debug_assert_eq!(*slot, extended.len());
                extended.push(fields[*col].clone());
            }

            // Checks against slots bound by this same atom (repeated
            // variable within one atom)
            for (col, slot) in &step.checks {
                if *slot >= binding.len() && fields[*col] != extended[*slot] {
                    continue 'tuples;
                }
            }

            next.push(extended);
        }
    }
}
