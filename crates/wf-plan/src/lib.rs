//! Savings planning toward a trip budget.
//!
//! This crate consumes a single scalar trip budget (typically the cost
//! produced by a wf-route query, or a user-supplied estimate when no
//! route exists) and a monthly financial profile, and answers three
//! questions with plain scalar arithmetic: where the money currently
//! goes, how savings evolve month by month under income growth, and how
//! to cut variable costs proportionally to hit the budget in time. It
//! has no dependency on the travel network.

pub mod error;
pub mod planner;

pub use error::{PlanError, PlanResult};
pub use planner::{Breakdown, Cut, MonthlySavings, Planner, Profile, ReductionPlan};
