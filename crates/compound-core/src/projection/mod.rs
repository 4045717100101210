//! The projection engine: pure functions over `f64`, no state, no I/O.
//!
//! The closed-form future value ([`compute_future_value`]) and the iterative
//! yearly breakdown ([`compute_yearly_breakdown`]) are independent models and
//! do not agree exactly when the contribution and compounding frequencies
//! differ. Callers must not assume the final breakdown row equals the
//! closed-form final amount.

mod breakdown;
mod future_value;
mod goal;
mod inflation;

pub use breakdown::{compute_yearly_breakdown, YearlyRow, YearlyStep};
pub use future_value::{compute_future_value, ProjectionResult};
pub use goal::{solve_goal_timeline, GoalTimeline};
pub use inflation::compute_real_value;
