//! Scalar savings arithmetic.

use tracing::debug;
use wf_core::{ensure_finite, Real};

use crate::error::{PlanError, PlanResult};

/// Monthly financial profile supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub monthly_income: Real,
    /// Annual rate, e.g. 0.05 for 5%; applied as (1+r)^((t-1)/12) per month t.
    pub annual_growth_rate: Real,
    pub fixed_costs: Real,
    /// Named variable cost categories and their monthly amounts.
    pub variable_costs: Vec<(String, Real)>,
    pub planning_months: u32,
}

/// Current spending position for one month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakdown {
    pub total_spending: Real,
    pub savings: Real,
}

/// Projected savings for one month of the planning horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlySavings {
    pub month: u32,
    pub savings: Real,
}

/// One proportional cut to a variable cost category.
#[derive(Debug, Clone, PartialEq)]
pub struct Cut {
    pub category: String,
    pub amount: Real,
    /// Cut as a fraction of the category's original monthly cost.
    pub fraction_of_original: Real,
}

/// Outcome of allocating the required savings across variable costs.
#[derive(Debug, Clone, PartialEq)]
pub enum ReductionPlan {
    /// Current savings already cover the required monthly amount.
    GoalMet {
        required_monthly: Real,
        current_monthly: Real,
    },
    /// The shortfall can be closed by cutting variable costs
    /// proportionally to their share of total variable spending.
    Proportional {
        required_monthly: Real,
        current_monthly: Real,
        shortfall: Real,
        /// Sorted by original category cost, largest first.
        cuts: Vec<Cut>,
    },
    /// Even eliminating every variable cost would not close the gap.
    Infeasible {
        shortfall: Real,
        max_reduction: Real,
    },
}

/// Plans savings toward a fixed trip budget over the profile's horizon.
#[derive(Debug, Clone)]
pub struct Planner {
    profile: Profile,
    trip_budget: Real,
}

impl Planner {
    /// Validate the profile and budget, and build a planner.
    pub fn new(profile: Profile, trip_budget: Real) -> PlanResult<Self> {
        ensure_finite(profile.monthly_income, "monthly income")?;
        ensure_finite(profile.annual_growth_rate, "income growth rate")?;
        ensure_finite(profile.fixed_costs, "fixed costs")?;
        ensure_finite(trip_budget, "trip budget")?;
        for (name, cost) in &profile.variable_costs {
            ensure_finite(*cost, "variable cost")?;
            if *cost < 0.0 {
                return Err(PlanError::InvalidProfile {
                    what: format!("negative variable cost for {name}: {cost}"),
                });
            }
        }
        if profile.planning_months == 0 {
            return Err(PlanError::InvalidProfile {
                what: "planning horizon must be at least one month".into(),
            });
        }
        if trip_budget < 0.0 {
            return Err(PlanError::InvalidProfile {
                what: format!("negative trip budget: {trip_budget}"),
            });
        }
        Ok(Self {
            profile,
            trip_budget,
        })
    }

    pub fn trip_budget(&self) -> Real {
        self.trip_budget
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    fn total_variable(&self) -> Real {
        self.profile.variable_costs.iter().map(|(_, c)| c).sum()
    }

    /// Where the money goes this month, before any growth.
    pub fn spending_breakdown(&self) -> Breakdown {
        let total_spending = self.profile.fixed_costs + self.total_variable();
        Breakdown {
            total_spending,
            savings: self.profile.monthly_income - total_spending,
        }
    }

    /// Month-by-month savings over the planning horizon, with income
    /// compounding annually and spending held constant.
    pub fn cash_flow(&self) -> Vec<MonthlySavings> {
        let spend = self.profile.fixed_costs + self.total_variable();
        (1..=self.profile.planning_months)
            .map(|t| {
                let growth = (1.0 + self.profile.annual_growth_rate)
                    .powf(Real::from(t - 1) / 12.0);
                MonthlySavings {
                    month: t,
                    savings: self.profile.monthly_income * growth - spend,
                }
            })
            .collect()
    }

    /// Allocate the monthly savings shortfall across variable cost
    /// categories, proportionally to each category's share of variable
    /// spending.
    ///
    /// You cannot cut more than you spend: when the shortfall exceeds
    /// total variable costs the plan is infeasible and the caller is told
    /// the most that cuts alone can recover.
    pub fn reduction_plan(&self) -> ReductionPlan {
        let required_monthly = self.trip_budget / Real::from(self.profile.planning_months);
        let current_monthly = self.spending_breakdown().savings;

        if current_monthly >= required_monthly {
            return ReductionPlan::GoalMet {
                required_monthly,
                current_monthly,
            };
        }

        let shortfall = required_monthly - current_monthly;
        let total_variable = self.total_variable();
        if shortfall > total_variable {
            debug!(shortfall, total_variable, "reduction goal infeasible");
            return ReductionPlan::Infeasible {
                shortfall,
                max_reduction: total_variable,
            };
        }

        let mut costs = self.profile.variable_costs.clone();
        costs.sort_by(|a, b| b.1.total_cmp(&a.1));

        let cuts = costs
            .into_iter()
            .filter(|(_, cost)| *cost > 0.0)
            .map(|(category, cost)| {
                let amount = cost / total_variable * shortfall;
                Cut {
                    fraction_of_original: amount / cost,
                    category,
                    amount,
                }
            })
            .collect();

        ReductionPlan::Proportional {
            required_monthly,
            current_monthly,
            shortfall,
            cuts,
        }
    }
}
