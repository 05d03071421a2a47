//! Restaurant economics: scale profiles, wages, and the daily financial metrics.

use crate::ecs::{Company, CompanyFinancials};

/// Food cost as a share of the unit price.
pub const FOOD_COST_RATIO: f64 = 0.3;

/// Paid hours per staff member per day.
pub const LABOR_HOURS_PER_DAY: f64 = 6.0;

/// Daily recruiting cost per unfilled hiring slot (yen).
pub const RECRUITMENT_COST_PER_OPENING: f64 = 3000.0;

/// Turn count used when a price has no entry in the turn table.
pub const DEFAULT_TURN_NUM_MAX: f64 = 8.0;

/// Hourly wage (yen) by company level 1..=6.
pub const WAGE_TABLE: [f64; 6] = [980.0, 1080.0, 1180.0, 1280.0, 1380.0, 1480.0];

/// Hourly wage for a company level. Levels outside 1..=6 clamp to the table ends.
pub fn wage_for_level(level: u8) -> f64 {
    let idx = usize::from(level.clamp(1, 6)) - 1;
    WAGE_TABLE[idx]
}

/// Maximum daily seat turns for a unit price: cheaper shops turn tables faster.
pub fn max_turns_for_price(price: u32) -> f64 {
    match price {
        1000 => 12.0,
        2000 => 8.0,
        3000 => 6.0,
        4000 => 4.8,
        5000 => 4.0,
        _ => DEFAULT_TURN_NUM_MAX,
    }
}

/// Size-class configuration for a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleProfile {
    pub scale: u8,
    /// Hiring slots (applicants + employees ceiling).
    pub frame: usize,
    pub seats: u32,
    /// Fixed staff that is on the payroll independent of hiring.
    pub member_num: u32,
}

/// Profile for a size class. Unknown classes fall back to the smallest profile.
pub fn scale_profile(scale: u8) -> ScaleProfile {
    let (frame, seats, member_num) = match scale {
        2 => (2, 50, 4),
        3 => (3, 100, 9),
        4 => (4, 150, 16),
        _ => (1, 20, 1),
    };
    ScaleProfile {
        scale: if (1..=4).contains(&scale) { scale } else { 1 },
        frame,
        seats,
        member_num,
    }
}

/// Daily sales, costs and profit for the company's current staffing.
///
/// Turns scale with staffing: a fully staffed shop reaches `turn_num_max`,
/// an empty hiring frame runs on base members only.
pub fn compute_financials(company: &Company) -> CompanyFinancials {
    let hired = company.employees.len() as f64;
    let base = f64::from(company.member_num);
    let current_staff = base + hired;
    let max_staff = base + company.frame as f64;
    let turn_num = if max_staff > 0.0 {
        company.turn_num_max * (current_staff / max_staff)
    } else {
        0.0
    };

    let covers = f64::from(company.seats) * company.occupancy * turn_num;
    let sales = covers * f64::from(company.price);
    let food_costs = covers * company.food_cost;
    let labor_costs = current_staff * company.wage() * LABOR_HOURS_PER_DAY;
    let openings = company.open_positions() as f64;
    let recruitment_costs = openings * RECRUITMENT_COST_PER_OPENING;
    let costs = food_costs + labor_costs + recruitment_costs;

    CompanyFinancials {
        turn_num,
        sales,
        food_costs,
        labor_costs,
        recruitment_costs,
        costs,
        profit: sales - costs,
    }
}
