//! Company phase: adjudicate applicants whose notification delay has elapsed,
//! then recompute each company's daily financials.

use bevy_ecs::prelude::{Query, Res, ResMut};
use tracing::trace;

use crate::clock::SimulationClock;
use crate::economics::compute_financials;
use crate::ecs::{AgentRoster, Company, CompanyFinancials, Worker};
use crate::telemetry::SimTelemetry;

/// Adjudicates applicants whose notification delay has elapsed, then
/// recomputes each company's financials. Runs after every worker has stepped.
pub fn company_step_system(
    clock: Res<SimulationClock>,
    roster: Res<AgentRoster>,
    mut telemetry: ResMut<SimTelemetry>,
    mut workers: Query<&mut Worker>,
    mut companies: Query<(&mut Company, Option<&mut CompanyFinancials>)>,
) {
    for &company_entity in &roster.companies {
        let Ok((mut company, financials)) = companies.get_mut(company_entity) else {
            continue;
        };

        let pending = company.applicants.clone();
        for applicant in pending {
            let Ok(mut worker) = workers.get_mut(applicant) else {
                company.remove_applicant(applicant);
                continue;
            };
            if worker.wait_days > 0 {
                continue;
            }

            if company.admits_skill_level(worker.level) {
                company.hire(applicant);
                worker.get_hired(company_entity);
                telemetry.today.hires += 1;
                trace!(day = clock.now(), worker = worker.id, company = company.id, "hired");
            } else {
                company.remove_applicant(applicant);
                worker.get_rejected();
                telemetry.today.rejections += 1;
                trace!(day = clock.now(), worker = worker.id, company = company.id, "rejected");
            }
        }
        debug_assert!(company.occupied_slots() <= company.frame);

        if let Some(mut financials) = financials {
            *financials = compute_financials(&company);
        }
    }
}
