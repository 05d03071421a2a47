mod support;

use bevy_ecs::prelude::{Entity, World};
use labor_core::ecs::{Company, Worker, WorkerKind, WorkerState};
use labor_core::telemetry::SimTelemetry;
use labor_core::turnover::{TurnoverTable, MILESTONE_COUNT};

use support::assert_market_invariants;
use support::entities::{company, spawn_company_with, spawn_company_with_frame, worker, WorkerBuilder};
use support::schedule::ScheduleRunner;
use support::world::TestWorldBuilder;

/// Puts `worker` in `company`'s applicant list with `wait_days` left.
fn make_applicant(world: &mut World, worker: Entity, company: Entity, wait_days: u32) {
    if let Some(mut w) = world.get_mut::<Worker>(worker) {
        w.state = WorkerState::AwaitingResult;
        w.employer = Some(company);
        w.wait_days = wait_days;
    }
    if let Some(mut c) = world.get_mut::<Company>(company) {
        assert!(c.accept_applicant(worker));
    }
}

#[test]
fn forced_turnover_at_first_milestone() {
    let mut world = TestWorldBuilder::new()
        .with_turnover(TurnoverTable::default().with_rate(WorkerKind::Housewife, 30, 1.0))
        .build();
    let firm = spawn_company_with(&mut world, 0, 2, 2);
    let housewife = WorkerBuilder::new(0)
        .kind(WorkerKind::Housewife)
        .level(3)
        .spawn_employed(&mut world, firm, 30);
    assert_market_invariants(&world);

    ScheduleRunner::new().run_day(&mut world);

    let state = worker(&world, housewife);
    assert_eq!(state.state, WorkerState::Gathering);
    assert_eq!(state.work_days, 0);
    assert_eq!(state.employer, None);
    assert!(company(&world, firm).employees.is_empty());
    assert_market_invariants(&world);

    let record = world.resource::<SimTelemetry>().records[0];
    assert_eq!(record.turnover_rate, 1.0);
    assert_eq!(record.employment_rate, 0.0);
}

#[test]
fn whole_kind_override_only_affects_that_kind() {
    let mut world = TestWorldBuilder::new()
        .with_turnover(
            TurnoverTable::uniform(0.0).with_kind_rates(WorkerKind::Student, [1.0; MILESTONE_COUNT]),
        )
        .build();
    let firm = spawn_company_with_frame(&mut world, 0, 2, 4);
    let student = WorkerBuilder::new(0)
        .kind(WorkerKind::Student)
        .level(2)
        .spawn_employed(&mut world, firm, 60);
    let freeter = WorkerBuilder::new(1)
        .kind(WorkerKind::Freeter)
        .level(2)
        .spawn_employed(&mut world, firm, 60);
    assert_market_invariants(&world);

    ScheduleRunner::new().run_day(&mut world);

    assert_eq!(worker(&world, student).state, WorkerState::Gathering);
    assert_eq!(worker(&world, student).employer, None);
    assert_eq!(worker(&world, freeter).state, WorkerState::Employed);
    assert_eq!(company(&world, firm).employees, vec![freeter]);
    assert_eq!(world.resource::<SimTelemetry>().totals.quits, 1);
    assert_market_invariants(&world);
}

#[test]
fn no_turnover_trial_between_milestones() {
    let mut world = TestWorldBuilder::new()
        .with_turnover(TurnoverTable::uniform(1.0))
        .build();
    let firm = spawn_company_with(&mut world, 0, 2, 2);
    let employee = WorkerBuilder::new(0).level(3).spawn_employed(&mut world, firm, 1);

    let mut runner = ScheduleRunner::new();
    runner.run_days(&mut world, 28);

    let state = worker(&world, employee);
    assert_eq!(state.state, WorkerState::Employed);
    assert_eq!(state.work_days, 29);
    assert_eq!(world.resource::<SimTelemetry>().totals.quits, 0);

    // day 29 has work_days == 29 at the trial; day 30 sees 30 and quits
    runner.run_days(&mut world, 2);
    assert_eq!(worker(&world, employee).state, WorkerState::Gathering);
    assert_eq!(world.resource::<SimTelemetry>().totals.quits, 1);
}

#[test]
fn zero_hazard_keeps_workforce_stable() {
    let mut world = TestWorldBuilder::new()
        .with_turnover(TurnoverTable::uniform(0.0))
        .build();
    let firm = spawn_company_with(&mut world, 0, 1, 3);
    let employees: Vec<_> = (0..3)
        .map(|id| WorkerBuilder::new(id).level(2).spawn_employed(&mut world, firm, 0))
        .collect();

    let mut runner = ScheduleRunner::new();
    runner.run_days_checked(&mut world, 400, |world, _| assert_market_invariants(world));

    for employee in employees {
        let state = worker(&world, employee);
        assert_eq!(state.state, WorkerState::Employed);
        assert_eq!(state.work_days, 400);
    }
    let telemetry = world.resource::<SimTelemetry>();
    assert!(telemetry.records.iter().all(|r| r.turnover_rate == 0.0));
    assert!(telemetry.records.iter().all(|r| r.job_matching_rate == 1.0));
}

#[test]
fn rejected_applicant_gathers_then_seeks_again() {
    let mut world = TestWorldBuilder::new().build();
    let strict = spawn_company_with(&mut world, 0, 6, 1);
    let lenient = spawn_company_with(&mut world, 1, 2, 1);
    let applicant = WorkerBuilder::new(0)
        .kind(WorkerKind::Foreigner)
        .level(2)
        .spawn(&mut world);
    make_applicant(&mut world, applicant, strict, 1);
    assert_market_invariants(&world);

    let mut runner = ScheduleRunner::new();

    // day 1: delay elapses, strict company rejects
    runner.run_day(&mut world);
    let state = worker(&world, applicant);
    assert_eq!(state.state, WorkerState::Gathering);
    assert_eq!(state.employer, None);
    assert!(company(&world, strict).applicants.is_empty());
    assert_eq!(world.resource::<SimTelemetry>().today.rejections, 1);

    // day 2: still gathering; day 3: starts seeking after matching ran
    runner.run_day(&mut world);
    assert_eq!(worker(&world, applicant).state, WorkerState::Gathering);
    runner.run_day(&mut world);
    let state = worker(&world, applicant);
    assert_eq!(state.state, WorkerState::JobSeeking);
    assert_eq!(state.elapsed_days, 2);

    // day 4: re-enters the batch and applies to the company that admits it
    runner.run_day(&mut world);
    let state = worker(&world, applicant);
    assert!(state.state.holds_employer());
    assert_eq!(state.employer, Some(lenient));
    assert_market_invariants(&world);
}

#[test]
fn pending_applicant_waits_out_its_delay() {
    let mut world = TestWorldBuilder::new().build();
    let firm = spawn_company_with(&mut world, 0, 1, 1);
    let applicant = WorkerBuilder::new(0).level(5).spawn(&mut world);
    make_applicant(&mut world, applicant, firm, 3);

    let mut runner = ScheduleRunner::new();
    runner.run_days(&mut world, 2);
    let state = worker(&world, applicant);
    assert_eq!(state.state, WorkerState::AwaitingResult);
    assert_eq!(state.wait_days, 1);

    runner.run_day(&mut world);
    assert_eq!(worker(&world, applicant).state, WorkerState::Employed);
    assert_eq!(company(&world, firm).employees, vec![applicant]);
}
