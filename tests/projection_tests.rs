mod common;
use common::{assert_close, date, dt};

use rshiftplan::core::summary::summarize_days;
use rshiftplan::errors::AppError;
use rshiftplan::logging;
use rshiftplan::models::{
    BlockKind, CalendarConfig, ProjectionResult, Shift, ShiftHours, Span, WorkRequest,
};
use rshiftplan::{ProjectionOptions, Projector, ShiftCalendar};

fn project(req: &WorkRequest) -> ProjectionResult {
    logging::init_test();
    Projector::default().project(req).expect("projection succeeds")
}

fn kinds(result: &ProjectionResult) -> Vec<BlockKind> {
    result.blocks.iter().map(|b| b.kind).collect()
}

/// Conservation, ordering and window containment, checked on any result.
fn assert_well_formed(req: &WorkRequest, result: &ProjectionResult) {
    assert_close(result.minutes_of(BlockKind::Setup), req.setup_minutes);
    assert_close(result.minutes_of(BlockKind::Production), req.production_minutes);

    for pair in result.blocks.windows(2) {
        assert!(pair[0].end() <= pair[1].start(), "blocks overlap: {pair:?}");
    }

    // setup strictly precedes production
    if let Some(first_prod) = result.blocks.iter().position(|b| b.kind == BlockKind::Production) {
        assert!(result.blocks[first_prod..].iter().all(|b| b.kind != BlockKind::Setup));
    }

    let cal = ShiftCalendar::new(&req.calendar).unwrap();
    for b in result.blocks.iter().filter(|b| b.kind.is_work()) {
        let plan = cal.windows_for(b.day);
        assert!(plan.is_work_day, "work on closed day {}", b.day);
        let block_span = Span::new(b.start_minute, b.end_minute());
        let window = plan
            .windows
            .iter()
            .find(|w| block_span.within(&w.active))
            .unwrap_or_else(|| panic!("block outside windows: {b:?}"));
        assert!(
            window.breaks.iter().all(|brk| !block_span.overlaps(brk)),
            "work during a break: {b:?}"
        );
    }
}

#[test]
fn test_scenario_continuous_monday_spills_into_tuesday() {
    let req = WorkRequest::from_pieces(
        dt("2025-09-01 06:00"),
        60.0,
        60,
        15.0,
        CalendarConfig::continuous(date("2025-09-01")),
    );
    let result = project(&req);

    assert_eq!(result.completion, dt("2025-09-02 07:00"));
    assert_well_formed(&req, &result);

    let monday: Vec<_> = result
        .blocks
        .iter()
        .filter(|b| b.day == date("2025-09-01"))
        .collect();
    let breaks: Vec<(String, String)> = monday
        .iter()
        .filter(|b| b.kind == BlockKind::Break)
        .map(|b| (b.start_str(), b.end_str()))
        .collect();
    assert_eq!(
        breaks,
        vec![
            ("12:00".to_string(), "12:20".to_string()),
            ("19:30".to_string(), "19:50".to_string())
        ]
    );

    let monday_work: f64 = monday
        .iter()
        .filter(|b| b.kind.is_work())
        .map(|b| b.duration_minutes)
        .sum();
    assert_close(monday_work, (21.0 * 60.0 + 40.0 - 6.0 * 60.0) - 40.0);

    assert_eq!(
        kinds(&result),
        vec![
            BlockKind::Setup,
            BlockKind::Production,
            BlockKind::Break,
            BlockKind::Production,
            BlockKind::Break,
            BlockKind::Production,
            BlockKind::Production,
        ]
    );
}

#[test]
fn test_scenario_saturday_off_skips_to_monday() {
    let req = WorkRequest::new(
        dt("2025-09-06 06:00"),
        0.0,
        120.0,
        CalendarConfig::continuous(date("2025-09-06")),
    );
    let result = project(&req);

    assert!(result.blocks.iter().all(|b| b.day == date("2025-09-08")));
    assert_eq!(result.blocks[0].start(), dt("2025-09-08 06:00"));
    assert_eq!(result.completion, dt("2025-09-08 08:00"));
}

#[test]
fn test_scenario_single_shift_start_after_shift_end() {
    let req = WorkRequest::new(
        dt("2025-09-01 14:00"),
        30.0,
        30.0,
        CalendarConfig::single(Shift::Morning, date("2025-09-01")),
    );
    let result = project(&req);

    assert_eq!(result.blocks[0].start(), dt("2025-09-02 06:00"));
    assert_eq!(result.blocks[0].kind, BlockKind::Setup);
    assert_eq!(result.completion, dt("2025-09-02 07:00"));
    assert_well_formed(&req, &result);
}

#[test]
fn test_zero_request_returns_start_and_no_blocks() {
    // Sunday evening: nothing to do, so nothing moves.
    let start = dt("2025-09-07 22:15");
    let req = WorkRequest::new(start, 0.0, 0.0, CalendarConfig::continuous(date("2025-09-07")));
    let result = project(&req);

    assert_eq!(result.completion, start);
    assert!(result.blocks.is_empty());
}

#[test]
fn test_projection_is_idempotent() {
    let cal = CalendarConfig::single(Shift::Afternoon, date("2025-09-03"))
        .with_alternating_weeks(true)
        .with_saturday(true)
        .with_holidays([date("2025-09-09")]);
    let req = WorkRequest::from_pieces(dt("2025-09-03 15:10"), 45.0, 140, 12.5, cal);

    let first = project(&req);
    let second = project(&req);
    assert_eq!(first, second);
    assert_well_formed(&req, &first);
}

#[test]
fn test_start_before_window_is_clamped_without_idle_block() {
    let req = WorkRequest::new(
        dt("2025-09-01 04:00"),
        0.0,
        30.0,
        CalendarConfig::continuous(date("2025-09-01")),
    );
    let result = project(&req);

    assert_eq!(result.blocks.len(), 1);
    assert_eq!(result.blocks[0].start(), dt("2025-09-01 06:00"));
    assert_eq!(result.completion, dt("2025-09-01 06:30"));
}

#[test]
fn test_start_inside_break_logs_remaining_break() {
    let req = WorkRequest::new(
        dt("2025-09-01 12:10"),
        0.0,
        30.0,
        CalendarConfig::continuous(date("2025-09-01")),
    );
    let result = project(&req);

    assert_eq!(kinds(&result), vec![BlockKind::Break, BlockKind::Production]);
    assert_close(result.blocks[0].duration_minutes, 10.0);
    assert_eq!(result.blocks[1].start(), dt("2025-09-01 12:20"));
    assert_eq!(result.completion, dt("2025-09-01 12:50"));
}

#[test]
fn test_work_ending_at_break_start_emits_no_trailing_break() {
    let req = WorkRequest::new(
        dt("2025-09-01 06:00"),
        0.0,
        360.0,
        CalendarConfig::continuous(date("2025-09-01")),
    );
    let result = project(&req);

    assert_eq!(kinds(&result), vec![BlockKind::Production]);
    assert_eq!(result.completion, dt("2025-09-01 12:00"));
}

#[test]
fn test_setup_split_across_break_then_production() {
    let req = WorkRequest::new(
        dt("2025-09-01 11:30"),
        60.0,
        10.0,
        CalendarConfig::continuous(date("2025-09-01")),
    );
    let result = project(&req);

    assert_eq!(
        kinds(&result),
        vec![
            BlockKind::Setup,
            BlockKind::Break,
            BlockKind::Setup,
            BlockKind::Production
        ]
    );
    assert_eq!(result.blocks[3].start(), dt("2025-09-01 12:50"));
    assert_eq!(result.completion, dt("2025-09-01 13:00"));
}

#[test]
fn test_saturday_participation_and_finish_flag() {
    let cal = CalendarConfig::continuous(date("2025-09-06")).with_saturday(true);

    let short = project(&WorkRequest::new(dt("2025-09-06 06:00"), 0.0, 300.0, cal.clone()));
    assert_eq!(short.completion, dt("2025-09-06 11:00"));
    assert!(short.finishes_on_saturday());

    let long = project(&WorkRequest::new(dt("2025-09-06 06:00"), 0.0, 400.0, cal));
    assert!(long.blocks.iter().all(|b| b.kind != BlockKind::Break || b.day != date("2025-09-06")));
    assert_eq!(long.completion, dt("2025-09-08 06:40"));
    assert!(!long.finishes_on_saturday());
}

#[test]
fn test_holidays_are_skipped() {
    let cal = CalendarConfig::continuous(date("2025-09-01"))
        .with_holidays([date("2025-09-02"), date("2025-09-03")]);
    let req = WorkRequest::new(dt("2025-09-01 21:00"), 0.0, 100.0, cal);
    let result = project(&req);

    assert!(result.blocks.iter().all(|b| b.day != date("2025-09-02") && b.day != date("2025-09-03")));
    assert_eq!(result.completion, dt("2025-09-04 07:00"));
    assert_well_formed(&req, &result);
}

#[test]
fn test_alternating_weeks_switch_shift_on_monday() {
    let cal = CalendarConfig::single(Shift::Morning, date("2025-09-05")).with_alternating_weeks(true);
    let req = WorkRequest::new(dt("2025-09-05 06:00"), 0.0, 900.0, cal);
    let result = project(&req);

    let monday_first = result
        .blocks
        .iter()
        .find(|b| b.day == date("2025-09-08"))
        .expect("monday blocks");
    assert_eq!(monday_first.start(), dt("2025-09-08 13:50"));
    assert_eq!(result.completion, dt("2025-09-08 21:40"));
    assert_well_formed(&req, &result);
}

#[test]
fn test_fractional_minutes_do_not_drift() {
    let req = WorkRequest::new(
        dt("2025-09-01 06:00"),
        0.5,
        10.25,
        CalendarConfig::continuous(date("2025-09-01")),
    );
    let result = project(&req);

    assert_close(result.minutes_of(BlockKind::Setup), 0.5);
    assert_close(result.minutes_of(BlockKind::Production), 10.25);
    assert_eq!(
        result.completion,
        dt("2025-09-01 06:10") + chrono::Duration::seconds(45)
    );
}

#[test]
fn test_long_order_conserves_work_over_many_weeks() {
    let cal = CalendarConfig::single(Shift::Afternoon, date("2025-11-20"))
        .with_alternating_weeks(true)
        .with_saturday(true)
        .with_holidays([date("2025-12-08"), date("2025-12-25"), date("2025-12-26"), date("2026-01-01")]);
    let req = WorkRequest::from_pieces(dt("2025-11-20 17:45"), 95.0, 1234, 7.3, cal);
    let result = project(&req);

    assert_well_formed(&req, &result);
    let last_work = result.blocks.iter().rev().find(|b| b.kind.is_work()).unwrap();
    assert_eq!(result.completion, last_work.end());
}

#[test]
fn test_gap_between_windows_is_not_logged() {
    let hours = ShiftHours {
        morning: Span::hm((6, 0), (13, 0)),
        afternoon: Span::hm((14, 0), (21, 0)),
        afternoon_break: Span::hm((18, 0), (18, 15)),
        ..ShiftHours::default()
    };
    let cal = CalendarConfig::continuous(date("2025-09-01")).with_hours(hours);
    let req = WorkRequest::new(dt("2025-09-01 12:30"), 0.0, 60.0, cal);
    let result = project(&req);

    assert_eq!(kinds(&result), vec![BlockKind::Production, BlockKind::Production]);
    assert_eq!(result.blocks[1].start(), dt("2025-09-01 14:00"));
    assert_eq!(result.completion, dt("2025-09-01 14:30"));
}

#[test]
fn test_unreachable_calendar_fails_instead_of_looping() {
    let holidays: Vec<_> = date("2025-09-01").iter_days().take(60).collect();
    let cal = CalendarConfig::continuous(date("2025-09-01")).with_holidays(holidays);
    let req = WorkRequest::new(dt("2025-09-01 06:00"), 10.0, 0.0, cal);

    let projector = Projector::new(ProjectionOptions {
        max_day_advances: 20,
        ..ProjectionOptions::default()
    });
    match projector.project(&req) {
        Err(AppError::ScheduleUnreachable { advances, last_date }) => {
            assert_eq!(advances, 20);
            assert_eq!(last_date, date("2025-09-21"));
        }
        other => panic!("expected ScheduleUnreachable, got {other:?}"),
    }

    // same calendar, but the bound reaches past the holidays
    let wide = Projector::new(ProjectionOptions {
        max_day_advances: 100,
        ..ProjectionOptions::default()
    });
    let result = wide.project(&req).unwrap();
    assert_eq!(result.completion, dt("2025-10-31 06:10"));
}

#[test]
fn test_bound_counts_only_days_without_progress() {
    // 300 full weekdays of work: about 420 calendar days, past the default bound
    let req = WorkRequest::new(
        dt("2025-09-01 06:00"),
        0.0,
        300.0 * 900.0,
        CalendarConfig::continuous(date("2025-09-01")),
    );
    let result = Projector::default().project(&req).unwrap();

    assert_eq!(result.completion, dt("2026-10-23 21:40"));
    assert_close(result.minutes_of(BlockKind::Production), 270_000.0);

    // a weekend is three moves (Fri->Sat->Sun->Mon); each working day restarts the count
    let weekend = Projector::new(ProjectionOptions {
        max_day_advances: 3,
        ..ProjectionOptions::default()
    });
    let result = weekend.project(&req).unwrap();
    assert_eq!(result.completion, dt("2026-10-23 21:40"));

    let too_tight = Projector::new(ProjectionOptions {
        max_day_advances: 2,
        ..ProjectionOptions::default()
    });
    match too_tight.project(&req) {
        Err(AppError::ScheduleUnreachable { advances, last_date }) => {
            assert_eq!(advances, 2);
            assert_eq!(last_date, date("2025-09-07"));
        }
        other => panic!("expected ScheduleUnreachable, got {other:?}"),
    }
}

#[test]
fn test_negative_minutes_are_rejected() {
    let req = WorkRequest::new(
        dt("2025-09-01 06:00"),
        -1.0,
        10.0,
        CalendarConfig::continuous(date("2025-09-01")),
    );
    match Projector::default().project(&req) {
        Err(AppError::InvalidRequest { field, .. }) => assert_eq!(field, "setup_minutes"),
        other => panic!("expected InvalidRequest, got {other:?}"),
    }

    let req = WorkRequest::new(
        dt("2025-09-01 06:00"),
        0.0,
        f64::NAN,
        CalendarConfig::continuous(date("2025-09-01")),
    );
    match Projector::default().project(&req) {
        Err(AppError::InvalidRequest { field, .. }) => assert_eq!(field, "production_minutes"),
        other => panic!("expected InvalidRequest, got {other:?}"),
    }
}

#[test]
fn test_strict_shift_start_rejects_start_outside_assigned_shift() {
    let strict = Projector::new(ProjectionOptions {
        strict_shift_start: true,
        ..ProjectionOptions::default()
    });

    let outside = WorkRequest::new(
        dt("2025-09-01 14:00"),
        0.0,
        30.0,
        CalendarConfig::single(Shift::Morning, date("2025-09-01")),
    );
    match strict.project(&outside) {
        Err(AppError::InvalidRequest { field, .. }) => assert_eq!(field, "start"),
        other => panic!("expected InvalidRequest, got {other:?}"),
    }

    let at_shift_end = WorkRequest::new(
        dt("2025-09-01 13:50"),
        0.0,
        30.0,
        CalendarConfig::single(Shift::Morning, date("2025-09-01")),
    );
    match strict.project(&at_shift_end) {
        Err(AppError::InvalidRequest { field, .. }) => assert_eq!(field, "start"),
        other => panic!("expected InvalidRequest, got {other:?}"),
    }

    let inside = WorkRequest::new(
        dt("2025-09-01 08:00"),
        0.0,
        30.0,
        CalendarConfig::single(Shift::Morning, date("2025-09-01")),
    );
    assert_eq!(strict.project(&inside).unwrap().completion, dt("2025-09-01 08:30"));
}

#[test]
fn test_day_summaries_aggregate_per_calendar_day() {
    let req = WorkRequest::new(
        dt("2025-09-01 06:00"),
        60.0,
        900.0,
        CalendarConfig::continuous(date("2025-09-01")),
    );
    let days = summarize_days(&project(&req));

    assert_eq!(days.len(), 2);
    assert_eq!(days[0].day, date("2025-09-01"));
    assert_close(days[0].setup_minutes, 60.0);
    assert_close(days[0].production_minutes, 840.0);
    assert_close(days[0].break_minutes, 40.0);
    assert_close(days[0].first_start, 360.0);
    assert_close(days[0].last_end, 1300.0);
    assert_eq!(days[0].blocks, 6);

    assert_eq!(days[1].day, date("2025-09-02"));
    assert_close(days[1].work_minutes(), 60.0);
}
