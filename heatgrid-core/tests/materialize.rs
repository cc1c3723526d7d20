use chrono::NaiveDate;
use heatgrid_core::types::{Contribution, ContributionItem};
use heatgrid_core::{FixedClock, materialize_grid, materialize_trailing_grid_with};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn dense_ascending_output_over_fixed_range() {
    let cells = materialize_grid(day(2024, 1, 29), day(2024, 2, 3), &[], 0).unwrap();
    let dates: Vec<&str> = cells.iter().map(|c| c.date.as_str()).collect();
    assert_eq!(
        dates,
        [
            "2024-01-29",
            "2024-01-30",
            "2024-01-31",
            "2024-02-01",
            "2024-02-02",
            "2024-02-03",
        ]
    );
}

#[test]
fn single_day_range_yields_one_cell() {
    let cells = materialize_grid(day(2024, 6, 1), day(2024, 6, 1), &[], 0).unwrap();
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].date, "2024-06-01");
}

#[test]
fn gaps_are_zero_filled() {
    let data = vec![Contribution::new("2024-01-02", 5.0).with_summary("busy day")];
    let cells = materialize_grid(day(2024, 1, 1), day(2024, 1, 3), &data, 0).unwrap();
    assert_eq!(cells[0].value, 0.0);
    assert_eq!(cells[0].summary, None);
    assert_eq!(cells[0].items, None);
    assert_eq!(cells[1].value, 5.0);
    assert_eq!(cells[1].summary.as_deref(), Some("busy day"));
    assert_eq!(cells[2].value, 0.0);
}

#[test]
fn leap_day_fields_are_derived_from_local_calendar() {
    let cells = materialize_grid(day(2024, 2, 29), day(2024, 2, 29), &[], 0).unwrap();
    let cell = &cells[0];
    assert_eq!(cell.date, "2024-02-29");
    assert_eq!(cell.year, 2024);
    assert_eq!(cell.month, 1);
    assert_eq!(cell.month_date, 29);
    // 2024-02-29 was a Thursday
    assert_eq!(cell.week_day, 4);
}

#[test]
fn records_outside_the_range_are_ignored() {
    let data = vec![
        Contribution::new("2023-12-31", 100.0),
        Contribution::new("2024-01-02", 2.0),
        Contribution::new("2024-01-04", 100.0),
    ];
    let cells = materialize_grid(day(2024, 1, 1), day(2024, 1, 3), &data, 0).unwrap();
    assert_eq!(cells.len(), 3);
    let total: f64 = cells.iter().map(|c| c.value).sum();
    assert_eq!(total, 2.0);
}

#[test]
fn malformed_keys_never_join_a_day() {
    let data = vec![Contribution::new("2024-1-2", 7.0)];
    let cells = materialize_grid(day(2024, 1, 1), day(2024, 1, 3), &data, 0).unwrap();
    assert!(cells.iter().all(|c| c.value == 0.0));
}

#[test]
fn items_ride_along_on_the_winning_record() {
    let items = vec![ContributionItem {
        label: "release".into(),
        value: 2.0,
        link: None,
    }];
    let data = vec![
        Contribution::new("2024-01-02", 1.0),
        Contribution::new("2024-01-02", 2.0).with_items(items.clone()),
    ];
    let cells = materialize_grid(day(2024, 1, 2), day(2024, 1, 2), &data, 0).unwrap();
    assert_eq!(cells[0].value, 3.0);
    assert_eq!(cells[0].items.as_deref(), Some(items.as_slice()));
}

#[test]
fn start_of_week_has_no_effect_on_cells() {
    let data = vec![Contribution::new("2024-01-02", 5.0)];
    let sunday = materialize_grid(day(2024, 1, 1), day(2024, 1, 7), &data, 0).unwrap();
    let monday = materialize_grid(day(2024, 1, 1), day(2024, 1, 7), &data, 1).unwrap();
    assert_eq!(sunday, monday);
}

#[test]
fn trailing_grid_spans_today_backwards() {
    let clock = FixedClock(day(2024, 3, 10));
    let cells = materialize_trailing_grid_with(&clock, 7, &[], 0).unwrap();
    assert_eq!(cells.len(), 7);
    assert_eq!(cells.first().unwrap().date, "2024-03-04");
    assert_eq!(cells.last().unwrap().date, "2024-03-10");
    // 2024-03-10 was a Sunday
    assert_eq!(cells.last().unwrap().week_day, 0);
}

#[test]
fn materialization_is_idempotent() {
    let data = vec![
        Contribution::new("2024-01-02", 5.0).with_summary("a"),
        Contribution::new("2024-01-02", 1.0).with_summary("b"),
        Contribution::new("2024-01-05", 2.0),
    ];
    let once = materialize_grid(day(2024, 1, 1), day(2024, 1, 7), &data, 0).unwrap();
    let twice = materialize_grid(day(2024, 1, 1), day(2024, 1, 7), &data, 0).unwrap();
    assert_eq!(once, twice);
}
