use chrono::NaiveDate;
use heatgrid::{Contribution, FixedClock, GraphConfig, GridError, Heatgrid};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn trailing_window_grid_from_builder() {
    let grid = Heatgrid::builder()
        .days(7)
        .push(Contribution::new("2024-03-08", 2.0))
        .push(Contribution::new("2024-03-08", 3.0).with_summary("late entry"))
        .build()
        .unwrap();

    let cells = grid.cells_with(&FixedClock(day(2024, 3, 10))).unwrap();
    assert_eq!(cells.len(), 7);
    assert_eq!(cells.first().unwrap().date, "2024-03-04");
    assert_eq!(cells.last().unwrap().date, "2024-03-10");

    let busy = cells.iter().find(|c| c.date == "2024-03-08").unwrap();
    assert_eq!(busy.value, 5.0);
    assert_eq!(busy.summary.as_deref(), Some("late entry"));
}

#[test]
fn fixed_range_accepts_string_and_structured_endpoints() {
    let grid = Heatgrid::builder()
        .from_date("2024-01-01")
        .to_date(day(2024, 1, 31))
        .build()
        .unwrap();
    let cells = grid.cells().unwrap();
    assert_eq!(cells.len(), 31);
    assert_eq!(cells[0].date, "2024-01-01");
}

#[test]
fn days_takes_precedence_over_fixed_endpoints() {
    let grid = Heatgrid::builder()
        .from_date("2020-01-01")
        .to_date("2020-12-31")
        .days(3)
        .build()
        .unwrap();
    let cells = grid.cells_with(&FixedClock(day(2024, 3, 10))).unwrap();
    assert_eq!(cells.len(), 3);
    assert_eq!(cells.first().unwrap().date, "2024-03-08");
}

#[test]
fn builder_rejects_missing_range() {
    let err = Heatgrid::builder().build().unwrap_err();
    assert!(matches!(err, GridError::InvalidArg(_)));

    let err = Heatgrid::builder().from_date("2024-01-01").build().unwrap_err();
    assert!(matches!(err, GridError::InvalidArg(_)));
}

#[test]
fn builder_rejects_zero_days_and_bad_start_of_week() {
    let err = Heatgrid::builder().days(0).build().unwrap_err();
    assert!(matches!(err, GridError::InvalidArg(_)));

    let err = Heatgrid::builder().days(7).start_of_week(9).build().unwrap_err();
    assert!(matches!(err, GridError::InvalidArg(_)));
}

#[test]
fn malformed_endpoint_fails_at_materialization() {
    let grid = Heatgrid::builder()
        .from_date("01/01/2024")
        .to_date("2024-01-31")
        .build()
        .unwrap();
    let err = grid.cells().unwrap_err();
    assert!(matches!(err, GridError::InvalidArg(_)));
}

#[test]
fn reversed_fixed_range_is_rejected() {
    let grid = Heatgrid::builder()
        .from_date("2024-02-01")
        .to_date("2024-01-01")
        .build()
        .unwrap();
    let err = grid.cells().unwrap_err();
    assert!(matches!(err, GridError::InvalidRange { .. }));
}

#[test]
fn builder_seeds_from_a_deserialized_config() {
    let raw = r#"{
        "fromDate": "2024-01-01",
        "toDate": "2024-01-03",
        "data": [
            {"date": "2024-01-02", "value": 4, "summary": "review day"}
        ]
    }"#;
    let cfg: GraphConfig = serde_json::from_str(raw).unwrap();
    let grid = Heatgrid::builder().config(cfg).build().unwrap();
    let cells = grid.cells().unwrap();
    assert_eq!(cells.len(), 3);
    assert_eq!(cells[1].value, 4.0);
    assert_eq!(cells[1].summary.as_deref(), Some("review day"));
}
