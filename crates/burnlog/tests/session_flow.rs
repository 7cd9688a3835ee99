use burnlog_core::{Activity, ActivityEntry, SessionLog};
use burnlog_model::{CalorieEstimator, SyntheticConfig};
use burnlog_tui::{calorie_series, duration_share, App};
use chrono::NaiveDate;
use crossterm::event::KeyCode;

fn entry(activity: Activity, day: u32, kcal: f64) -> ActivityEntry {
    ActivityEntry {
        activity,
        duration_min: 30,
        weight_kg: 70,
        date: NaiveDate::from_ymd_opt(2026, 4, day).unwrap(),
        estimated_kcal: kcal,
    }
}

#[test]
fn test_empty_session_renders_placeholders() {
    let log = SessionLog::new();
    // No chart data means the view falls back to the placeholder messages
    assert!(calorie_series(&log).is_empty());
    assert!(duration_share(&log).is_empty());
}

#[test]
fn test_three_distinct_dates_chart_in_order() {
    let mut log = SessionLog::new();
    log.append(entry(Activity::Running, 18, 250.0));
    log.append(entry(Activity::Cycling, 3, 480.0));
    log.append(entry(Activity::Swimming, 11, 360.0));

    let points = calorie_series(&log);
    assert_eq!(points.len(), 3);
    assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
    assert_eq!(points[0].1, 480.0);
    assert_eq!(points[2].1, 250.0);
}

#[test]
fn test_dashboard_confirm_flow_logs_shown_estimate() {
    let estimator = CalorieEstimator::train(&SyntheticConfig::new(), Some(42)).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 4, 20).unwrap();
    let mut app = App::new(estimator, today).unwrap();

    let shown = app.estimate_kcal();
    app.on_key(KeyCode::Enter).unwrap();

    assert_eq!(app.log().len(), 1);
    let logged = &app.log().entries()[0];
    assert_eq!(logged.activity, Activity::Running);
    assert_eq!(logged.duration_min, 30);
    assert_eq!(logged.weight_kg, 70);
    assert_eq!(logged.date, today);
    assert_eq!(logged.estimated_kcal, shown);
}

#[test]
fn test_k_appends_keep_insertion_order() {
    let mut log = SessionLog::new();
    for k in 0..10u32 {
        log.append(entry(Activity::Walking, k % 28 + 1, f64::from(k) * 50.0));
    }
    assert_eq!(log.len(), 10);
    for (k, e) in log.entries().iter().enumerate() {
        assert_eq!(e.estimated_kcal, k as f64 * 50.0);
    }
}
