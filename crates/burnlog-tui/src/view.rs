//! Dashboard rendering

use crate::app::App;
use burnlog_core::{Activity, ActivityForm, FormField, SessionLog};
use chrono::{Datelike, NaiveDate};
use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, BarChart, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table},
};

const NO_LOG_MESSAGE: &str = "No activities logged yet. Add an entry from the sidebar.";
const NO_CHART_MESSAGE: &str = "No data to visualize. Start logging your activities.";

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(0)])
        .split(f.size());

    draw_sidebar(f, app, chunks[0]);
    draw_main(f, app, chunks[1]);
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Length(8), Constraint::Min(0)])
        .split(area);

    let form_widget = Paragraph::new(form_lines(app.form()))
        .block(Block::default().borders(Borders::ALL).title("Log Your Activity"));
    f.render_widget(form_widget, chunks[0]);

    let help = Paragraph::new(vec![
        Line::from("Tab/Down   next field"),
        Line::from("Left/Right adjust value"),
        Line::from("Enter      add entry"),
        Line::from("q/Esc      quit"),
    ])
    .block(Block::default().borders(Borders::ALL).title("Keys"));
    f.render_widget(help, chunks[1]);

    if let Some(status) = app.status() {
        let status_widget = Paragraph::new(status)
            .style(Style::default().fg(Color::Green))
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(status_widget, chunks[2]);
    }
}

fn form_lines(form: &ActivityForm) -> Vec<Line<'static>> {
    let field = |label: &str, value: String, focused: bool| {
        let marker = if focused { "> " } else { "  " };
        let style = if focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(Span::styled(format!("{marker}{label:<10}{value}"), style))
    };

    vec![
        field(
            "Activity",
            form.activity.to_string(),
            form.focused == FormField::Activity,
        ),
        field(
            "Duration",
            format!("{} min", form.duration_min),
            form.focused == FormField::Duration,
        ),
        field(
            "Weight",
            format!("{} kg", form.weight_kg),
            form.focused == FormField::Weight,
        ),
        field(
            "Date",
            form.date.to_string(),
            form.focused == FormField::Date,
        ),
    ]
}

fn draw_main(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Min(5),
        ])
        .split(area);

    let metric = Paragraph::new(format!("{:.2} kcal", app.estimate_kcal()))
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Estimated Calories Burned"),
        );
    f.render_widget(metric, chunks[0]);

    draw_table(f, app.log(), chunks[1]);
    draw_calorie_chart(f, app.log(), chunks[2]);
    draw_distribution(f, app.log(), chunks[3]);
}

fn draw_table(f: &mut Frame, log: &SessionLog, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Activity Log");

    if log.is_empty() {
        f.render_widget(Paragraph::new(NO_LOG_MESSAGE).block(block), area);
        return;
    }

    let header = Row::new(["Date", "Activity", "Duration", "Weight", "Calories"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = log
        .entries()
        .iter()
        .map(|e| {
            Row::new(vec![
                Cell::from(e.date.to_string()),
                Cell::from(e.activity.as_str()),
                Cell::from(format!("{} min", e.duration_min)),
                Cell::from(format!("{} kg", e.weight_kg)),
                Cell::from(format!("{:.2}", e.estimated_kcal)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(10),
    ];
    f.render_widget(Table::new(rows, widths).header(header).block(block), area);
}

fn draw_calorie_chart(f: &mut Frame, log: &SessionLog, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Calories Burned Over Time");

    let points = calorie_series(log);
    if points.is_empty() {
        f.render_widget(Paragraph::new(NO_CHART_MESSAGE).block(block), area);
        return;
    }

    let mut x_min = points[0].0;
    let mut x_max = points[points.len() - 1].0;
    if x_min == x_max {
        // Single-date log: widen the window so the axis stays valid
        x_min -= 1.0;
        x_max += 1.0;
    }
    let y_max = points.iter().map(|p| p.1).fold(0.0_f64, f64::max).max(1.0) * 1.1;

    let dataset = Dataset::default()
        .name("kcal")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Red))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([x_min, x_max])
                .labels(vec![
                    Span::raw(date_label(x_min)),
                    Span::raw(date_label(x_max)),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{:.0}", y_max / 2.0)),
                    Span::raw(format!("{y_max:.0}")),
                ]),
        );
    f.render_widget(chart, area);
}

fn draw_distribution(f: &mut Frame, log: &SessionLog, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Activity Distribution (minutes)");

    let shares = duration_share(log);
    if shares.is_empty() {
        f.render_widget(Paragraph::new(NO_CHART_MESSAGE).block(block), area);
        return;
    }

    let data: Vec<(&str, u64)> = shares
        .iter()
        .map(|(activity, minutes)| (activity.as_str(), *minutes))
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(&data)
        .bar_width(9)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    f.render_widget(chart, area);
}

/// Calories-over-time points, sorted chronologically. The x value is the
/// date's day number so distinct dates stay distinct on the axis.
pub fn calorie_series(log: &SessionLog) -> Vec<(f64, f64)> {
    let mut points: Vec<(NaiveDate, f64)> = log
        .entries()
        .iter()
        .map(|e| (e.date, e.estimated_kcal))
        .collect();
    points.sort_by_key(|(date, _)| *date);
    points
        .into_iter()
        .map(|(date, kcal)| (f64::from(date.num_days_from_ce()), kcal))
        .collect()
}

/// Total logged minutes per activity, in `Activity::ALL` order, activities
/// with no entries omitted. Drives the distribution chart.
pub fn duration_share(log: &SessionLog) -> Vec<(Activity, u64)> {
    Activity::ALL
        .iter()
        .map(|&activity| {
            let minutes: u64 = log
                .entries()
                .iter()
                .filter(|e| e.activity == activity)
                .map(|e| u64::from(e.duration_min))
                .sum();
            (activity, minutes)
        })
        .filter(|(_, minutes)| *minutes > 0)
        .collect()
}

fn date_label(day_number: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(day_number as i32)
        .map(|date| date.format("%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use burnlog_core::ActivityEntry;

    fn entry(activity: Activity, duration: u32, day: u32, kcal: f64) -> ActivityEntry {
        ActivityEntry {
            activity,
            duration_min: duration,
            weight_kg: 70,
            date: NaiveDate::from_ymd_opt(2026, 2, day).unwrap(),
            estimated_kcal: kcal,
        }
    }

    #[test]
    fn test_empty_log_yields_no_chart_data() {
        let log = SessionLog::new();
        assert!(calorie_series(&log).is_empty());
        assert!(duration_share(&log).is_empty());
    }

    #[test]
    fn test_calorie_series_chronological() {
        let mut log = SessionLog::new();
        // Appended out of date order on purpose
        log.append(entry(Activity::Running, 30, 20, 300.0));
        log.append(entry(Activity::Cycling, 45, 5, 400.0));
        log.append(entry(Activity::Walking, 60, 12, 200.0));

        let points = calorie_series(&log);
        assert_eq!(points.len(), 3);
        assert!(points[0].0 < points[1].0 && points[1].0 < points[2].0);
        // Sorted x order carries the entries' calories with it
        assert_eq!(points[0].1, 400.0);
        assert_eq!(points[1].1, 200.0);
        assert_eq!(points[2].1, 300.0);
    }

    #[test]
    fn test_calorie_series_keeps_duplicate_dates() {
        let mut log = SessionLog::new();
        log.append(entry(Activity::Running, 30, 10, 300.0));
        log.append(entry(Activity::Running, 30, 10, 350.0));

        let points = calorie_series(&log);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].0, points[1].0);
    }

    #[test]
    fn test_duration_share_aggregates_in_activity_order() {
        let mut log = SessionLog::new();
        log.append(entry(Activity::Walking, 60, 1, 100.0));
        log.append(entry(Activity::Running, 30, 2, 200.0));
        log.append(entry(Activity::Running, 20, 3, 150.0));

        let shares = duration_share(&log);
        assert_eq!(
            shares,
            vec![(Activity::Running, 50), (Activity::Walking, 60)]
        );
    }

    #[test]
    fn test_date_label_formats_month_day() {
        let day = f64::from(NaiveDate::from_ymd_opt(2026, 2, 5).unwrap().num_days_from_ce());
        assert_eq!(date_label(day), "02-05");
    }
}
