use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::age_breakdown;
use crate::format::{format_age, format_date, format_days_remaining};
use crate::input::DriverInput;
use crate::reminder::{Milestone, upcoming_milestones};
use crate::rules::AccompanimentStatus;
use crate::status::DriverStatusReport;
use crate::summary::{Restriction, active_restrictions};

const MIN_ALIGN_WIDTH: usize = 44;

enum Line {
    Header(String),
    Row(&'static str, String),
    Bullet(String),
    Blank,
}

/// Builds a `key: ..... value` row padded to `align_width` characters.
pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> String {
    let key_part = format!("{key}: ");
    let base_len = key_part.len() + value.len();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => format!("{} ", ".".repeat(n - 1)),
    };

    format!("{key_part}{dots}{value}")
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.len());
    format!("{base}{}", "-".repeat(dash_count))
}

fn percent(p: f64) -> String {
    format!("{:.0}%", p)
}

fn active(flag: bool) -> String {
    let word = if flag { "active" } else { "ended" };
    word.to_string()
}

fn period_rows(lines: &mut Vec<Line>, end: NaiveDate, days: u64, progress: f64) {
    lines.push(Line::Row("Ends", format_date(end)));
    lines.push(Line::Row("Remaining", format_days_remaining(days)));
    lines.push(Line::Row("Progress", percent(progress)));
}

fn collect_lines(input: &DriverInput, report: &DriverStatusReport) -> Vec<Line> {
    let mut lines = Vec::new();
    let age = age_breakdown(input.birth_date, report.reference_date);

    lines.push(Line::Header(format!(
        "Driver status on {}",
        format_date(report.reference_date)
    )));
    lines.push(Line::Row(
        "Age",
        format!("{} ({})", report.age, format_age(&age)),
    ));
    lines.push(Line::Row(
        "License",
        format!(
            "{} ({}), issued {}",
            input.license_type,
            input.license_type.description(),
            format_date(input.license_date)
        ),
    ));
    lines.push(Line::Row(
        "Young driver",
        if report.is_young_driver { "yes" } else { "no" }.to_string(),
    ));
    lines.push(Line::Blank);

    lines.push(Line::Header("- New driver".to_string()));
    lines.push(Line::Row("Status", active(report.is_new_driver)));
    period_rows(
        &mut lines,
        report.new_driver_end_date,
        report.days_remaining_new_driver,
        report.new_driver_progress,
    );
    lines.push(Line::Blank);

    lines.push(Line::Header("- Escort".to_string()));
    let escort = match report.accompaniment_status {
        AccompanimentStatus::Full => "full (all hours)",
        AccompanimentStatus::Night => "night only",
        AccompanimentStatus::None if report.was_young_when_licensed => "completed",
        AccompanimentStatus::None => "not required (licensed at 24 or older)",
    };
    lines.push(Line::Row("Mode", escort.to_string()));
    if let Some(end) = report.full_accompaniment_end_date {
        lines.push(Line::Row("Full ends", format_date(end)));
        lines.push(Line::Row(
            "Full remaining",
            format_days_remaining(report.days_remaining_full_accompaniment),
        ));
        lines.push(Line::Row(
            "Full progress",
            percent(report.full_accompaniment_progress),
        ));
    }
    if let Some(end) = report.night_accompaniment_end_date {
        lines.push(Line::Row("Night ends", format_date(end)));
        lines.push(Line::Row(
            "Night remaining",
            format_days_remaining(report.days_remaining_night_accompaniment),
        ));
        lines.push(Line::Row(
            "Night progress",
            percent(report.night_accompaniment_progress),
        ));
    }
    lines.push(Line::Blank);

    lines.push(Line::Header("- Passengers".to_string()));
    let passengers = match report.passenger_limit {
        Some(max) => format!("at most {max}"),
        None => "no limit".to_string(),
    };
    lines.push(Line::Row("Limit", passengers));
    lines.push(Line::Blank);

    lines.push(Line::Header("- Restrictions".to_string()));
    let restrictions = active_restrictions(report);
    if restrictions.is_empty() {
        lines.push(Line::Bullet("none".to_string()));
    }
    for r in &restrictions {
        lines.push(Line::Bullet(r.describe()));
    }

    lines
}

/// Plain-text report with aligned rows and section headers.
pub fn render_text(input: &DriverInput, report: &DriverStatusReport) -> String {
    let lines = collect_lines(input, report);

    let align_width = lines
        .iter()
        .map(|line| match line {
            Line::Row(k, v) => k.len() + 2 + v.len() + 2,
            Line::Header(h) => h.len() + 4,
            _ => 0,
        })
        .max()
        .unwrap_or(0)
        .max(MIN_ALIGN_WIDTH);

    let mut out = String::new();
    for line in &lines {
        match line {
            Line::Header(h) => out.push_str(&build_header_line(h, align_width)),
            Line::Row(k, v) => out.push_str(&build_stat_row(k, v, align_width)),
            Line::Bullet(text) => {
                out.push_str("  * ");
                out.push_str(text);
            }
            Line::Blank => {}
        }
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    input: &'a DriverInput,
    status: &'a DriverStatusReport,
    restrictions: Vec<Restriction>,
    upcoming_milestones: Vec<Milestone>,
}

/// Pretty JSON document holding the input, the report and derived views.
pub fn render_json(
    input: &DriverInput,
    report: &DriverStatusReport,
) -> serde_json::Result<String> {
    let doc = ReportDocument {
        input,
        status: report,
        restrictions: active_restrictions(report),
        upcoming_milestones: upcoming_milestones(report),
    };
    serde_json::to_string_pretty(&doc)
}
