//! Colorful console output for roster events.
//!
//! Provides a custom `tracing` layer that formats ShiftForge events with
//! colors. Enabled with the `console` feature.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the ShiftForge banner and sets up tracing with `RUST_LOG`, or
/// `shiftforge=info` when unset.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("shiftforge=info"));

        // A subscriber installed elsewhere wins.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(RosterConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
 ____  _     _  __ _   _____
/ ___|| |__ (_)/ _| |_|  ___|__  _ __ __ _  ___
\___ \| '_ \| | |_| __| |_ / _ \| '__/ _` |/ _ \
 ___) | | | | |  _| |_|  _| (_) | | | (_| |  __/
|____/|_| |_|_|_|  \__|_|  \___/|_|  \__, |\___|
                                     |___/
"#;

    let version_line = format!(
        "                 v{} - Cyclic Shift Rostering\n",
        env!("CARGO_PKG_VERSION")
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats ShiftForge events with colors.
pub struct RosterConsoleLayer;

impl<S: Subscriber> Layer<S> for RosterConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("shiftforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(*metadata.level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    event: Option<String>,
    path: Option<String>,
    employees: Option<u64>,
    days: Option<u64>,
    shifts: Option<u64>,
    conditions: Option<u64>,
    schedules: Option<u64>,
    total: Option<i64>,
    best_total: Option<i64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        match field.name() {
            "message" => self.message = Some(s),
            "event" => self.event = Some(s),
            "path" => self.path = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "employees" => self.employees = Some(value),
            "days" => self.days = Some(value),
            "shifts" => self.shifts = Some(value),
            "conditions" => self.conditions = Some(value),
            "schedules" => self.schedules = Some(value),
            "total" => self.total = Some(value as i64),
            "best_total" => self.best_total = Some(value as i64),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "total" => self.total = Some(value),
            "best_total" => self.best_total = Some(value),
            _ if value >= 0 => self.record_u64(field, value as u64),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_string()),
            "event" => self.event = Some(value.to_string()),
            "path" => self.path = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(level: Level, v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("problem_loaded") => format_problem_loaded(v),
        Some("evaluate_batch") => format_batch(v),
        _ => match v.message.as_deref() {
            Some("Loading roster configuration") => format_config_loaded(v),
            Some(msg) if level <= Level::INFO => format_plain(level, msg),
            _ => String::new(),
        },
    }
}

fn format_problem_loaded(v: &EventVisitor) -> String {
    let employees = v.employees.unwrap_or(0);
    let days = v.days.unwrap_or(0);
    let shifts = v.shifts.unwrap_or(0);
    let conditions = v.conditions.unwrap_or(employees * days);

    format!(
        "{} {} {} employee count ({}), day count ({}), shift count ({}), cell count ({}), problem scale ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Roster]".bright_cyan(),
        employees.to_formatted_string(&Locale::en).bright_yellow(),
        days.to_formatted_string(&Locale::en).bright_yellow(),
        shifts.to_formatted_string(&Locale::en).bright_yellow(),
        conditions.to_formatted_string(&Locale::en).bright_yellow(),
        calculate_problem_scale(conditions as usize, shifts as usize).bright_magenta()
    )
}

fn format_config_loaded(v: &EventVisitor) -> String {
    format!(
        "{} {} {} loading {}",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Config]".bright_cyan(),
        v.path.as_deref().unwrap_or("?").white().bold()
    )
}

fn format_batch(v: &EventVisitor) -> String {
    let schedules = v.schedules.unwrap_or(0);
    let best = v.best_total.unwrap_or(0);

    format!(
        "{} {} {} evaluated {} schedules, best total ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Batch]".bright_cyan(),
        schedules.to_formatted_string(&Locale::en).white(),
        format_total(best)
    )
}

fn format_plain(level: Level, msg: &str) -> String {
    let level = match level {
        Level::ERROR => "ERROR".bright_red().to_string(),
        Level::WARN => "WARN".bright_yellow().to_string(),
        _ => "INFO".bright_green().to_string(),
    };
    format!("{} {} {}", timestamp().bright_black(), level, msg)
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_total(total: i64) -> String {
    if total == 0 {
        total.to_string().bright_green().to_string()
    } else {
        total.to_string().bright_red().to_string()
    }
}

/// `shifts ^ cells`, the number of distinct flat schedules.
fn calculate_problem_scale(cells: usize, shifts: usize) -> String {
    if cells == 0 || shifts == 0 {
        return "0".to_string();
    }

    let log_scale = (cells as f64) * (shifts as f64).log10();
    let exponent = log_scale.floor() as i32;
    let mantissa = 10f64.powf(log_scale - exponent as f64);

    format!("{:.3} x 10^{}", mantissa, exponent)
}
