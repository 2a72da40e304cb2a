use std::io::Write;

use chrono::Utc;
use colored::{Color, ColoredString, Colorize as _};
use env_logger::{Builder, Env, Target};
use log::Level;

const CRATE_PREFIX: &str = "spbu_timetable::";

/// Logs go to stderr so that stdout only carries the JSON output.
///
/// `verbosity` is the number of `-v` flags; `RUST_LOG` still overrides it.
pub fn init(verbosity: u8) {
    Builder::new()
        .parse_env(Env::default().default_filter_or(default_filter(verbosity)))
        .target(Target::Stderr)
        .format(|f, record| {
            let time = Utc::now().format("%H:%M:%S%.3f").to_string().dimmed();
            let level = level_tag(record.level());
            let target = record.target();
            let target = target.strip_prefix(CRATE_PREFIX).unwrap_or(target).dimmed();
            match record.level() {
                Level::Warn | Level::Error => {
                    let message = record.args().to_string().color(color_by_level(record.level()));
                    writeln!(f, "{time} {level} {target}: {message}")
                }
                _ => writeln!(f, "{time} {level} {target}: {}", record.args()),
            }
        })
        .init();
}

/// Dependencies stay at `warn` until asked for everything.
const fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 if cfg!(debug_assertions) => "warn,spbu_timetable=debug",
        0 => "warn,spbu_timetable=info",
        1 => "warn,spbu_timetable=debug",
        2 => "info,spbu_timetable=trace",
        _ => "trace",
    }
}

fn level_tag(level: Level) -> ColoredString {
    format!("{:<5}", level.as_str()).color(color_by_level(level)).bold()
}

const fn color_by_level(level: Level) -> Color {
    match level {
        Level::Trace => Color::Magenta,
        Level::Debug => Color::Blue,
        Level::Info => Color::Green,
        Level::Warn => Color::Yellow,
        Level::Error => Color::Red,
    }
}
