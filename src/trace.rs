use chrono::{Local, SecondsFormat};
use tracing_subscriber::{
    filter::Targets,
    fmt::{self, time},
    prelude::*,
};
use yansi::Paint;

use crate::config::Log;

pub fn init(log: &Log) {
    let is_color = log.style.is_color();
    if !is_color {
        yansi::disable();
    }
    let format = fmt::layer().with_timer(LocalTime).with_ansi(is_color);
    let filter = match parse_filter(&log.level) {
        Ok(f) => f,
        Err(err) => panic!("{}", err.red().bold()),
    };

    tracing_subscriber::registry()
        .with(format)
        .with(filter)
        .init();
}

fn parse_filter(level: &str) -> Result<Targets, String> {
    level
        .parse()
        .map_err(|e| format!("log level `{}` did not parse successfully: {}", level, e))
}

struct LocalTime;

impl time::FormatTime for LocalTime {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            Local::now().to_rfc3339_opts(SecondsFormat::Millis, false)
        )
    }
}
