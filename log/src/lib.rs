use std::{fmt::Display, str::FromStr};

use backtrace::Backtrace;
use tracing::{debug, error, info, level_filters::LevelFilter, trace, warn};

pub fn init(display_level: &bool, level_filter: &str) {
    let level_filter = match LevelFilter::from_str(level_filter) {
        Ok(level) => level,
        Err(err) => panic!("Invalid log level filter '{level_filter}': {err}"),
    };

    // A second init (tests spinning up several servers) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_level(*display_level)
        .with_max_level(level_filter)
        .with_target(false)
        .try_init();
}

fn line<T: Display>(prefix: Option<&str>, fallback: &str, msg: T) -> String {
    format!("{} {msg}", prefix.unwrap_or(fallback))
}

pub fn trace<T: Display>(prefix: Option<&str>, msg: T) {
    trace!("{}", line(prefix, "🐾", msg));
}

pub fn debug<T: Display>(prefix: Option<&str>, msg: T) {
    debug!("{}", line(prefix, "🐞", msg));
}

pub fn info<T: Display>(prefix: Option<&str>, msg: T) {
    info!("{}", line(prefix, "📢", msg));
}

pub fn warn<T: Display>(prefix: Option<&str>, msg: T) {
    warn!("{}", line(prefix, "⚠️", msg));
}

pub fn error<T: Display>(prefix: Option<&str>, msg: T) {
    let msg = line(prefix, "🚨", msg);
    if std::env::var("RUST_BACKTRACE").is_ok_and(|var| var == "1") {
        error!("{msg}\n{:?}", Backtrace::new());
    } else {
        error!("{msg}");
    }
}

pub fn panic<T: Display>(prefix: Option<&str>, msg: T) -> ! {
    panic!("{}", line(prefix, "☠️", msg));
}
