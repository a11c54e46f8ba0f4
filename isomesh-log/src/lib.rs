pub use log::{debug, error, info, log, log_enabled, trace, warn, Level, LevelFilter};
use once_cell::sync::OnceCell;

static LOG: OnceCell<Log> = OnceCell::new();

pub struct Log {
    pub instant: std::time::Instant,
    pub targets: Vec<(String, LevelFilter)>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            instant: std::time::Instant::now(),
            targets: vec![
                (String::from("isomesh_marching"), LevelFilter::Info),
                (String::from("isomesh"), LevelFilter::Info),
                (String::from(""), LevelFilter::Warn),
            ],
        }
    }
}

impl Log {
    /// Overrides level filter of a target prefix, or inserts it in front of the list
    pub fn with_target(mut self, target: impl Into<String>, level: LevelFilter) -> Self {
        let target = target.into();
        match self.targets.iter_mut().find(|(t, _)| *t == target) {
            Some(entry) => entry.1 = level,
            None => self.targets.insert(0, (target, level)),
        }
        self
    }

    /// Checks the first matching target prefix
    pub fn allows(&self, target: &str, level: Level) -> bool {
        for (target_filter, level_filter) in self.targets.iter() {
            if target.starts_with(target_filter.as_str()) {
                return level.to_level_filter() <= *level_filter;
            }
        }
        false
    }

    /// Returns most verbose level among the targets
    pub fn max_level(&self) -> LevelFilter {
        self.targets
            .iter()
            .map(|(_, level_filter)| *level_filter)
            .max()
            .unwrap_or(LevelFilter::Off)
    }
}

fn level_mark(level: Level) -> &'static str {
    match level {
        Level::Error => "!!",
        Level::Warn => "!~",
        Level::Info => "--",
        Level::Debug => "**",
        Level::Trace => "->",
    }
}

impl log::Log for Log {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.allows(metadata.target(), metadata.level())
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let elapsed = self.instant.elapsed().as_secs_f64();
            println!(
                "{:.4} {} {} - {}",
                elapsed,
                level_mark(record.level()),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

pub fn subscribe(logger: Log) {
    let max_level = logger.max_level();

    if LOG.set(logger).is_ok() {
        if let Some(logger) = LOG.get() {
            log::set_logger(logger)
                .map(|()| log::set_max_level(max_level))
                .expect("Other log subscription already exists");
        }
    } else {
        panic!("Log subscription must be initiated only once");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_target_wins() {
        let log = Log::default().with_target("isomesh_marching", LevelFilter::Debug);
        assert!(log.allows("isomesh_marching::grid", Level::Debug));
        assert!(!log.allows("isomesh_field", Level::Debug));
        assert!(log.allows("isomesh_field", Level::Info));
        assert!(!log.allows("cgmath", Level::Info));
        assert!(log.allows("cgmath", Level::Warn));
    }

    #[test]
    fn max_level_is_most_verbose() {
        let log = Log::default();
        assert_eq!(log.max_level(), LevelFilter::Info);
        let log = log.with_target("isomesh_mesh", LevelFilter::Trace);
        assert_eq!(log.max_level(), LevelFilter::Trace);
    }
}
