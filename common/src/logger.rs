use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        if let Some(ref prefix) = self.prefix {
            println!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message);
        } else {
            println!("[{}][{}:{}] {}", timestamp, file_name, line, message);
        }
    }
}

/// First call wins; later calls keep the existing logger.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

pub fn debug_enabled() -> bool {
    LOGGER.get().is_some_and(Logger::is_verbose)
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

/// Like `log!`, but only printed when the logger was initialized as verbose.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logger::debug_enabled() {
            $crate::logger::log(file!(), line!(), &format!($($arg)*))
        }
    };
}
