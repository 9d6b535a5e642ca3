//! Console Logging
//!
//! Routes the `log` facade to the browser devtools console.

use log::{Level, LevelFilter};

use crate::error::{AppError, AppResult};

/// Console level for a filter; `Off` installs nothing
fn console_level(filter: LevelFilter) -> Option<Level> {
    filter.to_level()
}

/// Install the console logger. Call once, before mounting.
pub fn init(filter: LevelFilter) -> AppResult<()> {
    let Some(level) = console_level(filter) else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };
    console_log::init_with_level(level).map_err(|e| AppError::Logger(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_level() {
        assert_eq!(console_level(LevelFilter::Info), Some(Level::Info));
        assert_eq!(console_level(LevelFilter::Trace), Some(Level::Trace));
        assert_eq!(console_level(LevelFilter::Off), None);
    }
}
