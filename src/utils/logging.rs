use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Install the global logger.
///
/// Format: `[YYYY-MM-DD HH:MM:SS] [LEVEL] message`. `RUST_LOG` still applies on
/// top of `level`.
pub fn init_logger(level: LevelFilter) {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(level)
        .parse_default_env()
        .init();
}
