//! Log level selection and subscriber setup.
//! 日志级别选择和订阅器初始化。

use clap::{ArgAction, Args};
use tracing::level_filters::LevelFilter;

/// `-v`/`-q` flags, each counted up to two.
#[derive(Debug, Clone, Copy, Args)]
pub struct LoggingArgs {
    /// More log output (-v debug, -vv trace). / 更多日志输出。
    #[arg(short, long, action = ArgAction::Count, global = true, conflicts_with = "quiet")]
    verbose: u8,

    /// Less output (-q errors only, -qq silent). / 更少输出。
    #[arg(short, long, action = ArgAction::Count, global = true)]
    quiet: u8,
}

impl LoggingArgs {
    pub fn level_filter(&self) -> LevelFilter {
        let sum = self.verbose.min(2) as i8 - self.quiet.min(2) as i8;
        match sum {
            i8::MIN..=-2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet > 1
    }
}

/// Install a stderr subscriber at the given level.
/// 在给定级别安装输出到标准错误的订阅器。
pub fn init(filter: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
