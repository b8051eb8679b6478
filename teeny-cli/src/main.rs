//! Teeny CLI - command line front end for the Teeny language.
//! Teeny CLI - Teeny 语言的命令行界面。

mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use logging::LoggingArgs;

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "teeny")]
#[command(author, version, about = "Teeny - a tiny BASIC-like language front end", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    logging: LoggingArgs,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Check a source file for syntax and semantic errors. / 检查源文件的语法和语义错误。
    Check {
        /// The file to check, or `-` for stdin. / 要检查的文件，`-` 表示标准输入。
        file: String,

        /// Print only the one-line error message. / 仅打印单行错误信息。
        #[arg(long)]
        brief: bool,

        /// Disable colored diagnostics. / 禁用彩色诊断输出。
        #[arg(long)]
        no_color: bool,
    },

    /// Print the token stream of a file. / 打印文件的 token 流。
    Tokens {
        /// The file to scan, or `-` for stdin. / 要扫描的文件，`-` 表示标准输入。
        file: String,
    },
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();
    logging::init(cli.logging.level_filter());

    let quiet = cli.logging.is_quiet();
    let result = match cli.command {
        Commands::Check {
            file,
            brief,
            no_color,
        } => commands::check::run(
            &file,
            commands::Reporting {
                brief,
                color: !no_color,
                quiet,
            },
        ),
        Commands::Tokens { file } => commands::tokens::run(
            &file,
            commands::Reporting {
                brief: false,
                color: true,
                quiet,
            },
        ),
    };

    if let Err(e) = result {
        if !quiet {
            output::error(&e);
        }
        std::process::exit(1);
    }
}
