//! Terminal output helpers.
//! 终端输出工具。

/// Print a success line in green.
/// 以绿色打印成功信息。
pub fn success(msg: &str) {
    println!("\x1b[32m{msg}\x1b[0m");
}

/// Print an error line in red.
/// 以红色打印错误信息。
pub fn error(msg: &str) {
    eprintln!("\x1b[31merror:\x1b[0m {msg}");
}
