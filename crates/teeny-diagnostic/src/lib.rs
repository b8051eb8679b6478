//! Diagnostic and error reporting for Teeny.
//! Teeny 的诊断和错误报告。
//!
//! Diagnostics are rendered into a string with ariadne; the caller decides
//! where it goes.
//! 诊断信息通过 ariadne 渲染为字符串，由调用方决定输出位置。

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Label};

use ariadne::{
    ColorGenerator, Config, IndexType, Label as AriadneLabel, Report, ReportKind, Source,
};
use std::io;
use std::ops::Range;
use teeny_common::Span;

/// Byte range of `span` that ariadne can draw against `source`.
/// 将 `span` 转换为 ariadne 可在 `source` 上绘制的字节区间。
///
/// Spans past the end are pulled back in, and a zero-width span is widened to
/// one character. End-of-input errors land on the last visible character.
fn visible(span: Span, source: &str) -> Range<usize> {
    let len = source.len();
    let Range { start, end } = span.range();
    if !span.is_empty() && end <= len {
        return start..end;
    }

    let start = start.min(len);
    let next = source.get(start..).and_then(|rest| rest.chars().next());
    if let Some(ch) = next.filter(|ch| !ch.is_whitespace()) {
        return start..start + ch.len_utf8();
    }

    // Back up over trailing whitespace to the last thing the user wrote.
    let head = source.get(..start).unwrap_or(source);
    head.char_indices()
        .rev()
        .find(|(_, ch)| !ch.is_whitespace())
        .or_else(|| head.char_indices().next_back())
        .map(|(i, ch)| i..i + ch.len_utf8())
        .unwrap_or(start..start)
}

fn build_report<'a>(
    source: &str,
    filename: &'a str,
    diagnostic: &Diagnostic,
    color: bool,
) -> Report<'a, (&'a str, Range<usize>)> {
    let primary_range = visible(diagnostic.span, source);

    let mut colors = ColorGenerator::new();
    let mut report = Report::build(ReportKind::Error, filename, primary_range.start)
        .with_config(
            Config::default()
                .with_color(color)
                .with_index_type(IndexType::Byte),
        )
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    // The primary span is always labeled; extra labels follow it.
    let primary = diagnostic
        .code
        .map(|code| code.description())
        .unwrap_or("here");
    report = report.with_label(
        AriadneLabel::new((filename, primary_range))
            .with_message(primary)
            .with_color(colors.next()),
    );

    for label in &diagnostic.labels {
        let ariadne_label = AriadneLabel::new((filename, visible(label.span, source)))
            .with_message(&label.message)
            .with_color(colors.next());
        report = report.with_label(ariadne_label);
    }

    for note in &diagnostic.notes {
        report = report.with_note(note);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report.finish()
}

/// Render a diagnostic into a string.
/// 将诊断信息渲染为字符串。
pub fn render(
    source: &str,
    filename: &str,
    diagnostic: &Diagnostic,
    color: bool,
) -> io::Result<String> {
    let mut out = Vec::new();
    build_report(source, filename, diagnostic, color)
        .write((filename, Source::from(source)), &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
