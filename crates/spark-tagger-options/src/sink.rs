//! 诊断输出：二进制加载遇到未知字段时的非致命报告通道。

use std::io::Write;

use tracing::warn;

/// 接收非致命诊断消息的出口。
///
/// # 契约说明（What）
/// - 报告不会中断加载，实现方不得 panic；
/// - [`DiagnosticSink::unknown_field`] 提供默认的消息格式，实现方通常只需实现 [`DiagnosticSink::report`]。
pub trait DiagnosticSink {
    /// 记录一条诊断消息。
    fn report(&mut self, message: &str);

    /// 报告二进制记录中出现了未知字段名。
    fn unknown_field(&mut self, name: &str) {
        self.report(&format!("unknown option field `{name}` in binary input, value ignored"));
    }
}

/// 把诊断转发为 `tracing` 的 `WARN` 事件。
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, message: &str) {
        warn!("{message}");
    }

    fn unknown_field(&mut self, name: &str) {
        warn!(
            field = name,
            "unknown option field in binary input, value ignored"
        );
    }
}

/// 收集全部消息，便于测试或调用方事后检查。
impl DiagnosticSink for Vec<String> {
    fn report(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}

/// 逐行写入任意 [`Write`] 目标，例如标准错误。
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// 包装写入目标。
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// 取回写入目标。
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticSink for WriterSink<W> {
    fn report(&mut self, message: &str) {
        if let Err(error) = writeln!(self.writer, "{message}") {
            warn!(%error, "diagnostic writer rejected a message");
        }
    }
}
