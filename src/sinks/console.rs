//! 控制台输出监听器实现
//!
//! 把已格式化的消息行写到标准错误，按级别着色。着色可以关闭，比如
//! 输出被重定向到文件时。

use colored::Colorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::level::LogLevel;
use crate::sinks::traits::LogListener;

/// 控制台监听器。
///
/// 标准错误句柄本身带锁，单次 `write_all` 不会与其他线程交错。
#[derive(Debug)]
pub struct ConsoleListener {
    enabled: AtomicBool,
    use_color: bool,
}

impl ConsoleListener {
    /// 创建带颜色输出的控制台监听器。
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// 创建控制台监听器并指定是否着色。
    pub fn with_color(use_color: bool) -> Self {
        Self {
            enabled: AtomicBool::new(true),
            use_color,
        }
    }

    /// 开关这个监听器，独立于任何类别状态。
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    fn colorize(&self, level: LogLevel, message: &str) -> String {
        if !self.use_color {
            return message.to_string();
        }
        match level {
            LogLevel::Notice => message.green().to_string(),
            LogLevel::Error => message.red().to_string(),
            LogLevel::Warning => message.yellow().to_string(),
            LogLevel::Info => message.to_string(),
            LogLevel::Debug => message.dimmed().to_string(),
        }
    }
}

impl Default for ConsoleListener {
    fn default() -> Self {
        Self::new()
    }
}

impl LogListener for ConsoleListener {
    fn log(&self, level: LogLevel, message: &str) {
        if !self.is_enabled() {
            return;
        }

        let rendered = self.colorize(level, message);
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        let _ = handle.write_all(rendered.as_bytes());
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_toggle() {
        let listener = ConsoleListener::new();
        assert!(listener.is_enabled());
        assert!(listener.is_valid());

        listener.set_enabled(false);
        assert!(!listener.is_enabled());
        // 禁用状态下写入是空操作，不会 panic
        listener.log(LogLevel::Info, "dropped\n");
    }

    #[test]
    fn test_colorize_disabled_passes_through() {
        let listener = ConsoleListener::with_color(false);
        for level in [
            LogLevel::Notice,
            LogLevel::Error,
            LogLevel::Warning,
            LogLevel::Info,
            LogLevel::Debug,
        ] {
            assert_eq!(listener.colorize(level, "plain\n"), "plain\n");
        }
    }

    #[test]
    fn test_colorize_preserves_message_text() {
        let listener = ConsoleListener::new();
        let rendered = listener.colorize(LogLevel::Error, "boom\n");
        // 无论是否带转义序列，消息本体都要保留
        assert!(rendered.contains("boom"));
    }
}
