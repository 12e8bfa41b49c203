//! PrismLog 事件定义
//!
//! 此模块定义临时的日志事件结构和面向监听器的行格式。事件只在单次
//! `log` 调用内存在，从不持久化。
//!
//! 行格式是对监听器的稳定线格式：
//! `"<时间戳> <路径>:<行号> <级别字符>[<短名>]: <消息>\n"`

use chrono::{DateTime, Local};

use crate::category::LogCategory;
use crate::level::LogLevel;

/// 渲染后消息体的长度上限（字节）。
///
/// 超长消息被截断而不是报错：无界的日志消息是资源问题而不是正确性
/// 问题。
pub const MAX_MESSAGE_LEN: usize = 1024;

/// 时间戳格式：分:秒:毫秒。
const TIMESTAMP_FORMAT: &str = "%M:%S:%3f";

/// 临时日志事件。
///
/// `file` 是已经过路径截短的源文件路径，`message` 是已渲染、已截断的
/// 消息体（不带换行符）。
#[derive(Debug, Clone)]
pub struct LogEvent {
    /// 事件时间戳
    pub timestamp: DateTime<Local>,
    /// 日志级别
    pub level: LogLevel,
    /// 子系统类别
    pub category: LogCategory,
    /// 源文件路径（项目相对形式）
    pub file: String,
    /// 源文件行号
    pub line: u32,
    /// 渲染后的消息体
    pub message: String,
}

impl LogEvent {
    /// 以当前时间构造事件。消息体在这里被截断到 [`MAX_MESSAGE_LEN`]。
    pub fn new(
        level: LogLevel,
        category: LogCategory,
        file: &str,
        line: u32,
        mut message: String,
    ) -> Self {
        truncate_message(&mut message);
        Self {
            timestamp: Local::now(),
            level,
            category,
            file: file.to_string(),
            line,
            message,
        }
    }

    /// 组合面向监听器的最终输出行，以换行符结尾。
    pub fn to_line(&self) -> String {
        format!(
            "{} {}:{} {}[{}]: {}\n",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.file,
            self.line,
            self.level.as_char(),
            self.category.short_name(),
            self.message
        )
    }
}

/// 把消息体截断到上限，保证落在字符边界上。
pub(crate) fn truncate_message(message: &mut String) {
    if message.len() > MAX_MESSAGE_LEN {
        let mut cut = MAX_MESSAGE_LEN;
        while !message.is_char_boundary(cut) {
            cut -= 1;
        }
        message.truncate(cut);
    }
}
