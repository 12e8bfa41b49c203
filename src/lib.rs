//! # PrismLog (棱镜日志)
//!
//! 进程级结构化日志调度器：把带类别和级别的日志调用路由到一组可热插
//! 拔的监听器（文件、控制台、宿主窗口）。
//!
//! ## 核心特性
//!
//! - **两段过滤**: 类别开关 + 全局级别，再加空订阅快速路径，全部在
//!   消息格式化之前完成
//! - **单次格式化**: 通过过滤的消息只格式化一次，同一行交给所有订阅者
//! - **无大锁调度**: 级别、类别开关、订阅集合全部原子化，互斥只存在于
//!   监听器内部的单次写入
//! - **宽容配置**: 配置文件缺失或损坏回退到默认值，越界详细程度被钳制
//! - **打了就走**: `log` 调用从不失败、从不 panic，错误不跨越日志边界
//!
//! ## 快速开始
//!
//! 推荐由组装根持有调度器实例：
//!
//! ```no_run
//! use prism_log::{LogCategory, LogDispatcher, LogLevel};
//!
//! let dispatcher = LogDispatcher::builder()
//!     .config_path("logger.toml")
//!     .log_file("prism.log")
//!     .build();
//!
//! dispatcher.set_level(LogLevel::Info);
//! dispatcher.set_category_enabled(LogCategory::Boot, true);
//! dispatcher.log(
//!     LogLevel::Info,
//!     LogCategory::Boot,
//!     file!(),
//!     line!(),
//!     format_args!("loaded {}", "game.iso"),
//! );
//! ```
//!
//! 无法传递实例的调用点可以走全局接口和日志宏：
//!
//! ```no_run
//! use prism_log::LogCategory;
//!
//! prism_log::init().unwrap();
//! prism_log::info_log!(LogCategory::Boot, "loaded {}", "game.iso");
//! prism_log::shutdown().unwrap();
//! ```

pub mod category;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod error;
pub mod level;
pub mod sinks;

pub use category::LogCategory;
pub use config::{load_config_from_file, load_config_from_str, PrismLoggerConfig};
pub use core::{LogDispatcher, LogDispatcherBuilder, MAX_MESSAGE_LEN};
pub use diagnostics::DiagnosticsSnapshot;
pub use error::{PrismLogError, Result};
pub use level::LogLevel;
pub use sinks::traits::{ListenerId, LogListener, RegisteredListener};

use std::fmt;
use std::path::Path;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

/// 版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 全局调度器槽位。这是给无法传递实例的调用点准备的兼容层，组装根持有
// 自己的 LogDispatcher 时不需要它。
static GLOBAL_DISPATCHER: Lazy<RwLock<Option<Arc<LogDispatcher>>>> =
    Lazy::new(|| RwLock::new(None));

fn global_slot_write() -> std::sync::RwLockWriteGuard<'static, Option<Arc<LogDispatcher>>> {
    match GLOBAL_DISPATCHER.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn global_slot_read() -> std::sync::RwLockReadGuard<'static, Option<Arc<LogDispatcher>>> {
    match GLOBAL_DISPATCHER.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// 用默认配置初始化全局调度器。
///
/// 重复初始化返回 [`PrismLogError::AlreadyInitialized`]。
pub fn init() -> Result<()> {
    init_with(LogDispatcher::new())
}

/// 用给定配置初始化全局调度器。
pub fn init_with_config(config: PrismLoggerConfig) -> Result<()> {
    init_with(LogDispatcher::with_config(config))
}

/// 从配置文件初始化全局调度器，文件缺失或损坏时使用默认配置。
pub fn init_from_file<P: AsRef<Path>>(path: P) -> Result<()> {
    init_with(LogDispatcher::builder().config_path(path).build())
}

/// 把已构造的调度器安装为全局实例。
pub fn init_with(dispatcher: LogDispatcher) -> Result<()> {
    let mut slot = global_slot_write();
    if slot.is_some() {
        return Err(PrismLogError::AlreadyInitialized);
    }
    *slot = Some(Arc::new(dispatcher));
    Ok(())
}

/// 关闭全局调度器并释放其自有的监听器。
///
/// 未初始化时关闭不是错误。已被其他线程克隆走的调度器句柄在各自释放
/// 前继续有效。
pub fn shutdown() -> Result<()> {
    let mut slot = global_slot_write();
    slot.take();
    Ok(())
}

/// 获取全局调度器的句柄，未初始化时返回 `None`。
pub fn global() -> Option<Arc<LogDispatcher>> {
    global_slot_read().clone()
}

/// 日志宏的调度入口。未初始化时静默丢弃，与打了就走的约定保持一致。
pub fn dispatch(
    level: LogLevel,
    category: LogCategory,
    file: &str,
    line: u32,
    args: fmt::Arguments<'_>,
) {
    if let Some(dispatcher) = global_slot_read().as_ref() {
        dispatcher.log(level, category, file, line, args);
    }
}

/// 全局调度器的诊断快照，未初始化时返回空快照。
pub fn diagnostics() -> DiagnosticsSnapshot {
    match global_slot_read().as_ref() {
        Some(dispatcher) => dispatcher.diagnostics(),
        None => DiagnosticsSnapshot::empty(),
    }
}

/// 通用日志宏：显式指定级别和类别。
///
/// 源位置在调用点捕获，消息参数只在通过过滤后才被格式化。
#[macro_export]
macro_rules! log_event {
    ($level:expr, $category:expr, $($arg:tt)+) => {
        $crate::dispatch($level, $category, file!(), line!(), format_args!($($arg)+))
    };
}

/// Notice 级别日志宏。
#[macro_export]
macro_rules! notice_log {
    ($category:expr, $($arg:tt)+) => {
        $crate::log_event!($crate::LogLevel::Notice, $category, $($arg)+)
    };
}

/// Error 级别日志宏。
#[macro_export]
macro_rules! error_log {
    ($category:expr, $($arg:tt)+) => {
        $crate::log_event!($crate::LogLevel::Error, $category, $($arg)+)
    };
}

/// Warning 级别日志宏。
#[macro_export]
macro_rules! warn_log {
    ($category:expr, $($arg:tt)+) => {
        $crate::log_event!($crate::LogLevel::Warning, $category, $($arg)+)
    };
}

/// Info 级别日志宏。
#[macro_export]
macro_rules! info_log {
    ($category:expr, $($arg:tt)+) => {
        $crate::log_event!($crate::LogLevel::Info, $category, $($arg)+)
    };
}

/// Debug 级别日志宏。
#[macro_export]
macro_rules! debug_log {
    ($category:expr, $($arg:tt)+) => {
        $crate::log_event!($crate::LogLevel::Debug, $category, $($arg)+)
    };
}
