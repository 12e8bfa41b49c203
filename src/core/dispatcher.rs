//! PrismLog 调度器
//!
//! 调度器是所有类别状态和监听器实例的中心权威。`log` 调用先经过两段
//! 过滤（全局级别 + 类别启用 + 有无订阅者），通过后把消息格式化一次，
//! 再按监听器 id 升序扇出给当前注册的实例。
//!
//! # 并发
//!
//! 任意数量的线程可以并发调用 `log`，整个调度路径上没有进程级大锁：
//! 级别、类别启用标志、订阅位掩码都是原子的；监听器槽位各自有一把
//! 读写锁，扇出只取读锁，注册/注销才取写锁。真正的互斥只存在于监听
//! 器内部的单次写入。

use std::fmt;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, RwLock};

use crate::category::LogCategory;
use crate::config::{self, PrismLoggerConfig};
use crate::core::container::LogContainer;
use crate::core::event::LogEvent;
use crate::diagnostics::{Diagnostics, DiagnosticsSnapshot};
use crate::level::LogLevel;
use crate::sinks::console::ConsoleListener;
use crate::sinks::file::FileListener;
use crate::sinks::traits::{ListenerId, LogListener, RegisteredListener};

/// 默认日志文件名，可以通过构建器覆盖。
const DEFAULT_LOG_FILE: &str = "prism.log";

/// 日志调度器。
///
/// 推荐的用法是由宿主程序的组装根显式构造并持有一个实例；crate 根的
/// 全局接口只是兼容层。
pub struct LogDispatcher {
    containers: [LogContainer; LogCategory::COUNT],
    listeners: [RwLock<Option<RegisteredListener>>; ListenerId::COUNT],
    level: AtomicU8,
    path_cutoff: usize,
    diagnostics: Arc<Diagnostics>,
}

impl LogDispatcher {
    /// 用默认配置构造调度器（配置文件缺失时的行为）。
    pub fn new() -> Self {
        Self::with_config(PrismLoggerConfig::default())
    }

    /// 用给定配置构造调度器。
    pub fn with_config(config: PrismLoggerConfig) -> Self {
        Self::from_parts(config, PathBuf::from(DEFAULT_LOG_FILE), true)
    }

    /// 构建器入口。
    pub fn builder() -> LogDispatcherBuilder {
        LogDispatcherBuilder::new()
    }

    fn from_parts(config: PrismLoggerConfig, log_file: PathBuf, console_color: bool) -> Self {
        let dispatcher = Self {
            containers: std::array::from_fn(|_| LogContainer::new()),
            listeners: std::array::from_fn(|_| RwLock::new(None)),
            level: AtomicU8::new(LogLevel::Notice as u8),
            path_cutoff: determine_path_cutoff(file!()),
            diagnostics: Arc::new(Diagnostics::new()),
        };

        // 内置监听器：文件和控制台，调度器自有，初始启用
        dispatcher.register_listener(
            ListenerId::File,
            RegisteredListener::owned(FileListener::new(&log_file)),
        );
        dispatcher.register_listener(
            ListenerId::Console,
            RegisteredListener::owned(ConsoleListener::with_color(console_color)),
        );

        dispatcher.apply_config(&config);
        dispatcher
    }

    /// 把持久化配置应用到类别状态和全局级别。
    ///
    /// 每个启用的类别独立订阅每个打开的路由开关。一个类别可以处于
    /// 启用状态但没有任何订阅者，此时它的消息被静默丢弃。
    fn apply_config(&self, config: &PrismLoggerConfig) {
        self.set_level(config.verbosity_level());

        for category in LogCategory::ALL {
            let enabled = config.is_category_enabled(category);
            self.set_category_enabled(category, enabled);
            if !enabled {
                continue;
            }
            if config.options.write_to_file {
                self.add_listener(category, ListenerId::File);
            }
            if config.options.write_to_console {
                self.add_listener(category, ListenerId::Console);
            }
            if config.options.write_to_window {
                self.add_listener(category, ListenerId::Window);
            }
        }
    }

    /// 主调度操作。
    ///
    /// 被抑制的调用在任何格式化工作之前返回。格式化只发生一次，同一
    /// 行原样交给每个订阅且当前有实例注册的监听器；订阅了但槽位为空
    /// 的 id 被静默跳过（监听器可以在仍被订阅时注销）。
    ///
    /// 这个调用从不失败、从不 panic，除监听器内部的单次写入外从不
    /// 阻塞。
    pub fn log(
        &self,
        level: LogLevel,
        category: LogCategory,
        file: &str,
        line: u32,
        args: fmt::Arguments<'_>,
    ) {
        let container = &self.containers[category.index()];

        // 两段过滤 + 空订阅快速路径，全部在格式化之前
        if !container.is_enabled() || level > self.level() || !container.has_listeners() {
            self.diagnostics.increment_events_suppressed();
            return;
        }

        let message = args.to_string();
        self.diagnostics.increment_messages_formatted();

        let event = LogEvent::new(level, category, self.shorten_path(file), line, message);
        let rendered = event.to_line();

        for id in container.listeners() {
            let slot = match self.listeners[id.index()].read() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if let Some(registered) = slot.as_ref() {
                registered.listener().log(level, &rendered);
            }
        }

        self.diagnostics.increment_events_dispatched();
    }

    /// 全局级别。
    pub fn level(&self) -> LogLevel {
        LogLevel::from_stored(self.level.load(Ordering::Relaxed))
    }

    /// 设置全局级别，对所有线程的后续日志调用立即可见。
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// 用原始整数设置全局级别，越界值被钳制。
    pub fn set_level_clamped(&self, raw: i64) {
        self.set_level(LogLevel::clamp_from(raw));
    }

    /// 设置类别启用标志。
    pub fn set_category_enabled(&self, category: LogCategory, enabled: bool) {
        self.containers[category.index()].set_enabled(enabled);
    }

    /// 组合查询：类别自身启用，且全局级别覆盖给定级别。
    pub fn is_category_enabled(&self, category: LogCategory, level: LogLevel) -> bool {
        self.containers[category.index()].is_enabled() && self.level() >= level
    }

    /// 类别短名。
    pub fn short_name(&self, category: LogCategory) -> &'static str {
        category.short_name()
    }

    /// 类别完整名称。
    pub fn full_name(&self, category: LogCategory) -> &'static str {
        category.full_name()
    }

    /// 注册监听器实例到槽位，替换而不是叠加。
    ///
    /// 返回被替换下来的实例；被替换实例的销毁责任在调用方。
    pub fn register_listener(
        &self,
        id: ListenerId,
        listener: RegisteredListener,
    ) -> Option<RegisteredListener> {
        let mut slot = match self.listeners[id.index()].write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        slot.replace(listener)
    }

    /// 注销槽位中的监听器实例并返回。类别订阅不受影响：订阅了空槽位
    /// 的类别在扇出时静默跳过该 id。
    pub fn unregister_listener(&self, id: ListenerId) -> Option<RegisteredListener> {
        let mut slot = match self.listeners[id.index()].write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        slot.take()
    }

    /// 把类别订阅到监听器 id，幂等，与槽位中有没有实例无关。
    pub fn add_listener(&self, category: LogCategory, id: ListenerId) {
        self.containers[category.index()].add_listener(id);
    }

    /// 取消类别对监听器 id 的订阅，幂等。
    pub fn remove_listener(&self, category: LogCategory, id: ListenerId) {
        self.containers[category.index()].remove_listener(id);
    }

    /// 类别当前是否有任何订阅者。
    pub fn has_listeners(&self, category: LogCategory) -> bool {
        self.containers[category.index()].has_listeners()
    }

    /// 诊断数据快照。
    pub fn diagnostics(&self) -> DiagnosticsSnapshot {
        self.diagnostics.snapshot()
    }

    /// 诊断计数器句柄（测试和监控用）。
    pub fn diagnostics_handle(&self) -> Arc<Diagnostics> {
        Arc::clone(&self.diagnostics)
    }

    fn shorten_path<'a>(&self, file: &'a str) -> &'a str {
        file.get(self.path_cutoff..).unwrap_or(file)
    }
}

impl Default for LogDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogDispatcher")
            .field("level", &self.level())
            .field("path_cutoff", &self.path_cutoff)
            .finish()
    }
}

/// 定位源路径中的 `src` 目录标记，返回截短点。
///
/// 尽力而为：标记缺失时返回 0，路径原样输出。
fn determine_path_cutoff(probe: &str) -> usize {
    let pattern = format!("src{}", MAIN_SEPARATOR);
    match probe.find(&pattern) {
        Some(pos) => pos + pattern.len(),
        None => 0,
    }
}

/// `LogDispatcher` 的构建器。
///
/// 允许宿主指定配置来源、日志文件路径和控制台着色，未指定的部分使用
/// 默认值。
#[derive(Debug, Default)]
pub struct LogDispatcherBuilder {
    config: Option<PrismLoggerConfig>,
    config_path: Option<PathBuf>,
    log_file: Option<PathBuf>,
    console_color: bool,
}

impl LogDispatcherBuilder {
    /// 创建构建器。
    pub fn new() -> Self {
        Self {
            config: None,
            config_path: None,
            log_file: None,
            console_color: true,
        }
    }

    /// 直接提供配置，优先于配置文件路径。
    pub fn config(mut self, config: PrismLoggerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// 从文件加载配置，文件缺失或损坏时回退到默认值。
    pub fn config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// 内置文件监听器的输出路径。
    pub fn log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.log_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// 控制台监听器是否着色。
    pub fn console_color(mut self, enabled: bool) -> Self {
        self.console_color = enabled;
        self
    }

    /// 构造调度器。
    pub fn build(self) -> LogDispatcher {
        let config = match (self.config, self.config_path) {
            (Some(config), _) => config,
            (None, Some(path)) => config::load_or_default(&path),
            (None, None) => PrismLoggerConfig::default(),
        };
        let log_file = self.log_file.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
        LogDispatcher::from_parts(config, log_file, self.console_color)
    }
}
