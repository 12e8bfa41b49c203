//! 定义 PrismLog (棱镜) 日志调度器的内部诊断与指标。
//!
//! 此模块提供对调度路径的可观测性：有多少事件被过滤器抑制、有多少
//! 消息真正经过了格式化、有多少事件扇出到了监听器。格式化计数同时是
//! 快速路径测试的观测点——被抑制的事件决不应该产生格式化工作。

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// 内部诊断与指标数据结构。
///
/// 使用原子操作确保线程安全，每个调度器实例持有一份。
#[derive(Debug)]
pub struct Diagnostics {
    /// 调度器创建时间
    start_time: Instant,

    /// 被两段过滤（类别禁用 / 级别超限 / 无订阅者）抑制的事件数
    events_suppressed: AtomicU64,

    /// 真正经过消息格式化的事件数
    messages_formatted: AtomicU64,

    /// 完成扇出的事件数
    events_dispatched: AtomicU64,
}

/// 诊断数据的快照，用于外部查询。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsSnapshot {
    /// 调度器运行时间
    pub uptime: Option<Duration>,

    /// 被过滤器抑制的事件数
    pub events_suppressed: u64,

    /// 真正经过消息格式化的事件数
    pub messages_formatted: u64,

    /// 完成扇出的事件数
    pub events_dispatched: u64,

    /// 观察到的事件总数（抑制 + 扇出）
    pub total_events: u64,
}

impl Diagnostics {
    /// 创建新的诊断实例。
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            events_suppressed: AtomicU64::new(0),
            messages_formatted: AtomicU64::new(0),
            events_dispatched: AtomicU64::new(0),
        }
    }

    /// 增加被抑制事件计数。
    pub fn increment_events_suppressed(&self) {
        self.events_suppressed.fetch_add(1, Ordering::Relaxed);
    }

    /// 增加已格式化消息计数。
    pub fn increment_messages_formatted(&self) {
        self.messages_formatted.fetch_add(1, Ordering::Relaxed);
    }

    /// 增加已扇出事件计数。
    pub fn increment_events_dispatched(&self) {
        self.events_dispatched.fetch_add(1, Ordering::Relaxed);
    }

    /// 获取诊断数据的快照。
    pub fn snapshot(&self) -> DiagnosticsSnapshot {
        let events_suppressed = self.events_suppressed.load(Ordering::Relaxed);
        let events_dispatched = self.events_dispatched.load(Ordering::Relaxed);

        DiagnosticsSnapshot {
            uptime: Some(self.start_time.elapsed()),
            events_suppressed,
            messages_formatted: self.messages_formatted.load(Ordering::Relaxed),
            events_dispatched,
            total_events: events_suppressed + events_dispatched,
        }
    }

    /// 重置所有计数器（主要用于测试）。
    pub fn reset(&self) {
        self.events_suppressed.store(0, Ordering::Relaxed);
        self.messages_formatted.store(0, Ordering::Relaxed);
        self.events_dispatched.store(0, Ordering::Relaxed);
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsSnapshot {
    /// 未初始化时返回的空快照。
    pub fn empty() -> Self {
        Self {
            uptime: None,
            events_suppressed: 0,
            messages_formatted: 0,
            events_dispatched: 0,
            total_events: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_diagnostics_creation() {
        let diagnostics = Diagnostics::new();
        let snapshot = diagnostics.snapshot();

        assert!(snapshot.uptime.is_some());
        assert_eq!(snapshot.events_suppressed, 0);
        assert_eq!(snapshot.messages_formatted, 0);
        assert_eq!(snapshot.events_dispatched, 0);
        assert_eq!(snapshot.total_events, 0);
    }

    #[test]
    fn test_increment_operations() {
        let diagnostics = Diagnostics::new();

        diagnostics.increment_events_suppressed();
        diagnostics.increment_messages_formatted();
        diagnostics.increment_events_dispatched();

        let snapshot = diagnostics.snapshot();
        assert_eq!(snapshot.events_suppressed, 1);
        assert_eq!(snapshot.messages_formatted, 1);
        assert_eq!(snapshot.events_dispatched, 1);
        assert_eq!(snapshot.total_events, 2);
    }

    #[test]
    fn test_reset_functionality() {
        let diagnostics = Diagnostics::new();

        diagnostics.increment_events_suppressed();
        diagnostics.increment_events_dispatched();
        assert_eq!(diagnostics.snapshot().total_events, 2);

        diagnostics.reset();

        let snapshot = diagnostics.snapshot();
        assert_eq!(snapshot.events_suppressed, 0);
        assert_eq!(snapshot.messages_formatted, 0);
        assert_eq!(snapshot.events_dispatched, 0);
    }

    #[test]
    fn test_concurrent_access() {
        let diagnostics = Arc::new(Diagnostics::new());
        let mut handles = vec![];

        // 启动多个线程同时增加计数器
        for _ in 0..10 {
            let diagnostics_clone = diagnostics.clone();
            let handle = thread::spawn(move || {
                for _ in 0..100 {
                    diagnostics_clone.increment_events_dispatched();
                }
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = diagnostics.snapshot();
        assert_eq!(snapshot.events_dispatched, 1000);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = DiagnosticsSnapshot::empty();
        assert!(snapshot.uptime.is_none());
        assert_eq!(snapshot.total_events, 0);
    }
}
