//! 每个类别的可变状态容器。
//!
//! 容器只有两样东西：启用标志和订阅集合。两者都是原子的，任意线程
//! 可以在其他线程调度日志的同时安全修改。

use std::sync::atomic::{AtomicBool, Ordering};

use crate::sinks::traits::{ListenerId, ListenerSet, ListenerSetIter};

/// 类别状态容器。
///
/// 订阅集合为空的容器在调度时等同于禁用：没人接收就不做格式化。
#[derive(Debug, Default)]
pub struct LogContainer {
    enabled: AtomicBool,
    listener_ids: ListenerSet,
}

impl LogContainer {
    /// 创建初始禁用、无订阅的容器。
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(false),
            listener_ids: ListenerSet::new(),
        }
    }

    /// 设置启用标志，对后续日志调用立即可见。
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// 启用标志。
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// 幂等订阅。
    pub fn add_listener(&self, id: ListenerId) {
        self.listener_ids.insert(id);
    }

    /// 幂等退订。
    pub fn remove_listener(&self, id: ListenerId) {
        self.listener_ids.remove(id);
    }

    /// 是否有任何订阅者。快速路径守卫：为空时跳过全部格式化工作。
    pub fn has_listeners(&self) -> bool {
        !self.listener_ids.is_empty()
    }

    /// 迭代订阅者 id，升序。
    pub fn listeners(&self) -> ListenerSetIter {
        self.listener_ids.iter()
    }
}
