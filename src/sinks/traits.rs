//! PrismLog 监听器契约
//!
//! 定义了统一的监听器 trait 接口、固定的监听器槽位 id，以及每个类别
//! 用来记录订阅关系的无锁小集合。
//!
//! # 架构设计
//!
//! - `LogListener`: 所有输出目标必须实现的核心接口
//! - `ListenerId`: 固定的槽位 id 空间（文件 / 控制台 / 窗口）
//! - `ListenerSet`: 以原子位掩码实现的订阅集合，迭代顺序按 id 升序
//! - `RegisteredListener`: 槽位中的实例加上所有权标记（自有 / 借用）

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::level::LogLevel;

/// 日志监听器契约。
///
/// 监听器接收已经完全格式化、以换行符结尾的消息行。被调用时如果自身
/// 处于禁用或无效状态，必须把 `log` 实现为空操作：这层检查独立于调度
/// 器的类别/级别过滤，因为监听器可以被单独开关而不触碰类别状态。
pub trait LogListener: Send + Sync {
    /// 接收一条已格式化的消息。实现决不允许 panic 或阻塞调用者
    /// （写入自身的互斥临界区除外）。
    fn log(&self, level: LogLevel, message: &str);

    /// 监听器当前是否启用。
    fn is_enabled(&self) -> bool {
        true
    }

    /// 监听器特定的健康状态，例如底层输出流是否打开。
    fn is_valid(&self) -> bool {
        true
    }
}

/// 固定的监听器槽位 id。
///
/// id 空间小而静态，判别值同时是槽位表下标和订阅位掩码中的位号。
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum ListenerId {
    /// 内置文件监听器。
    File = 0,
    /// 内置控制台监听器。
    Console = 1,
    /// 外部（宿主界面）注册的窗口监听器。
    Window = 2,
}

impl ListenerId {
    /// 槽位总数。
    pub const COUNT: usize = 3;

    /// 所有槽位 id，按升序排列。
    pub const ALL: [ListenerId; ListenerId::COUNT] =
        [ListenerId::File, ListenerId::Console, ListenerId::Window];

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    #[inline]
    fn bit(self) -> u32 {
        1 << (self as usize)
    }

    fn from_index(index: usize) -> Option<ListenerId> {
        match index {
            0 => Some(ListenerId::File),
            1 => Some(ListenerId::Console),
            2 => Some(ListenerId::Window),
            _ => None,
        }
    }
}

/// 每个类别的订阅集合：固定宽度的原子位掩码。
///
/// 插入和移除是幂等的原子操作，读取端不需要锁，并发写入不会撕裂。
/// 迭代产生 id 升序的快照，保证扇出顺序确定。
#[derive(Debug, Default)]
pub struct ListenerSet {
    bits: AtomicU32,
}

impl ListenerSet {
    /// 创建空集合。
    pub const fn new() -> Self {
        Self {
            bits: AtomicU32::new(0),
        }
    }

    /// 幂等插入。
    pub fn insert(&self, id: ListenerId) {
        self.bits.fetch_or(id.bit(), Ordering::Relaxed);
    }

    /// 幂等移除。
    pub fn remove(&self, id: ListenerId) {
        self.bits.fetch_and(!id.bit(), Ordering::Relaxed);
    }

    /// 成员查询。
    pub fn contains(&self, id: ListenerId) -> bool {
        self.bits.load(Ordering::Relaxed) & id.bit() != 0
    }

    /// 集合是否为空。空集合的类别在调度时等同于禁用。
    pub fn is_empty(&self) -> bool {
        self.bits.load(Ordering::Relaxed) == 0
    }

    /// 集合基数。
    pub fn len(&self) -> usize {
        self.bits.load(Ordering::Relaxed).count_ones() as usize
    }

    /// 清空集合。
    pub fn clear(&self) {
        self.bits.store(0, Ordering::Relaxed);
    }

    /// 迭代当前快照中的成员，id 升序。
    pub fn iter(&self) -> ListenerSetIter {
        ListenerSetIter {
            bits: self.bits.load(Ordering::Relaxed),
            next: 0,
        }
    }
}

/// `ListenerSet` 快照迭代器。
#[derive(Debug)]
pub struct ListenerSetIter {
    bits: u32,
    next: usize,
}

impl Iterator for ListenerSetIter {
    type Item = ListenerId;

    fn next(&mut self) -> Option<ListenerId> {
        while self.next < ListenerId::COUNT {
            let index = self.next;
            self.next += 1;
            if self.bits & (1 << index) != 0 {
                return ListenerId::from_index(index);
            }
        }
        None
    }
}

/// 监听器实例的所有权标记。
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ownership {
    /// 调度器自己构造并负责销毁的实例（文件、控制台）。
    Owned,
    /// 外部代码提供并负责生命周期的实例（例如界面持有的日志窗口）。
    Borrowed,
}

/// 槽位中注册的监听器：实例加所有权标记。
#[derive(Clone)]
pub struct RegisteredListener {
    listener: Arc<dyn LogListener>,
    ownership: Ownership,
}

impl RegisteredListener {
    /// 包装一个调度器自有的监听器。
    pub fn owned<L: LogListener + 'static>(listener: L) -> Self {
        Self {
            listener: Arc::new(listener),
            ownership: Ownership::Owned,
        }
    }

    /// 包装一个外部提供的监听器，调度器只持有引用。
    pub fn borrowed(listener: Arc<dyn LogListener>) -> Self {
        Self {
            listener,
            ownership: Ownership::Borrowed,
        }
    }

    /// 监听器实例。
    pub fn listener(&self) -> &Arc<dyn LogListener> {
        &self.listener
    }

    /// 所有权标记。
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }
}

impl fmt::Debug for RegisteredListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredListener")
            .field("ownership", &self.ownership)
            .finish()
    }
}
