//! PrismLog 核心：事件、类别状态容器与调度器。

pub mod container;
pub mod dispatcher;
pub mod event;

pub use container::LogContainer;
pub use dispatcher::{LogDispatcher, LogDispatcherBuilder};
pub use event::{LogEvent, MAX_MESSAGE_LEN};
