//! PrismLog 输出监听器
//!
//! 包含监听器契约和两个内置实现（文件、控制台）。窗口监听器由宿主
//! 界面代码实现并通过调度器的注册接口挂载。

pub mod console;
pub mod file;
pub mod traits;

pub use console::ConsoleListener;
pub use file::FileListener;
pub use traits::{
    ListenerId, ListenerSet, ListenerSetIter, LogListener, Ownership, RegisteredListener,
};
