//! 文件输出监听器实现
//!
//! 以追加模式写入单个日志文件。每次写入由一个只覆盖本次调用的互斥锁
//! 串行化，锁在所有退出路径上无条件释放。打开文件失败不会报错，只是
//! 让 `is_valid()` 返回 false，之后的写入静默丢弃。

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::level::LogLevel;
use crate::sinks::traits::LogListener;

/// 文件监听器。
///
/// 消息已经带换行符，按原样追加。并发写入由内部互斥锁串行化。
#[derive(Debug)]
pub struct FileListener {
    logfile: Mutex<Option<File>>,
    enabled: AtomicBool,
}

impl FileListener {
    /// 打开（或创建）追加模式的日志文件。
    ///
    /// 打开失败时监听器仍然构造成功，但处于无效状态：日志调用决不能
    /// 因为输出文件不可用而影响宿主程序。
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())
            .ok();

        Self {
            logfile: Mutex::new(file),
            enabled: AtomicBool::new(true),
        }
    }

    /// 开关这个监听器，独立于任何类别状态。
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    fn lock_file(&self) -> std::sync::MutexGuard<'_, Option<File>> {
        // 锁中毒只可能来自持锁线程 panic，文件句柄本身仍然可用
        match self.logfile.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl LogListener for FileListener {
    fn log(&self, _level: LogLevel, message: &str) {
        if !self.is_enabled() {
            return;
        }

        let mut guard = self.lock_file();
        if let Some(file) = guard.as_mut() {
            if file.write_all(message.as_bytes()).is_err() {
                // 底层流坏掉后标记无效，之后的写入直接丢弃
                *guard = None;
            } else {
                let _ = file.flush();
            }
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    fn is_valid(&self) -> bool {
        self.lock_file().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_message_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prism.log");

        let listener = FileListener::new(&path);
        assert!(listener.is_valid());

        listener.log(LogLevel::Info, "first line\n");
        listener.log(LogLevel::Error, "second line\n");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }

    #[test]
    fn test_append_mode_preserves_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prism.log");
        std::fs::write(&path, "preexisting\n").unwrap();

        let listener = FileListener::new(&path);
        listener.log(LogLevel::Notice, "appended\n");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "preexisting\nappended\n");
    }

    #[test]
    fn test_open_failure_leaves_listener_invalid() {
        let listener = FileListener::new("/nonexistent-dir/prism.log");
        assert!(!listener.is_valid());
        assert!(listener.is_enabled());

        // 无效状态下写入是静默空操作
        listener.log(LogLevel::Error, "dropped\n");
        assert!(!listener.is_valid());
    }

    #[test]
    fn test_disabled_listener_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prism.log");

        let listener = FileListener::new(&path);
        listener.set_enabled(false);
        listener.log(LogLevel::Info, "dropped\n");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.is_empty());

        listener.set_enabled(true);
        listener.log(LogLevel::Info, "kept\n");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "kept\n");
    }

    #[test]
    fn test_concurrent_writes_are_serialized() {
        use std::sync::Arc;
        use std::thread;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prism.log");
        let listener = Arc::new(FileListener::new(&path));

        let mut handles = vec![];
        for thread_index in 0..4 {
            let listener_clone = Arc::clone(&listener);
            handles.push(thread::spawn(move || {
                for line_index in 0..50 {
                    listener_clone.log(
                        LogLevel::Info,
                        &format!("t{} l{}\n", thread_index, line_index),
                    );
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        // 每次写入都是完整的一行，不会交错撕裂
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 200);
        for line in contents.lines() {
            assert!(line.starts_with('t') && line.contains(" l"));
        }
    }
}
