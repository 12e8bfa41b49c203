//! 日志级别定义。
//!
//! 级别的数值越小，紧急程度越高：`Notice` (1) 永远不会被全局阈值过滤掉，
//! `Debug` (5) 是最低紧急程度。全局级别是一个"下限"：事件级别数值大于
//! 全局级别（即紧急程度更低）时被抑制。

use std::fmt;
use std::str::FromStr;

/// 日志级别枚举。
///
/// 与持久化配置中的 `Verbosity` 整数一一对应。
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// 重要的面向用户的提示，总是显示。
    Notice = 1,
    /// 严重错误。
    Error = 2,
    /// 可能的问题。
    Warning = 3,
    /// 一般信息。
    Info = 4,
    /// 详细调试信息。
    Debug = 5,
}

impl LogLevel {
    /// 最高紧急程度级别（数值最小）。
    pub const MIN: LogLevel = LogLevel::Notice;
    /// 最低紧急程度级别（数值最大）。
    pub const MAX: LogLevel = LogLevel::Debug;

    /// 级别对应的单字符标记，用于组合输出行。
    pub fn as_char(self) -> char {
        match self {
            LogLevel::Notice => 'N',
            LogLevel::Error => 'E',
            LogLevel::Warning => 'W',
            LogLevel::Info => 'I',
            LogLevel::Debug => 'D',
        }
    }

    /// 级别名称。
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Notice => "NOTICE",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// 从原始整数构造级别，越界值被钳制到有效范围而不是报错。
    ///
    /// 持久化配置中的 `Verbosity` 可能是任意整数，日志系统对配置错误
    /// 采取宽容策略。
    pub fn clamp_from(raw: i64) -> LogLevel {
        if raw <= LogLevel::MIN as i64 {
            LogLevel::MIN
        } else if raw >= LogLevel::MAX as i64 {
            LogLevel::MAX
        } else {
            // raw 在 (1, 5) 开区间内，穷举匹配保证不可达分支不存在
            match raw {
                2 => LogLevel::Error,
                3 => LogLevel::Warning,
                _ => LogLevel::Info,
            }
        }
    }

    /// 从存储的 u8 表示恢复级别，越界值同样被钳制。
    pub(crate) fn from_stored(raw: u8) -> LogLevel {
        LogLevel::clamp_from(raw as i64)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NOTICE" => Ok(LogLevel::Notice),
            "ERROR" => Ok(LogLevel::Error),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_ordering() {
        // 数值越小紧急程度越高
        assert!(LogLevel::Notice < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert_eq!(LogLevel::MIN, LogLevel::Notice);
        assert_eq!(LogLevel::MAX, LogLevel::Debug);
    }

    #[test]
    fn test_level_chars() {
        assert_eq!(LogLevel::Notice.as_char(), 'N');
        assert_eq!(LogLevel::Error.as_char(), 'E');
        assert_eq!(LogLevel::Warning.as_char(), 'W');
        assert_eq!(LogLevel::Info.as_char(), 'I');
        assert_eq!(LogLevel::Debug.as_char(), 'D');
    }

    #[test]
    fn test_clamp_in_range() {
        assert_eq!(LogLevel::clamp_from(1), LogLevel::Notice);
        assert_eq!(LogLevel::clamp_from(2), LogLevel::Error);
        assert_eq!(LogLevel::clamp_from(3), LogLevel::Warning);
        assert_eq!(LogLevel::clamp_from(4), LogLevel::Info);
        assert_eq!(LogLevel::clamp_from(5), LogLevel::Debug);
    }

    #[test]
    fn test_clamp_out_of_range() {
        // 配置中的越界值被钳制而不是报错
        assert_eq!(LogLevel::clamp_from(0), LogLevel::Notice);
        assert_eq!(LogLevel::clamp_from(-10), LogLevel::Notice);
        assert_eq!(LogLevel::clamp_from(99), LogLevel::Debug);
        assert_eq!(LogLevel::clamp_from(i64::MAX), LogLevel::Debug);
        assert_eq!(LogLevel::clamp_from(i64::MIN), LogLevel::Notice);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("NOTICE".parse::<LogLevel>().unwrap(), LogLevel::Notice);
        assert_eq!("error".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert_eq!("Warn".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("VERBOSE".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for level in [
            LogLevel::Notice,
            LogLevel::Error,
            LogLevel::Warning,
            LogLevel::Info,
            LogLevel::Debug,
        ] {
            assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
        }
    }

    proptest! {
        #[test]
        fn prop_clamp_always_valid(raw in any::<i64>()) {
            let level = LogLevel::clamp_from(raw);
            prop_assert!(level >= LogLevel::MIN && level <= LogLevel::MAX);
        }

        #[test]
        fn prop_clamp_identity_in_range(raw in 1i64..=5) {
            prop_assert_eq!(LogLevel::clamp_from(raw) as i64, raw);
        }
    }
}
