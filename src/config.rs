//! 定义 PrismLog (棱镜) 日志调度器的持久化配置结构体。
//!
//! 配置文件只在启动时读取一次，没有热重载。配置错误一律采取宽容策略：
//! 文件缺失或解析失败回退到默认值，越界的 `Verbosity` 被钳制到有效范围，
//! 未知的键被忽略。日志系统的配置永远不能阻止宿主程序启动。

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::category::LogCategory;
use crate::error::{PrismLogError, Result};
use crate::level::LogLevel;

// --- 辅助函数，用于提供配置项的默认值 ---
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}
fn default_verbosity() -> i64 {
    0
}

/// `[Options]` 配置节：输出路由开关与全局详细程度。
///
/// 键名与持久化文件中的写法保持一致。
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    /// 是否把启用的类别路由到文件监听器。
    #[serde(rename = "WriteToFile", default = "default_false")]
    pub write_to_file: bool,
    /// 是否把启用的类别路由到控制台监听器。
    #[serde(rename = "WriteToConsole", default = "default_true")]
    pub write_to_console: bool,
    /// 是否把启用的类别路由到窗口监听器槽位。
    #[serde(rename = "WriteToWindow", default = "default_true")]
    pub write_to_window: bool,
    /// 全局详细程度，任意整数，应用时被钳制到有效级别范围。
    #[serde(rename = "Verbosity", default = "default_verbosity")]
    pub verbosity: i64,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            write_to_file: default_false(),
            write_to_console: default_true(),
            write_to_window: default_true(),
            verbosity: default_verbosity(),
        }
    }
}

/// PrismLog (棱镜) 的顶层配置结构体。
///
/// 未知的键被忽略而不是报错，与配置错误的宽容策略保持一致。
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PrismLoggerConfig {
    /// 输出路由开关与全局详细程度。
    #[serde(rename = "Options", default)]
    pub options: OutputOptions,
    /// `[Logs]` 配置节：每个类别短名对应一个启用标志。
    #[serde(rename = "Logs", default)]
    pub logs: BTreeMap<String, bool>,
}

impl PrismLoggerConfig {
    /// 把持久化的 `Verbosity` 钳制成有效级别。
    pub fn verbosity_level(&self) -> LogLevel {
        LogLevel::clamp_from(self.options.verbosity)
    }

    /// 查询某个类别的持久化启用标志，缺失的键视为禁用。
    pub fn is_category_enabled(&self, category: LogCategory) -> bool {
        let key = category.short_name();
        if let Some(&enabled) = self.logs.get(key) {
            return enabled;
        }
        // 键名大小写不敏感回退，兼容手工编辑过的配置文件
        self.logs
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, &enabled)| enabled)
            .unwrap_or(false)
    }
}

/// 用于从 TOML 文件加载 `PrismLoggerConfig` 的辅助函数。
pub fn load_config_from_file(path: &Path) -> Result<PrismLoggerConfig> {
    use std::fs;

    if !path.exists() {
        return Err(PrismLogError::ConfigFileMissing(
            path.to_string_lossy().into_owned(),
        ));
    }

    let config_str = fs::read_to_string(path)?;
    load_config_from_str(&config_str)
}

/// 用于从 TOML 字符串加载 `PrismLoggerConfig` 的辅助函数。
pub fn load_config_from_str(config_str: &str) -> Result<PrismLoggerConfig> {
    let config: PrismLoggerConfig = toml::from_str(config_str)
        .map_err(|e| PrismLogError::ConfigError(format!("TOML解析失败: {}", e)))?;

    Ok(config)
}

/// 宽容加载：文件缺失或解析失败时回退到默认配置。
///
/// 这是调度器初始化协议使用的入口。
pub fn load_or_default(path: &Path) -> PrismLoggerConfig {
    load_config_from_file(path).unwrap_or_default()
}
