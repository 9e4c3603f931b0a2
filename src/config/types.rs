//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,

    /// 报告输出配置
    #[serde(default)]
    pub report: ReportConfig,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// 报告输出配置
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// 是否输出缩进格式的 JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.log.level, "info");
        assert!(config.report.pretty);
    }
}
