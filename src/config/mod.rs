/// 统一配置系统
///
/// 提供TOML/JSON配置文件、环境变量覆盖和验证。
/// 配置决定使用哪个原生调用后端、加载哪些SDL子库以及从哪里加载。
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::impl_default;
use crate::loader::{FunctionFilter, SubLibrary};

pub use crate::core::error::{ConfigError, ConfigResult};

/// 原生调用后端选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// 通过 libloading 打开共享库文件
    Libloading,
    /// 从当前进程已链接的符号中解析
    Process,
    /// 未配置后端，加载时会立即失败
    None,
}

impl std::str::FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "libloading" => Ok(BackendKind::Libloading),
            "process" => Ok(BackendKind::Process),
            "none" => Ok(BackendKind::None),
            other => Err(ConfigError::ParseError(format!(
                "unknown backend '{}', expected libloading, process or none",
                other
            ))),
        }
    }
}

/// 过滤模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    Include,
    Exclude,
}

/// 函数过滤配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub mode: FilterMode,
    pub symbols: Vec<String>,
}

impl FilterConfig {
    pub fn to_filter(&self) -> FunctionFilter {
        let symbols = self.symbols.iter().cloned().collect();
        match self.mode {
            FilterMode::Include => FunctionFilter::Include(symbols),
            FilterMode::Exclude => FunctionFilter::Exclude(symbols),
        }
    }
}

/// 链接主配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// 原生调用后端
    pub backend: BackendKind,

    /// 额外加载的子库（逻辑名，例如 `SDL2_ttf`），核心库总是加载
    pub extensions: Vec<String>,

    /// 共享库搜索目录，未设置时交给系统动态链接器查找
    pub search_dir: Option<PathBuf>,

    /// 按逻辑名覆盖共享库路径
    pub paths: BTreeMap<String, PathBuf>,

    /// 函数过滤
    pub filter: Option<FilterConfig>,

    /// 日志配置
    pub logging: LoggingConfig,
}

impl_default!(LinkConfig {
    backend: BackendKind::Libloading,
    extensions: Vec::new(),
    search_dir: None,
    paths: BTreeMap::new(),
    filter: None,
    logging: LoggingConfig::default(),
});

impl LinkConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 保存为JSON文件
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 从环境变量覆盖配置
    ///
    /// - `SDL2_LINK_BACKEND`: libloading / process / none
    /// - `SDL2_LINK_EXTENSIONS`: 逗号分隔的子库逻辑名
    /// - `SDL2_LINK_SEARCH_DIR`: 共享库搜索目录
    /// - `SDL2_LINK_LOG_LEVEL`: trace / debug / info / warn / error
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// 使用任意键值来源覆盖配置，无法解析的值被忽略
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("SDL2_LINK_BACKEND") {
            match val.parse() {
                Ok(backend) => self.backend = backend,
                Err(e) => tracing::warn!(target: "sdl2_link::config", "Ignoring SDL2_LINK_BACKEND: {}", e),
            }
        }
        if let Some(val) = lookup("SDL2_LINK_EXTENSIONS") {
            self.extensions = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(val) = lookup("SDL2_LINK_SEARCH_DIR") {
            if !val.is_empty() {
                self.search_dir = Some(PathBuf::from(val));
            }
        }
        if let Some(val) = lookup("SDL2_LINK_LOG_LEVEL") {
            if let Some(level) = LogLevel::from_name(&val) {
                self.logging.level = level;
            }
        }
    }

    /// 解析配置的子库列表
    pub fn sub_libraries(&self) -> ConfigResult<Vec<SubLibrary>> {
        self.extensions
            .iter()
            .map(|name| {
                name.parse::<SubLibrary>()
                    .map_err(|e| ConfigError::ValidationError(e.to_string()))
            })
            .collect()
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.sub_libraries()?;

        for name in self.paths.keys() {
            name.parse::<SubLibrary>()
                .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        }

        if let Some(filter) = &self.filter {
            if filter.symbols.iter().any(|s| s.trim().is_empty()) {
                return Err(ConfigError::ValidationError(
                    "filter symbols must not be empty".to_string(),
                ));
            }
        }

        if self.logging.log_to_file && self.logging.log_file_path.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "log_file_path is required when log_to_file is enabled".to_string(),
            ));
        }

        Ok(())
    }

    /// 自动查找并加载配置文件
    ///
    /// 按以下顺序查找：
    /// 1. ./sdl2_link.toml
    /// 2. ./sdl2_link.json
    /// 3. <用户配置目录>/sdl2_link/config.toml
    /// 4. 使用默认配置
    pub fn load_or_default() -> Self {
        if let Ok(config) = Self::from_toml_file("sdl2_link.toml") {
            tracing::info!(target: "sdl2_link::config", "Loaded config from sdl2_link.toml");
            return config;
        }

        if let Ok(config) = Self::from_json_file("sdl2_link.json") {
            tracing::info!(target: "sdl2_link::config", "Loaded config from sdl2_link.json");
            return config;
        }

        if let Some(dir) = dirs::config_dir() {
            let config_path = dir.join("sdl2_link").join("config.toml");

            if let Ok(config) = Self::from_toml_file(&config_path) {
                tracing::info!(target: "sdl2_link::config", "Loaded config from {:?}", config_path);
                return config;
            }
        }

        tracing::info!(target: "sdl2_link::config", "Using default configuration");
        Self::default()
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: LogLevel,

    /// 是否输出到文件
    pub log_to_file: bool,

    /// 日志文件路径
    pub log_file_path: String,

    /// 是否输出到控制台
    pub log_to_console: bool,
}

impl_default!(LoggingConfig {
    level: LogLevel::Info,
    log_to_file: false,
    log_file_path: "sdl2_link.log".to_string(),
    log_to_console: true,
});

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
}

impl LogLevel {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = LinkConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.backend, BackendKind::Libloading);
        assert!(config.extensions.is_empty());
    }

    #[test]
    fn test_toml_serialization() {
        let mut config = LinkConfig::default();
        config.extensions = vec!["SDL2_ttf".to_string(), "SDL2_image".to_string()];
        config.filter = Some(FilterConfig {
            mode: FilterMode::Exclude,
            symbols: vec!["SDL_GetWindowGammaRamp".to_string()],
        });

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: LinkConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_json_serialization() {
        let config = LinkConfig::default();
        let json_str = serde_json::to_string(&config).unwrap();
        let parsed: LinkConfig = serde_json::from_str(&json_str).unwrap();
        assert_eq!(config.backend, parsed.backend);
        assert_eq!(config.logging, parsed.logging);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = LinkConfig::from_toml_str(
            r#"
            backend = "process"
            extensions = ["SDL2_mixer"]

            [paths]
            SDL2_mixer = "/opt/sdl/libSDL2_mixer.so"
            "#,
        )
        .unwrap();

        assert_eq!(config.backend, BackendKind::Process);
        assert_eq!(config.extensions, vec!["SDL2_mixer".to_string()]);
        assert_eq!(config.logging, LoggingConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_library() {
        let mut config = LinkConfig::default();
        config.extensions.push("SDL2_net".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("SDL2_net"));
        assert!(err.to_string().contains("SDL2_image"));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SDL2_LINK_BACKEND", "none"),
            ("SDL2_LINK_EXTENSIONS", "SDL2_ttf, SDL2_image,"),
            ("SDL2_LINK_SEARCH_DIR", "/usr/local/lib"),
            ("SDL2_LINK_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = LinkConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.backend, BackendKind::None);
        assert_eq!(config.extensions, vec!["SDL2_ttf", "SDL2_image"]);
        assert_eq!(config.search_dir, Some(PathBuf::from("/usr/local/lib")));
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_invalid_backend_override_is_ignored() {
        let mut config = LinkConfig::default();
        config.apply_overrides(|key| (key == "SDL2_LINK_BACKEND").then(|| "fastcall".to_string()));
        assert_eq!(config.backend, BackendKind::Libloading);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("config.toml");
        let json_path = dir.path().join("config.json");

        let mut config = LinkConfig::default();
        config.search_dir = Some(PathBuf::from("/opt/sdl"));
        config.save_toml(&toml_path).unwrap();
        config.save_json(&json_path).unwrap();

        assert_eq!(LinkConfig::from_toml_file(&toml_path).unwrap(), config);
        assert_eq!(LinkConfig::from_json_file(&json_path).unwrap(), config);
    }
}
