use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - server: 监听地址、端口、worker 数量
/// - api: 内容 API 地址、超时、列表缓存
/// - site: 默认语言、证书目录
/// - contact: 附件大小限制
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：EMAS，分隔符：__
    /// 示例：EMAS__SERVER__PORT=9000
    pub fn load(path: &str) -> Self {
        use config::{Config, Environment, File};

        let builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("EMAS")
                    .separator("__")
                    .try_parsing(true),
            );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => {
                    if std::path::Path::new(path).exists() {
                        eprintln!("[INFO] Configuration loaded from: {}", path);
                    }
                    config
                }
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        }
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default)]
    pub unix_socket: Option<String>,
    #[serde(default = "default_cpu_count")]
    pub cpu_count: usize,
}

/// 内容 API 客户端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 内容 API 基础地址，相对图片路径也以此拼接
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_timeout")]
    pub timeout_secs: u64,
    /// 成功获取的列表复用时长（秒），0 表示关闭缓存
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
}

/// 站点配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub default_language: Language,
    #[serde(default = "default_certificates_dir")]
    pub certificates_dir: String,
    #[serde(default)]
    pub public_url: Option<String>,
}

/// 联系表单配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_max_attachment_mb")]
    pub max_attachment_mb: u64,
}

impl ContactConfig {
    pub fn max_attachment_bytes(&self) -> usize {
        (self.max_attachment_mb as usize).saturating_mul(1024 * 1024)
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// 默认值函数
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    3000
}

fn default_cpu_count() -> usize {
    num_cpus::get()
}

fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_api_timeout() -> u64 {
    10
}

fn default_cache_ttl() -> u64 {
    60
}

fn default_cache_capacity() -> u64 {
    256
}

fn default_certificates_dir() -> String {
    "certificates".to_string()
}

fn default_max_attachment_mb() -> u64 {
    20
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default 实现
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            unix_socket: None,
            cpu_count: default_cpu_count(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_secs: default_api_timeout(),
            cache_ttl_secs: default_cache_ttl(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            certificates_dir: default_certificates_dir(),
            public_url: None,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            max_attachment_mb: default_max_attachment_mb(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_round_trips_through_toml() {
        let sample = StaticConfig::generate_sample_config();
        assert!(sample.contains("[server]"));
        assert!(sample.contains("base_url = \"http://localhost:8080\""));

        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed.server.port, 3000);
        assert_eq!(parsed.site.default_language, Language::Tr);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let parsed: StaticConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://api.emasmetal.com"

            [site]
            default_language = "en"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.api.base_url, "https://api.emasmetal.com");
        assert_eq!(parsed.api.timeout_secs, 10);
        assert_eq!(parsed.site.default_language, Language::En);
        assert_eq!(parsed.contact.max_attachment_bytes(), 20 * 1024 * 1024);
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "[server]\nport = 4100\n").unwrap();

        let cfg = StaticConfig::load(path.to_str().unwrap());
        assert_eq!(cfg.server.port, 4100);
    }
}
