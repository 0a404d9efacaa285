use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::models::ApiError;

#[derive(Debug, Clone)]
pub enum SiteError {
    Config(String),
    Api(ApiError),
    Validation(String),
    NotFound(String),
    FileOperation(String),
    Serialization(String),
    InvalidMultipart(String),
    PayloadTooLarge(String),
}

impl SiteError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            SiteError::Config(_) => "E001",
            SiteError::Api(_) => "E002",
            SiteError::Validation(_) => "E003",
            SiteError::NotFound(_) => "E004",
            SiteError::FileOperation(_) => "E005",
            SiteError::Serialization(_) => "E006",
            SiteError::InvalidMultipart(_) => "E007",
            SiteError::PayloadTooLarge(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            SiteError::Config(_) => "Configuration Error",
            SiteError::Api(_) => "Content API Error",
            SiteError::Validation(_) => "Validation Error",
            SiteError::NotFound(_) => "Resource Not Found",
            SiteError::FileOperation(_) => "File Operation Error",
            SiteError::Serialization(_) => "Serialization Error",
            SiteError::InvalidMultipart(_) => "Invalid Multipart Data",
            SiteError::PayloadTooLarge(_) => "Payload Too Large",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            SiteError::Api(err) => &err.message,
            SiteError::Config(msg)
            | SiteError::Validation(msg)
            | SiteError::NotFound(msg)
            | SiteError::FileOperation(msg)
            | SiteError::Serialization(msg)
            | SiteError::InvalidMultipart(msg)
            | SiteError::PayloadTooLarge(msg) => msg,
        }
    }

    /// 处理器应返回的 HTTP 状态码
    pub fn http_status(&self) -> StatusCode {
        match self {
            SiteError::Config(_) | SiteError::FileOperation(_) | SiteError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            SiteError::Api(_) => StatusCode::BAD_GATEWAY,
            SiteError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SiteError::NotFound(_) => StatusCode::NOT_FOUND,
            SiteError::InvalidMultipart(_) => StatusCode::BAD_REQUEST,
            SiteError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SiteError {}

// 便捷的构造函数
impl SiteError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        SiteError::Config(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        SiteError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        SiteError::NotFound(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        SiteError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        SiteError::Serialization(msg.into())
    }

    pub fn invalid_multipart<T: Into<String>>(msg: T) -> Self {
        SiteError::InvalidMultipart(msg.into())
    }

    pub fn payload_too_large<T: Into<String>>(msg: T) -> Self {
        SiteError::PayloadTooLarge(msg.into())
    }
}

impl From<ApiError> for SiteError {
    fn from(err: ApiError) -> Self {
        SiteError::Api(err)
    }
}

impl From<std::io::Error> for SiteError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            SiteError::NotFound(err.to_string())
        } else {
            SiteError::FileOperation(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for SiteError {
    fn from(err: reqwest::Error) -> Self {
        let path = err.url().map(|u| u.path().to_string()).unwrap_or_default();
        SiteError::Api(ApiError::network(err.to_string(), path))
    }
}

impl From<actix_multipart::MultipartError> for SiteError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        SiteError::InvalidMultipart(err.to_string())
    }
}

impl ResponseError for SiteError {
    fn status_code(&self) -> StatusCode {
        self.http_status()
    }

    fn error_response(&self) -> HttpResponse {
        let lang = crate::config::try_get_config()
            .map(|c| c.site.default_language)
            .unwrap_or_default();
        let body = crate::render::pages::error::render(lang, self.http_status(), self.message());
        HttpResponse::build(self.http_status())
            .content_type("text/html; charset=utf-8")
            .body(body)
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
