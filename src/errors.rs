use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortfrontError {
    MissingInput(String),
    InvalidUrl(String),
    ServiceRejected { status: u16, message: String },
    TransportFailure(String),
    ResolutionFailure(String),
    Config(String),
    FileOperation(String),
    Clipboard(String),
}

impl ShortfrontError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortfrontError::MissingInput(_) => "E001",
            ShortfrontError::InvalidUrl(_) => "E002",
            ShortfrontError::ServiceRejected { .. } => "E003",
            ShortfrontError::TransportFailure(_) => "E004",
            ShortfrontError::ResolutionFailure(_) => "E005",
            ShortfrontError::Config(_) => "E006",
            ShortfrontError::FileOperation(_) => "E007",
            ShortfrontError::Clipboard(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortfrontError::MissingInput(_) => "Missing Input",
            ShortfrontError::InvalidUrl(_) => "Invalid URL",
            ShortfrontError::ServiceRejected { .. } => "Service Rejected",
            ShortfrontError::TransportFailure(_) => "Transport Failure",
            ShortfrontError::ResolutionFailure(_) => "Resolution Failure",
            ShortfrontError::Config(_) => "Configuration Error",
            ShortfrontError::FileOperation(_) => "File Operation Error",
            ShortfrontError::Clipboard(_) => "Clipboard Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortfrontError::MissingInput(msg) => msg,
            ShortfrontError::InvalidUrl(msg) => msg,
            ShortfrontError::ServiceRejected { message, .. } => message,
            ShortfrontError::TransportFailure(msg) => msg,
            ShortfrontError::ResolutionFailure(msg) => msg,
            ShortfrontError::Config(msg) => msg,
            ShortfrontError::FileOperation(msg) => msg,
            ShortfrontError::Clipboard(msg) => msg,
        }
    }

    /// Errors recovered on the page itself and shown next to the input.
    ///
    /// Everything else coming out of a network call is surfaced as a
    /// transient notification instead.
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            ShortfrontError::MissingInput(_) | ShortfrontError::InvalidUrl(_)
        )
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    #[cfg(feature = "server")]
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

    /// 格式化为简洁输出（用于 TUI / 页面）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortfrontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortfrontError {}

// 便捷的构造函数
impl ShortfrontError {
    pub fn missing_input<T: Into<String>>(msg: T) -> Self {
        ShortfrontError::MissingInput(msg.into())
    }

    pub fn invalid_url<T: Into<String>>(msg: T) -> Self {
        ShortfrontError::InvalidUrl(msg.into())
    }

    pub fn service_rejected<T: Into<String>>(status: u16, msg: T) -> Self {
        ShortfrontError::ServiceRejected {
            status,
            message: msg.into(),
        }
    }

    pub fn transport_failure<T: Into<String>>(msg: T) -> Self {
        ShortfrontError::TransportFailure(msg.into())
    }

    pub fn resolution_failure<T: Into<String>>(msg: T) -> Self {
        ShortfrontError::ResolutionFailure(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ShortfrontError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ShortfrontError::FileOperation(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        ShortfrontError::Clipboard(msg.into())
    }
}

impl From<std::io::Error> for ShortfrontError {
    fn from(err: std::io::Error) -> Self {
        ShortfrontError::FileOperation(err.to_string())
    }
}

impl From<config::ConfigError> for ShortfrontError {
    fn from(err: config::ConfigError) -> Self {
        ShortfrontError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ShortfrontError {
    fn from(err: toml::ser::Error) -> Self {
        ShortfrontError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortfrontError>;
