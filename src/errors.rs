use std::fmt;

/// Project-wide error type.
///
/// Every failure the crate can produce maps onto one of these variants, each
/// with a stable status code so callers can match on `code()` instead of
/// parsing messages.
#[derive(Debug, Clone)]
pub enum GreeterError {
    Usage(String),
    LogFile(String),
    Config(String),
    Io(String),
}

impl GreeterError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            GreeterError::Usage(_) => "E001",
            GreeterError::LogFile(_) => "E002",
            GreeterError::Config(_) => "E003",
            GreeterError::Io(_) => "E004",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            GreeterError::Usage(_) => "Usage Error",
            GreeterError::LogFile(_) => "Log File Error",
            GreeterError::Config(_) => "Configuration Error",
            GreeterError::Io(_) => "I/O Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            GreeterError::Usage(msg)
            | GreeterError::LogFile(msg)
            | GreeterError::Config(msg)
            | GreeterError::Io(msg) => msg,
        }
    }

    /// Process exit status for this error. Every failure exits with 1.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// 格式化为彩色输出
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

    /// Coloured block when the terminal takes colour (`NO_COLOR`,
    /// `CLICOLOR` and overrides respected), the plain one-liner otherwise.
    pub fn format_for_terminal(&self) -> String {
        if colored::control::SHOULD_COLORIZE.should_colorize() {
            self.format_colored()
        } else {
            self.format_simple()
        }
    }
}

impl fmt::Display for GreeterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GreeterError {}

// 便捷的构造函数
impl GreeterError {
    pub fn usage<T: Into<String>>(msg: T) -> Self {
        GreeterError::Usage(msg.into())
    }

    pub fn log_file<T: Into<String>>(msg: T) -> Self {
        GreeterError::LogFile(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        GreeterError::Config(msg.into())
    }
}

impl From<std::io::Error> for GreeterError {
    fn from(err: std::io::Error) -> Self {
        GreeterError::Io(err.to_string())
    }
}

impl From<config::ConfigError> for GreeterError {
    fn from(err: config::ConfigError) -> Self {
        GreeterError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for GreeterError {
    fn from(err: toml::ser::Error) -> Self {
        GreeterError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;
