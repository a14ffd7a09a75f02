use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnaError {
    #[error("组件 {0} 未找到")]
    ComponentNotFound(String),

    #[error("无效的组件: {0}")]
    InvalidComponent(String),

    #[error("组件快照是只读的，不允许修改")]
    ReadOnly,

    #[error("组件执行失败: {0}")]
    Component(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("HTTP 请求失败: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON 解析错误: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for runna crate
pub type Result<T> = std::result::Result<T, RunnaError>;
