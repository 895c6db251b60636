use thiserror::Error;

use crate::utils::AppError;

/// 服务器启动和运行错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("数据库初始化失败: {0}")]
    Database(String),

    #[error("端口绑定失败 {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

impl From<AppError> for ServerError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Database(msg) => ServerError::Database(msg),
            other => ServerError::Internal(anyhow::anyhow!(other.to_string())),
        }
    }
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
