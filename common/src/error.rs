//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("Invalid primary key: {0:?}")]
    InvalidPrimaryKey(String),

    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("File read error: {0}")]
    FileRead(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
