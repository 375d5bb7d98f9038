use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("HTTP {status}")]
    Http { status: u16 },
    #[error("無法連線至伺服器：{0}")]
    Transport(String),
    #[error("回應格式錯誤：{0}")]
    Decode(String),
    #[error("無效的網址：{0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("元素尚未掛載：{0}")]
    ElementNotMounted(&'static str),
    #[error("無法量測元素 {selector}：{reason}")]
    Measure {
        selector: &'static str,
        reason: String,
    },
}
