//! 登録済み画像一覧（`images/_get/{id}` のレスポンス）

use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageList {
    #[serde(default)]
    pub images: Vec<String>,
}

impl ImageList {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
