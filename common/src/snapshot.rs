//! 商品フォームのスナップショット
//!
//! `_get/{id}` のレスポンス（フィールド名 → 値）をデコードし、
//! フォームの各コントロールへ書き込む。

use crate::config::AdminConfig;
use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;

/// フィールド名 → 文字列値
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSnapshot {
    fields: BTreeMap<String, String>,
}

impl ProductSnapshot {
    /// JSONオブジェクトをデコードする
    ///
    /// 文字列はそのまま、数値・真偽値は文字列化、null は空文字。
    /// 配列やオブジェクトの値はそのキーだけ捨てる。
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        let Value::Object(map) = value else {
            return Err(Error::UnexpectedShape(
                "product snapshot must be a JSON object".into(),
            ));
        };

        let mut fields = BTreeMap::new();
        for (key, value) in map {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => String::new(),
                Value::Array(_) | Value::Object(_) => {
                    log::warn!("skipping non-scalar field {:?} in product snapshot", key);
                    continue;
                }
            };
            fields.insert(key, text);
        }
        Ok(Self { fields })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// 表示用に値を整形する
///
/// 単価フィールドだけ `price_decimals` 桁の小数に揃える。空文字は 0 扱い。
/// 数値として読めない単価は元の文字列のまま返す。
pub fn format_field(key: &str, raw: &str, config: &AdminConfig) -> String {
    if key != config.price_field {
        return raw.to_string();
    }

    let trimmed = raw.trim();
    let parsed = if trimmed.is_empty() {
        Ok(0.0)
    } else {
        trimmed.parse::<f64>()
    };
    match parsed {
        Ok(price) if price.is_finite() => to_fixed(price, config.price_decimals),
        _ => {
            log::warn!("{} is not a number: {:?}", key, raw);
            raw.to_string()
        }
    }
}

/// `decimals` 桁に丸めて固定小数表記にする
///
/// 丸めは正確な10進展開に対する四捨五入（0から遠い方）で、
/// ブラウザの `Number.prototype.toFixed` と同じ結果になる。
pub fn to_fixed(value: f64, decimals: usize) -> String {
    // f64の小数部は高々1074桁で正確に表せる
    let exact = format!("{:.1074}", value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .is_some_and(|&d| d >= b'5');
    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let int_len = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + d));
    }
    out
}

/// フォームコントロールへの書き込み先
pub trait FieldSink {
    /// `id` のコントロールに値を設定する。コントロールがなければ false
    fn assign(&mut self, id: &str, value: &str) -> bool;
}

impl FieldSink for BTreeMap<String, String> {
    fn assign(&mut self, id: &str, value: &str) -> bool {
        match self.get_mut(id) {
            Some(slot) => {
                *slot = value.to_string();
                true
            }
            None => false,
        }
    }
}

/// 書き込み結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillReport {
    pub filled: Vec<String>,
    pub missing: Vec<String>,
}

/// スナップショットの全キーをフォームへ反映する
///
/// 対応するコントロールがないキーは `missing` に記録するだけでエラーにしない。
pub fn apply_snapshot<S: FieldSink + ?Sized>(
    snapshot: &ProductSnapshot,
    sink: &mut S,
    config: &AdminConfig,
) -> FillReport {
    let mut report = FillReport::default();
    for (key, raw) in snapshot.iter() {
        let value = format_field(key, raw, config);
        if sink.assign(key, &value) {
            report.filled.push(key.to_string());
        } else {
            report.missing.push(key.to_string());
        }
    }
    report
}
