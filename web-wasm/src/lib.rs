//! Product Admin page scripts (Leptos + WASM)
//!
//! 商品管理画面の画像プレビュー・編集フォーム補完・行削除

mod api;
mod app;
pub mod components;
pub mod dom;
mod file_reader;

pub use file_reader::read_data_url;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    app::boot();
}
