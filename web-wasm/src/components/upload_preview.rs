//! 画像アップロード前のプレビュー

use super::carousel::CarouselHandle;
use crate::dom;
use crate::file_reader::read_data_url;
use gloo::events::EventListener;
use product_admin_common::{AdminConfig, Error, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, FileList, HtmlInputElement};

/// ファイル入力とアップロードボタンにリスナーを登録する
///
/// ファイル入力がないページでは何もせず `false`。
pub fn bind(config: &AdminConfig, carousel: CarouselHandle) -> Result<bool> {
    let selectors = &config.selectors;
    let Some(input) = dom::query(&selectors.file_input)? else {
        return Ok(false);
    };
    let input: HtmlInputElement = input
        .dyn_into()
        .map_err(|_| Error::Dom(format!("{} is not an input", selectors.file_input)))?;

    // 隠しファイル入力をボタンから開く
    if let Some(trigger) = dom::query(&selectors.upload_trigger)? {
        let input = input.clone();
        EventListener::new(&trigger, "click", move |_| input.click()).forget();
    }

    let error_class = config.error_class.clone();
    EventListener::new(&input, "change", {
        let input = input.clone();
        move |_| {
            if let Some(files) = input.files() {
                on_files_selected(collect_files(&files), &carousel, &error_class);
            }
        }
    })
    .forget();

    Ok(true)
}

fn collect_files(files: &FileList) -> Vec<File> {
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

/// 選択されたファイルでプレビューを作り直す
///
/// 読み込みは並行に走り、完了した順にスライドが追加される。
/// 作り直し後に完了した前回分の読み込みは捨てる。
pub fn on_files_selected(files: Vec<File>, carousel: &CarouselHandle, error_class: &str) {
    let Some(ticket) = carousel.begin_rebuild() else {
        return;
    };
    log::debug!("previewing {} file(s)", files.len());

    for file in files {
        let carousel = carousel.clone();
        let error_class = error_class.to_string();
        spawn_local(async move {
            let name = file.name();
            match read_data_url(&file).await {
                Ok(data_url) => {
                    if !carousel.push(ticket, data_url, Some(name.clone())) {
                        log::debug!("dropping stale preview of {}", name);
                    }
                }
                Err(e) => {
                    log::warn!("preview failed: {}", e);
                    carousel.mark_error(&error_class);
                }
            }
        });
    }
}
