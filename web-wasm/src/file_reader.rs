//! FileReader を Future として扱う

use futures::channel::oneshot;
use product_admin_common::{Error, Result};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, ProgressEvent};

type Sender = Rc<RefCell<Option<oneshot::Sender<std::result::Result<(), String>>>>>;

/// ファイルを Data URL として読み込む
///
/// `error` / `abort` イベントは `Error::FileRead` になる。
pub async fn read_data_url(file: &File) -> Result<String> {
    let file_name = file.name();
    let reader = FileReader::new().map_err(|e| Error::FileRead(format!("{}: {:?}", file_name, e)))?;

    let (tx, rx) = oneshot::channel();
    let tx: Sender = Rc::new(RefCell::new(Some(tx)));

    let on_load = {
        let tx = tx.clone();
        Closure::wrap(Box::new(move |_: ProgressEvent| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Ok(()));
            }
        }) as Box<dyn FnMut(_)>)
    };
    let on_fail = {
        let tx = tx.clone();
        Closure::wrap(Box::new(move |ev: ProgressEvent| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err(ev.type_()));
            }
        }) as Box<dyn FnMut(_)>)
    };

    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
    reader.set_onerror(Some(on_fail.as_ref().unchecked_ref()));
    reader.set_onabort(Some(on_fail.as_ref().unchecked_ref()));

    reader
        .read_as_data_url(file)
        .map_err(|e| Error::FileRead(format!("{}: {:?}", file_name, e)))?;

    let outcome = rx.await;

    reader.set_onload(None);
    reader.set_onerror(None);
    reader.set_onabort(None);

    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(event)) => return Err(Error::FileRead(format!("{}: {}", file_name, event))),
        Err(_) => return Err(Error::FileRead(format!("{}: reader dropped", file_name))),
    }

    reader
        .result()
        .ok()
        .and_then(|result| result.as_string())
        .ok_or_else(|| Error::FileRead(format!("{}: result is not a data URL", file_name)))
}
