//! DOM操作の小さなヘルパー

use crate::api::js_error;
use product_admin_common::{Error, FieldSink, Result};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

pub fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| Error::Dom("window is not available".into()))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| Error::Dom("document is not available".into()))
}

pub fn query(selector: &str) -> Result<Option<Element>> {
    document()?.query_selector(selector).map_err(js_error)
}

pub fn query_all(selector: &str) -> Result<Vec<Element>> {
    let list = document()?.query_selector_all(selector).map_err(js_error)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// 失敗を示すクラスを付与（付与できなくても処理は続ける）
pub fn mark_error(element: &Element, class: &str) {
    if class.is_empty() {
        return;
    }
    if let Err(e) = element.class_list().add_1(class) {
        log::debug!("could not add class {:?}: {:?}", class, e);
    }
}

/// ドキュメント上のフォームコントロール（ID指定）への書き込み
pub struct DocumentFields {
    document: Document,
}

impl DocumentFields {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl FieldSink for DocumentFields {
    fn assign(&mut self, id: &str, value: &str) -> bool {
        let Some(element) = self.document.get_element_by_id(id) else {
            return false;
        };

        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else {
            log::debug!("#{} is not a form control", id);
            return false;
        }
        true
    }
}
