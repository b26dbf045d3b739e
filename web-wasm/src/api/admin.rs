//! 商品管理エンドポイントの呼び出し
//!
//! リトライ・タイムアウトはなし（ブラウザの既定動作に任せる）。

use product_admin_common::{AdminRoutes, Error, ImageList, PrimaryKey, ProductSnapshot, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// JS側の例外を共通エラーに変換
pub(crate) fn js_error(value: JsValue) -> Error {
    Error::Dom(format!("{:?}", value))
}

/// リクエスト送信（共通処理）
///
/// 成功ステータス以外は `Error::Http`
async fn send(method: &str, url: &str) -> Result<Response> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Dom("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Http {
            status: resp.status(),
            url: url.to_string(),
        });
    }
    Ok(resp)
}

async fn fetch_text(url: &str) -> Result<String> {
    let resp = send("GET", url).await?;
    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| Error::UnexpectedShape(format!("response body of {} is not text", url)))
}

/// フォーム用の商品データを取得
pub async fn fetch_snapshot(routes: &AdminRoutes, pk: &PrimaryKey) -> Result<ProductSnapshot> {
    let body = fetch_text(&routes.product_fields(pk)).await?;
    ProductSnapshot::from_json(&body)
}

/// 登録済み画像の一覧を取得
pub async fn fetch_images(routes: &AdminRoutes, pk: &PrimaryKey) -> Result<ImageList> {
    let body = fetch_text(&routes.product_images(pk)).await?;
    ImageList::from_json(&body)
}

/// 商品を削除（成功ステータスなら削除済みとみなす）
pub async fn delete_product(routes: &AdminRoutes, pk: &PrimaryKey, method: &str) -> Result<()> {
    send(method, &routes.delete_product(pk)).await?;
    Ok(())
}
