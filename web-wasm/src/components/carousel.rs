//! カルーセルコンポーネント
//!
//! サーバーが描画したスライドをモデルに取り込み、以降は Leptos で描画する。
//! プレビューとフォーム補完の両方がこのハンドルを共有する。

use crate::api::js_error;
use crate::dom;
use leptos::prelude::*;
use product_admin_common::{Carousel, Error, Result, Selectors, Ticket};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

#[derive(Clone)]
pub struct CarouselHandle {
    state: RwSignal<Carousel>,
    element: Element,
}

impl CarouselHandle {
    /// `element` の中身をモデルに置き換えてマウントする
    pub fn mount(element: Element, selectors: &Selectors) -> Result<Self> {
        let existing = existing_slides(&element)?;
        log::debug!("carousel starts with {} slide(s)", existing.len());
        let state = RwSignal::new(Carousel::from_existing(existing));

        let host: HtmlElement = element
            .clone()
            .dyn_into()
            .map_err(|_| Error::Dom("carousel container is not an HTML element".into()))?;
        host.set_inner_html("");

        let slide_class = selectors.slide_class.clone();
        let active_class = selectors.active_class.clone();
        leptos::mount::mount_to(host, move || {
            view! {
                <CarouselSlides state=state slide_class=slide_class active_class=active_class />
            }
        })
        .forget();

        Ok(Self { state, element })
    }

    pub fn ticket(&self) -> Option<Ticket> {
        self.state.try_with_untracked(|c| c.ticket())
    }

    pub fn begin_rebuild(&self) -> Option<Ticket> {
        self.state.try_update(|c| c.begin_rebuild())
    }

    pub fn push(&self, ticket: Ticket, src: String, title: Option<String>) -> bool {
        self.state
            .try_update(|c| c.push(ticket, src, title))
            .unwrap_or(false)
    }

    pub fn replace_placeholder(&self, ticket: Ticket, urls: Vec<String>) -> bool {
        self.state
            .try_update(|c| c.replace_placeholder(ticket, urls))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.state.try_with_untracked(|c| c.len()).unwrap_or(0)
    }

    pub fn mark_error(&self, class: &str) {
        dom::mark_error(&self.element, class);
    }
}

/// 既存の子要素から (`src`, `title`) を読み出す
///
/// プレースホルダーも `img` を持つ必要がある。`img` のない子はマウント時に消える。
fn existing_slides(element: &Element) -> Result<Vec<(String, Option<String>)>> {
    let children = element.children();
    let mut slides = Vec::new();
    for i in 0..children.length() {
        let Some(child) = children.item(i) else {
            continue;
        };
        let Some((src, img)) = child
            .query_selector("img")
            .map_err(js_error)?
            .and_then(|img| img.get_attribute("src").map(|src| (src, img)))
        else {
            log::warn!("carousel child {} has no img[src] and is dropped", i);
            continue;
        };
        slides.push((src, img.get_attribute("title")));
    }
    Ok(slides)
}

#[component]
fn CarouselSlides(
    state: RwSignal<Carousel>,
    slide_class: String,
    active_class: String,
) -> impl IntoView {
    move || {
        state.with(|carousel| {
            carousel
                .slides()
                .iter()
                .enumerate()
                .map(|(index, slide)| {
                    let class = if carousel.is_active(index) {
                        format!("{} {}", slide_class, active_class)
                    } else {
                        slide_class.clone()
                    };
                    view! {
                        <div class=class>
                            <img src=slide.src.clone() title=slide.title.clone() />
                        </div>
                    }
                })
                .collect_view()
        })
    }
}
