//! カルーセルの状態モデル
//!
//! 表示中のスライド列と世代番号を持つ。DOMへの反映はブラウザ側の責務で、
//! ここでは「どのスライドをどの順で持つか」だけを扱う。
//!
//! - アクティブなスライドは常に先頭（index 0）のみ
//! - `begin_rebuild` で世代が進み、古い世代の `Ticket` による追加は捨てられる

use serde::{Deserialize, Serialize};

/// スライド1枚
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: u64,
    /// Data URL またはサーバー上の画像URL
    pub src: String,
    /// 元のファイル名（プレビュー時のみ）
    pub title: Option<String>,
}

/// 追加操作の世代を表す札
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    slides: Vec<Slide>,
    generation: u64,
    next_id: u64,
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    /// サーバーが描画済みのスライド（`src`, `title`）で初期化する
    pub fn from_existing<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = (String, Option<String>)>,
    {
        let mut carousel = Self::new();
        for (src, title) in existing {
            carousel.insert(src, title);
        }
        carousel
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// アクティブなスライド（先頭）
    pub fn active(&self) -> Option<&Slide> {
        self.slides.first()
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == 0 && !self.slides.is_empty()
    }

    /// 現在の世代の札
    pub fn ticket(&self) -> Ticket {
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// 全スライドを消して新しい世代を始める
    ///
    /// 以前に発行した札はすべて無効になる。
    pub fn begin_rebuild(&mut self) -> Ticket {
        self.slides.clear();
        self.generation += 1;
        self.ticket()
    }

    /// 末尾にスライドを追加する。札が古ければ何もしない
    pub fn push(&mut self, ticket: Ticket, src: String, title: Option<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.insert(src, title);
        true
    }

    /// プレースホルダー（先頭）を登録済み画像で置き換える
    ///
    /// `urls` が空なら何も変えない。札が古ければ何もしない。
    pub fn replace_placeholder<I>(&mut self, ticket: Ticket, urls: I) -> bool
    where
        I: IntoIterator<Item = String>,
    {
        if !self.is_current(ticket) {
            return false;
        }
        let mut urls = urls.into_iter().peekable();
        if urls.peek().is_none() {
            return false;
        }

        if !self.slides.is_empty() {
            self.slides.remove(0);
        }
        for url in urls {
            self.insert(url, None);
        }
        true
    }

    fn insert(&mut self, src: String, title: Option<String>) {
        let id = self.next_id;
        self.next_id += 1;
        self.slides.push(Slide { id, src, title });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder() -> Carousel {
        Carousel::from_existing([("/static/no-image.png".to_string(), None)])
    }

    fn srcs(carousel: &Carousel) -> Vec<&str> {
        carousel.slides().iter().map(|s| s.src.as_str()).collect()
    }

    #[test]
    fn test_rebuild_clears_and_pushes() {
        let mut carousel = placeholder();
        let ticket = carousel.begin_rebuild();
        assert!(carousel.is_empty());

        assert!(carousel.push(ticket, "data:a".into(), Some("a.jpg".into())));
        assert!(carousel.push(ticket, "data:b".into(), Some("b.jpg".into())));
        assert_eq!(srcs(&carousel), vec!["data:a", "data:b"]);
        assert_eq!(carousel.active().unwrap().title.as_deref(), Some("a.jpg"));
    }

    #[test]
    fn test_only_first_is_active() {
        let mut carousel = Carousel::new();
        assert!(!carousel.is_active(0));

        let ticket = carousel.begin_rebuild();
        for i in 0..4 {
            carousel.push(ticket, format!("data:{}", i), None);
            let active: Vec<usize> = (0..carousel.len()).filter(|&i| carousel.is_active(i)).collect();
            assert_eq!(active, vec![0]);
        }
    }

    #[test]
    fn test_stale_ticket_dropped() {
        let mut carousel = Carousel::new();
        let first = carousel.begin_rebuild();
        carousel.push(first, "data:old-1".into(), None);

        let second = carousel.begin_rebuild();
        assert!(!carousel.push(first, "data:old-2".into(), None));
        assert!(carousel.push(second, "data:new".into(), None));
        assert_eq!(srcs(&carousel), vec!["data:new"]);
    }

    #[test]
    fn test_replace_placeholder() {
        let mut carousel = placeholder();
        let ticket = carousel.ticket();
        assert!(carousel.replace_placeholder(ticket, vec!["a.jpg".to_string(), "b.jpg".to_string()]));
        assert_eq!(srcs(&carousel), vec!["a.jpg", "b.jpg"]);
        assert!(carousel.is_active(0));
        assert!(!carousel.is_active(1));
    }

    #[test]
    fn test_replace_placeholder_empty_keeps_placeholder() {
        let mut carousel = placeholder();
        let before = carousel.clone();
        assert!(!carousel.replace_placeholder(carousel.ticket(), Vec::<String>::new()));
        assert_eq!(carousel, before);
    }

    #[test]
    fn test_replace_placeholder_after_rebuild_is_refused() {
        let mut carousel = placeholder();
        let ticket = carousel.ticket();

        // 画像一覧の取得中にユーザーがファイルを選び直した
        let rebuild = carousel.begin_rebuild();
        carousel.push(rebuild, "data:picked".into(), Some("picked.png".into()));

        assert!(!carousel.replace_placeholder(ticket, vec!["a.jpg".to_string()]));
        assert_eq!(srcs(&carousel), vec!["data:picked"]);
    }

    #[test]
    fn test_slide_ids_unique() {
        let mut carousel = placeholder();
        let ticket = carousel.ticket();
        carousel.replace_placeholder(ticket, vec!["a.jpg".to_string(), "b.jpg".to_string()]);
        let ticket = carousel.begin_rebuild();
        carousel.push(ticket, "data:c".into(), None);
        carousel.push(ticket, "data:d".into(), None);

        let ids: Vec<u64> = carousel.slides().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }
}
