//! Product Admin Common Library
//!
//! ブラウザ(WASM)側スクリプトから使う、DOMに依存しない型とロジック

pub mod carousel;
pub mod config;
pub mod error;
pub mod images;
pub mod pagination;
pub mod routes;
pub mod snapshot;

pub use carousel::{Carousel, Slide, Ticket};
pub use config::{AdminConfig, Selectors, CONFIG_ELEMENT_ID};
pub use error::{Error, Result};
pub use images::ImageList;
pub use pagination::canonical_page_href;
pub use routes::{AdminRoutes, PrimaryKey};
pub use snapshot::{apply_snapshot, format_field, to_fixed, FieldSink, FillReport, ProductSnapshot};
