mod admin;

pub(crate) use admin::js_error;
pub use admin::{delete_product, fetch_images, fetch_snapshot};
