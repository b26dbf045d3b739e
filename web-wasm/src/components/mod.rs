pub mod carousel;
pub mod product_form;
pub mod product_table;
pub mod upload_preview;
