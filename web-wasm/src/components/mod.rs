pub mod header;
pub mod notice_banner;
pub mod upload_panel;
pub mod filter_select;
pub mod text_pane;
pub mod copy_button;
