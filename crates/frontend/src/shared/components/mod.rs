pub mod error_banner;
pub mod media_picker;
pub mod pagination_controls;
pub mod stat_card;
