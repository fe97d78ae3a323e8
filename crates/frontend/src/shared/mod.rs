pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod form_session;
pub mod http;
pub mod icons;
pub mod modal;
pub mod resource_store;
pub mod upload_session;
