pub mod data_url;
pub mod email;
pub mod error;
pub mod notification;
