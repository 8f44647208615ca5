//! UI components

pub mod admin_tools;
pub mod footer;
pub mod header;
pub mod message;
pub mod pagination;
pub mod photo_table;
