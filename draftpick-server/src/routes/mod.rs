//! HTTP route handlers

pub mod champions;
pub mod drafts;
pub mod recommend;
pub mod status;
