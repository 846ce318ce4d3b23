// HTTP handlers, one module per resource family

pub mod auth;
pub mod blog;
pub mod careers;
pub mod contact;
pub mod demo;
pub mod newsletter;
pub mod partners;
pub mod team;
pub mod upload;
pub mod video;
