//! HTTP handlers. Each module groups the endpoints of one audience.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod kitchen;
pub mod review;
pub mod user;
pub mod waiter;
