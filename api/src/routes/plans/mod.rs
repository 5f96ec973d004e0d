//! Plan recommendation route handlers

pub mod recommend;
