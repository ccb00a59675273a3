//! Promotions

mod errors;
mod handlers;
mod models;
mod payload;
mod requests;

pub(crate) use handlers::*;
