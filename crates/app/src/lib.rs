//! Promotions application domain and persistence.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(all(test, feature = "integration-tests"))]
mod test;

mod ids;
