pub mod admin;
pub mod adventures;
pub mod block;
pub mod conf;
pub mod core;
pub mod fragment;
pub mod query;

#[cfg(feature = "testutil")]
pub mod testutil;
