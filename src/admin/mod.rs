mod purge;

pub use purge::{purge_cache, purge_cache_with_token, AUTH_TOKEN_ENV};
