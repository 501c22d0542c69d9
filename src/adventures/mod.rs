mod client;

pub use client::AdventureClient;
