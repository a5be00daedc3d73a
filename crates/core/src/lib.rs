//! Domain types shared by the DeliShop storage and HTTP crates.

pub mod error;
pub mod product;
pub mod types;
