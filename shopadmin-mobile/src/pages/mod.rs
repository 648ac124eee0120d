//! Mobile UI pages

pub mod products;
