// src/core/mod.rs

pub mod ident;
pub mod net;
pub mod number;
