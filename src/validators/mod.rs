//! Request validation helpers built on the `validator` crate.

pub mod common;
pub mod goal;
pub mod user;

pub use common::*;
pub use goal::*;
pub use user::*;
