//! Screen state, one MVI component per stateful screen.

pub mod cart;
pub mod map;
pub mod mvi;
pub mod my_pets;
