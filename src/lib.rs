//! Client-side core of a lost/found pet reporting app with a pet-shop
//! browsing flow.
//!
//! State lives in small Model-View-Intent components under [`ui`]; the
//! external backend (auth, documents, images, location) is reached
//! through the traits in [`services`].

pub mod config;
pub mod contact;
pub mod domain;
pub mod forms;
pub mod logging;
pub mod services;
pub mod session;
pub mod ui;
