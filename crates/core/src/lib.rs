//! Domain core for the Casa De Malar site.
//!
//! Record types, validation rules, upload naming and the small view state
//! machines shared by the data-access crate and the web server. Nothing in
//! here performs I/O.

pub mod admin;
pub mod error;
pub mod layout;
pub mod motion;
pub mod portfolio;
pub mod review;
pub mod review_form;
pub mod types;
pub mod upload;
pub mod view_state;
