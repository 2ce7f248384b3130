//! Server-rendered HTML, built with `maud`.

pub mod admin;
pub mod error;
pub mod home;
pub mod layout;
pub mod portfolio;
pub mod reviews;
pub mod sections;
