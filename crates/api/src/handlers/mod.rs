pub mod admin;
pub mod assets;
pub mod gallery;
pub mod home;
pub mod reviews;
