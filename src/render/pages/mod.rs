//! One module per route; each returns a complete HTML document

pub mod about;
pub mod capabilities;
pub mod certificates;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod home;
pub mod mission_vision;
pub mod references;
pub mod services;
