pub mod client;
pub mod error;
pub mod models;


pub use client::GitLabClient;
pub use error::{GitLabError, Result};
pub use models::*;
