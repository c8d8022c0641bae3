//! # Blog Shared
//!
//! Wire types exchanged between the server and the browser script.

pub mod dto;
pub mod response;

pub use response::{MessageResponse, PostResponse};
