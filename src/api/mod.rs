//! Backend API: the command client and the live update subscription.

mod client;
mod error;
mod updates;

pub use client::GameClient;
pub use error::ApiError;
pub use updates::{StreamEvent, UpdateStream};
