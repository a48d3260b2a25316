// paykit/src/lib.rs
//
// PayMind client kit - shared models, fixtures, API client and page state
// used by both the web dashboard and the terminal client.
//

pub mod api;
pub mod chat;
pub mod config;
pub mod errors;
pub mod format;
pub mod mock;
pub mod pages;
pub mod router;
pub mod session;
pub mod storage;
pub mod types;

pub use errors::{PayMindError, Result};
