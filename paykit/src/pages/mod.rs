// paykit/src/pages/mod.rs
//
// Page containers' state and behaviour, independent of any renderer.
//

pub mod chat;
pub mod dashboard;
pub mod login;
pub mod profile;
pub mod transactions;
