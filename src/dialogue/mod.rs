// src/dialogue/mod.rs — Conversation layer

pub mod controller;
pub mod event;
pub mod session;

pub use controller::Controller;
pub use event::{Button, Event, Reply};
pub use session::{Session, SessionStore};
