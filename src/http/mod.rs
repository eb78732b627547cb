//! HTTP layer — a closable shared session and the request dispatcher.

pub mod client;
pub mod session;

pub use client::GradeJsHttp;
pub use session::Session;
