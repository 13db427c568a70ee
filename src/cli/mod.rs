mod send;
mod server;

pub use send::{SendInput, send};
pub use server::{app, serve};
