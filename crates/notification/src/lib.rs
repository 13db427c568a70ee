mod contact;
mod memory;
mod resend;
mod service;
mod smtp;
mod template;

pub use contact::*;
pub use memory::*;
pub use resend::*;
pub use service::*;
pub use smtp::*;
pub use template::*;
