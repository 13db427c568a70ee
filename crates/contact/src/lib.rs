mod envelope;
mod form;
mod inquiry;
mod relay;
mod value_object;

pub use envelope::*;
pub use form::*;
pub use inquiry::*;
pub use relay::*;
pub use value_object::*;
