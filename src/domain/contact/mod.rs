//! Contact Module - Contact form message and submission lifecycle.

mod message;
mod status;

pub use message::{ContactMessage, MAX_EMAIL_LEN, MAX_MESSAGE_LEN, MAX_NAME_LEN};
pub use status::ContactFormStatus;
