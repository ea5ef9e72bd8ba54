mod upload_request;
mod upload_session;

pub use upload_request::*;
pub use upload_session::*;
