mod chat_message;
mod completion_request;
mod result_record;

pub use chat_message::*;
pub use completion_request::*;
pub use result_record::*;
