mod completion_transport;
mod image_host;

pub use completion_transport::*;
pub use image_host::*;
