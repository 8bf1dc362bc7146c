mod imgur_client;
mod mock_completion_transport;
mod mock_image_host;
mod openai_client;

pub use imgur_client::*;
pub use mock_completion_transport::*;
pub use mock_image_host::*;
pub use openai_client::*;
