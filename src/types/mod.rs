pub mod event;
pub mod message;
pub mod received;
pub mod reply;
pub mod response;

pub use event::*;
pub use message::*;
pub use received::*;
pub use reply::*;
pub use response::*;
