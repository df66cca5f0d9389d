pub mod card_animated;
pub mod page_header;
pub mod status_message;
pub mod thumbnail;

pub use card_animated::{stagger_delay, CardAnimated};
pub use page_header::PageHeader;
pub use status_message::StatusMessage;
pub use thumbnail::thumbnail;
