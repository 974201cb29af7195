pub mod message;
pub mod whois;

pub use message::{MessageResponse, QuestionDto, SectionDto};
pub use whois::WhoisEntry;
