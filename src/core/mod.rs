pub mod embeds;
pub mod filename;
pub mod http;
