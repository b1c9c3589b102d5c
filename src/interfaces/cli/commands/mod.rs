pub mod config_gen;
pub mod resolve;
pub mod shorten;

pub use config_gen::config_generate;
pub use resolve::resolve_code;
pub use shorten::shorten_url;
