pub mod aliases;
pub mod bench;
pub mod config;
pub mod eval;
pub mod listen;
pub mod parse;
pub mod search_url;
