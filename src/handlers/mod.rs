pub mod common;
pub mod logs;
pub mod monitors;
pub mod prompts;
