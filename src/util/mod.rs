pub mod colors;
pub mod hook;
pub mod link;
pub mod log;
pub mod task;
