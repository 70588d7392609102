pub mod add;
pub mod category;
pub mod common;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod move_cmd;
pub mod search;
pub mod share;
pub mod show;
pub mod tag;
