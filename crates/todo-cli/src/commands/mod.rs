pub mod add;
pub mod delete;
pub mod dispatch;
pub mod list;
pub mod show;
pub mod update;
