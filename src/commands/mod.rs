pub mod add;
pub mod join;
pub mod leave;
pub mod list;
pub mod show;
