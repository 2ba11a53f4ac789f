pub type CmdResult<T> = iconfix::Result<(T, i32)>;

pub mod list;
pub mod plan;
