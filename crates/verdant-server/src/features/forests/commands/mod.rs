pub mod create;
pub mod delete;
pub mod update;

pub use create::CreateForestCommand;
pub use update::UpdateForestCommand;
