pub mod create;
pub mod delete;
pub mod update;

pub use create::CreateContinentCommand;
pub use update::UpdateContinentCommand;
