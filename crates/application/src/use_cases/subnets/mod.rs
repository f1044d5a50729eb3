pub mod add;
pub mod delete;
pub mod list;

pub use add::AddSubnetUseCase;
pub use delete::DeleteSubnetUseCase;
pub use list::ListSubnetsUseCase;
