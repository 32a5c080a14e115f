pub mod add;
pub mod check;
pub mod common;
pub mod size;
pub mod sync;

pub use add::Add;
pub use check::Check;
pub use common::Settings;
pub use size::Size;
pub use sync::Sync;
