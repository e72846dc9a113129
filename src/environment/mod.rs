pub mod router;
pub mod types;

mod native;
pub use native::*;
