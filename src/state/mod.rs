pub mod pointer;
pub mod viewport;

pub use pointer::Pointer;
pub use viewport::Viewport;
