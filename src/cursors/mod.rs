pub mod iter;
pub mod scoped;
pub mod slice;

pub use iter::CursorIter;
pub use scoped::Scoped;
pub use slice::SliceCursor;
