pub mod layout;
pub mod pointer;
pub mod visibility;

pub use layout::wire_layout_observers;
pub use pointer::wire_pointer_handlers;
pub use visibility::wire_visibility;
