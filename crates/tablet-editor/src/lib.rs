pub mod indicator;
pub mod input;
pub mod session;
pub mod tools;

pub use indicator::SplitIndicator;
pub use input::{PointerEvent, PointerPhase};
pub use session::{CanvasSession, TabletMutation};
pub use tools::GestureTool;
