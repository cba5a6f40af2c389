mod context;
mod editor_state;
mod mode;

pub use context::{EditorContext, KeyOutcome, PointerOutcome};
pub use editor_state::EditorState;
pub use mode::Mode;
