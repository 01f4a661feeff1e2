pub mod commands;
pub mod handle;
pub mod input;
pub mod session;

pub use commands::{CommandStack, ResizeCommand, StyleChange};
pub use handle::ResizeHandle;
pub use input::{InputEvent, Modifiers};
pub use session::{ResizeFrame, ResizeOutcome, ResizeSession};
