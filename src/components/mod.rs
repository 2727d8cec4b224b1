mod tool_button;

pub use tool_button::{BUTTON_SIZE, ToolButton};
