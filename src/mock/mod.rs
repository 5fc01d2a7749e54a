mod display;
mod script;

pub use display::{RecordingDisplay, Shown};
pub use script::ScriptedInput;
