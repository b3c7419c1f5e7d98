mod central_panel;
mod dialogs;
mod tools_panel;

pub use central_panel::central_panel;
pub use dialogs::{Dialog, DialogOutcome};
pub use tools_panel::tools_panel;
