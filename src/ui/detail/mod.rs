mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::{detail_popup, max_scroll, render_detail_dialog};
pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::DetailDialogState;
