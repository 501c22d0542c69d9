mod pipeline;
mod refresh;
mod state;

pub use pipeline::{content_paths, load_fragments, FragmentSource};
pub use refresh::{subscribe, ContentEvent, RefreshHandle};
pub use state::ViewState;
