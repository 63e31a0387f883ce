pub mod content;
pub mod effects;
pub mod section;
pub mod state;
pub mod view;

pub use content::Site;
pub use section::{NavigationItem, Section};
pub use state::{Theme, UiState};
