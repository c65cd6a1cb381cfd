pub mod gestures;
pub mod settings;

pub use gestures::{GestureAction, GestureKind, GestureStats};
pub use settings::ViewerSettings;
