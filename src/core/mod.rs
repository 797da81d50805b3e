pub mod behavior;
pub mod hud;
pub mod menu;

pub use behavior::*;
pub use hud::*;
pub use menu::*;
