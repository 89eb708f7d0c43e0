pub mod keyboard;
pub mod sidebar;
