pub mod header;
pub mod round_link;
pub mod sidebar;
pub mod tooltip;
