pub mod icons;
pub mod menu_toggle;
pub mod nav_list;
pub mod quick_stats;
pub mod sidebar;
