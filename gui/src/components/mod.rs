// GUI components module
pub mod layout;
pub mod menu;
pub mod search_panel;
pub mod theme_toggle;

// Re-export components for easier access from app.rs
pub use layout::Layout;
pub use menu::Menu;
pub use search_panel::SearchPanel;
