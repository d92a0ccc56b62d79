//! UI Components
//!
//! Reusable Leptos components.

mod nav_sidebar;
mod status_badge;
mod dashboard;
mod recent_table;
mod complaint_form;
mod history_grid;
mod complaint_card;
mod delete_confirm_button;
mod settings_form;

pub use nav_sidebar::NavSidebar;
pub use status_badge::StatusBadge;
pub use dashboard::Dashboard;
pub use recent_table::RecentTable;
pub use complaint_form::ComplaintForm;
pub use history_grid::HistoryGrid;
pub use complaint_card::ComplaintCard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use settings_form::SettingsForm;
