//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod catalog;
mod header;
mod rent;
mod reports;
mod returns;
mod tabs;
mod toasts;

pub use catalog::CatalogTab;
pub use header::Header;
pub use rent::RentTab;
pub use reports::ReportsTab;
pub use returns::ReturnTab;
pub use tabs::TabNav;
pub use toasts::Toasts;
