mod filter_bar;
mod loading_spinner;
mod project_card;
mod project_grid;
mod share_dialog;
mod toaster;

pub use filter_bar::FilterBar;
pub use loading_spinner::LoadingSpinner;
pub use project_card::ProjectCard;
pub use project_grid::{use_project_grid, GridSignals, ProjectGrid, ProjectGridEmpty};
pub use share_dialog::{share_links, ShareDialog, ShareLink};
pub use toaster::Toaster;
