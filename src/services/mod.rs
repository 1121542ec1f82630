pub mod backend;
pub mod identity;
pub mod section_loader;
pub mod tracker;
pub mod view_controller;

pub use backend::{Backend, HttpBackend};
pub use identity::{authenticate, logout, sign_in, GuardOutcome};
pub use section_loader::{pick_hero, LoadReport, SectionLoader, SectionOutcome};
pub use tracker::{InteractionTracker, ScheduledReload};
pub use view_controller::ViewController;
