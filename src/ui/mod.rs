pub mod action;
pub mod modal;
pub mod render;
pub mod screen;
pub mod toast;
pub mod view;

pub use action::Action;
pub use modal::{ClickTarget, ModalController, ModalView};
pub use render::Renderer;
pub use screen::{Card, GenrePanel, Hero, Region, Screen, Section, Tag};
pub use toast::{Toast, ToastLevel, Toasts};
pub use view::ViewState;
