//! UI Components
//!
//! Reusable Leptos components.

mod add_food_modal;
mod delete_confirm_button;
mod edit_food_modal;
mod error_banner;
mod food_card;
mod food_form;
mod header;
mod modal_frame;

pub use add_food_modal::AddFoodModal;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_food_modal::EditFoodModal;
pub use error_banner::ErrorBanner;
pub use food_card::FoodCard;
pub use food_form::FoodFormView;
pub use header::Header;
pub use modal_frame::ModalFrame;
