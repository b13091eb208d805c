//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod error_banner;
mod field_error;
mod task_form;
mod task_row;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use field_error::FieldError;
pub use task_form::TaskForm;
pub use task_row::TaskRow;
