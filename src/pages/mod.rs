//! Routed screens

mod dashboard;
mod forgot_password;
mod legal;
mod login;
mod signup;
mod users;

pub use dashboard::DashboardPage;
pub use forgot_password::{ForgotPasswordPage, NotFoundPage};
pub use legal::{LegalDocument, LegalPage};
pub use login::LoginPage;
pub use signup::SignupPage;
pub use users::UsersPage;
