mod fields;
mod ledger_page;

pub mod expense;
pub mod home;
pub mod income;
pub mod layout;
pub mod login;
pub mod not_found;
pub mod signup;

pub use expense::ExpensePage;
pub use home::DashboardPage;
pub use income::IncomePage;
pub use layout::DashboardLayout;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use signup::SignUpPage;
