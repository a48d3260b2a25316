// services/paymind-dash/src/pages/mod.rs
//
// PayMind Dashboard - Route views
//

mod chat;
mod dashboard;
mod landing;
mod login;
mod profile;
mod transactions;

pub use chat::ChatPage;
pub use dashboard::DashboardPage;
pub use landing::Landing;
pub use login::LoginPage;
pub use profile::ProfilePage;
pub use transactions::TransactionsPage;
