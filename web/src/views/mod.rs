pub mod components;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod admin;
pub use admin::AdminDashboard;

mod client;
pub use client::ClientDashboard;

mod contractor;
pub use contractor::ContractorDashboard;

mod not_found;
pub use not_found::NotFound;
