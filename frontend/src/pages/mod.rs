pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
pub mod upload;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use upload::UploadPage;
