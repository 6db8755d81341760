pub mod chat;
pub mod home;
pub mod login;
pub mod not_found;
pub mod upload;

pub use chat::ChatPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use upload::UploadPage;
