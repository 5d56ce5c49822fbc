pub mod auth_screen;
pub mod config_error;
pub mod home;
pub mod toast;

pub use auth_screen::AuthScreen;
pub use config_error::ConfigErrorScreen;
pub use home::HomeScreen;
pub use toast::{ToastQueue, ToastStack};
