pub mod auth;
pub mod notifications;
pub mod system;

pub use auth::AuthService;
pub use notifications::NotificationService;
pub use system::SystemService;
