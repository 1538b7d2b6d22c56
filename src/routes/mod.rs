pub mod auth;

pub mod notifications;

pub mod system;

pub use auth::configure_auth_routes;
pub use notifications::configure_notification_routes;
pub use system::configure_system_routes;
