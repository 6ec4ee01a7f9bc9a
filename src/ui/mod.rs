pub mod home;
pub mod navbar;
pub mod results;
pub mod toasts;
pub mod upload;
pub mod widgets;
