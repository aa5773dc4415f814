mod login;
pub use login::Login;

mod favorites;
pub use favorites::Favorites;
