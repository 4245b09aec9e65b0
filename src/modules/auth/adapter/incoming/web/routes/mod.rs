pub mod fetch_session;
pub mod login_user;
pub mod logout_user;
pub mod refresh_token;

pub use fetch_session::fetch_session_handler;
pub use login_user::login_user_handler;
pub use logout_user::logout_user_handler;
pub use refresh_token::refresh_token_handler;
