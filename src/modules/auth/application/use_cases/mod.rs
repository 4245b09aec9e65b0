pub mod fetch_session;
pub mod login_user;
pub mod refresh_token;
