pub mod about;
pub mod auth;
pub mod contact;
pub mod editor;
pub mod email;
pub mod media;
pub mod notification;
pub mod project;
