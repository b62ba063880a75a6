pub mod assistant;
pub mod call;
pub mod chat;
pub mod home;
pub mod media;
pub mod settings;
