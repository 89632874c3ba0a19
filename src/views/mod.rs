pub mod about;
pub mod chat;
pub mod home;
pub mod settings;
pub mod shared;

pub use about::AboutView;
pub use chat::SecurityChatbot;
pub use home::HomeView;
pub use settings::SettingsView;
