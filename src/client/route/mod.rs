mod home;
mod minecraft;
mod not_found;
mod social;
mod voice_chat;

pub use home::Home;
pub use minecraft::Minecraft;
pub use not_found::NotFound;
pub use social::SocialMedia;
pub use voice_chat::VoiceChat;
