pub mod home;
pub mod pokemon;
