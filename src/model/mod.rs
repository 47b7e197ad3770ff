pub mod counter;
pub mod entropy;
pub mod konami;
pub mod ping;
pub mod schedule;
pub mod server_info;
pub mod status;
pub mod voice;
