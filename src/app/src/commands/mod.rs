pub mod channel;
pub mod timer;
