pub mod home;
pub mod round;
