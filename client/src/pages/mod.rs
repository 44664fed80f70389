pub mod account;
pub mod admin;
pub mod car_detail;
pub mod cars;
pub mod home;
pub mod login;
pub mod register;
