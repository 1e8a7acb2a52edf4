//! HTTP request handlers

pub mod auth;
pub mod dashboard;
pub mod employee;
pub mod farmer;
pub mod health;
pub mod intake;
pub mod notification;
pub mod offtake;
pub mod payment;
pub mod settings;

pub use auth::*;
pub use dashboard::*;
pub use employee::*;
pub use farmer::*;
pub use health::*;
pub use intake::*;
pub use notification::*;
pub use offtake::*;
pub use payment::*;
pub use settings::*;
