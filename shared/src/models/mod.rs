//! Domain records for the DairySight cooperative platform

pub mod employee;
pub mod farmer;
pub mod intake;
pub mod offtake;
pub mod payment;
pub mod settings;
pub mod user;

pub use employee::*;
pub use farmer::*;
pub use intake::*;
pub use offtake::*;
pub use payment::*;
pub use settings::*;
pub use user::*;
