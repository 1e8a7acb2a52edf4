//! Business logic services for the DairySight cooperative platform

pub mod auth;
pub mod employee;
pub mod farmer;
pub mod intake;
pub mod notification;
pub mod offtake;
pub mod payment;
pub mod settings;
pub mod stats;

pub use auth::AuthService;
pub use employee::EmployeeService;
pub use farmer::FarmerService;
pub use intake::IntakeService;
pub use notification::NotificationCenter;
pub use offtake::OfftakeService;
pub use payment::PaymentService;
pub use settings::SettingsService;
pub use stats::StatsService;
