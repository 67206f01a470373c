//! Repository Module
//!
//! One trait per table family, each implemented for [`MySqlStore`](super::MySqlStore).

pub mod attendance;
pub mod employee;
pub mod holiday;
pub mod notice;
pub mod salary;
pub mod site;

// Re-exports
pub use attendance::AttendanceRepository;
pub use employee::EmployeeRepository;
pub use holiday::HolidayRepository;
pub use notice::NoticeRepository;
pub use salary::SalaryRepository;
pub use site::SiteRepository;
