//! Payroll domain module (employee records).
//!
//! This crate contains the payroll rules for a single employee (age, surname,
//! salary decrease, bonus), implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage). The system clock is only read by
//! [`Employee::age`].

pub mod birth_date;
pub mod employee;
pub mod policy;

pub use birth_date::BirthDate;
pub use employee::Employee;
pub use policy::PayrollPolicy;
