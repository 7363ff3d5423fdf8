//! Employees

mod api;
mod models;

pub use api::EmployeesApi;
pub use models::{Employee, EmployeeUpdate, NewEmployee};
