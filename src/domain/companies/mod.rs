//! Customer companies.

mod api;
mod models;

pub use api::CompaniesApi;
pub use models::{
    AddressType, CompanyAddress, CompanyUpdate, CustomerCompany, NewCompany,
};
