//! Request and response bodies

pub mod quotations;
