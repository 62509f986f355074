// Library for tests to access modules

pub mod config;
pub mod dashboard;
pub mod feed;
pub mod history;
pub mod models;
pub mod page;
pub mod render;
pub mod routes;
pub mod sampler;
pub mod version;
pub mod worker;
