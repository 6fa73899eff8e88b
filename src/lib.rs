pub mod args;
pub mod driver;
pub mod model;
pub mod request;
pub mod telemetry;
pub mod worker;
