// Runtime — logging init and the one-shot pipeline driver.

pub mod boot;
pub mod run;

pub use run::run;
