//! Configuration loading for grade rate tables.
//!
//! Records use the standard table (Junior=10, Middle=15, Senior=20) unless a
//! different [`RateTable`] is supplied, typically loaded from YAML.
//!
//! # Example
//!
//! ```no_run
//! use employee_record::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded rates: {:?}", config.rates());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RateTable, RatesFile};
