pub mod authorization;
pub mod bearer;
pub mod header_lookup;

pub use bearer::{Credential, ExtractionError, try_extract_params, try_extract_params_by_id};
pub use header_lookup::HeaderLookup;
