pub mod constants;
pub mod hostname;
pub mod storage;

pub use constants::*;
pub use hostname::host_name;
pub use storage::*;
