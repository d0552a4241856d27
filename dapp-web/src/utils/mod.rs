pub mod constants;
pub mod deployments;
pub mod networks;
pub mod url;
