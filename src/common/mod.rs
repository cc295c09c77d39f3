pub mod launch;
pub mod paths;
pub mod system;
