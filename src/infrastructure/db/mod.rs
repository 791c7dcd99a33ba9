pub mod memory;
pub mod pool;
pub mod store;
