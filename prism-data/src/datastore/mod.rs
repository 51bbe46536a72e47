mod data_store;
mod in_memory;

pub use data_store::DataStore;
pub use in_memory::InMemoryDataStore;
