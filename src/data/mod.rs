pub mod xor;

pub use xor::XorDataset;
