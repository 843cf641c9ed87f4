pub mod error;
pub mod homomorphic_encryption;
pub mod utils;
pub mod zkp;
