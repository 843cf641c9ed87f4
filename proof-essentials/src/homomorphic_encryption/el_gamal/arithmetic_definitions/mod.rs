pub mod ciphertext;
pub mod plaintext;
