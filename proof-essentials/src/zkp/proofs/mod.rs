pub mod chaum_pedersen_dl_equality;
