// Token Sale Program Constants

pub const TOKEN_SALE_SEED: &[u8] = b"token_sale";
pub const SALE_AUTHORITY_SEED: &[u8] = b"authority";
pub const BUYER_WHITELIST_SEED: &[u8] = b"buyer_whitelist";
pub const ANCHOR_DISCRIMINATOR: usize = 8;
