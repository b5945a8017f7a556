use anchor_lang::prelude::*;

#[error_code]
pub enum TokenSaleError {
    #[msg("Per-token price and purchase limit must both be positive")]
    InvalidSaleTerms,

    #[msg("Signer does not match the seller recorded on the token sale")]
    InvalidSellerAccount,

    #[msg("Buyer has not been whitelisted for this sale")]
    NotWhitelisted,

    #[msg("Purchase quantity must be greater than zero")]
    InvalidQuantity,

    #[msg("Purchase quantity exceeds the per-purchase limit")]
    PurchaseLimitExceeded,

    #[msg("Escrow does not hold enough tokens for this purchase")]
    InsufficientEscrowTokens,

    #[msg("Buyer cannot cover the total purchase price")]
    InsufficientFunds,

    #[msg("Arithmetic overflow occurred")]
    Overflow,
}
