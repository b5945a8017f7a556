// Token Sale State

use anchor_lang::prelude::*;
use crate::errors::*;

#[account]
#[derive(InitSpace)]
pub struct TokenSale {
    pub seller: Pubkey,                // Sale owner, immutable
    pub escrow_token_account: Pubkey,  // Holds the sellable supply
    pub per_token_price: u64,          // Lamports per token unit
    pub purchase_limit: u64,           // Max units per purchase call
    pub sale_bump: u8,                 // PDA bump for this account
    pub authority_bump: u8,            // PDA bump for the sale authority
}

impl TokenSale {
    pub fn assert_is_seller(&self, caller: &Pubkey) -> Result<()> {
        require!(self.seller == *caller, TokenSaleError::InvalidSellerAccount);
        Ok(())
    }

    // Total lamport price for `quantity` units, rejecting unrepresentable totals
    pub fn total_price(&self, quantity: u64) -> Result<u64> {
        quantity
            .checked_mul(self.per_token_price)
            .ok_or_else(|| error!(TokenSaleError::Overflow))
    }
}
