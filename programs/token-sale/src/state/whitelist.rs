// Buyer Whitelist State
//
// One entry per (sale, buyer) pair. Created by the seller, read by
// buy_token, never deleted.

use anchor_lang::prelude::*;
use crate::errors::*;

#[account]
#[derive(InitSpace)]
pub struct WhitelistEntry {
    pub is_whitelisted: bool,
    pub bump: u8,
}

impl WhitelistEntry {
    pub fn assert_admitted(&self) -> Result<()> {
        require!(self.is_whitelisted, TokenSaleError::NotWhitelisted);
        Ok(())
    }
}
