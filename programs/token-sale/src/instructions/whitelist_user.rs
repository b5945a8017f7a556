// Whitelist User Instruction
//
// Seller-only admission of a buyer. Re-admitting the same buyer rewrites
// the same record, so the call is idempotent.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct WhitelistUser<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    pub buyer: SystemAccount<'info>,

    #[account(
        seeds = [TOKEN_SALE_SEED, seller.key().as_ref()],
        bump = token_sale.sale_bump,
    )]
    pub token_sale: Account<'info, TokenSale>,

    #[account(
        init_if_needed,
        payer = seller,
        space = ANCHOR_DISCRIMINATOR + WhitelistEntry::INIT_SPACE,
        seeds = [BUYER_WHITELIST_SEED, token_sale.key().as_ref(), buyer.key().as_ref()],
        bump
    )]
    pub buyer_whitelist: Account<'info, WhitelistEntry>,

    pub system_program: Program<'info, System>,
}

impl<'info> WhitelistUser<'info> {
    pub fn whitelist_user(&mut self, bumps: &WhitelistUserBumps) -> Result<()> {
        self.token_sale.assert_is_seller(&self.seller.key())?;

        self.buyer_whitelist.set_inner(WhitelistEntry {
            is_whitelisted: true,
            bump: bumps.buyer_whitelist,
        });

        msg!(
            "Buyer {} whitelisted for sale {}",
            self.buyer.key(),
            self.token_sale.key()
        );

        Ok(())
    }
}
