// Initialize Instruction
//
// Creates the sale record for a seller and places the escrow token
// account under program control.

use anchor_lang::prelude::*;
use anchor_spl::token::{
    self, spl_token::instruction::AuthorityType, SetAuthority, Token, TokenAccount,
};

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    // Pre-funded with the sellable supply; still seller-owned at this point
    #[account(
        mut,
        token::authority = seller,
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = seller,
        space = ANCHOR_DISCRIMINATOR + TokenSale::INIT_SPACE,
        seeds = [TOKEN_SALE_SEED, seller.key().as_ref()],
        bump
    )]
    pub token_sale: Account<'info, TokenSale>,

    /// CHECK: PDA signer for escrow transfers
    #[account(
        seeds = [SALE_AUTHORITY_SEED, token_sale.key().as_ref()],
        bump
    )]
    pub sale_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(
        &mut self,
        per_token_price: u64,
        purchase_limit: u64,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        require!(per_token_price > 0, TokenSaleError::InvalidSaleTerms);
        require!(purchase_limit > 0, TokenSaleError::InvalidSaleTerms);

        self.token_sale.set_inner(TokenSale {
            seller: self.seller.key(),
            escrow_token_account: self.escrow_token_account.key(),
            per_token_price,
            purchase_limit,
            sale_bump: bumps.token_sale,
            authority_bump: bumps.sale_authority,
        });

        // From here on only the sale authority PDA can move the escrowed
        // tokens, and it only signs inside buy_token / end_sale.
        token::set_authority(
            CpiContext::new(
                self.token_program.to_account_info(),
                SetAuthority {
                    current_authority: self.seller.to_account_info(),
                    account_or_mint: self.escrow_token_account.to_account_info(),
                },
            ),
            AuthorityType::AccountOwner,
            Some(self.sale_authority.key()),
        )?;

        msg!(
            "Sale initialized: seller {} escrow {}",
            self.seller.key(),
            self.escrow_token_account.key()
        );
        msg!(
            "Price: {} lamports/token, purchase limit: {} tokens",
            per_token_price,
            purchase_limit
        );

        Ok(())
    }
}
