// End Sale Instruction
//
// Seller winds the sale down: remaining escrowed tokens return to the
// seller's token account and the escrow account is closed, refunding its
// rent lamports to the seller.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Token, TokenAccount, Transfer};

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct EndSale<'info> {
    #[account(
        mut,
        address = token_sale.seller,
    )]
    pub seller: Signer<'info>,

    #[account(
        mut,
        token::mint = escrow_token_account.mint,
        token::authority = seller,
    )]
    pub seller_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = token_sale.escrow_token_account,
        token::authority = sale_authority,
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,

    #[account(
        seeds = [TOKEN_SALE_SEED, seller.key().as_ref()],
        bump = token_sale.sale_bump,
    )]
    pub token_sale: Account<'info, TokenSale>,

    /// CHECK: PDA signer for escrow transfers
    #[account(
        seeds = [SALE_AUTHORITY_SEED, token_sale.key().as_ref()],
        bump = token_sale.authority_bump,
    )]
    pub sale_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

impl<'info> EndSale<'info> {
    pub fn end_sale(&mut self) -> Result<()> {
        let remaining = self.escrow_token_account.amount;

        let token_sale_key = self.token_sale.key();
        let authority_seeds = &[
            SALE_AUTHORITY_SEED,
            token_sale_key.as_ref(),
            &[self.token_sale.authority_bump],
        ];
        let signer_seeds = &[&authority_seeds[..]];

        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.escrow_token_account.to_account_info(),
                    to: self.seller_token_account.to_account_info(),
                    authority: self.sale_authority.to_account_info(),
                },
                signer_seeds,
            ),
            remaining,
        )?;

        token::close_account(CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            CloseAccount {
                account: self.escrow_token_account.to_account_info(),
                destination: self.seller.to_account_info(),
                authority: self.sale_authority.to_account_info(),
            },
            signer_seeds,
        ))?;

        msg!(
            "Sale ended: {} unsold tokens returned to {}",
            remaining,
            self.seller.key()
        );

        Ok(())
    }
}
