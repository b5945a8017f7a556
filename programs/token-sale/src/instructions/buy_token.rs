// Buy Token Instruction
//
// Validates a purchase against the sale terms and the buyer whitelist,
// then settles both legs in one transaction: lamports buyer -> seller,
// tokens escrow -> buyer. A failed check aborts before any transfer.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct BuyToken<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        address = token_sale.seller,
    )]
    pub seller: SystemAccount<'info>,

    #[account(
        seeds = [TOKEN_SALE_SEED, seller.key().as_ref()],
        bump = token_sale.sale_bump,
    )]
    pub token_sale: Account<'info, TokenSale>,

    // Missing record means the buyer was never admitted
    #[account(
        seeds = [BUYER_WHITELIST_SEED, token_sale.key().as_ref(), buyer.key().as_ref()],
        bump = buyer_whitelist.bump,
    )]
    pub buyer_whitelist: Account<'info, WhitelistEntry>,

    /// CHECK: PDA signer for escrow transfers
    #[account(
        seeds = [SALE_AUTHORITY_SEED, token_sale.key().as_ref()],
        bump = token_sale.authority_bump,
    )]
    pub sale_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = token_sale.escrow_token_account,
        token::authority = sale_authority,
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = escrow_token_account.mint,
        token::authority = buyer,
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct PurchaseReceipt {
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub quantity: u64,
    pub total_price: u64,
}

impl<'info> BuyToken<'info> {
    pub fn buy_token(&mut self, quantity: u64) -> Result<()> {
        self.buyer_whitelist.assert_admitted()?;

        require!(quantity > 0, TokenSaleError::InvalidQuantity);
        require!(
            quantity <= self.token_sale.purchase_limit,
            TokenSaleError::PurchaseLimitExceeded
        );
        require!(
            self.escrow_token_account.amount >= quantity,
            TokenSaleError::InsufficientEscrowTokens
        );

        let total_price = self.token_sale.total_price(quantity)?;
        require!(
            self.buyer.to_account_info().lamports() >= total_price,
            TokenSaleError::InsufficientFunds
        );

        // Payment leg goes straight to the seller, never through escrow
        self.pay_seller(total_price)?;
        self.release_escrow_tokens(quantity)?;

        emit!(PurchaseReceipt {
            seller: self.seller.key(),
            buyer: self.buyer.key(),
            quantity,
            total_price,
        });

        msg!(
            "Sold {} tokens to {} for {} lamports",
            quantity,
            self.buyer.key(),
            total_price
        );

        Ok(())
    }

    fn pay_seller(&self, lamports: u64) -> Result<()> {
        system_program::transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                system_program::Transfer {
                    from: self.buyer.to_account_info(),
                    to: self.seller.to_account_info(),
                },
            ),
            lamports,
        )
    }

    fn release_escrow_tokens(&self, quantity: u64) -> Result<()> {
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
                    to: self.buyer_token_account.to_account_info(),
                    authority: self.sale_authority.to_account_info(),
                },
                signer_seeds,
            ),
            quantity,
        )
    }
}
