// Token Sale Program
//
// Fixed-price, single-seller token sale with an escrowed supply and a
// seller-managed buyer whitelist.
//
// Instructions:
// - initialize: create the sale and move the escrow under program control
// - whitelist_user: seller admits a buyer
// - buy_token: whitelisted buyer pays lamports, receives escrowed tokens
// - end_sale: seller reclaims unsold tokens and closes the escrow

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Ge4S6UbyhiCDa7GWeoFQhyy251oK6Rw2tkroRsoyLxYw");

#[program]
pub mod token_sale {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        per_token_price: u64,
        purchase_limit: u64,
    ) -> Result<()> {
        ctx.accounts
            .initialize(per_token_price, purchase_limit, &ctx.bumps)
    }

    pub fn whitelist_user(ctx: Context<WhitelistUser>) -> Result<()> {
        ctx.accounts.whitelist_user(&ctx.bumps)
    }

    pub fn buy_token(ctx: Context<BuyToken>, quantity: u64) -> Result<()> {
        ctx.accounts.buy_token(quantity)
    }

    pub fn end_sale(ctx: Context<EndSale>) -> Result<()> {
        ctx.accounts.end_sale()
    }
}
