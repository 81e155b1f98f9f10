//! Cart and checkout commands.

use ecofinds_core::{CartItemId, Price, ProductId};

use crate::commands::CliError;
use crate::context::AppContext;

pub fn add(ctx: &mut AppContext, product_id: &str, quantity: u32) -> Result<(), CliError> {
    let product_id = ProductId::from_string(product_id.to_owned());
    if ctx.catalog.get(&product_id).is_none() {
        return Err(CliError::UnknownListing(product_id.to_string()));
    }

    let line = ctx.cart.add_to_cart(product_id, quantity)?;
    println!("Added to cart (line {}).", line.id);
    Ok(())
}

pub fn remove(ctx: &mut AppContext, item_id: &str) -> Result<(), CliError> {
    let item_id = CartItemId::from_string(item_id.to_owned());
    ctx.cart.remove_from_cart(&item_id)?;
    println!("Removed line {item_id}.");
    Ok(())
}

pub fn clear(ctx: &mut AppContext) -> Result<(), CliError> {
    ctx.cart.clear_cart()?;
    println!("Cart cleared.");
    Ok(())
}

pub fn show(ctx: &AppContext) {
    if ctx.cart.cart().is_empty() {
        println!("Cart is empty ({} scope).", ctx.cart.scope());
        return;
    }

    let mut total_cents: u32 = 0;
    for line in ctx.cart.cart() {
        let (title, price) = ctx.cart_line_details(&line.product_id);
        println!("{}  x{}  {}  {}", line.id, line.quantity, price, title);
        total_cents = total_cents.saturating_add(price.cents().saturating_mul(line.quantity));
    }
    println!("Total: {}", Price::from_cents(total_cents));
}

pub fn checkout(ctx: &mut AppContext) -> Result<(), CliError> {
    let AppContext { catalog, cart, .. } = ctx;
    // Deleted products resolve to a zero price and are recorded as-is.
    let purchased = cart.checkout(|id| catalog.price_of(id).unwrap_or(Price::ZERO))?;

    if purchased.is_empty() {
        println!("Cart is empty, nothing to check out.");
        return Ok(());
    }

    println!("Purchased {} item(s):", purchased.len());
    for line in &purchased {
        println!("  {}  {}", line.product_id, line.price_at_purchase);
    }
    println!(
        "Total: {}",
        Price::total(purchased.iter().map(|p| p.price_at_purchase))
    );
    Ok(())
}

pub fn purchases(ctx: &AppContext) {
    if ctx.cart.purchases().is_empty() {
        println!("No purchases yet ({} scope).", ctx.cart.scope());
        return;
    }

    for line in ctx.cart.purchases() {
        let (title, _) = ctx.cart_line_details(&line.product_id);
        println!(
            "{}  {}  {}  {}",
            line.id, line.purchased_at, line.price_at_purchase, title
        );
    }
}

impl AppContext {
    /// Title and current price for a cart or ledger line, tolerating
    /// products that have since been removed.
    fn cart_line_details(&self, product_id: &ProductId) -> (String, Price) {
        self.catalog.get(product_id).map_or_else(
            || ("(removed listing)".to_owned(), Price::ZERO),
            |p| (p.title.clone(), p.price),
        )
    }
}
