//! Catalog browsing and listing management commands.

use std::fs;
use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD};

use ecofinds_core::{Category, Price, ProductId};
use ecofinds_store::models::{NewProduct, Product, ProductUpdate};

use crate::commands::CliError;
use crate::context::AppContext;

pub fn browse(
    ctx: &AppContext,
    category: Option<&str>,
    search: Option<&str>,
) -> Result<(), CliError> {
    let filtered: Vec<&Product> = match (category, search) {
        (Some(label), _) => {
            let category: Category = label.parse()?;
            ctx.catalog
                .by_category(category)
                .into_iter()
                .filter(|p| matches_search(p, search))
                .collect()
        }
        (None, Some(query)) => ctx.catalog.search(query),
        (None, None) => ctx.catalog.products().iter().collect(),
    };

    if filtered.is_empty() {
        println!("No listings found.");
        return Ok(());
    }

    for product in filtered {
        print_listing(product);
    }
    Ok(())
}

fn matches_search(product: &Product, search: Option<&str>) -> bool {
    search.is_none_or(|q| product.title.to_lowercase().contains(&q.to_lowercase()))
}

pub fn sell(
    ctx: &mut AppContext,
    title: &str,
    description: &str,
    category: &str,
    price_cents: i64,
    image: Option<&str>,
) -> Result<(), CliError> {
    let seller_id = ctx
        .identity
        .current_user_id()
        .ok_or(CliError::NotLoggedIn)?
        .clone();
    let category: Category = category.parse()?;
    let image_data_url = image.map(read_image_as_data_url).transpose()?;

    let product = ctx.catalog.create(
        NewProduct {
            title: title.to_owned(),
            description: description.to_owned(),
            category,
            price_cents,
            image_data_url,
        },
        seller_id,
    )?;

    println!("Listed \"{}\" for {}", product.title, product.price);
    println!("  ID: {}", product.id);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn update(
    ctx: &mut AppContext,
    id: &str,
    title: Option<String>,
    description: Option<String>,
    category: Option<&str>,
    price_cents: Option<i64>,
    image: Option<&str>,
    clear_image: bool,
) -> Result<(), CliError> {
    let id = ProductId::from_string(id.to_owned());
    require_own_listing(ctx, &id)?;

    let category = category.map(str::parse).transpose()?;
    let image_data_url = if clear_image {
        Some(None)
    } else {
        image
            .map(read_image_as_data_url)
            .transpose()?
            .map(Some)
    };

    ctx.catalog.update(
        &id,
        ProductUpdate {
            title,
            description,
            category,
            price: price_cents.map(Price::clamped),
            image_data_url,
        },
    )?;

    println!("Listing {id} updated.");
    Ok(())
}

pub fn remove(ctx: &mut AppContext, id: &str) -> Result<(), CliError> {
    let id = ProductId::from_string(id.to_owned());
    require_own_listing(ctx, &id)?;

    ctx.catalog.remove(&id)?;
    println!("Listing {id} removed.");
    Ok(())
}

pub fn my_listings(ctx: &AppContext) -> Result<(), CliError> {
    let seller_id = ctx.identity.current_user_id().ok_or(CliError::NotLoggedIn)?;

    let own = ctx.catalog.by_seller(seller_id);
    if own.is_empty() {
        println!("You have no listings.");
        return Ok(());
    }

    for product in own {
        print_listing(product);
    }
    Ok(())
}

/// The store itself does not track ownership on edits; the terminal surface
/// restricts them to the seller, like the original's "my listings" page.
fn require_own_listing(ctx: &AppContext, id: &ProductId) -> Result<(), CliError> {
    let seller_id = ctx.identity.current_user_id().ok_or(CliError::NotLoggedIn)?;
    let product = ctx
        .catalog
        .get(id)
        .ok_or_else(|| CliError::UnknownListing(id.to_string()))?;

    if &product.seller_id == seller_id {
        Ok(())
    } else {
        Err(CliError::NotYourListing(id.to_string()))
    }
}

fn print_listing(product: &Product) {
    println!(
        "{}  {}  [{}]  {}",
        product.id, product.price, product.category, product.title
    );
    if !product.description.is_empty() {
        println!("    {}", product.description);
    }
}

fn read_image_as_data_url(path: &str) -> Result<String, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::Image {
        path: path.to_owned(),
        source,
    })?;
    Ok(format!("data:{};base64,{}", mime_for(path), STANDARD.encode(bytes)))
}

fn mime_for(path: &str) -> &'static str {
    match Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_known_extensions() {
        assert_eq!(mime_for("a.PNG"), "image/png");
        assert_eq!(mime_for("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_for("noext"), "application/octet-stream");
    }
}
