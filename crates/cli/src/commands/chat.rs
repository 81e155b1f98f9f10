//! Advisor commands.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use ecofinds_core::{Category, Condition, Price};
use ecofinds_store::{EcoGuide, SellingCoach, SuggestionRequest};

use crate::commands::CliError;
use crate::context::AppContext;

/// Pause before the bot line so replies feel staggered.
const REPLY_DELAY: Duration = Duration::from_millis(400);

pub fn eco(ctx: &AppContext, text: &str) -> Result<(), CliError> {
    let mut guide = EcoGuide::new(Arc::clone(&ctx.kv));
    let Some(reply) = guide.send(text)? else {
        println!("Say something first.");
        return Ok(());
    };

    thread::sleep(REPLY_DELAY);
    println!("EcoGuide: {}", reply.text);
    Ok(())
}

pub fn coach(ctx: &AppContext, text: &str) -> Result<(), CliError> {
    let mut coach = SellingCoach::new(Arc::clone(&ctx.kv));
    let Some(reply) = coach.send(text)? else {
        println!("Say something first.");
        return Ok(());
    };

    thread::sleep(REPLY_DELAY);
    println!("Coach: {}", reply.text);
    Ok(())
}

pub fn suggest(
    ctx: &AppContext,
    title: &str,
    category: &str,
    condition: &str,
    desired_cents: Option<i64>,
) -> Result<(), CliError> {
    let category: Category = category.parse()?;
    let condition: Condition = condition.parse().map_err(CliError::InvalidArgument)?;

    let request = SuggestionRequest {
        title: title.to_owned(),
        category,
        condition,
        desired_price: desired_cents.map(Price::clamped),
    };
    let suggestion = SellingCoach::suggest_price(&request, ctx.catalog.products());

    println!("Suggested price: {}", suggestion.suggested);
    for line in &suggestion.advice {
        println!("  {line}");
    }
    Ok(())
}
