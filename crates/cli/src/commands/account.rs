//! Account and session commands.

use ecofinds_store::identity::MockProvider;
use ecofinds_store::models::ProfileUpdate;

use crate::commands::CliError;
use crate::context::AppContext;

pub fn register(
    ctx: &mut AppContext,
    email: &str,
    password: &str,
    username: &str,
) -> Result<(), CliError> {
    let profile = ctx.identity.register(email, password, username)?;
    ctx.sync_cart_scope();

    println!("Welcome, {}!", profile.username);
    println!("  ID:        {}", profile.id);
    println!("  Email:     {}", profile.email);
    println!("  Eco score: {}", profile.eco_score);
    Ok(())
}

pub fn login(ctx: &mut AppContext, email: &str, password: &str) -> Result<(), CliError> {
    let profile = ctx.identity.login(email, password)?;
    ctx.sync_cart_scope();

    println!("Logged in as {} <{}>", profile.username, profile.email);
    Ok(())
}

pub fn social_login(ctx: &mut AppContext, provider: &str) -> Result<(), CliError> {
    let provider = MockProvider::new(provider);
    let profile = ctx.identity.social_login(&provider)?;
    ctx.sync_cart_scope();

    println!("Logged in as {} <{}>", profile.username, profile.email);
    for badge in &profile.trust_badges {
        println!("  Badge: {badge}");
    }
    Ok(())
}

pub fn logout(ctx: &mut AppContext) -> Result<(), CliError> {
    ctx.identity.logout()?;
    ctx.sync_cart_scope();

    println!("Logged out.");
    Ok(())
}

pub fn whoami(ctx: &AppContext) {
    match ctx.identity.current_user() {
        Some(profile) => {
            println!("{} <{}>", profile.username, profile.email);
            println!("  ID:        {}", profile.id);
            println!("  Eco score: {}", profile.eco_score);
            if let Some(bio) = &profile.bio {
                println!("  Bio:       {bio}");
            }
            for badge in &profile.trust_badges {
                println!("  Badge:     {badge}");
            }
        }
        None => println!("Not logged in."),
    }
}

pub fn update_profile(
    ctx: &mut AppContext,
    username: Option<String>,
    bio: Option<String>,
) -> Result<(), CliError> {
    if ctx.identity.current_user().is_none() {
        return Err(CliError::NotLoggedIn);
    }

    ctx.identity.update_profile(ProfileUpdate { username, bio })?;
    println!("Profile updated.");
    Ok(())
}
