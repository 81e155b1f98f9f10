//! EcoFinds CLI - Second-hand marketplace from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Create an account and list something
//! ecofinds register -e ana@example.com -p secret -u ana
//! ecofinds sell --title "Desk lamp" --description "Warm light" \
//!     --category Home --price 500
//!
//! # Browse and buy
//! ecofinds browse --category Home
//! ecofinds cart add <product-id>
//! ecofinds checkout
//!
//! # Ask the advisors
//! ecofinds chat eco "how do I save water?"
//! ecofinds coach suggest --title "Vintage lamp" --category Home --condition good
//! ```
//!
//! All state lives in a single JSON store under `$ECOFINDS_DATA_DIR`
//! (default `.ecofinds`).

#![cfg_attr(not(test), forbid(unsafe_code))]
// Terminal output is this binary's interface.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;
mod context;

use context::AppContext;

#[derive(Parser)]
#[command(name = "ecofinds")]
#[command(author, version, about = "EcoFinds second-hand marketplace CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and start a session
    Register {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Display name
        #[arg(short, long)]
        username: String,
    },
    /// Log in with email and password
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Log in via a simulated external provider
    SocialLogin {
        /// Provider name (`google`, `facebook`, ...)
        provider: String,
    },
    /// End the active session
    Logout,
    /// Show the active session's profile
    Whoami,
    /// Manage the active profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// List products, optionally filtered
    Browse {
        /// Only this category
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive title substring
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a listing (requires a session)
    Sell {
        /// Listing title
        #[arg(long)]
        title: String,

        /// Listing description
        #[arg(long)]
        description: String,

        /// Category label
        #[arg(long)]
        category: String,

        /// Asking price in cents
        #[arg(long)]
        price: i64,

        /// Image file to embed as a data URI
        #[arg(long)]
        image: Option<String>,
    },
    /// Manage an existing listing
    Listing {
        #[command(subcommand)]
        action: ListingAction,
    },
    /// List the active session's own listings
    MyListings,
    /// Manage the pending cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Turn the cart into purchases
    Checkout,
    /// Show the purchase ledger
    Purchases,
    /// Show community impact statistics
    Stats,
    /// Manage the theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Talk to an advisor
    Chat {
        #[command(subcommand)]
        action: ChatAction,
    },
    /// Selling-coach tools
    Coach {
        #[command(subcommand)]
        action: CoachAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Update username and/or bio
    Update {
        /// New display name
        #[arg(long)]
        username: Option<String>,

        /// New bio
        #[arg(long)]
        bio: Option<String>,
    },
}

#[derive(Subcommand)]
enum ListingAction {
    /// Update fields of a listing
    Update {
        /// Listing ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New category label
        #[arg(long)]
        category: Option<String>,

        /// New price in cents
        #[arg(long)]
        price: Option<i64>,

        /// New image file
        #[arg(long, conflicts_with = "clear_image")]
        image: Option<String>,

        /// Remove the embedded image
        #[arg(long)]
        clear_image: bool,
    },
    /// Remove a listing
    Remove {
        /// Listing ID
        id: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product ID
        product_id: String,

        /// Quantity for the new line
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a cart line
    Remove {
        /// Cart line ID
        item_id: String,
    },
    /// Empty the cart
    Clear,
    /// Show the cart
    Show,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Show the active theme
    Get,
    /// Set the theme (`light`, `dark`, `system`)
    Set { theme: String },
    /// Flip between light and dark
    Toggle,
}

#[derive(Subcommand)]
enum ChatAction {
    /// Ask EcoGuide for sustainability tips
    Eco {
        /// Message text
        text: Vec<String>,
    },
    /// Ask the selling coach
    Coach {
        /// Message text
        text: Vec<String>,
    },
}

#[derive(Subcommand)]
enum CoachAction {
    /// Suggest a price for a prospective listing
    Suggest {
        /// Listing title
        #[arg(long, default_value = "")]
        title: String,

        /// Category label
        #[arg(long, default_value = "Other")]
        category: String,

        /// Condition (`new`, `good`, `fair`)
        #[arg(long, default_value = "good")]
        condition: String,

        /// Your anticipated price in cents
        #[arg(long)]
        desired: Option<i64>,
    },
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CliError> {
    let mut ctx = AppContext::open()?;

    match cli.command {
        Commands::Register {
            email,
            password,
            username,
        } => commands::account::register(&mut ctx, &email, &password, &username)?,
        Commands::Login { email, password } => {
            commands::account::login(&mut ctx, &email, &password)?;
        }
        Commands::SocialLogin { provider } => commands::account::social_login(&mut ctx, &provider)?,
        Commands::Logout => commands::account::logout(&mut ctx)?,
        Commands::Whoami => commands::account::whoami(&ctx),
        Commands::Profile { action } => match action {
            ProfileAction::Update { username, bio } => {
                commands::account::update_profile(&mut ctx, username, bio)?;
            }
        },
        Commands::Browse { category, search } => {
            commands::listings::browse(&ctx, category.as_deref(), search.as_deref())?;
        }
        Commands::Sell {
            title,
            description,
            category,
            price,
            image,
        } => {
            commands::listings::sell(
                &mut ctx,
                &title,
                &description,
                &category,
                price,
                image.as_deref(),
            )?;
        }
        Commands::Listing { action } => match action {
            ListingAction::Update {
                id,
                title,
                description,
                category,
                price,
                image,
                clear_image,
            } => commands::listings::update(
                &mut ctx,
                &id,
                title,
                description,
                category.as_deref(),
                price,
                image.as_deref(),
                clear_image,
            )?,
            ListingAction::Remove { id } => commands::listings::remove(&mut ctx, &id)?,
        },
        Commands::MyListings => commands::listings::my_listings(&ctx)?,
        Commands::Cart { action } => match action {
            CartAction::Add {
                product_id,
                quantity,
            } => commands::cart::add(&mut ctx, &product_id, quantity)?,
            CartAction::Remove { item_id } => commands::cart::remove(&mut ctx, &item_id)?,
            CartAction::Clear => commands::cart::clear(&mut ctx)?,
            CartAction::Show => commands::cart::show(&ctx),
        },
        Commands::Checkout => commands::cart::checkout(&mut ctx)?,
        Commands::Purchases => commands::cart::purchases(&ctx),
        Commands::Stats => commands::stats::show(&ctx),
        Commands::Theme { action } => match action {
            ThemeAction::Get => commands::theme::get(&ctx),
            ThemeAction::Set { theme } => commands::theme::set(&mut ctx, &theme)?,
            ThemeAction::Toggle => commands::theme::toggle(&mut ctx)?,
        },
        Commands::Chat { action } => match action {
            ChatAction::Eco { text } => commands::chat::eco(&ctx, &text.join(" "))?,
            ChatAction::Coach { text } => commands::chat::coach(&ctx, &text.join(" "))?,
        },
        Commands::Coach { action } => match action {
            CoachAction::Suggest {
                title,
                category,
                condition,
                desired,
            } => commands::chat::suggest(&ctx, &title, &category, &condition, desired)?,
        },
    }
    Ok(())
}
