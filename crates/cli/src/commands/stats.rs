//! Community statistics command.

use ecofinds_store::CommunityStats;

use crate::context::AppContext;

pub fn show(ctx: &AppContext) {
    let stats = CommunityStats::compute(ctx.kv.as_ref());

    println!("Community impact");
    println!("  Items rehomed:  {}", stats.items_rehomed);
    println!("  Waste diverted: {} kg", stats.kg_diverted);
    println!("  Trees saved:    {}", stats.trees_saved);
    println!(
        "  {}% toward the next tree",
        stats.progress_toward_next_tree
    );
    println!("  Buyers & sellers: {}", stats.users_count);
}
