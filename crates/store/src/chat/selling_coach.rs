//! The selling coach: listing advice and catalog-derived price suggestions.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use ecofinds_core::{Category, Condition, Price};

use crate::chat::ChatLog;
use crate::keys;
use crate::kv::{KvError, KvStore};
use crate::models::{ChatMessage, Product};

const GREETING: &str = "Hi - ask me for selling tips or price suggestions. Try: 'how to list', 'how to price', or type 'tip'";

/// Fallback average when the catalog is empty, in cents.
const DEFAULT_AVERAGE_CENTS: u32 = 50_000;

/// Suggestions never drop below this, in cents.
const MINIMUM_SUGGESTION_CENTS: u32 = 1_000;

/// Desired prices within this many percent of the suggestion count as
/// "in line".
const IN_LINE_PERCENT: i64 = 10;

static TITLE_HINTS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (
            r"vintage|retro",
            "vintage items often fetch collectors' prices: highlight provenance and condition.",
        ),
        (
            r"brand|nike|adidas|apple|samsung",
            "branded items can command higher prices: include model and year.",
        ),
        (
            r"handmade|artisan",
            "handmade items sell better with origin story and materials.",
        ),
        (
            r"damaged|repair|not working",
            "be transparent about defects; consider lowering price or offering repair notes.",
        ),
    ]
    .into_iter()
    .map(|(pattern, hint)| (Regex::new(pattern).expect("Invalid regex"), hint))
    .collect()
});

/// Input for a price suggestion.
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    pub title: String,
    pub category: Category,
    pub condition: Condition,
    /// The seller's anticipated price, if they have one in mind.
    pub desired_price: Option<Price>,
}

/// The computed suggestion plus the advice lines that justify it.
#[derive(Debug, Clone)]
pub struct PriceSuggestion {
    pub suggested: Price,
    /// How many same-category listings fed the average.
    pub sample_size: usize,
    pub advice: Vec<String>,
}

impl PriceSuggestion {
    /// The advice joined into one paragraph.
    #[must_use]
    pub fn summary(&self) -> String {
        self.advice.join(" ")
    }
}

/// Seller-advice assistant with a persisted transcript.
pub struct SellingCoach {
    log: ChatLog,
}

impl SellingCoach {
    /// Build the assistant, hydrating (or seeding) its transcript.
    #[must_use]
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self {
            log: ChatLog::new(kv, keys::SELLING_COACH_MESSAGES, GREETING),
        }
    }

    /// The transcript in chronological order.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        self.log.messages()
    }

    /// Send a user message and receive the bot reply.
    ///
    /// Blank input is ignored and returns `None` without touching the
    /// transcript.
    ///
    /// # Errors
    ///
    /// Returns [`KvError`] if persisting the transcript fails.
    pub fn send(&mut self, text: &str) -> Result<Option<ChatMessage>, KvError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let reply = Self::reply_to(trimmed);
        self.log.exchange(trimmed.to_owned(), reply).map(Some)
    }

    fn reply_to(text: &str) -> String {
        let lowered = text.trim().to_lowercase();
        let reply = if lowered.is_empty() {
            "I'm here to help - ask about pricing, listing tips, or sustainability."
        } else if lowered == "tip" {
            "Try clear photos, honest descriptions, and competitive pricing."
        } else if lowered.contains("price") {
            "Use the price suggestion: choose category and condition, then compare the suggestion to your desired price."
        } else if lowered.contains("list") || lowered.contains("how to") {
            "Write a clear title, include measurements/photos, be honest about condition, and offer pickup/delivery options."
        } else if lowered.contains("recycl") || lowered.contains("sustain") {
            "Promote reuse: highlight durability, repair options, and how selling prevents waste."
        } else {
            "Good question - include clear photos, model/year, condition, and any accessories or defects to help buyers decide."
        };
        reply.to_owned()
    }

    /// Suggest a price for a prospective listing from the current catalog.
    ///
    /// The anchor is the average price of same-category listings, falling
    /// back to the all-catalog average and then to a fixed default. The
    /// condition multiplier is applied on top, and the result never drops
    /// below a small floor.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn suggest_price(request: &SuggestionRequest, products: &[Product]) -> PriceSuggestion {
        let same: Vec<&Product> = products
            .iter()
            .filter(|p| p.category == request.category)
            .collect();
        let sample_size = same.len();

        let average_cents = if sample_size > 0 {
            average(same.iter().map(|p| p.price.cents()))
        } else if products.is_empty() {
            f64::from(DEFAULT_AVERAGE_CENTS)
        } else {
            average(products.iter().map(|p| p.price.cents()))
        };

        let raw = (average_cents / 100.0 * request.condition.price_multiplier()).round() * 100.0;
        let suggested = Price::from_cents((raw as u32).max(MINIMUM_SUGGESTION_CENTS));

        let mut advice = vec![format!(
            "Suggested price: {suggested} (based on {sample_size} similar listings)."
        )];

        if let Some(desired) = request.desired_price {
            advice.push(compare_to_desired(desired, suggested));
        }

        let lowered_title = request.title.to_lowercase();
        for (pattern, hint) in TITLE_HINTS.iter() {
            if pattern.is_match(&lowered_title) {
                advice.push((*hint).to_owned());
            }
        }

        advice.push(category_hint(request.category).to_owned());
        advice.push(
            "Quick selling tips: good photos, honest description, promote on social channels, and offer clear pickup/delivery options."
                .to_owned(),
        );

        PriceSuggestion {
            suggested,
            sample_size,
            advice,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn average(cents: impl Iterator<Item = u32>) -> f64 {
    let mut sum: u64 = 0;
    let mut count: u64 = 0;
    for value in cents {
        sum += u64::from(value);
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    sum as f64 / count as f64
}

fn compare_to_desired(desired: Price, suggested: Price) -> String {
    let suggested_cents = i64::from(suggested.cents());
    let desired_cents = i64::from(desired.cents());
    if suggested_cents == 0 {
        return "Your price is in line with the suggestion.".to_owned();
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let diff = (((desired_cents - suggested_cents) as f64 / suggested_cents as f64) * 100.0)
        .round() as i64;
    if diff.abs() < IN_LINE_PERCENT {
        "Your price is in line with the suggestion.".to_owned()
    } else if diff > 0 {
        format!(
            "Your price is {diff}% higher than the suggestion - consider adding extra details or guaranteeing condition to justify it."
        )
    } else {
        format!(
            "Your price is {}% lower than the suggestion - you might sell faster at this price.",
            diff.abs()
        )
    }
}

const fn category_hint(category: Category) -> &'static str {
    match category {
        Category::Electronics | Category::SmartDevices => {
            "Include model, year, battery/condition details, and whether accessories/chargers are included."
        }
        Category::Furniture => {
            "Provide dimensions, clear photos, and mention wear/repairs. Delivery/pickup options help buyers."
        }
        Category::Fashion | Category::Accessories => {
            "List brand, size, measurements, and any stains/repairs. Good photos from multiple angles help."
        }
        Category::Books => "Note edition, condition, and whether it's signed or a first edition.",
        _ => "Clear photos and honest condition details increase buyer trust.",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;
    use crate::models::now_millis;
    use ecofinds_core::{ChatRole, ProductId, UserId};

    fn coach() -> SellingCoach {
        SellingCoach::new(Arc::new(MemoryKv::new()))
    }

    fn listing(category: Category, cents: u32) -> Product {
        let now = now_millis();
        Product {
            id: ProductId::generate(),
            seller_id: UserId::from_string("seller".to_owned()),
            title: "Listing".to_owned(),
            description: String::new(),
            category,
            price: Price::from_cents(cents),
            image_data_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn request(category: Category, condition: Condition) -> SuggestionRequest {
        SuggestionRequest {
            title: String::new(),
            category,
            condition,
            desired_price: None,
        }
    }

    #[test]
    fn test_fresh_transcript_is_seeded_with_greeting() {
        let coach = coach();
        assert_eq!(coach.messages().len(), 1);
        assert_eq!(coach.messages().first().unwrap().sender, ChatRole::Bot);
    }

    #[test]
    fn test_reply_rules() {
        let mut coach = coach();
        let reply = coach.send("tip").unwrap().unwrap();
        assert!(reply.text.contains("clear photos"));

        let reply = coach.send("how should I price this?").unwrap().unwrap();
        assert!(reply.text.contains("price suggestion"));

        let reply = coach.send("how to write a listing").unwrap().unwrap();
        assert!(reply.text.contains("clear title"));

        let reply = coach.send("is this sustainable?").unwrap().unwrap();
        assert!(reply.text.contains("Promote reuse"));

        let reply = coach.send("what about shipping?").unwrap().unwrap();
        assert!(reply.text.starts_with("Good question"));
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut coach = coach();
        assert!(coach.send("").unwrap().is_none());
        assert_eq!(coach.messages().len(), 1);
    }

    #[test]
    fn test_suggestion_uses_same_category_average() {
        let products = vec![
            listing(Category::Books, 2_000),
            listing(Category::Books, 4_000),
            listing(Category::Electronics, 100_000),
        ];
        let suggestion =
            SellingCoach::suggest_price(&request(Category::Books, Condition::Good), &products);
        assert_eq!(suggestion.suggested, Price::from_cents(3_000));
        assert_eq!(suggestion.sample_size, 2);
    }

    #[test]
    fn test_suggestion_falls_back_to_catalog_average() {
        let products = vec![
            listing(Category::Books, 2_000),
            listing(Category::Books, 4_000),
        ];
        let suggestion =
            SellingCoach::suggest_price(&request(Category::Furniture, Condition::Good), &products);
        assert_eq!(suggestion.suggested, Price::from_cents(3_000));
        assert_eq!(suggestion.sample_size, 0);
    }

    #[test]
    fn test_suggestion_default_when_catalog_empty() {
        let suggestion =
            SellingCoach::suggest_price(&request(Category::Other, Condition::Good), &[]);
        assert_eq!(suggestion.suggested, Price::from_cents(50_000));
    }

    #[test]
    fn test_condition_multiplier() {
        let products = vec![listing(Category::Books, 10_000)];
        let new = SellingCoach::suggest_price(&request(Category::Books, Condition::New), &products);
        assert_eq!(new.suggested, Price::from_cents(12_000));

        let fair =
            SellingCoach::suggest_price(&request(Category::Books, Condition::Fair), &products);
        assert_eq!(fair.suggested, Price::from_cents(8_000));
    }

    #[test]
    fn test_suggestion_floor() {
        let products = vec![listing(Category::Books, 100)];
        let suggestion =
            SellingCoach::suggest_price(&request(Category::Books, Condition::Fair), &products);
        assert_eq!(suggestion.suggested, Price::from_cents(1_000));
    }

    #[test]
    fn test_desired_price_comparison() {
        let products = vec![listing(Category::Books, 10_000)];
        let mut req = request(Category::Books, Condition::Good);

        req.desired_price = Some(Price::from_cents(10_500));
        let close = SellingCoach::suggest_price(&req, &products);
        assert!(close.summary().contains("in line"));

        req.desired_price = Some(Price::from_cents(15_000));
        let high = SellingCoach::suggest_price(&req, &products);
        assert!(high.summary().contains("50% higher"));

        req.desired_price = Some(Price::from_cents(5_000));
        let low = SellingCoach::suggest_price(&req, &products);
        assert!(low.summary().contains("50% lower"));
    }

    #[test]
    fn test_title_and_category_hints() {
        let req = SuggestionRequest {
            title: "Vintage Apple monitor".to_owned(),
            category: Category::Electronics,
            condition: Condition::Good,
            desired_price: None,
        };
        let suggestion = SellingCoach::suggest_price(&req, &[]);
        let summary = suggestion.summary();
        assert!(summary.contains("provenance"));
        assert!(summary.contains("model and year"));
        assert!(summary.contains("accessories/chargers"));
    }
}
