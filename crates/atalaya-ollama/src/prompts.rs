//! Prompt templates for the narrative slots.
//!
//! The assembler hands over structured fields; the wording lives here so
//! the pipeline never carries prose.

use atalaya_traits::{PromptContext, PromptKind, Record};
use serde_json::Value;

/// Renders the prompt text for a context.
#[must_use]
pub fn render(context: &PromptContext) -> String {
    let f = &context.fields;
    match context.kind {
        PromptKind::CompanyBio => format!(
            "Write a neutral 80-word company bio for {} using this structured data:\n\
             {}, {}, {}, {}.\n\
             Do not speculate. If data is missing, omit it. No adjectives. \
             Return plain text only.",
            field(f, "ticker"),
            field(f, "name"),
            field(f, "exchange"),
            field(f, "industry"),
            field(f, "sector"),
        ),
        PromptKind::PiotroskiBreakdown => format!(
            "Explain the Piotroski F-Score of {}/9 for {} using these criterion \
             results (1 = met, 0 = not met):\n\
             {}.\n\
             One short sentence per criterion. No hype. Return plain text only.",
            field(f, "score"),
            field(f, "ticker"),
            field(f, "criteria"),
        ),
        PromptKind::CashCowSummary => format!(
            "Summarize free-cash-flow strength for {} using:\n\
             FCF {}, FCF Yield {}%, OCF {}, Capex {},\n\
             NI {}, Debt/Assets {}.\n\
             Use terse bullets. No hype. No forward guidance.",
            field(f, "ticker"),
            field(f, "fcf"),
            field(f, "fcfYield"),
            field(f, "ocf"),
            field(f, "capex"),
            field(f, "netIncome"),
            field(f, "leverage"),
        ),
    }
}

/// A field as prompt text: strings unquoted, everything else as JSON,
/// missing keys blank.
fn field(fields: &Record, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(value) => value.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_company_bio_prompt() {
        let ctx = PromptContext::new(
            PromptKind::CompanyBio,
            Record::from_value(json!({
                "ticker": "AAPL",
                "name": "Apple Inc.",
                "exchange": "NASDAQ",
                "industry": "Consumer Electronics",
                "sector": "Technology"
            })),
        );
        let prompt = render(&ctx);
        assert!(prompt.starts_with("Write a neutral 80-word company bio for AAPL"));
        assert!(prompt.contains("Apple Inc., NASDAQ, Consumer Electronics, Technology."));
        assert!(prompt.ends_with("Return plain text only."));
    }

    #[test]
    fn test_piotroski_breakdown_prompt() {
        let ctx = PromptContext::new(
            PromptKind::PiotroskiBreakdown,
            Record::from_value(json!({
                "ticker": "MSFT",
                "score": 7,
                "criteria": {"positive_roa": 1, "accruals": 0}
            })),
        );
        let prompt = render(&ctx);
        assert!(prompt.contains("F-Score of 7/9 for MSFT"));
        assert!(prompt.contains("\"positive_roa\":1"));
    }

    #[test]
    fn test_cash_cow_prompt() {
        let ctx = PromptContext::new(
            PromptKind::CashCowSummary,
            Record::from_value(json!({
                "ticker": "KO",
                "fcf": 150.0,
                "fcfYield": 3.5,
                "ocf": 200.0,
                "capex": 50.0,
                "netIncome": 120.0,
                "leverage": 0.25
            })),
        );
        let prompt = render(&ctx);
        assert!(prompt.contains("free-cash-flow strength for KO"));
        assert!(prompt.contains("FCF 150.0, FCF Yield 3.5%"));
        assert!(prompt.contains("No forward guidance."));
    }

    #[test]
    fn test_missing_fields_render_blank() {
        let ctx = PromptContext::new(PromptKind::CompanyBio, Record::new());
        let prompt = render(&ctx);
        assert!(prompt.contains("bio for  using"));
    }
}
