//! # Description Template
//!
//! Token substitution for the payment description (line 14).
//!
//! ## Tokens (matched in this priority at every position)
//! ```text
//! #{order_number}  →  "#" + order number
//! {order_number}   →  order number
//! {order_date}     →  order date text, as supplied
//! ```
//!
//! A single left-to-right pass: replaced text is never rescanned, so an order
//! number that itself contains `{order_date}` comes out verbatim.

/// Values available to the description template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateVars<'a> {
    pub order_number: &'a str,
    pub order_date: &'a str,
}

const HASH_ORDER_NUMBER: &str = "#{order_number}";
const ORDER_NUMBER: &str = "{order_number}";
const ORDER_DATE: &str = "{order_date}";

/// Substitutes known tokens; unknown `{...}` sequences stay as written.
///
/// ## Example
/// ```rust
/// use hub3_core::template::{substitute, TemplateVars};
///
/// let vars = TemplateVars { order_number: "7", order_date: "2026-01-01" };
/// assert_eq!(
///     substitute("Order #{order_number} on {order_date}", vars),
///     "Order #7 on 2026-01-01"
/// );
/// ```
pub fn substitute(template: &str, vars: TemplateVars<'_>) -> String {
    let mut out = String::with_capacity(template.len() + vars.order_number.len());
    let mut rest = template;

    while let Some(pos) = rest.find(&['#', '{'][..]) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix(HASH_ORDER_NUMBER) {
            out.push('#');
            out.push_str(vars.order_number);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(ORDER_NUMBER) {
            out.push_str(vars.order_number);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(ORDER_DATE) {
            out.push_str(vars.order_date);
            rest = after;
        } else {
            // '#' and '{' are both one byte
            out.push_str(&tail[..1]);
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> TemplateVars<'static> {
        TemplateVars {
            order_number: "7",
            order_date: "2026-01-01",
        }
    }

    #[test]
    fn test_hash_token_is_not_double_substituted() {
        assert_eq!(
            substitute("Order #{order_number} on {order_date}", vars()),
            "Order #7 on 2026-01-01"
        );
        assert_eq!(substitute("##{order_number}", vars()), "##7");
    }

    #[test]
    fn test_bare_tokens() {
        assert_eq!(substitute("{order_number}/{order_date}", vars()), "7/2026-01-01");
        assert_eq!(
            substitute("{order_number}{order_number}", vars()),
            "77"
        );
    }

    #[test]
    fn test_unknown_tokens_left_verbatim() {
        assert_eq!(substitute("{customer} #{total}", vars()), "{customer} #{total}");
        assert_eq!(substitute("{order_numb", vars()), "{order_numb");
        assert_eq!(substitute("no tokens", vars()), "no tokens");
        assert_eq!(substitute("", vars()), "");
    }

    #[test]
    fn test_replacements_are_not_rescanned() {
        let vars = TemplateVars {
            order_number: "{order_date}",
            order_date: "2026-01-01",
        };
        assert_eq!(substitute("#{order_number}", vars), "#{order_date}");
    }

    #[test]
    fn test_default_croatian_description() {
        assert_eq!(
            substitute("Plaćanje narudžbe #{order_number}", vars()),
            "Plaćanje narudžbe #7"
        );
    }
}
