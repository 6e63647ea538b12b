//! Tokenizer for the per-field instruction grammar.
//!
//! An instruction has the shape `<kind>:<strategy>`:
//!
//! ```text
//! instruction := kind ":" strategy
//! kind        := "timestamp" | "str" | "int"
//! strategy    := ""                         (empty)
//!              | "rand"                     (random)
//!              | "rand(" int "," int ")"    (range, inclusive)
//!              | "[" item ("," item)* "]"   (list)
//!              | any other text             (static)
//! item        := bare-text | '"' text '"' | "'" text "'"
//! ```
//!
//! This module only splits and classifies text. Kind-specific validation
//! (integer parsing, kind/strategy compatibility) happens in the compiler.

/// Keyword selecting the random strategy.
pub const RANDOM_KEYWORD: &str = "rand";

const RANGE_OPEN: &str = "rand(";

/// Classified strategy text, before kind-specific validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyToken<'a> {
    /// Nothing after the colon
    Empty,
    /// `rand`
    Random,
    /// `rand(...)`, holding the raw text between the parentheses
    Range(&'a str),
    /// `[...]`, already split into element texts with quotes removed
    List(Vec<String>),
    /// Anything else, trimmed
    Literal(&'a str),
}

/// Split an instruction on its first `:` into trimmed kind text and raw
/// strategy text. Returns `None` when there is no separator.
pub fn split_instruction(instruction: &str) -> Option<(&str, &str)> {
    instruction
        .split_once(':')
        .map(|(kind, strategy)| (kind.trim(), strategy))
}

/// Classify strategy text into a [`StrategyToken`].
///
/// Only list syntax can fail here; the error string describes what is wrong
/// with the list.
pub fn classify_strategy(strategy_text: &str) -> Result<StrategyToken<'_>, String> {
    let text = strategy_text.trim();

    if text.is_empty() {
        return Ok(StrategyToken::Empty);
    }
    if text == RANDOM_KEYWORD {
        return Ok(StrategyToken::Random);
    }
    if let Some(rest) = text.strip_prefix(RANGE_OPEN) {
        // Unbalanced parentheses are reported by parse_range_bounds
        return Ok(StrategyToken::Range(rest));
    }
    if text.starts_with('[') {
        return parse_list(text).map(StrategyToken::List);
    }

    Ok(StrategyToken::Literal(text))
}

/// Parse the text following `rand(` into inclusive `(low, high)` bounds.
pub fn parse_range_bounds(args: &str) -> Result<(i64, i64), String> {
    let inner = args
        .strip_suffix(')')
        .ok_or_else(|| "missing closing ')'".to_string())?;

    let (low_text, high_text) = inner
        .split_once(',')
        .ok_or_else(|| format!("expected two comma-separated bounds, got '{inner}'"))?;

    let low = parse_bound(low_text)?;
    let high = parse_bound(high_text)?;

    if low > high {
        return Err(format!(
            "lower bound ({low}) must not exceed upper bound ({high})"
        ));
    }

    Ok((low, high))
}

fn parse_bound(text: &str) -> Result<i64, String> {
    let text = text.trim();
    text.parse::<i64>()
        .map_err(|_| format!("bound '{text}' is not an integer"))
}

/// Split `[a, "b", 'c,d']` into items.
///
/// Unquoted items are trimmed and dropped when empty; quoted items are kept
/// verbatim (including empty strings and embedded commas).
pub fn parse_list(text: &str) -> Result<Vec<String>, String> {
    let inner = text
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| "list is missing its closing ']'".to_string())?;

    let mut items = Vec::new();
    let mut chars = inner.char_indices().peekable();

    loop {
        // Skip leading whitespace
        while matches!(chars.peek(), Some((_, c)) if c.is_whitespace()) {
            chars.next();
        }

        let Some(&(start, first)) = chars.peek() else {
            break;
        };

        if first == '"' || first == '\'' {
            chars.next();
            let mut value = String::new();
            let mut closed = false;
            for (_, c) in chars.by_ref() {
                if c == first {
                    closed = true;
                    break;
                }
                value.push(c);
            }
            if !closed {
                return Err(format!("unterminated quote in element starting with {first}"));
            }
            items.push(value);

            while matches!(chars.peek(), Some((_, c)) if c.is_whitespace()) {
                chars.next();
            }
            match chars.next() {
                None => break,
                Some((_, ',')) => continue,
                Some((pos, _)) => {
                    return Err(format!(
                        "unexpected text after quoted element: '{}'",
                        &inner[pos..]
                    ));
                }
            }
        } else {
            let mut end = inner.len();
            let mut saw_comma = false;
            for (pos, c) in chars.by_ref() {
                if c == ',' {
                    end = pos;
                    saw_comma = true;
                    break;
                }
            }
            let bare = inner[start..end].trim();
            if !bare.is_empty() {
                items.push(bare.to_string());
            }
            if !saw_comma {
                break;
            }
        }
    }

    if items.is_empty() {
        return Err("list cannot be empty".to_string());
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_first_colon_only() {
        assert_eq!(split_instruction("str:a:b"), Some(("str", "a:b")));
        assert_eq!(split_instruction(" int :5"), Some(("int", "5")));
        assert_eq!(split_instruction("timestamp:"), Some(("timestamp", "")));
        assert_eq!(split_instruction("int"), None);
    }

    #[test]
    fn test_classify_basic_tokens() {
        assert_eq!(classify_strategy("").unwrap(), StrategyToken::Empty);
        assert_eq!(classify_strategy("   ").unwrap(), StrategyToken::Empty);
        assert_eq!(classify_strategy("rand").unwrap(), StrategyToken::Random);
        assert_eq!(classify_strategy(" rand ").unwrap(), StrategyToken::Random);
        assert_eq!(
            classify_strategy("rand(1,10)").unwrap(),
            StrategyToken::Range("1,10)")
        );
        assert_eq!(
            classify_strategy("hello").unwrap(),
            StrategyToken::Literal("hello")
        );
        // Only an exact keyword selects random
        assert_eq!(
            classify_strategy("random").unwrap(),
            StrategyToken::Literal("random")
        );
    }

    #[test]
    fn test_range_bounds() {
        assert_eq!(parse_range_bounds("1,10)").unwrap(), (1, 10));
        assert_eq!(parse_range_bounds(" -5 , 5 )").unwrap(), (-5, 5));
        assert_eq!(parse_range_bounds("7,7)").unwrap(), (7, 7));
    }

    #[test]
    fn test_range_bounds_errors() {
        assert!(parse_range_bounds("10,abc)").is_err());
        assert!(parse_range_bounds("10,1)").is_err());
        assert!(parse_range_bounds("10)").is_err());
        assert!(parse_range_bounds("1,10").is_err());
        assert!(parse_range_bounds("1.5,10)").is_err());
    }

    #[test]
    fn test_list_bare_and_quoted() {
        let items = parse_list(r#"[active, "in active", 'pending']"#).unwrap();
        assert_eq!(items, vec!["active", "in active", "pending"]);
    }

    #[test]
    fn test_list_quoted_commas_and_empty_strings() {
        let items = parse_list(r#"["a,b", ""]"#).unwrap();
        assert_eq!(items, vec!["a,b", ""]);
    }

    #[test]
    fn test_list_drops_empty_bare_items() {
        let items = parse_list("[a,,b, ,]").unwrap();
        assert_eq!(items, vec!["a", "b"]);
    }

    #[test]
    fn test_list_errors() {
        assert!(parse_list(r#"["a","b""#).is_err());
        assert!(parse_list(r#"["a]"#).is_err());
        assert!(parse_list(r#"["a"x, "b"]"#).is_err());
        assert!(parse_list("[]").is_err());
        assert!(parse_list("[ , ]").is_err());
    }

    #[test]
    fn test_classify_malformed_list() {
        assert!(classify_strategy(r#"["a","b""#).is_err());
    }
}
