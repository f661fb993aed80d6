//! SKU code derivation.

/// Count the ASCII letters in `text`. Spaces, digits and punctuation are ignored.
#[must_use]
pub fn count_letters(text: &str) -> usize {
    text.chars().filter(char::is_ascii_alphabetic).count()
}

/// Take up to `count` letters from the start of `text`, uppercased.
///
/// Returns fewer characters when `text` runs out of letters.
#[must_use]
pub fn sku_letters(text: &str, count: usize) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .take(count)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Derive an item's SKU from its name and category prefixes.
///
/// ```
/// use stockroom::item::derive_sku;
///
/// assert_eq!(derive_sku("kitchen pot", "cooking", 3, 2), "KITCO");
/// ```
#[must_use]
pub fn derive_sku(name: &str, category: &str, name_len: usize, category_len: usize) -> String {
    let mut sku = sku_letters(name, name_len);
    sku.push_str(&sku_letters(category, category_len));
    sku
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_sku_skips_spaces() {
        assert_eq!(derive_sku("basket ball", "sports", 3, 2), "BASSP");
        assert_eq!(derive_sku("soccer ball", "sports", 3, 2), "SOCSP");
        assert_eq!(derive_sku("football", "sports", 3, 2), "FOOSP");
    }

    #[test]
    fn test_derive_sku_uppercases() {
        assert_eq!(derive_sku("validname", "validcat", 3, 2), "VALVA");
        assert_eq!(derive_sku("VaLiDnAmE", "vAlIdCaT", 3, 2), "VALVA");
    }

    #[test]
    fn test_derive_sku_ignores_non_letters() {
        assert_eq!(derive_sku("9 x-ray tube", "#1medical", 3, 2), "XRAME");
    }

    #[test]
    fn test_derive_sku_short_input_yields_short_code() {
        assert_eq!(derive_sku("ab", "c", 3, 2), "ABC");
        assert_eq!(derive_sku("", "", 3, 2), "");
    }

    #[test]
    fn test_derive_sku_is_deterministic() {
        let first = derive_sku("kitchen pot", "cooking", 3, 2);
        let second = derive_sku("kitchen pot", "cooking", 3, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_count_letters() {
        assert_eq!(count_letters("kitchen pot"), 10);
        assert_eq!(count_letters("a1b2c3"), 3);
        assert_eq!(count_letters("12345"), 0);
    }
}
