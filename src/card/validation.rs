//! Card input validation, brand detection and masking
//!
//! Plain digit-prefix matching; the accepted ranges follow the usual issuer
//! prefixes (Visa 4, Mastercard 51-55/22-27, Amex 34/37, Discover 6011/
//! 622126-622925/644-649/65).

use super::error::CardValidationError;
use super::models::{CardBrand, CardInput};

/// Strip everything that is not an ASCII digit
pub fn normalize_digits(number: &str) -> String {
    number.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate caller-supplied card details. Returns the normalized digit
/// string on success so callers never re-strip.
pub fn validate(input: &CardInput) -> Result<String, CardValidationError> {
    let digits = normalize_digits(&input.card_number);

    if digits.len() < 13 || digits.len() > 19 {
        return Err(CardValidationError::InvalidNumberLength {
            actual: digits.len(),
        });
    }

    match input.expiry_month.parse::<u32>() {
        Ok(m) if (1..=12).contains(&m) => {}
        _ => return Err(CardValidationError::InvalidExpiryMonth),
    }

    match input.expiry_year.parse::<u32>() {
        Ok(y) if y <= 99 => {}
        _ => return Err(CardValidationError::InvalidExpiryYear),
    }

    if input.cvv.len() < 3
        || input.cvv.len() > 4
        || !input.cvv.chars().all(|c| c.is_ascii_digit())
    {
        return Err(CardValidationError::InvalidCvv);
    }

    let holder_len = input.holder_name.chars().count();
    if !(2..=50).contains(&holder_len) {
        return Err(CardValidationError::InvalidHolderName {
            min: 2,
            max: 50,
            actual: holder_len,
        });
    }

    Ok(digits)
}

/// Detect the card brand from the leading digits. Unknown prefixes fall back
/// to Visa.
pub fn detect_brand(digits: &str) -> CardBrand {
    let prefix = |n: usize| -> Option<u32> { digits.get(..n)?.parse().ok() };

    if digits.starts_with('4') {
        return CardBrand::Visa;
    }
    if let Some(p2) = prefix(2) {
        if (51..=55).contains(&p2) || (22..=27).contains(&p2) {
            return CardBrand::MasterCard;
        }
        if p2 == 34 || p2 == 37 {
            return CardBrand::Amex;
        }
        if p2 == 65 {
            return CardBrand::Discover;
        }
    }
    if digits.starts_with("6011") {
        return CardBrand::Discover;
    }
    if let Some(p6) = prefix(6) {
        if (622126..=622925).contains(&p6) {
            return CardBrand::Discover;
        }
    }
    if let Some(p3) = prefix(3) {
        if (644..=649).contains(&p3) {
            return CardBrand::Discover;
        }
    }

    CardBrand::Visa
}

/// Build the display mask: `{BRAND}{first4}xxxx{last3}`. Requires at least
/// 7 digits, which validation already guarantees.
pub fn mask_number(digits: &str, brand: CardBrand) -> String {
    if digits.len() < 7 {
        return String::new();
    }
    let first4 = &digits[..4];
    let last3 = &digits[digits.len() - 3..];
    format!("{}{}xxxx{}", brand.tag(), first4, last3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(number: &str) -> CardInput {
        CardInput {
            card_number: number.to_string(),
            expiry_month: "12".to_string(),
            expiry_year: "28".to_string(),
            cvv: "123".to_string(),
            holder_name: "Ada Lovelace".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_spaced_number() {
        let digits = validate(&input("4242 4242 4242 4242")).unwrap();
        assert_eq!(digits, "4242424242424242");
    }

    #[test]
    fn test_validate_number_length_bounds() {
        assert_eq!(
            validate(&input("4242")),
            Err(CardValidationError::InvalidNumberLength { actual: 4 })
        );
        let twenty = "4".repeat(20);
        assert_eq!(
            validate(&input(&twenty)),
            Err(CardValidationError::InvalidNumberLength { actual: 20 })
        );
    }

    #[test]
    fn test_validate_expiry_month() {
        let mut bad = input("4242424242424242");
        bad.expiry_month = "13".to_string();
        assert_eq!(validate(&bad), Err(CardValidationError::InvalidExpiryMonth));
        bad.expiry_month = "0".to_string();
        assert_eq!(validate(&bad), Err(CardValidationError::InvalidExpiryMonth));
    }

    #[test]
    fn test_validate_expiry_year() {
        let mut bad = input("4242424242424242");
        bad.expiry_year = "100".to_string();
        assert_eq!(validate(&bad), Err(CardValidationError::InvalidExpiryYear));
        bad.expiry_year = "twenty".to_string();
        assert_eq!(validate(&bad), Err(CardValidationError::InvalidExpiryYear));
    }

    #[test]
    fn test_validate_cvv() {
        let mut bad = input("4242424242424242");
        bad.cvv = "12".to_string();
        assert_eq!(validate(&bad), Err(CardValidationError::InvalidCvv));
        bad.cvv = "12a".to_string();
        assert_eq!(validate(&bad), Err(CardValidationError::InvalidCvv));
        bad.cvv = "1234".to_string();
        assert!(validate(&bad).is_ok());
    }

    #[test]
    fn test_validate_holder_name() {
        let mut bad = input("4242424242424242");
        bad.holder_name = "A".to_string();
        assert!(matches!(
            validate(&bad),
            Err(CardValidationError::InvalidHolderName { actual: 1, .. })
        ));
    }

    #[test]
    fn test_detect_brand() {
        assert_eq!(detect_brand("4242424242424242"), CardBrand::Visa);
        assert_eq!(detect_brand("5555555555554444"), CardBrand::MasterCard);
        assert_eq!(detect_brand("2223003122003222"), CardBrand::MasterCard);
        assert_eq!(detect_brand("378282246310005"), CardBrand::Amex);
        assert_eq!(detect_brand("344282246310005"), CardBrand::Amex);
        assert_eq!(detect_brand("6011111111111117"), CardBrand::Discover);
        assert_eq!(detect_brand("6221267777777777"), CardBrand::Discover);
        assert_eq!(detect_brand("6445555555555555"), CardBrand::Discover);
        assert_eq!(detect_brand("6555555555555555"), CardBrand::Discover);
        // Unknown prefix falls back to Visa
        assert_eq!(detect_brand("9999999999999999"), CardBrand::Visa);
    }

    #[test]
    fn test_mask_number() {
        assert_eq!(
            mask_number("4242424242424242", CardBrand::Visa),
            "VISA4242xxxx242"
        );
        assert_eq!(
            mask_number("378282246310005", CardBrand::Amex),
            "AMEX3782xxxx005"
        );
        assert_eq!(mask_number("424242", CardBrand::Visa), "");
    }
}
