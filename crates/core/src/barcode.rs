//! Inventory barcode helpers.
//!
//! Barcodes take the shape `EM-<category>-<sequence>-<check>` where the
//! final digit is a Luhn check over the numeric characters of the body.

/// Luhn check digit over the numeric characters of `input`; non-digits
/// are skipped.
#[must_use]
pub fn check_digit(input: &str) -> u8 {
    let mut sum = 0_u32;
    let mut double = false;

    for ch in input.chars().rev() {
        let Some(mut digit) = ch.to_digit(10) else {
            continue;
        };

        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }

        sum += digit;
        double = !double;
    }

    u8::try_from((10 - sum % 10) % 10).unwrap_or(0)
}

/// Builds a barcode for the given two-letter category code and sequence
/// number.
#[must_use]
pub fn generate(category_code: &str, sequence: u32) -> String {
    let base = format!("EM-{category_code}-{sequence:06}");
    let check = check_digit(&base);

    format!("{base}-{check}")
}

/// Validates the `EM-XX-NNNNNN-C` shape and the Luhn check digit.
#[must_use]
pub fn is_valid(barcode: &str) -> bool {
    let mut parts = barcode.split('-');

    let (Some("EM"), Some(category), Some(sequence), Some(check), None) = (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) else {
        return false;
    };

    if category.len() != 2 || !category.chars().all(|c| c.is_ascii_uppercase()) {
        return false;
    }

    if sequence.len() != 6 || !sequence.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    if check.len() != 1 || !check.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let base = format!("EM-{category}-{sequence}");

    check == check_digit(&base).to_string()
}

/// Two-letter category code for a product category name; unknown names
/// fall back to their first two letters, uppercased.
#[must_use]
pub fn category_code(category_name: &str) -> String {
    match category_name {
        "Cincin" => "CN".to_string(),
        "Kalung" => "KL".to_string(),
        "Gelang" => "GL".to_string(),
        "Anting" => "AT".to_string(),
        "Liontin" => "LT".to_string(),
        "Batangan" => "BT".to_string(),
        "Koin" => "KN".to_string(),
        other => other.chars().take(2).collect::<String>().to_uppercase(),
    }
}
