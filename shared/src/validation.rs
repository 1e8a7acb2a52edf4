//! Validation utilities for the DairySight cooperative platform
//!
//! Includes Kenya-specific checks for phone numbers and national IDs.

use rust_decimal::Decimal;

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate a non-empty, non-whitespace field
pub fn validate_required(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err("Field is required")
    } else {
        Ok(())
    }
}

/// Validate a quantity/volume is strictly positive
pub fn validate_positive(value: Decimal) -> Result<(), &'static str> {
    if value <= Decimal::ZERO {
        Err("Value must be positive")
    } else {
        Ok(())
    }
}

// ============================================================================
// Kenya-specific validations
// ============================================================================

/// Validate Kenyan phone number format
/// Accepts: 0712345678, 0712-345-678, +254712345678, 254712345678
pub fn validate_kenyan_phone(phone: &str) -> Result<(), &'static str> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    // Local format: 10 digits starting with 0 (e.g., 0712345678)
    if digits.len() == 10 && digits.starts_with('0') {
        return Ok(());
    }
    // Without leading 0: 9 digits (e.g., 712345678)
    if digits.len() == 9 && !digits.starts_with('0') {
        return Ok(());
    }
    // International format with country code: 12 digits starting with 254
    if digits.len() == 12 && digits.starts_with("254") {
        return Ok(());
    }

    Err("Invalid Kenyan phone number format")
}

/// Validate Kenyan national ID number (7 or 8 digits)
pub fn validate_kenyan_national_id(id: &str) -> Result<(), &'static str> {
    let digits: String = id.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != id.len() {
        return Err("National ID must contain digits only");
    }
    if digits.len() == 7 || digits.len() == 8 {
        Ok(())
    } else {
        Err("National ID must be 7 or 8 digits")
    }
}

/// Counties where member farms are registered
pub const KENYAN_DAIRY_COUNTIES: &[&str] = &[
    "Kiambu",
    "Nyeri",
    "Murang'a",
    "Nakuru",
    "Nyandarua",
    "Meru",
    "Embu",
    "Kirinyaga",
    "Uasin Gishu",
    "Nandi",
    "Kericho",
    "Bomet",
];

/// Validate county is a known dairy-producing region
pub fn validate_county(county: &str) -> Result<(), &'static str> {
    let county_lower = county.to_lowercase();
    if KENYAN_DAIRY_COUNTIES
        .iter()
        .any(|c| c.to_lowercase() == county_lower)
    {
        Ok(())
    } else {
        Err("County is not a recognized dairy-producing region")
    }
}
