//! Built-in masking strategies for string values.
//!
//! Strategies are pure string transformations. They do not traverse
//! structures, resolve custom implementations, or make runtime decisions
//! about which field gets which strategy.
//!
//! All rules operate on Unicode scalar values, so masked output preserves the
//! character length of the input rather than its byte length. Empty strings
//! pass through every built-in rule unchanged.

/// Which masking rule applies to a field.
///
/// Declared per field via `#[mask(...)]`; [`Custom`](MaskingStrategy::Custom)
/// additionally carries a strategy identifier in the field's
/// [`MaskDirective`](crate::MaskDirective).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskingStrategy {
    /// Replace every character with `*`, preserving length.
    Full,
    /// Mask everything except the last four characters.
    KeepLast4,
    /// Mask everything except the first four characters.
    KeepFirst4,
    /// Brazilian CPF/CNPJ document masking with structural separators.
    CpfCnpj,
    /// Keep the first and last character of the local part plus the domain.
    Email,
    /// Delegate to a registered [`CustomMaskingStrategy`](crate::CustomMaskingStrategy).
    Custom,
    /// Leave the value untouched.
    None,
}

/// Replaces every character with `*`.
pub(crate) fn full(value: &str) -> String {
    "*".repeat(value.chars().count())
}

/// Masks all but the last four characters.
///
/// Values of four characters or fewer are fully masked, length preserved.
pub(crate) fn keep_last4(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{visible}", "*".repeat(chars.len() - 4))
}

/// Masks all but the first four characters.
///
/// Values of four characters or fewer are fully masked, length preserved.
pub(crate) fn keep_first4(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[..4].iter().collect();
    format!("{visible}{}", "*".repeat(chars.len() - 4))
}

/// Masks the local part of an email address while keeping the domain.
///
/// The `@` must appear at character index 2 or later; otherwise (missing,
/// leading, or at index 1) the whole value is masked. A local part of one or
/// two characters is fully masked; longer local parts keep their first and
/// last character.
pub(crate) fn email(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let Some(at) = chars.iter().position(|&c| c == '@').filter(|&at| at > 1) else {
        return "*".repeat(chars.len());
    };
    let local = &chars[..at];
    let domain: String = chars[at..].iter().collect();
    if local.len() <= 2 {
        return format!("{}{domain}", "*".repeat(local.len()));
    }
    let first = local[0];
    let last = local[local.len() - 1];
    format!("{first}{}{last}{domain}", "*".repeat(local.len() - 2))
}

/// Masks a Brazilian CPF (11 digits) or CNPJ (14 digits) document number.
///
/// Non-digit characters are stripped before counting. Any other digit count
/// falls back to a full mask with the length of the original, unstripped
/// input.
pub(crate) fn cpf_cnpj(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        11 => format!("***.{}.{}-**", &digits[3..6], &digits[6..9]),
        14 => format!("**.{}.{}/****-**", &digits[2..5], &digits[5..8]),
        _ => "*".repeat(value.chars().count()),
    }
}
