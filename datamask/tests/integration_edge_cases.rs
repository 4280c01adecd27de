//! Edge-case coverage for the built-in strategies behind the derive.
//!
//! Malformed inputs must still come out masked. A strategy that cannot make
//! sense of a value falls back to a full-length mask instead of echoing it.

use datamask::{mask, Maskable};

#[derive(Maskable)]
struct EmailHolder {
    #[mask(email)]
    address: String,
}

fn mask_email(address: &str) -> String {
    mask(&EmailHolder {
        address: address.to_owned(),
    })
    .unwrap()
}

#[test]
fn test_email_without_at_is_fully_masked() {
    assert_eq!(mask_email("not-an-email"), "EmailHolder{address=************}");
}

#[test]
fn test_email_with_leading_at_is_fully_masked() {
    assert_eq!(mask_email("@example.com"), "EmailHolder{address=************}");
    assert_eq!(mask_email("a@example.com"), "EmailHolder{address=*************}");
}

#[test]
fn test_email_two_character_local_part_is_fully_masked() {
    assert_eq!(mask_email("ab@example.com"), "EmailHolder{address=**@example.com}");
}

#[test]
fn test_email_keeps_first_last_and_domain() {
    assert_eq!(
        mask_email("john.doe@example.com"),
        "EmailHolder{address=j******e@example.com}"
    );
    assert_eq!(mask_email("abc@x.io"), "EmailHolder{address=a*c@x.io}");
}

#[derive(Maskable)]
struct Document {
    #[mask(cpf_cnpj)]
    number: String,
}

fn mask_document(number: &str) -> String {
    mask(&Document {
        number: number.to_owned(),
    })
    .unwrap()
}

#[test]
fn test_cpf_masked_with_and_without_formatting() {
    assert_eq!(mask_document("12345678901"), "Document{number=***.456.789-**}");
    assert_eq!(mask_document("123.456.789-01"), "Document{number=***.456.789-**}");
}

#[test]
fn test_cnpj_masked_with_and_without_formatting() {
    assert_eq!(mask_document("12345678901234"), "Document{number=**.345.678/****-**}");
    assert_eq!(
        mask_document("12.345.678/9012-34"),
        "Document{number=**.345.678/****-**}"
    );
}

#[test]
fn test_document_with_unexpected_digit_count_fully_masked() {
    // Fallback length counts the original input, separators included
    assert_eq!(mask_document("12-34"), "Document{number=*****}");
    assert_eq!(mask_document("1234567890"), "Document{number=**********}");
}

#[test]
fn test_empty_strings_stay_empty() {
    #[derive(Maskable)]
    struct AllStrategies {
        #[mask(full)]
        a: String,
        #[mask(keep_last_4)]
        b: String,
        #[mask(keep_first_4)]
        c: String,
        #[mask(cpf_cnpj)]
        d: String,
        #[mask(email)]
        e: String,
    }

    let masked = mask(&AllStrategies {
        a: String::new(),
        b: String::new(),
        c: String::new(),
        d: String::new(),
        e: String::new(),
    })
    .unwrap();
    assert_eq!(masked, "AllStrategies{a=, b=, c=, d=, e=}");
}

#[test]
fn test_short_values_for_partial_strategies_fully_masked() {
    #[derive(Maskable)]
    struct Short {
        #[mask(keep_last_4)]
        pin: String,
        #[mask(keep_first_4)]
        code: String,
    }

    let masked = mask(&Short {
        pin: "1234".to_owned(),
        code: "ab".to_owned(),
    })
    .unwrap();
    assert_eq!(masked, "Short{pin=****, code=**}");
}

#[test]
fn test_masking_counts_characters_not_bytes() {
    #[derive(Maskable)]
    struct Unicode {
        #[mask]
        greeting: String,
        #[mask(keep_last_4)]
        phrase: String,
    }

    let masked = mask(&Unicode {
        greeting: "こんにちは世界".to_owned(),
        phrase: "héllo wörld".to_owned(),
    })
    .unwrap();
    assert_eq!(masked, "Unicode{greeting=*******, phrase=*******örld}");
}
