use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module provides functions for normalizing and matching ISO 639-1
/// (2-letter) and ISO 639-2 (3-letter) language codes, so availability
/// checks treat "en" and "eng" as the same language.
/// Normalize a language code to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Option<String> {
    let normalized_code = code.trim().to_lowercase();

    // If it's a 2-letter code, convert to 3-letter
    if normalized_code.len() == 2 {
        if let Some(lang) = Language::from_639_1(&normalized_code) {
            return Some(lang.to_639_3().to_string());
        }
    }
    // If it's already a 3-letter code, ensure it's ISO 639-2/T
    else if normalized_code.len() == 3 {
        if Language::from_639_3(&normalized_code).is_some() {
            return Some(normalized_code);
        }

        // Check if it's a ISO 639-2/B code that needs converting to ISO 639-2/T
        match normalized_code.as_str() {
            "fre" => return Some("fra".to_string()),
            "ger" => return Some("deu".to_string()),
            "dut" => return Some("nld".to_string()),
            "gre" => return Some("ell".to_string()),
            "chi" => return Some("zho".to_string()),
            "cze" => return Some("ces".to_string()),
            "ice" => return Some("isl".to_string()),
            "alb" => return Some("sqi".to_string()),
            "arm" => return Some("hye".to_string()),
            "baq" => return Some("eus".to_string()),
            "bur" => return Some("mya".to_string()),
            "per" => return Some("fas".to_string()),
            "geo" => return Some("kat".to_string()),
            "may" => return Some("msa".to_string()),
            "mac" => return Some("mkd".to_string()),
            "rum" => return Some("ron".to_string()),
            "slo" => return Some("slk".to_string()),
            "wel" => return Some("cym".to_string()),
            _ => {}
        }
    }

    None
}

/// Check if two language codes match (represent the same language)
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    let normalized1 = match normalize_to_part2t(code1) {
        Some(n) => n,
        None => return false,
    };

    let normalized2 = match normalize_to_part2t(code2) {
        Some(n) => n,
        None => return false,
    };

    normalized1 == normalized2
}
