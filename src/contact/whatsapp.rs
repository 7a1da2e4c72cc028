/// WhatsApp deep links and Brazilian phone handling
///
/// Quote requests leave the app as `https://wa.me/<number>?text=<message>`
/// links, the same contact channel the site uses everywhere.

/// Number that receives quote requests (country + DDD + number, digits only)
pub const WHATSAPP_NUMBER: &str = "5519996565458";

/// Pre-filled message for the floating contact shortcut
pub const DEFAULT_MESSAGE: &str = "Olá! Vim pelo site da Jack Designer e gostaria de um \
orçamento para letreiros e fachadas. Pode me ajudar?";

/// Build a `wa.me` deep link with the message URL-encoded
pub fn wa_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

/// Strip everything that is not an ASCII digit
pub fn clean_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Progressive Brazilian phone mask: "(DD) NNNN-NNNN" / "(DD) NNNNN-NNNN".
/// Input is truncated at 11 digits (DDD + 9-digit mobile).
pub fn format_br_phone(value: &str) -> String {
    let digits = clean_digits(value);
    let d: String = digits.chars().take(11).collect();

    match d.len() {
        0..=2 => d,
        3..=6 => format!("({}) {}", &d[..2], &d[2..]),
        7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_digits_strips_mask_characters() {
        assert_eq!(clean_digits("(19) 99656-5458"), "19996565458");
        assert_eq!(clean_digits("abc"), "");
    }

    #[test]
    fn test_format_br_phone_progressive_mask() {
        assert_eq!(format_br_phone("19"), "19");
        assert_eq!(format_br_phone("1999"), "(19) 99");
        assert_eq!(format_br_phone("1999656545"), "(19) 9965-6545");
        assert_eq!(format_br_phone("19996565458"), "(19) 99656-5458");
    }

    #[test]
    fn test_format_br_phone_truncates_extra_digits() {
        assert_eq!(format_br_phone("199965654589999"), "(19) 99656-5458");
    }

    #[test]
    fn test_wa_link_encodes_the_message() {
        let link = wa_link(WHATSAPP_NUMBER, "Olá!\nLinha 2");

        assert!(link.starts_with("https://wa.me/5519996565458?text="));
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
        assert!(link.contains("%0A"));
    }
}
