//! Links handed off to the phone dialer and WhatsApp.

/// Digits of a phone number as written for humans, e.g. `"+91 9903300339"`.
fn digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// `tel:` URI keeping the international `+` prefix when present.
pub fn tel_href(phone: &str) -> String {
    let prefix = if phone.trim_start().starts_with('+') { "+" } else { "" };
    format!("tel:{}{}", prefix, digits(phone))
}

/// `wa.me` deep link with a pre-filled message. WhatsApp wants the bare
/// international number, no `+` or separators.
pub fn whatsapp_href(phone: &str, message: &str) -> String {
    if message.is_empty() {
        format!("https://wa.me/{}", digits(phone))
    } else {
        format!("https://wa.me/{}?text={}", digits(phone), urlencoding::encode(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_keeps_plus_and_strips_spaces() {
        assert_eq!(tel_href("+91 9903300339"), "tel:+919903300339");
        assert_eq!(tel_href("9903 300 339"), "tel:9903300339");
    }

    #[test]
    fn whatsapp_link_encodes_message() {
        assert_eq!(
            whatsapp_href("+91 9903300339", "Hi there & hello"),
            "https://wa.me/919903300339?text=Hi%20there%20%26%20hello"
        );
    }

    #[test]
    fn whatsapp_link_without_message_has_no_query() {
        assert_eq!(whatsapp_href("+91-99033-00339", ""), "https://wa.me/919903300339");
    }
}
