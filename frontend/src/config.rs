use log::Level;

pub const BUSINESS_NAME: &str = "Angel Oasis Spa";
pub const PHONE: &str = "+91 9903300339";
pub const EMAIL: &str = "hello.angeloasis@gmail.com";
pub const ADDRESS: &str =
    "Premises No.4, 4th Floor, 166 Jessore Road, Bangur Avenue – 700055, W.B, India";
pub const ADDRESS_SHORT: &str = "166 Jessore Road, Bangur Avenue, Kolkata 700055";
pub const WHATSAPP_GREETING: &str = "Hello Angel Oasis Spa, I'd like to know more about your rituals.";

/// Time each offer stays on screen before the carousel advances on its own.
pub const AUTOPLAY_MS: u32 = 5_000;

/// Share of a `.reveal` element that must be visible before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOME_META: PageMeta = PageMeta {
    title: "Angel Oasis Spa",
    description: "Angel Oasis Spa: modern wellness rituals with a serene touch.",
};

pub const BOOKING_META: PageMeta = PageMeta {
    title: "Book Your Appointment | Angel Oasis Spa",
    description: "Request your appointment at Angel Oasis Spa. Fill out the form and we'll contact you to confirm your session.",
};

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose widget transitions while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_title_names_the_business() {
        assert!(BOOKING_META.title.ends_with(BUSINESS_NAME));
        assert_eq!(HOME_META.title, BUSINESS_NAME);
    }

    #[test]
    fn reveal_threshold_is_a_fraction() {
        assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    }
}
