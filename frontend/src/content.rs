//! Fixed copy rendered by the landing page and its overlays.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Offer {
    pub id: u32,
    pub badge: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
}

pub const OFFERS: [Offer; 3] = [
    Offer {
        id: 1,
        badge: "Limited time",
        title: "First Visit Wellness",
        description: "20% off your first full-body massage. Experience our signature oils and serene setting.",
        cta: "Book now",
    },
    Offer {
        id: 2,
        badge: "Popular",
        title: "Couples Retreat",
        description: "Side-by-side aromatherapy and warm stone therapy. Perfect for a relaxing escape together.",
        cta: "Reserve",
    },
    Offer {
        id: 3,
        badge: "New",
        title: "Golden Glow Package",
        description: "Botanical polish, honey wrap & mineral hydration. Save 15% when you bundle.",
        cta: "Learn more",
    },
];

/// Menu and nav entries with the in-page anchor they scroll to.
pub const SECTIONS: [(&str, &str); 4] = [
    ("Home", "#top"),
    ("About Us", "#about"),
    ("Services", "#services"),
    ("Contacts", "#contacts"),
];

pub const AUDIENCES: [(&str, &str); 3] = [
    ("her", "HER"),
    ("him", "HIM"),
    ("couples", "COUPLES"),
];

pub const HIGHLIGHTS: [(&str, &str); 4] = [
    ("Aura Reset", "Sound bath + warm stone ritual designed to melt tension."),
    ("Golden Glow", "Botanical polish, honey wrap, and mineral hydration veil."),
    ("Serene Flow", "Slow massage rhythms with essential oil layering."),
    ("Velvet Skin", "Deep cleanse, micro-exfoliation, and cooling jade finish."),
];

pub const STATS: [(&str, &str); 3] = [
    ("12K+", "Happy Guests"),
    ("27", "Signature Rituals"),
    ("4.9", "Average Rating"),
];

pub struct JourneyStep {
    pub step: &'static str,
    pub title: &'static str,
    pub copy: &'static str,
}

pub const JOURNEY: [JourneyStep; 4] = [
    JourneyStep { step: "01", title: "Arrival Ritual", copy: "Herbal welcome tea and aromatic cleansing." },
    JourneyStep { step: "02", title: "Immersion", copy: "Steam therapy and soft lighting resets." },
    JourneyStep { step: "03", title: "Release", copy: "Targeted massage with golden oils." },
    JourneyStep { step: "04", title: "Restore", copy: "Hydration elixirs and calm lounge." },
];

pub const GALLERY_SLOTS: u8 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalTopic {
    Terms,
    Privacy,
}

impl LegalTopic {
    pub fn eyebrow(self) -> &'static str {
        match self {
            LegalTopic::Terms => "Legal",
            LegalTopic::Privacy => "Policy",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LegalTopic::Terms => "Terms & Conditions",
            LegalTopic::Privacy => "Privacy Policy",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            LegalTopic::Terms => "All services are subject to availability and confirmation. Angel Oasis Spa reserves the right to modify services or pricing without prior notice. Customers are encouraged to arrive on time for appointments. By using our services, you agree to these terms.",
            LegalTopic::Privacy => "Angel Oasis Spa respects your privacy. Any personal information submitted through our website, including contact or booking details, will be used only for communication and service purposes. We do not share or sell customer information to third parties. By using our website, you agree to this policy.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_ids_are_unique() {
        let mut ids: Vec<u32> = OFFERS.iter().map(|offer| offer.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), OFFERS.len());
    }

    #[test]
    fn legal_topics_have_distinct_copy() {
        assert_eq!(LegalTopic::Terms.eyebrow(), "Legal");
        assert_eq!(LegalTopic::Privacy.eyebrow(), "Policy");
        assert_ne!(LegalTopic::Terms.body(), LegalTopic::Privacy.body());
    }

    #[test]
    fn section_anchors_are_fragments() {
        assert!(SECTIONS.iter().all(|(_, anchor)| anchor.starts_with('#')));
    }
}
