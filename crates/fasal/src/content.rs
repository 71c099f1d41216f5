//! Static copy for the home dashboard.
//!
//! Everything here is a literal constant. The render model hands out `'static`
//! references to these tables, and each entry is rendered exactly once, in the
//! order declared.

use crate::routes::{self, NavIntent};

/// Shown in the welcome banner when the user has no display name.
pub const GREETING_FALLBACK: &str = "Farmer";
pub const BRAND: &str = "AI-Fasal";
pub const WELCOME_SUBTITLE: &str = "Your AI-powered agricultural assistant is ready to help you make informed decisions about your crops.";

/// Icons drawn by the frontend's icon component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    BarChart3,
    Leaf,
    MapPin,
    ArrowRight,
    HelpCircle,
    Info,
    Mail,
    Phone,
    ChevronDown,
    Sprout,
    Sun,
    Moon,
    LogOut,
}

/// Accent color of a quick-action tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Blue,
    Green,
    Purple,
}

impl ColorToken {
    pub fn background(&self) -> &'static str {
        match self {
            ColorToken::Blue => "bg-blue-500",
            ColorToken::Green => "bg-green-500",
            ColorToken::Purple => "bg-purple-500",
        }
    }

    pub fn gradient(&self) -> &'static str {
        match self {
            ColorToken::Blue => "from-blue-500 to-blue-600",
            ColorToken::Green => "from-green-500 to-green-600",
            ColorToken::Purple => "from-purple-500 to-purple-600",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub href: &'static str,
    pub color: ColorToken,
}

impl QuickAction {
    /// The navigation a click on this tile requests.
    pub fn intent(&self) -> NavIntent {
        NavIntent::to(self.href)
    }

    /// Finds the tile whose destination is `path`.
    pub fn for_path(path: &str) -> Option<&'static QuickAction> {
        QUICK_ACTIONS.iter().find(|action| action.href == path)
    }
}

pub static QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        title: "Crop Yield Prediction",
        description: "Estimate crop yields based on soil properties",
        icon: Icon::BarChart3,
        href: routes::CROP_YIELD,
        color: ColorToken::Blue,
    },
    QuickAction {
        title: "Crop Recommendation",
        description: "Get AI-powered crop suggestions for your soil",
        icon: Icon::Leaf,
        href: routes::CROP_RECOMMENDATION,
        color: ColorToken::Green,
    },
    QuickAction {
        title: "Know Your Soil Data",
        description: "Analyze and visualize soil properties",
        icon: Icon::MapPin,
        href: routes::SOIL_DATA,
        color: ColorToken::Purple,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: [FaqEntry; 5] = [
    FaqEntry {
        question: "How accurate are the crop yield predictions?",
        answer: "Our AI-powered predictions use advanced machine learning models trained on extensive agricultural data. \
                 The accuracy varies by crop and region, but typically ranges between 85-95% when provided with accurate soil data.",
    },
    FaqEntry {
        question: "What soil data do I need to provide?",
        answer: "You'll need to provide key soil properties including nitrogen, phosphorus, and potassium levels (N-P-K), \
                 pH value, temperature, humidity, rainfall, and soil type. You can either input these manually or use our \
                 soil data integration feature.",
    },
    FaqEntry {
        question: "How do crop recommendations work?",
        answer: "Our AI analyzes your soil properties and environmental conditions to suggest the most suitable crops. \
                 The recommendations consider factors like soil nutrients, climate compatibility, and potential yield, \
                 helping you make informed decisions for optimal agricultural outcomes.",
    },
    FaqEntry {
        question: "Is my data secure and private?",
        answer: "Yes, absolutely. We prioritize data security and privacy. All your agricultural data is encrypted and \
                 stored securely. We never share your information with third parties and comply with data protection regulations.",
    },
    FaqEntry {
        question: "Can I access market price information?",
        answer: "Yes! Our platform provides real-time market price information for various commodities. You can access \
                 current market prices to help you make better selling decisions and plan your crop production accordingly.",
    },
];

/// The "About Us" block. The brand name is emphasised inside the intro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct About {
    pub intro_before_brand: &'static str,
    pub brand: &'static str,
    pub intro_after_brand: &'static str,
    pub mission: &'static str,
    pub vision_title: &'static str,
    pub vision: &'static str,
    pub offerings_title: &'static str,
    pub offerings: [&'static str; 5],
}

pub static ABOUT: About = About {
    intro_before_brand: "Welcome to ",
    brand: BRAND,
    intro_after_brand: ", your trusted AI-powered agricultural assistant designed to empower modern farmers with data-driven insights.",
    mission: "Our mission is to revolutionize agriculture by leveraging cutting-edge artificial intelligence and machine \
              learning technologies to help farmers make informed decisions about crop selection, yield estimation, and \
              agricultural planning.",
    vision_title: "Our Vision",
    vision: "To make advanced agricultural technology accessible to farmers worldwide, enabling sustainable and \
             profitable farming practices through intelligent data analysis.",
    offerings_title: "What We Offer",
    offerings: [
        "AI-powered crop yield predictions",
        "Intelligent crop recommendations",
        "Comprehensive soil data analysis",
        "Real-time market price information",
        "Data-driven agricultural insights",
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactCard {
    pub label: &'static str,
    pub icon: Icon,
    pub lines: &'static [&'static str],
    /// Secondary, smaller text under the main lines.
    pub note: Option<&'static str>,
}

pub const CONTACT_TITLE: &str = "Contact Information";
pub const CONTACT_DESCRIPTION: &str = "Reach out to us through these channels";

pub static CONTACTS: [ContactCard; 3] = [
    ContactCard {
        label: "Email",
        icon: Icon::Mail,
        lines: &["aifasal0018@gmail.com"],
        note: None,
    },
    ContactCard {
        label: "Phone",
        icon: Icon::Phone,
        lines: &["+91  9916910155"],
        note: Some("Mon-Fri, 9AM-5PM"),
    },
    ContactCard {
        label: "Address",
        icon: Icon::MapPin,
        lines: &["Rajanukunte, Via Yalahanka,", "Bengaluru, Karnataka 560 064"],
        note: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_actions_keep_their_order_and_routes() {
        let titles: Vec<_> = QUICK_ACTIONS.iter().map(|a| a.title).collect();
        assert_eq!(
            titles,
            ["Crop Yield Prediction", "Crop Recommendation", "Know Your Soil Data"]
        );

        let hrefs: Vec<_> = QUICK_ACTIONS.iter().map(|a| a.href).collect();
        assert_eq!(
            hrefs,
            ["/home/crop_yield", "/home/croprecommendation", "/home/soildata"]
        );
    }

    #[test]
    fn quick_action_lookup_by_path() {
        let action = QuickAction::for_path(routes::SOIL_DATA).unwrap();
        assert_eq!(action.title, "Know Your Soil Data");
        assert_eq!(action.color.background(), "bg-purple-500");
        assert!(QuickAction::for_path(routes::HOME).is_none());
    }

    #[test]
    fn faq_questions_are_distinct() {
        let mut questions: Vec<_> = FAQS.iter().map(|f| f.question).collect();
        questions.sort_unstable();
        questions.dedup();
        assert_eq!(questions.len(), 5);
        assert!(FAQS.iter().all(|f| !f.answer.is_empty()));
    }

    #[test]
    fn contact_cards_carry_the_literal_details() {
        let labels: Vec<_> = CONTACTS.iter().map(|c| c.label).collect();
        assert_eq!(labels, ["Email", "Phone", "Address"]);
        assert_eq!(CONTACTS[0].lines, ["aifasal0018@gmail.com"]);
        assert_eq!(CONTACTS[1].note, Some("Mon-Fri, 9AM-5PM"));
        assert_eq!(CONTACTS[2].lines.len(), 2);
    }

    #[test]
    fn about_lists_five_offerings() {
        assert_eq!(ABOUT.brand, "AI-Fasal");
        assert_eq!(ABOUT.offerings.len(), 5);
        assert_eq!(ABOUT.offerings[3], "Real-time market price information");
    }
}
