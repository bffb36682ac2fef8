//! Page copy
//!
//! Everything the visitor reads lives here so the section components only
//! deal with layout.

use crate::components::icons::Icon;
use crate::models::section::SectionId;

pub const COMPANY_NAME: &str = "NBLive AI";
pub const CONTACT_EMAIL: &str = "info@nblive.co.za";
pub const WEBSITE: &str = "nblive.co.za";
pub const LOCATION: &str = "South Africa";

pub const HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?w=600&h=400&fit=crop";
pub const ABOUT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=600&h=400&fit=crop";

/// Title of the notice shown after a contact form submission
pub const ACK_TITLE: &str = "Message Sent!";
pub const ACK_DESCRIPTION: &str =
    "Thank you for your interest. We'll get back to you within 24 hours.";

/// A call-to-action button and the section it scrolls to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub target: SectionId,
}

pub const NAV_CTA: CallToAction = CallToAction {
    label: "Get Started",
    target: SectionId::Contact,
};
pub const HERO_PRIMARY_CTA: CallToAction = CallToAction {
    label: "Start Your AI Journey",
    target: SectionId::Contact,
};
pub const HERO_SECONDARY_CTA: CallToAction = CallToAction {
    label: "Explore Solutions",
    target: SectionId::Services,
};
pub const ABOUT_CTA: CallToAction = CallToAction {
    label: "Partner With Us",
    target: SectionId::Contact,
};

/// Company links in the footer
pub const FOOTER_LINKS: [CallToAction; 3] = [
    CallToAction {
        label: "About Us",
        target: SectionId::About,
    },
    CallToAction {
        label: "Our Services",
        target: SectionId::Services,
    },
    CallToAction {
        label: "Contact",
        target: SectionId::Contact,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
}

pub const SERVICES: [Service; 6] = [
    Service {
        icon: Icon::Brain,
        title: "Machine Learning",
        description: "Advanced ML algorithms that learn from your data to provide predictive insights and automate complex processes.",
        features: [
            "Predictive Analytics",
            "Pattern Recognition",
            "Automated Decision Making",
        ],
    },
    Service {
        icon: Icon::Zap,
        title: "AI Automation",
        description: "Streamline workflows and boost productivity with intelligent automation solutions tailored to your business needs.",
        features: [
            "Process Automation",
            "Workflow Optimization",
            "Smart Integration",
        ],
    },
    Service {
        icon: Icon::Shield,
        title: "AI Security",
        description: "Protect your business with AI-powered security systems that detect and prevent threats in real-time.",
        features: ["Threat Detection", "Risk Assessment", "Security Monitoring"],
    },
    Service {
        icon: Icon::Globe,
        title: "Data Analytics",
        description: "Transform raw data into actionable insights with our sophisticated AI-driven analytics platform.",
        features: [
            "Real-time Analytics",
            "Custom Dashboards",
            "Business Intelligence",
        ],
    },
    Service {
        icon: Icon::Brain,
        title: "Natural Language Processing",
        description: "Enable your systems to understand and process human language for better customer interactions.",
        features: ["Text Analysis", "Sentiment Analysis", "Chatbot Development"],
    },
    Service {
        icon: Icon::Zap,
        title: "Computer Vision",
        description: "Advanced image and video analysis capabilities for visual recognition and automated processing.",
        features: [
            "Image Recognition",
            "Object Detection",
            "Visual Quality Control",
        ],
    },
];

/// Services listed in the footer
pub const FOOTER_SERVICES: [&str; 5] = [
    "Machine Learning",
    "AI Automation",
    "Data Analytics",
    "Computer Vision",
    "Natural Language Processing",
];

/// Accent colour of a statistic or bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
    Teal,
}

impl Accent {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Blue => "accent-blue",
            Self::Purple => "accent-purple",
            Self::Teal => "accent-teal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

pub const STATS: [Stat; 4] = [
    Stat {
        value: "50+",
        label: "AI Projects Delivered",
        accent: Accent::Blue,
    },
    Stat {
        value: "99%",
        label: "Client Satisfaction",
        accent: Accent::Purple,
    },
    Stat {
        value: "24/7",
        label: "Support Available",
        accent: Accent::Teal,
    },
    Stat {
        value: "5+",
        label: "Years Experience",
        accent: Accent::Blue,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: Icon,
    pub heading: &'static str,
    pub value: &'static str,
}

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        icon: Icon::Mail,
        heading: "Email",
        value: CONTACT_EMAIL,
    },
    ContactDetail {
        icon: Icon::Globe,
        heading: "Website",
        value: WEBSITE,
    },
    ContactDetail {
        icon: Icon::MapPin,
        heading: "Location",
        value: LOCATION,
    },
];

pub const WHY_CHOOSE: [(&str, Accent); 4] = [
    ("Expert AI development team", Accent::Blue),
    ("Tailored solutions for your business", Accent::Purple),
    ("Ongoing support and maintenance", Accent::Teal),
    ("Proven track record of success", Accent::Blue),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_title_is_fixed() {
        assert_eq!(ACK_TITLE, "Message Sent!");
    }

    #[test]
    fn test_calls_to_action_target_real_sections() {
        let targets = [NAV_CTA, HERO_PRIMARY_CTA, HERO_SECONDARY_CTA, ABOUT_CTA]
            .into_iter()
            .chain(FOOTER_LINKS)
            .map(|cta| cta.target);
        for target in targets {
            assert!(SectionId::ALL.contains(&target));
        }
    }

    #[test]
    fn test_footer_services_are_offered() {
        for name in FOOTER_SERVICES {
            assert!(SERVICES.iter().any(|service| service.title == name));
        }
    }

    #[test]
    fn test_images_are_remote() {
        assert!(HERO_IMAGE_URL.starts_with("https://"));
        assert!(ABOUT_IMAGE_URL.starts_with("https://"));
    }
}
