//! Static copy for the page sections

pub const BRAND: &str = "launch scholar";

pub const HERO_TAGLINE: &str = "An educational advisory for globally minded families";

pub const CTA_LABEL: &str = "Begin the Conversation";

pub struct Prose {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub const ABOUT: Prose = Prose {
    heading: "A Place of Strategic Learning",
    paragraphs: &[
        "Centered in New York and Miami, and integrated into the global education network, we work tirelessly with families around the world to guide them on their educational and mobility journeys.",
        "Through personalized consultations and strategic planning sessions, we mentor our clients, striving to instill confidence and foster long-term success.",
        "Whether their goals are academic excellence, international mobility, or building generational advantage, we provide them with expert guidance, as well as the families that surround and enrich them.",
    ],
};

pub const ABOUT_HIGHLIGHTS: [&str; 3] = [
    "Elite school advisory and placement",
    "Golden Visa and residency planning",
    "Legacy and mentorship as a family journey",
];

pub const PHILOSOPHY: Prose = Prose {
    heading: "Our Philosophy",
    paragraphs: &[
        "Launch Scholar was founded on the principle that education and mobility are the twin pillars of generational advantage. These foundations of learning and global access create opportunities that transcend borders and generations.",
        "At Launch Scholar, the highest levels of educational consultancy combine with strategic mobility planning and intuitive family guidance.",
        "We believe that, in adventures of the mind and strategic positioning, families fulfill their potential and secure their legacy.",
    ],
};

pub const SERVICES: Prose = Prose {
    heading: "What We Do",
    paragraphs: &[
        "We advise globally minded families on how to leverage mobility and education to expand their children's future.",
    ],
};

pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
}

pub const SERVICE_CARDS: [ServiceCard; 3] = [
    ServiceCard {
        title: "Elite School Advisory",
        description: "Matching exceptional students to U.S. private boarding schools through strategic placement and comprehensive application support.",
        details: "Comprehensive assessment, school mapping, application strategy, and ongoing mentorship throughout the process.",
    },
    ServiceCard {
        title: "Visa & Residency Planning",
        description: "Golden Visas and educational immigration pathways that create long-term advantages for international families.",
        details: "Strategic residency planning, investment guidance, and coordination with legal and financial advisors.",
    },
    ServiceCard {
        title: "Academic & Business Mentorship",
        description: "Ongoing support for future global leaders through academic excellence and strategic business development.",
        details: "Personal development coaching, network building, and strategic guidance for academic and professional success.",
    },
];

pub const CONTACT: Prose = Prose {
    heading: "Talk to Us",
    paragraphs: &[
        "Launch Scholar connects ambition with access, from Ivy League applications to European residency pathways.",
    ],
};

pub const THANK_YOU_HEADING: &str = "Thank You";

pub const THANK_YOU_BODY: &str = "We will be in touch shortly to begin the conversation.";
