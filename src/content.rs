//! Static site content: navigation entries, case studies, open-source
//! showcase and blog posts. Read-only records consumed by the section
//! components; nothing here is fetched or mutated.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub id: &'static str,
    pub client_name: &'static str,
    pub logo_text: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub stats: &'static [Stat],
    pub featured: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub stats: &'static [Stat],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub title: &'static str,
    pub date: &'static str,
    pub tags: &'static [&'static str],
    /// CSS background for the card (color or layered image).
    pub background: &'static str,
    pub image: Option<&'static str>,
    pub dark_text: bool,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "SERVICES", href: "#services" },
    NavItem { label: "CLIENTS", href: "#clients" },
    NavItem { label: "PRODUCTS", href: "#products" },
    NavItem { label: "OPEN SOURCE", href: "#open-source" },
    NavItem { label: "BLOG", href: "#blog" },
    NavItem { label: "EVENTS", href: "#events" },
    NavItem { label: "PODCAST", href: "#podcast" },
    NavItem { label: "CAREERS", href: "#careers" },
];

pub const SERVICES: &[&str] = &[
    "Design engineering",
    "AI integration",
    "SDKs, extensions & plugins",
    "Real-time features",
    "Performance & scalability",
    "Devtools startup advisory",
];

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: "bolt-new",
        client_name: "Bolt.new",
        logo_text: "bolt.new",
        description: "Tech partners since 2021: our engineers helped scale the \
            WebContainers platform from pioneering browser IDE to bolt.new, the \
            AI-powered tool that hit $20M+ ARR in just two months.",
        tags: &["Rails", "React", "WebSocket"],
        stats: &[
            Stat { value: "$113M", label: "total funding" },
            Stat { value: "Backed", label: "by GV" },
        ],
        featured: true,
    },
    CaseStudy {
        id: "teleport",
        client_name: "Teleport",
        logo_text: "Teleport",
        description: "Partners since 2020, engineering enterprise-ready features \
            for an open-source infrastructure access platform. Our engineering \
            and design teams work across the platform.",
        tags: &["Developer Tools", "Go", "Wasm", "Jamstack"],
        stats: &[Stat { value: "Backed", label: "by Kleiner Perkins, Y Combinator" }],
        featured: false,
    },
    CaseStudy {
        id: "recraft",
        client_name: "Recraft",
        logo_text: "R",
        description: "Recraft is shaping the future of AI-driven creativity. Our \
            collaboration introduced a custom Discord bot, streamlining client \
            acquisition and engagement.",
        tags: &["Business Tools", "AI", "JavaScript", "LLMs"],
        stats: &[
            Stat { value: "$42M", label: "total funding" },
            Stat { value: "1M+", label: "users" },
        ],
        featured: false,
    },
    CaseStudy {
        id: "wallarm",
        client_name: "Wallarm",
        logo_text: "wallarm",
        description: "We helped an API security platform redesign and optimize \
            their Go-based event processing pipeline handling critical security \
            data through NATS messaging.",
        tags: &["Developer Tools", "Cyber Security", "Ruby", "PostgreSQL"],
        stats: &[Stat { value: "20,000+", label: "protected apps and APIs" }],
        featured: false,
    },
];

pub const FLAGSHIP_PROJECT: Project = Project {
    name: "PostCSS",
    description: "One of the most popular and most depended-on npm libraries, \
        PostCSS transforms CSS with an extensible plugins API. With more than \
        200 plugins, developers can lint CSS, support variables and mixins, \
        and more.",
    tags: &["PostCSS", "CSS", "JavaScript"],
    stats: &[
        Stat { value: "300M+", label: "monthly downloads" },
        Stat { value: "Used", label: "in Webpack and Stylelint" },
    ],
};

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Unparser: real life lessons migrating Ruby tools from Parser to Prism",
        date: "November 25, 2025",
        tags: &["Blog Post", "Open Source", "Ruby"],
        background: "#3a4a6b",
        image: Some("/assets/retro-office.jpg"),
        dark_text: false,
    },
    BlogPost {
        title: "Vibecoding tools can learn from design UX and win over everyone",
        date: "November 19, 2025",
        tags: &["Blog Post", "Design"],
        background: "#050505",
        image: Some("/assets/abstract-fluid.jpg"),
        dark_text: false,
    },
    BlogPost {
        title: "Real-time magic, no elixirs: optimizing Sera with AnyCable",
        date: "March 1, 2023",
        tags: &["Blog Post", "Infrastructure"],
        background: "#2b5bf5",
        image: None,
        dark_text: false,
    },
    BlogPost {
        title: "Handling errors in a non-geek interface",
        date: "October 31, 2016",
        tags: &["Blog Post", "Design"],
        background: "#fff566",
        image: None,
        dark_text: true,
    },
];

pub const FOOTER_LINKS: &[&str] = &["Our Work", "Services", "Open Source", "Martian Blog", "Careers"];

/// World-clock cities shown in the footer telemetry column, with their
/// fixed UTC offsets in hours.
pub const WORLD_CLOCKS: &[(&str, i32)] = &[
    ("New York", -5),
    ("San Francisco", -8),
    ("Tokyo", 9),
    ("Lisbon", 0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_featured_case_study() {
        assert_eq!(CASE_STUDIES.iter().filter(|c| c.featured).count(), 1);
    }

    #[test]
    fn records_are_fully_populated() {
        for case in CASE_STUDIES {
            assert!(!case.tags.is_empty());
            assert!(!case.stats.is_empty());
            assert!(!case.description.is_empty());
        }
        for post in BLOG_POSTS {
            assert!(!post.tags.is_empty());
            assert!(!post.title.is_empty());
        }
    }

    #[test]
    fn clock_offsets_are_sane() {
        for (_, offset) in WORLD_CLOCKS {
            assert!((-12..=14).contains(offset));
        }
    }
}
