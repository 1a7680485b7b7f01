//! Site content.
//!
//! Every section reads one of the records below. The records are plain
//! constants: nothing mutates them after startup, and an empty string is the
//! only switch there is. Clearing a section's heading hides the whole section,
//! clearing a sub-field hides that element.

/// Implemented by every per-section record so the views share one gate.
pub trait SectionConfig: PartialEq + 'static {
    /// The field whose emptiness disables the section.
    fn heading(&self) -> &str;

    fn is_enabled(&self) -> bool {
        !self.heading().is_empty()
    }
}

// ---------------------------------------------------------------------------
// Site
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub title: &'static str,
    pub description: &'static str,
    pub language: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    title: "Schreiner Content Systems LLC",
    description: "Engineering High-Performance Digital Media Systems. We build scalable entertainment systems optimized for browse-based distribution and streaming platforms.",
    language: "en",
};

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationConfig {
    pub logo: &'static str,
    pub items: &'static [NavItem],
}

impl SectionConfig for NavigationConfig {
    fn heading(&self) -> &str {
        self.logo
    }
}

pub const NAVIGATION: NavigationConfig = NavigationConfig {
    logo: "SCHREINER",
    items: &[
        NavItem { label: "About", href: "#about" },
        NavItem { label: "Services", href: "#services" },
        NavItem { label: "Growth", href: "#growth" },
        NavItem { label: "Philosophy", href: "#philosophy" },
        NavItem { label: "Founder", href: "#founder" },
        NavItem { label: "Contact", href: "#contact" },
    ],
};

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct HeroConfig {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub background_image: &'static str,
    pub portrait: &'static str,
    pub portrait_alt: &'static str,
    pub services_label: &'static str,
    pub copyright: &'static str,
    pub cta_primary: &'static str,
    pub cta_primary_href: &'static str,
    pub cta_secondary: &'static str,
    pub cta_secondary_href: &'static str,
    pub scroll_hint: &'static str,
}

impl SectionConfig for HeroConfig {
    fn heading(&self) -> &str {
        self.title
    }
}

pub const HERO: HeroConfig = HeroConfig {
    title: "SCHREINER",
    subtitle: "Engineering High-Performance Digital Media Systems",
    background_image: "",
    portrait: "/images/founder.jpg",
    portrait_alt: "Founder",
    services_label: "Digital Media Systems",
    copyright: "© 2025",
    cta_primary: "Our Channels",
    cta_primary_href: "#growth",
    cta_secondary: "Contact",
    cta_secondary_href: "#contact",
    scroll_hint: "Scroll",
};

// ---------------------------------------------------------------------------
// Video tool announcement
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Screenshot {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoToolConfig {
    pub title: &'static str,
    pub intro: &'static str,
    pub channels: &'static [ExternalLink],
    pub screenshots: &'static [Screenshot],
}

impl SectionConfig for VideoToolConfig {
    fn heading(&self) -> &str {
        self.title
    }
}

pub const VIDEO_TOOL: VideoToolConfig = VideoToolConfig {
    title: "Video Tool Announcement",
    intro: "We are developing a tool to produce videos like the ones you can see on these channels:",
    channels: &[
        ExternalLink { label: "Blackfiles-HD", href: "https://www.youtube.com/@Blackfiles-HD" },
        ExternalLink { label: "ThePaintExplainer", href: "https://www.youtube.com/@ThePaintExplainer" },
    ],
    screenshots: &[
        Screenshot { src: "/images/software.png", alt: "Example Video 1" },
        Screenshot { src: "/images/software 2.png", alt: "Example Video 2" },
    ],
};

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutConfig {
    pub label: &'static str,
    pub title_line1: &'static str,
    pub title_line2: &'static str,
    pub description: &'static str,
    pub image1: &'static str,
    pub image1_alt: &'static str,
    pub image2: &'static str,
    pub image2_alt: &'static str,
    pub author_image: &'static str,
    pub author_name: &'static str,
    pub author_bio: &'static str,
    pub features: &'static [Feature],
}

impl SectionConfig for AboutConfig {
    fn heading(&self) -> &str {
        self.title_line1
    }
}

pub const ABOUT: AboutConfig = AboutConfig {
    label: "About",
    title_line1: "About Schreiner Content Systems",
    title_line2: "",
    description: "Schreiner Content Systems LLC is a digital media automation company focused on building scalable browse-based entertainment channels. We engineer production systems designed to maximize output quality, consistency, and performance across streaming platforms. Our approach combines automation, workflow optimization, AI-assisted production, and systematic content experimentation. We focus on building infrastructure — not just individual videos.",
    image1: "",
    image1_alt: "",
    image2: "",
    image2_alt: "",
    author_image: "",
    author_name: "",
    author_bio: "",
    features: &[
        Feature { icon: "cpu", label: "Automation" },
        Feature { icon: "workflow", label: "Workflow Optimization" },
        Feature { icon: "sparkles", label: "AI-Assisted Production" },
        Feature { icon: "layers", label: "Systematic Experimentation" },
    ],
};

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServicesConfig {
    pub label: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub services: &'static [ServiceItem],
}

impl SectionConfig for ServicesConfig {
    fn heading(&self) -> &str {
        self.title
    }
}

pub const SERVICES: ServicesConfig = ServicesConfig {
    label: "Services",
    title: "What We Do",
    subtitle: "Scalable digital media systems engineered for performance",
    services: &[
        ServiceItem {
            id: "01",
            title: "Browse-Based Channel Development",
            description: "We develop and operate YouTube channels optimized for browse and recommendation-driven distribution.",
            image: "",
        },
        ServiceItem {
            id: "02",
            title: "Streaming & Long-Form Optimization",
            description: "We produce long-form and ultra-long-form content engineered for retention and engagement.",
            image: "",
        },
        ServiceItem {
            id: "03",
            title: "Multi-Platform Distribution",
            description: "We expand content across YouTube, YouTube Shorts, TikTok, Instagram, X, LinkedIn, and other platforms.",
            image: "",
        },
        ServiceItem {
            id: "04",
            title: "AI-Assisted Production Systems",
            description: "We integrate tools such as Vidrush, CapCut, ElevenLabs, and proprietary AI systems to optimize video creation workflows, including automated thumbnail generation and content structuring.",
            image: "",
        },
    ],
};

// ---------------------------------------------------------------------------
// Growth & milestones
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneItem {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrowthConfig {
    pub label: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub milestones: &'static [MilestoneItem],
    pub stats: &'static [Stat],
}

impl SectionConfig for GrowthConfig {
    fn heading(&self) -> &str {
        self.title
    }
}

pub const GROWTH: GrowthConfig = GrowthConfig {
    label: "Performance",
    title: "Growth & Achievements",
    subtitle: "Measurable progress in digital media systems",
    milestones: &[
        MilestoneItem {
            id: 1,
            title: "Multiple Channels Launched",
            description: "Multiple browse-based YouTube channels successfully developed and deployed",
        },
        MilestoneItem {
            id: 2,
            title: "Two Channels Monetized",
            description: "Achieved monetization status on two separate channel properties",
        },
        MilestoneItem {
            id: 3,
            title: "Silver Play Button",
            description: "YouTube Silver Play Button achievement unlocked",
        },
        MilestoneItem {
            id: 4,
            title: "Multi-Platform Expansion",
            description: "Active expansion across YouTube, Shorts, TikTok, Instagram, X, and LinkedIn",
        },
        MilestoneItem {
            id: 5,
            title: "Proprietary AI Development",
            description: "In-house AI tool development for automated production workflows",
        },
    ],
    stats: &[
        Stat { value: "Multiple", label: "Channels" },
        Stat { value: "2", label: "Monetized" },
        Stat { value: "100K+", label: "Subscribers" },
        Stat { value: "5+", label: "Platforms" },
    ],
};

// ---------------------------------------------------------------------------
// Philosophy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Principle {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhilosophyConfig {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub text: &'static str,
    pub backdrop_word: &'static str,
    pub principles: &'static [Principle],
    pub motto: &'static str,
}

impl SectionConfig for PhilosophyConfig {
    fn heading(&self) -> &str {
        self.title
    }
}

pub const PHILOSOPHY: PhilosophyConfig = PhilosophyConfig {
    title: "System Over Talent",
    subtitle: "Our Philosophy",
    text: "We believe scalable digital media is built through systems, not randomness. By simulating and optimizing production workflows, we increase both creative output and technical quality. Our goal is to produce high-quality entertainment at scale while continuously refining efficiency, retention, and audience alignment.",
    backdrop_word: "SYSTEMS",
    principles: &[
        Principle { icon: "settings", title: "Systems", description: "Built through systems, not randomness" },
        Principle { icon: "target", title: "Optimization", description: "Continuous workflow refinement" },
        Principle { icon: "zap", title: "Output", description: "Maximized creative and technical quality" },
        Principle { icon: "repeat", title: "Scale", description: "High-quality entertainment at scale" },
    ],
    motto: "Systems Over Talent",
};

// ---------------------------------------------------------------------------
// Founder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FounderConfig {
    pub title: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub socials: &'static [SocialLink],
}

impl SectionConfig for FounderConfig {
    fn heading(&self) -> &str {
        self.title
    }
}

pub const FOUNDER: FounderConfig = FounderConfig {
    title: "Founder",
    name: "Konrad Schreiner",
    role: "Founder, Schreiner Content Systems LLC",
    bio: "Konrad focuses on engineering scalable content systems designed for algorithmic distribution and audience growth. His work combines media production, workflow optimization, and AI-assisted tooling.",
    email: "konrad.schrein@gmail.com",
    image: "",
    image_alt: "Founder Photo",
    socials: &[SocialLink { label: "LinkedIn", href: "#", icon: "linkedin" }],
};

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct FormOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactConfig {
    pub label: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub project_type_label: &'static str,
    pub project_type_placeholder: &'static str,
    pub project_type_options: &'static [FormOption],
    pub message_label: &'static str,
    pub message_placeholder: &'static str,
    pub submit_button_text: &'static str,
    pub sending_text: &'static str,
    pub sent_text: &'static str,
    pub image: &'static str,
    pub company_name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub contact_info: &'static str,
}

impl SectionConfig for ContactConfig {
    fn heading(&self) -> &str {
        self.title
    }
}

pub const CONTACT: ContactConfig = ContactConfig {
    label: "Contact",
    title: "Contact",
    subtitle: "For partnerships, platform collaborations, or production inquiries",
    name_label: "Name",
    name_placeholder: "Your name",
    email_label: "Email",
    email_placeholder: "your@email.com",
    project_type_label: "Inquiry Type",
    project_type_placeholder: "Select inquiry type",
    project_type_options: &[
        FormOption { value: "partnership", label: "Partnership" },
        FormOption { value: "platform", label: "Platform Collaboration" },
        FormOption { value: "production", label: "Production Inquiry" },
        FormOption { value: "other", label: "Other" },
    ],
    message_label: "Message",
    message_placeholder: "Your message...",
    submit_button_text: "Send Message",
    sending_text: "Sending...",
    sent_text: "Message Sent!",
    image: "",
    company_name: "Schreiner Content Systems LLC",
    address: "Johann-Meyer-Str. 01097 Dresden Germany",
    phone: "+49 157 85471426",
    contact_info: "For partnerships, platform collaborations, or production inquiries, please use the contact form.",
};

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterConfig {
    pub brand: &'static str,
    pub marquee_text: &'static str,
    pub marquee_highlight_chars: &'static [char],
    pub nav_heading_1: &'static str,
    pub nav_links_1: &'static [FooterLink],
    pub nav_heading_2: &'static str,
    pub nav_links_2: &'static [FooterLink],
    pub cta_text: &'static str,
    pub cta_href: &'static str,
    pub copyright: &'static str,
    pub tagline: &'static str,
    pub legal_links: &'static [FooterLink],
}

impl SectionConfig for FooterConfig {
    fn heading(&self) -> &str {
        self.copyright
    }
}

pub const FOOTER: FooterConfig = FooterConfig {
    brand: "SCHREINER",
    marquee_text: "Engineering Digital Media Systems",
    marquee_highlight_chars: &['E', 'S'],
    nav_heading_1: "Navigation",
    nav_links_1: &[
        FooterLink { label: "About", href: "#about" },
        FooterLink { label: "Services", href: "#services" },
        FooterLink { label: "Growth", href: "#growth" },
    ],
    nav_heading_2: "More",
    nav_links_2: &[
        FooterLink { label: "Philosophy", href: "#philosophy" },
        FooterLink { label: "Founder", href: "#founder" },
        FooterLink { label: "Contact", href: "#contact" },
    ],
    cta_text: "Get in Touch",
    cta_href: "#contact",
    copyright: "© 2025 Schreiner Content Systems LLC. All rights reserved.",
    tagline: "Systems over talent",
    legal_links: &[
        FooterLink { label: "Privacy Policy", href: "" },
        FooterLink { label: "Impressum", href: "" },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_sections_are_all_enabled() {
        assert!(NAVIGATION.is_enabled());
        assert!(HERO.is_enabled());
        assert!(VIDEO_TOOL.is_enabled());
        assert!(ABOUT.is_enabled());
        assert!(SERVICES.is_enabled());
        assert!(GROWTH.is_enabled());
        assert!(PHILOSOPHY.is_enabled());
        assert!(FOUNDER.is_enabled());
        assert!(CONTACT.is_enabled());
        assert!(FOOTER.is_enabled());
    }

    #[test]
    fn clearing_the_heading_disables_a_section() {
        let about = AboutConfig { title_line1: "", ..ABOUT };
        assert!(!about.is_enabled());

        // The footer is keyed on its copyright line, not the brand.
        let footer = FooterConfig { brand: "", ..FOOTER };
        assert!(footer.is_enabled());
        let footer = FooterConfig { copyright: "", ..FOOTER };
        assert!(!footer.is_enabled());
    }

    #[test]
    fn list_keys_are_unique() {
        let mut ids: Vec<&str> = SERVICES.services.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SERVICES.services.len());

        let mut milestone_ids: Vec<u32> = GROWTH.milestones.iter().map(|m| m.id).collect();
        milestone_ids.sort_unstable();
        milestone_ids.dedup();
        assert_eq!(milestone_ids, vec![1, 2, 3, 4, 5]);
    }
}
