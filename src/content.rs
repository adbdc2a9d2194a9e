//! Page content records.
//!
//! Everything the page says lives here as plain data: brand groups, service
//! features, method steps, case studies, about copy and contact lists. The
//! `Default` impls carry the canonical site copy, so an empty `config.toml`
//! still renders the complete page. Users override any block from
//! `config.toml` under `[content.*]`:
//!
//! ```toml
//! [content.hero]
//! headline = "Growth partner for founders."
//!
//! [[content.method.steps]]
//! title = "Diagnose"
//! description = "Map the value loop."
//! ```
//!
//! Arrays replace the stock array wholesale; tables merge key by key.

use serde::{Deserialize, Serialize};

/// All page copy, one field per rendered block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Content {
    /// Header navigation entries, shared by the wide and the mobile menu.
    pub nav: Vec<NavEntry>,
    pub hero: Hero,
    pub brands: Brands,
    pub services: Services,
    pub method: Method,
    pub cases: Cases,
    pub about: About,
    pub contact: ContactSection,
    pub legal: Legal,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            nav: default_nav(),
            hero: Hero::default(),
            brands: Brands::default(),
            services: Services::default(),
            method: Method::default(),
            cases: Cases::default(),
            about: About::default(),
            contact: ContactSection::default(),
            legal: Legal::default(),
        }
    }
}

/// A header navigation entry pointing at an in-page anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavEntry {
    pub label: String,
    /// Anchor identifier without the leading `#`.
    pub target: String,
}

impl NavEntry {
    fn new(label: &str, target: &str) -> Self {
        Self {
            label: label.to_string(),
            target: target.to_string(),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

pub fn default_nav() -> Vec<NavEntry> {
    vec![
        NavEntry::new("Work", "work"),
        NavEntry::new("Services", "services"),
        NavEntry::new("Method", "method"),
        NavEntry::new("About", "about"),
        NavEntry::new("Contact", "contact"),
    ]
}

/// Opening pitch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Hero {
    pub badge: String,
    pub headline: String,
    pub pitch: String,
    /// Label of the primary call-to-action (links to the scheduling URL).
    pub primary_cta: String,
    /// Label of the secondary link (scrolls to the brand grid).
    pub secondary_cta: String,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            badge: "Fractional Growth Marketing".to_string(),
            headline: "Fractional Growth Partner for Brands.".to_string(),
            pitch: "I build predictable, scalable growth engines rooted in product value \u{2014} \
                    not excessive ad spend. Growth starts inside the product and compounds \
                    through user experience, messaging clarity, and smart distribution."
                .to_string(),
            primary_cta: "Let's build your growth engine".to_string(),
            secondary_cta: "See example work".to_string(),
        }
    }
}

/// Brand/logo grid. Brands are grouped in config and rendered flattened.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Brands {
    pub badge: String,
    pub groups: Vec<Vec<String>>,
    /// Closing line below the grid.
    pub note: String,
}

impl Brands {
    /// Concatenation of all groups, order preserved.
    pub fn flattened(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().flatten().map(String::as_str)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Brands {
    fn default() -> Self {
        Self {
            badge: "Selected Brands".to_string(),
            groups: vec![
                strings(&[
                    "Peugeot",
                    "Renault",
                    "HP",
                    "Sanofi",
                    "Pfizer",
                    "Coca\u{2011}Cola",
                    "Autodesk",
                    "NN Hayat",
                    "Odeabank",
                ]),
                strings(&[
                    "Levi's",
                    "Dockers",
                    "Calvin Klein",
                    "Timberland",
                    "Yarg\u{131}c\u{131}",
                    "Kahve D\u{fc}nyas\u{131}",
                    "S\u{fc}ta\u{15f}",
                    "Uluda\u{11f}",
                ]),
                strings(&[
                    "Ferrero",
                    "Heinz",
                    "\u{15e}\u{f6}len",
                    "Petrol Ofisi",
                    "Genesys",
                    "Solita",
                    "Leica",
                    "EzFill",
                ]),
                strings(&[
                    "Vexo",
                    "Malibu Financial",
                    "MNG Kargo",
                    "Nebim",
                    "Otokar",
                    "Pa\u{15f}abah\u{e7}e",
                    "Vakifbank",
                ]),
            ],
            note: "\u{2026}and 80+ startups, agencies, and founder\u{2011}led brands.".to_string(),
        }
    }
}

/// A title + description pair rendered as a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

impl Feature {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Services grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Services {
    pub badge: String,
    pub heading: String,
    pub intro: String,
    pub features: Vec<Feature>,
}

impl Default for Services {
    fn default() -> Self {
        Self {
            badge: "What I Do".to_string(),
            heading: "Fractional Growth Marketing Leadership".to_string(),
            intro: "I help you rely less on paid ads by making your product and messaging do \
                    the work. I work alongside your team to clarify your positioning, improve \
                    onboarding, increase retention, and build product + marketing loops that \
                    drive ongoing, compounding growth."
                .to_string(),
            features: vec![
                Feature::new(
                    "Positioning & Narrative",
                    "Define a clear value story that users instantly understand and feel \
                     \u{2014} across website, product, and campaigns.",
                ),
                Feature::new(
                    "Activation & Onboarding",
                    "Remove friction, accelerate time\u{2011}to\u{2011}value, and guide users \
                     to their first success moments.",
                ),
                Feature::new(
                    "Retention & Expansion",
                    "Build habit loops, lifecycle messaging, and in\u{2011}product nudges that \
                     increase LTV.",
                ),
                Feature::new(
                    "Growth Loops",
                    "Design growth marketing share, referral, collaboration, and UGC mechanics \
                     that compound.",
                ),
                Feature::new(
                    "Performance Alignment",
                    "Make paid channels amplifiers \u{2014} not life support \u{2014} by \
                     aligning creative with in\u{2011}product value.",
                ),
                Feature::new(
                    "Team Enablement",
                    "Practical leadership, clear playbooks, and repeatable operating rhythms \
                     that empower your team to sustain growth independently.",
                ),
            ],
        }
    }
}

/// Working method. Steps are numbered by position when rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Method {
    pub badge: String,
    pub steps: Vec<Feature>,
}

impl Default for Method {
    fn default() -> Self {
        Self {
            badge: "How I Work".to_string(),
            steps: vec![
                Feature::new(
                    "Diagnose",
                    "Map the value loop. Identify where growth is stuck across product, UX, \
                     messaging, funnel, and ops.",
                ),
                Feature::new(
                    "Architect",
                    "Design a focused growth system aligned to revenue goals and team capacity.",
                ),
                Feature::new(
                    "Lead",
                    "Partner with your team to execute, iterate, and align \
                     cross\u{2011}functionally.",
                ),
                Feature::new(
                    "Scale",
                    "Make growth repeatable. Paid becomes an accelerator, not a crutch.",
                ),
            ],
        }
    }
}

/// A single case study card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseStudy {
    pub title: String,
    pub bullets: Vec<String>,
    /// Short outcome labels rendered as pills.
    pub outcomes: Vec<String>,
    pub result: String,
}

/// Case studies section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Cases {
    pub badge: String,
    pub studies: Vec<CaseStudy>,
}

impl Default for Cases {
    fn default() -> Self {
        Self {
            badge: "Growth Case Example".to_string(),
            studies: vec![
                CaseStudy {
                    title: "SaaS Productivity Platform (Growth Marketing)".to_string(),
                    bullets: strings(&[
                        "Low activation & inconsistent retention; growth overly dependent on paid.",
                        "Mapped aha\u{2011}moment, rebuilt onboarding, added in\u{2011}product \
                         collaboration invites.",
                        "Shifted messaging to value narrative; aligned creative with product \
                         experience.",
                    ]),
                    outcomes: strings(&[
                        "Time\u{2011}to\u{2011}value \u{2193}",
                        "Retention \u{2191}",
                        "CAC efficiency \u{2191}",
                    ]),
                    result: "Result: growth moved from push \u{2192} pull; product began to carry \
                             acquisition and expansion."
                        .to_string(),
                },
                CaseStudy {
                    title: "E\u{2011}commerce Replatform + Narrative".to_string(),
                    bullets: strings(&[
                        "Confused value story; high bounce; repeat low.",
                        "Rewrote narrative, simplified UX, launched lifecycle journeys.",
                        "Introduced UGC & referral triggers; ad creative synced to \
                         first\u{2011}value moments.",
                    ]),
                    outcomes: strings(&[
                        "Conversion \u{2191}",
                        "Repeat rate \u{2191}",
                        "Blended ROAS \u{2191}",
                    ]),
                    result: "Result: healthier revenue mix with compounding organic & owned growth."
                        .to_string(),
                },
            ],
        }
    }
}

/// About section. `body` is markdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct About {
    pub badge: String,
    pub heading: String,
    pub body: String,
    pub skills: Vec<String>,
    pub snapshot_title: String,
    pub snapshot: Vec<String>,
}

impl Default for About {
    fn default() -> Self {
        Self {
            badge: "About".to_string(),
            heading: "Warm authority. Calm execution. High\u{2011}leverage clarity.".to_string(),
            body: "I've led growth across global corporations, challenger brands, and \
                   founder\u{2011}led teams. Different scales, same truth: growth happens when a \
                   brand knows who it is, who it serves, and how to deliver value consistently \
                   inside the product.\n\n\
                   I don't replace your team \u{2014} I level it up. Strategic and \
                   hands\u{2011}on, I build systems and rituals so growth outlives me.\n"
                .to_string(),
            skills: strings(&[
                "Growth Marketing Strategy",
                "Activation & Onboarding",
                "Lifecycle & Retention",
                "Growth Loops",
                "Creative x Product",
            ]),
            snapshot_title: "Expertise Snapshot".to_string(),
            snapshot: strings(&[
                "SaaS / E-com / CPG | Consumer + B2B",
                "Narrative \u{2192} Product activation",
                "Data x Creative",
                "Exec-ready clarity",
                "Playbooks & enablement",
            ]),
        }
    }
}

/// Contact section copy. The contact identifiers themselves live in
/// [`crate::config::ContactConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactSection {
    pub badge: String,
    pub call_heading: String,
    pub call_blurb: String,
    pub ideal_fits_title: String,
    pub ideal_fits: Vec<String>,
    pub engagement_modes_title: String,
    pub engagement_modes: Vec<String>,
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            badge: "Work With Me".to_string(),
            call_heading: "Start with a 30\u{2011}minute call".to_string(),
            call_blurb: "No pressure, no pitch \u{2014} just clarity on where growth is stuck and \
                         what to do next."
                .to_string(),
            ideal_fits_title: "Ideal fits".to_string(),
            ideal_fits: strings(&[
                "Growth Marketing or growth marketing\u{2011}curious teams ready to reduce \
                 paid\u{2011}dependence",
                "Clear product value with messy narrative or onboarding",
                "Leaders who want repeatable, not accidental, growth",
            ]),
            engagement_modes_title: "Engagement modes".to_string(),
            engagement_modes: strings(&[
                "Fractional Growth Lead (part\u{2011}time leadership)",
                "90\u{2011}Day Growth Architecture Sprint",
                "On\u{2011}call Advisory (for founders/CMOs)",
            ]),
        }
    }
}

/// Placeholder legal notes linked from the footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Legal {
    pub privacy: String,
    pub terms: String,
}

impl Default for Legal {
    fn default() -> Self {
        Self {
            privacy: "This site sets no cookies and runs no analytics. Messages you send by \
                      email or WhatsApp are used only to reply to you."
                .to_string(),
            terms: "Content on this page is provided for information only and does not \
                    constitute an offer."
                .to_string(),
        }
    }
}
