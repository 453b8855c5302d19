//! Static menu catalog shared by the desktop dropdowns and the mobile accordion.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Solutions,
    WhoWeServe,
    Industries,
    Resources,
}

impl SectionKey {
    pub fn slug(self) -> &'static str {
        match self {
            SectionKey::Solutions => "solutions",
            SectionKey::WhoWeServe => "who-we-serve",
            SectionKey::Industries => "industries",
            SectionKey::Resources => "resources",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        SECTIONS
            .iter()
            .map(|section| section.key)
            .find(|key| key.slug() == slug)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuItem {
    pub label: &'static str,
    pub href: &'static str,
    pub description: Option<&'static str>,
    /// Identifier looked up in `nav_icons`.
    pub icon: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuSection {
    pub key: SectionKey,
    pub title: &'static str,
    pub items: &'static [MenuItem],
}

const fn item(
    label: &'static str,
    href: &'static str,
    description: &'static str,
    icon: Option<&'static str>,
) -> MenuItem {
    MenuItem {
        label,
        href,
        description: Some(description),
        icon,
    }
}

static SOLUTIONS: [MenuItem; 6] = [
    item("Demo", "/demo", "See our AI voice agents in action", Some("demo")),
    item("Integrations", "/integrations", "Connect with your favorite tools", Some("integrations")),
    item("Features", "/features", "Powerful capabilities that convert", Some("features")),
    item("How It Works", "/how-it-works", "Our proven 3-step process", Some("how-it-works")),
    item("Use Cases", "/use-cases", "Real-world applications", Some("use-cases")),
    item("Pricing", "/pricing", "Transparent, value-driven plans", Some("pricing")),
];

static WHO_WE_SERVE: [MenuItem; 6] = [
    item("Automotive", "/industries/automotive", "Service scheduling & sales", Some("automotive")),
    item("Dental", "/industries/dental", "Never miss a new patient call", Some("healthcare")),
    item("Fitness", "/industries/fitness", "Memberships, trials & class bookings", None),
    item("Martial Arts", "/industries/martial-arts", "Trial classes booked around the clock", None),
    item("Med Spa", "/industries/med-spa", "Consultations & treatment bookings", Some("healthcare")),
    item("All Industries", "/who-we-serve", "Every business we answer for", Some("use-cases")),
];

static INDUSTRIES: [MenuItem; 6] = [
    item("Healthcare", "/industries/healthcare", "Patient scheduling & triage", Some("healthcare")),
    item("Home Services", "/industries/home-services", "HVAC, plumbing & contractors", Some("home-services")),
    item("Real Estate", "/industries/real-estate", "Property inquiries 24/7", Some("real-estate")),
    item("Legal", "/industries/legal", "Client intake automation", Some("legal")),
    item("Automotive", "/industries/automotive", "Service scheduling & sales", Some("automotive")),
    item("Restaurants", "/industries/restaurants", "Reservations & takeout orders", Some("restaurants")),
];

static RESOURCES: [MenuItem; 4] = [
    item("Blog", "/blog", "Industry insights & trends", Some("blog")),
    item("Case Studies", "/case-studies", "Success stories from clients", Some("case-studies")),
    item("ROI Calculator", "/roi-calculator", "Calculate your revenue impact", Some("roi-calculator")),
    item("FAQ", "/faq", "Common questions answered", Some("faq")),
];

pub static SECTIONS: [MenuSection; 4] = [
    MenuSection {
        key: SectionKey::Solutions,
        title: "Solutions",
        items: &SOLUTIONS,
    },
    MenuSection {
        key: SectionKey::WhoWeServe,
        title: "Who We Serve",
        items: &WHO_WE_SERVE,
    },
    MenuSection {
        key: SectionKey::Industries,
        title: "Industries",
        items: &INDUSTRIES,
    },
    MenuSection {
        key: SectionKey::Resources,
        title: "Resources",
        items: &RESOURCES,
    },
];

/// Sections in display order.
pub fn sections() -> &'static [MenuSection] {
    &SECTIONS
}

pub fn section(key: SectionKey) -> &'static MenuSection {
    let index = match key {
        SectionKey::Solutions => 0,
        SectionKey::WhoWeServe => 1,
        SectionKey::Industries => 2,
        SectionKey::Resources => 3,
    };
    &SECTIONS[index]
}

/// First catalog entry pointing at `href`, together with its section.
pub fn find_item(href: &str) -> Option<(&'static MenuSection, &'static MenuItem)> {
    let href = normalize_path(href);
    SECTIONS.iter().find_map(|section| {
        section
            .items
            .iter()
            .find(|item| item.href == href)
            .map(|item| (section, item))
    })
}

/// Every destination in catalog order, without duplicates.
pub fn all_destinations() -> Vec<&'static str> {
    let mut destinations: Vec<&'static str> = Vec::new();
    for item in SECTIONS.iter().flat_map(|section| section.items.iter()) {
        if !destinations.contains(&item.href) {
            destinations.push(item.href);
        }
    }
    destinations
}

fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}
