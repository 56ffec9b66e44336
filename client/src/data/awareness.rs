//! Education content: facts, articles, and official policy documents.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fact {
    pub stat: &'static str,
    pub description: &'static str,
}

pub const FACTS: &[Fact] = &[
    Fact { stat: "57M Tons", description: "Global e-waste generated annually" },
    Fact { stat: "20%", description: "E-waste formally recycled in India" },
    Fact { stat: "40K Tons", description: "E-waste generated in Greater Hyderabad yearly" },
    Fact { stat: "78%", description: "Citizens aware of e-waste hazards" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Article,
    Video,
    Warning,
    Tip,
}

impl ResourceKind {
    /// Glyph shown in the resource badge.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Article => "📖",
            Self::Video => "🎬",
            Self::Warning => "⚠",
            Self::Tip => "💡",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resource {
    pub id: u32,
    pub kind: ResourceKind,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const RESOURCES: &[Resource] = &[
    Resource {
        id: 1,
        kind: ResourceKind::Article,
        title: "E-Waste: A Growing Environmental Crisis",
        description: "Learn about the environmental and health effects of electronic waste.",
        category: "Education",
    },
    Resource {
        id: 2,
        kind: ResourceKind::Video,
        title: "Proper E-Waste Disposal Methods",
        description: "A step-by-step video guide to responsibly recycle your old electronics.",
        category: "Tutorial",
    },
    Resource {
        id: 3,
        kind: ResourceKind::Warning,
        title: "Toxic Components in Electronics",
        description: "Understand the hazardous materials present in common gadgets.",
        category: "Health & Safety",
    },
    Resource {
        id: 4,
        kind: ResourceKind::Tip,
        title: "Building a Circular Economy",
        description: "See how e-waste recycling contributes to sustainable growth.",
        category: "Sustainability",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolicyDocument {
    pub title: &'static str,
    pub href: &'static str,
}

pub const POLICY_DOCUMENTS: &[PolicyDocument] = &[
    PolicyDocument { title: "Telangana E-Waste Management Policy 2017", href: "#" },
    PolicyDocument { title: "E-Waste Annual Report 2018-19", href: "#" },
    PolicyDocument { title: "HYSEA E-Waste Campaign Guidelines", href: "#" },
    PolicyDocument { title: "SPCB E-Waste Regulations 2022", href: "#" },
];
