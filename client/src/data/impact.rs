//! Dashboard headline stats and chart series.

/// One `{category, value}` sample handed to a chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Datum {
    pub category: &'static str,
    pub value: f64,
}

/// A named series of samples sharing one category axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub data: &'static [Datum],
}

const fn d(category: &'static str, value: f64) -> Datum {
    Datum { category, value }
}

pub const COLLECTED: Series = Series {
    name: "collected",
    color: "var(--color-primary)",
    data: &[d("Jan", 180.0), d("Feb", 220.0), d("Mar", 280.0), d("Apr", 320.0), d("May", 380.0), d("Jun", 420.0)],
};

pub const RECYCLED: Series = Series {
    name: "recycled",
    color: "var(--color-secondary)",
    data: &[d("Jan", 140.0), d("Feb", 170.0), d("Mar", 220.0), d("Apr", 260.0), d("May", 310.0), d("Jun", 350.0)],
};

pub const WASTE_TYPES: &[Datum] = &[d("Phones", 35.0), d("Laptops", 25.0), d("Appliances", 20.0), d("Accessories", 20.0)];

pub const WASTE_TYPE_COLORS: &[&str] = &["#10b981", "#059669", "#047857", "#065f46"];

pub const CO2_SAVED: Series = Series {
    name: "CO₂ Saved (kg)",
    color: "var(--color-primary)",
    data: &[d("Jan", 45.0), d("Feb", 55.0), d("Mar", 70.0), d("Apr", 80.0), d("May", 95.0), d("Jun", 105.0)],
};

pub const TREES: Series = Series {
    name: "Trees Equivalent",
    color: "var(--color-secondary)",
    data: &[d("Jan", 2.0), d("Feb", 3.0), d("Mar", 4.0), d("Apr", 4.0), d("May", 5.0), d("Jun", 5.0)],
};

/// Which glyph a stat card shows next to its title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatIcon {
    Check,
    Award,
    Alert,
    Zap,
}

/// A dashboard headline number. `prefix`/`suffix` wrap the animated value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeadlineStat {
    pub title: &'static str,
    pub icon: StatIcon,
    pub value: u64,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub note: &'static str,
}

pub const HEADLINE_STATS: &[HeadlineStat] = &[
    HeadlineStat {
        title: "Your Contributions",
        icon: StatIcon::Check,
        value: 245,
        prefix: "",
        suffix: " kg",
        note: "+12 kg this month",
    },
    HeadlineStat {
        title: "Eco Points Earned",
        icon: StatIcon::Award,
        value: 1225,
        prefix: "",
        suffix: "",
        note: "+150 this month",
    },
    HeadlineStat {
        title: "Pending Pickups",
        icon: StatIcon::Alert,
        value: 2,
        prefix: "",
        suffix: "",
        note: "Next pickup in 3 days",
    },
    HeadlineStat { title: "Rank", icon: StatIcon::Zap, value: 42, prefix: "#", suffix: "", note: "Top 5% contributor" },
];
