//! Top-contributor rankings per time window.
//!
//! Each window is its own fixed list; switching windows swaps lists and never
//! recomputes ranks.

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

/// Leaderboard time window selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Timeframe {
    Week,
    #[default]
    Month,
    All,
}

impl Timeframe {
    pub const ALL: [Self; 3] = [Self::Week, Self::Month, Self::All];

    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "This week",
            Self::Month => "This month",
            Self::All => "All Time",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: &'static str,
    pub points: u32,
    pub weight_kg: u32,
    pub streak: u32,
    pub initials: &'static str,
}

const fn entry(rank: u32, name: &'static str, points: u32, weight_kg: u32, streak: u32, initials: &'static str) -> LeaderboardEntry {
    LeaderboardEntry { rank, name, points, weight_kg, streak, initials }
}

const WEEK: &[LeaderboardEntry] = &[
    entry(1, "Eco Warrior", 2450, 125, 7, "EW"),
    entry(2, "Green Guardian", 2180, 110, 5, "GG"),
    entry(3, "Sustainability Hero", 1950, 98, 4, "SH"),
    entry(4, "Planet Protector", 1720, 86, 3, "PP"),
    entry(5, "Recycle Master", 1580, 79, 2, "RM"),
];

const MONTH: &[LeaderboardEntry] = &[
    entry(1, "Eco Warrior", 8450, 425, 30, "EW"),
    entry(2, "Green Guardian", 7680, 384, 28, "GG"),
    entry(3, "Sustainability Hero", 6950, 348, 25, "SH"),
    entry(4, "Planet Protector", 6220, 311, 20, "PP"),
    entry(5, "Recycle Master", 5580, 279, 18, "RM"),
];

const ALL_TIME: &[LeaderboardEntry] = &[
    entry(1, "Eco Warrior", 24500, 1225, 45, "EW"),
    entry(2, "Green Guardian", 21800, 1090, 42, "GG"),
    entry(3, "Sustainability Hero", 19500, 975, 38, "SH"),
    entry(4, "Planet Protector", 17200, 860, 35, "PP"),
    entry(5, "Recycle Master", 15800, 790, 32, "RM"),
];

/// The fixed ranking for `timeframe`.
pub fn entries(timeframe: Timeframe) -> &'static [LeaderboardEntry] {
    match timeframe {
        Timeframe::Week => WEEK,
        Timeframe::Month => MONTH,
        Timeframe::All => ALL_TIME,
    }
}

/// Podium decoration for the top three ranks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Podium {
    Gold,
    Silver,
    Bronze,
}

pub fn podium(rank: u32) -> Option<Podium> {
    match rank {
        1 => Some(Podium::Gold),
        2 => Some(Podium::Silver),
        3 => Some(Podium::Bronze),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AchievementTier {
    pub icon: &'static str,
    pub title: &'static str,
    pub threshold_kg: u32,
}

pub const ACHIEVEMENT_TIERS: &[AchievementTier] = &[
    AchievementTier { icon: "🌱", title: "Seedling", threshold_kg: 10 },
    AchievementTier { icon: "🌿", title: "Sprout", threshold_kg: 50 },
    AchievementTier { icon: "🌳", title: "Tree", threshold_kg: 100 },
    AchievementTier { icon: "🌲", title: "Forest", threshold_kg: 500 },
];
