//! The signed-in user's profile summary, achievements, and settings.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileStat {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
    pub accent: &'static str,
}

pub const DISPLAY_NAME: &str = "User";
pub const MEMBER_SINCE: &str = "November 2024";
pub const OWN_RANK: u32 = 4;

pub const PROFILE_STATS: &[ProfileStat] = &[
    ProfileStat { label: "Total Eco Points", value: "1,225", note: "+150 this month", accent: "primary" },
    ProfileStat { label: "E-Waste Recycled", value: "245 kg", note: "+12 kg this month", accent: "secondary" },
    ProfileStat { label: "Pickups Completed", value: "12", note: "2 pending", accent: "accent" },
    ProfileStat { label: "Current Streak", value: "7 days", note: "Keep it up!", accent: "streak" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement { glyph: "🍃", title: "Eco Warrior", description: "Recycled 50 kg of e-waste", unlocked: true },
    Achievement { glyph: "🏆", title: "Top Contributor", description: "In top 10 recyclers", unlocked: true },
    Achievement { glyph: "🎖", title: "Certified Green", description: "Completed awareness course", unlocked: false },
    Achievement { glyph: "📈", title: "Rising Star", description: "Earned 1000+ eco points", unlocked: true },
];

/// A row of the neighbourhood ranking shown on the profile page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankingRow {
    pub rank: u32,
    pub name: &'static str,
    pub points: u32,
    pub weight_kg: u32,
    pub badge: &'static str,
    pub is_self: bool,
}

pub const RANKING: &[RankingRow] = &[
    RankingRow { rank: 1, name: "Rajesh Kumar", points: 5240, weight_kg: 245, badge: "🥇", is_self: false },
    RankingRow { rank: 2, name: "Priya Sharma", points: 4890, weight_kg: 220, badge: "🥈", is_self: false },
    RankingRow { rank: 3, name: "Amit Patel", points: 4650, weight_kg: 210, badge: "🥉", is_self: false },
    RankingRow { rank: OWN_RANK, name: "You", points: 1225, weight_kg: 55, badge: "⭐", is_self: true },
    RankingRow { rank: 5, name: "Neha Singh", points: 980, weight_kg: 45, badge: "🌟", is_self: false },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationSetting {
    pub label: &'static str,
    pub enabled_by_default: bool,
}

pub const NOTIFICATION_SETTINGS: &[NotificationSetting] = &[
    NotificationSetting { label: "Email Notifications", enabled_by_default: true },
    NotificationSetting { label: "Pickup Reminders", enabled_by_default: true },
    NotificationSetting { label: "Leaderboard Updates", enabled_by_default: false },
];
