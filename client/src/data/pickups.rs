//! Pickup history and upcoming collections for the signed-in user.

#[cfg(test)]
#[path = "pickups_test.rs"]
mod pickups_test;

/// Lifecycle marker for a pickup record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickupStatus {
    Scheduled,
    Completed,
}

impl PickupStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Scheduled => "pickup-status--scheduled",
            Self::Completed => "pickup-status--completed",
        }
    }
}

/// A single e-waste collection event.
///
/// Scheduled pickups carry a zero weight and zero points until the collector
/// records the haul.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickupRecord {
    pub id: u32,
    pub date: &'static str,
    pub time_window: &'static str,
    pub location: &'static str,
    pub status: PickupStatus,
    pub items: &'static [&'static str],
    pub weight_kg: f64,
    pub points: u32,
}

pub const PICKUPS: &[PickupRecord] = &[
    PickupRecord {
        id: 1,
        date: "2024-12-05",
        time_window: "9:00 AM - 11:00 AM",
        location: "Plot 42, Madhapur, Hyderabad",
        status: PickupStatus::Scheduled,
        items: &["Old Laptop", "Chargers"],
        weight_kg: 0.0,
        points: 0,
    },
    PickupRecord {
        id: 2,
        date: "2024-12-12",
        time_window: "2:00 PM - 4:00 PM",
        location: "Flat 7B, Kondapur, Hyderabad",
        status: PickupStatus::Scheduled,
        items: &["CRT Monitor", "Keyboard", "Mouse"],
        weight_kg: 0.0,
        points: 0,
    },
    PickupRecord {
        id: 3,
        date: "2024-11-18",
        time_window: "11:00 AM - 1:00 PM",
        location: "Plot 42, Madhapur, Hyderabad",
        status: PickupStatus::Completed,
        items: &["Mobile Phones", "Tablet", "Earphones"],
        weight_kg: 4.5,
        points: 45,
    },
    PickupRecord {
        id: 4,
        date: "2024-11-02",
        time_window: "4:00 PM - 6:00 PM",
        location: "Office 301, Hitech City, Hyderabad",
        status: PickupStatus::Completed,
        items: &["Desktop CPU", "UPS Battery"],
        weight_kg: 18.0,
        points: 180,
    },
    PickupRecord {
        id: 5,
        date: "2024-10-21",
        time_window: "9:00 AM - 11:00 AM",
        location: "Flat 7B, Kondapur, Hyderabad",
        status: PickupStatus::Completed,
        items: &["Microwave Oven", "Printer"],
        weight_kg: 32.5,
        points: 325,
    },
];

/// Aggregate weight and points across completed pickups.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PickupTotals {
    pub completed: usize,
    pub scheduled: usize,
    pub weight_kg: f64,
    pub points: u32,
}

/// Pickups still waiting for a collector, in source order.
pub fn scheduled(records: &[PickupRecord]) -> Vec<&PickupRecord> {
    with_status(records, PickupStatus::Scheduled)
}

/// Finished pickups, in source order.
pub fn completed(records: &[PickupRecord]) -> Vec<&PickupRecord> {
    with_status(records, PickupStatus::Completed)
}

pub fn totals(records: &[PickupRecord]) -> PickupTotals {
    records.iter().fold(PickupTotals::default(), |mut acc, record| {
        match record.status {
            PickupStatus::Scheduled => acc.scheduled += 1,
            PickupStatus::Completed => {
                acc.completed += 1;
                acc.weight_kg += record.weight_kg;
                acc.points += record.points;
            }
        }
        acc
    })
}

fn with_status(records: &[PickupRecord], status: PickupStatus) -> Vec<&PickupRecord> {
    records.iter().filter(|r| r.status == status).collect()
}
