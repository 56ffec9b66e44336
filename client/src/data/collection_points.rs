//! Collection points plotted on the regional map, in percent coordinates.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollectionPoint {
    pub id: u32,
    pub name: &'static str,
    pub x_pct: f64,
    pub y_pct: f64,
    pub tons: u32,
}

pub const COLLECTION_POINTS: &[CollectionPoint] = &[
    CollectionPoint { id: 1, name: "Hyderabad Central", x_pct: 45.0, y_pct: 50.0, tons: 450 },
    CollectionPoint { id: 2, name: "Secunderabad", x_pct: 52.0, y_pct: 48.0, tons: 320 },
    CollectionPoint { id: 3, name: "Kukatpally", x_pct: 40.0, y_pct: 45.0, tons: 280 },
    CollectionPoint { id: 4, name: "Gachibowli", x_pct: 48.0, y_pct: 55.0, tons: 210 },
    CollectionPoint { id: 5, name: "Miyapur", x_pct: 35.0, y_pct: 42.0, tons: 190 },
    CollectionPoint { id: 6, name: "Warangal", x_pct: 25.0, y_pct: 35.0, tons: 280 },
    CollectionPoint { id: 7, name: "Vijayawada", x_pct: 60.0, y_pct: 65.0, tons: 320 },
];

/// Simplified state outline in the same 0..100 viewbox.
pub const REGION_OUTLINE: &str = "M 20 30 L 70 25 L 75 50 L 70 75 L 30 80 L 15 60 Z";
