//! Directory of certified e-waste recyclers around Hyderabad.

/// A listed recycling partner. `specializations` drives the tag filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecyclerRecord {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub website: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub certifications: &'static [&'static str],
    pub specializations: &'static [&'static str],
    pub distance_km: f32,
}

impl RecyclerRecord {
    /// `tel:` href with separators stripped.
    pub fn tel_href(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect::<String>();
        format!("tel:{digits}")
    }

    pub fn website_href(&self) -> String {
        format!("https://{}", self.website)
    }
}

pub const RECYCLERS: &[RecyclerRecord] = &[
    RecyclerRecord {
        id: 1,
        name: "GreenTech Recyclers",
        location: "Hitech City, Hyderabad",
        phone: "+91-9876543210",
        website: "www.greentech.in",
        rating: 4.8,
        reviews: 245,
        certifications: &["ISO 14001", "E-Waste Certified"],
        specializations: &["Electronics", "Appliances"],
        distance_km: 2.5,
    },
    RecyclerRecord {
        id: 2,
        name: "EcoRecycle Solutions",
        location: "Banjara Hills, Hyderabad",
        phone: "+91-9876543211",
        website: "www.ecorecycle.in",
        rating: 4.6,
        reviews: 189,
        certifications: &["ISO 14001", "SPCB Approved"],
        specializations: &["Computers", "Phones"],
        distance_km: 3.2,
    },
    RecyclerRecord {
        id: 3,
        name: "Circular Economy Hub",
        location: "Jubilee Hills, Hyderabad",
        phone: "+91-9876543212",
        website: "www.circulareconomy.in",
        rating: 4.9,
        reviews: 312,
        certifications: &["ISO 14001", "E-Waste Certified", "SPCB Approved"],
        specializations: &["All Electronics", "Batteries"],
        distance_km: 1.8,
    },
    RecyclerRecord {
        id: 4,
        name: "Deccan E-Cycle",
        location: "Secunderabad, Hyderabad",
        phone: "+91-9876543213",
        website: "www.deccanecycle.in",
        rating: 4.4,
        reviews: 97,
        certifications: &["SPCB Approved"],
        specializations: &["Phones", "Batteries"],
        distance_km: 6.4,
    },
    RecyclerRecord {
        id: 5,
        name: "Warangal Green Works",
        location: "Hanamkonda, Warangal",
        phone: "+91-9876543214",
        website: "www.warangalgreen.in",
        rating: 4.3,
        reviews: 64,
        certifications: &["E-Waste Certified"],
        specializations: &["Appliances", "Computers"],
        distance_km: 142.0,
    },
];
