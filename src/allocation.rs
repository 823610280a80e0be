//! Proportional split of an urgency score across relief sectors.

/// Fraction of the score assigned to each sector, in display order
pub const SECTOR_SHARES: [(&str, f64); 4] = [
    ("Food and Water", 0.4),
    ("Medical Aid", 0.3),
    ("Shelter Support", 0.2),
    ("Rehabilitation Programs", 0.1),
];

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    pub food_and_water: f64,
    pub medical_aid: f64,
    pub shelter_support: f64,
    pub rehabilitation_programs: f64,
}

impl Allocation {
    pub fn from_score(score: f64) -> Self {
        let [food, medical, shelter, rehab] = SECTOR_SHARES.map(|(_, share)| score * share);

        Self {
            food_and_water: food,
            medical_aid: medical,
            shelter_support: shelter,
            rehabilitation_programs: rehab,
        }
    }

    /// `(sector label, allocation score)` pairs in display order
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        let values = [
            self.food_and_water,
            self.medical_aid,
            self.shelter_support,
            self.rehabilitation_programs,
        ];

        let mut entries = SECTOR_SHARES;
        for (entry, value) in entries.iter_mut().zip(values) {
            entry.1 = value;
        }

        entries
    }

    pub fn total(&self) -> f64 {
        self.entries().iter().map(|(_, value)| value).sum()
    }
}

#[test]
fn test_allocation_split() {
    let allocation = Allocation::from_score(50.);

    assert_eq!(allocation.food_and_water, 20.);
    assert_eq!(allocation.medical_aid, 15.);
    assert_eq!(allocation.shelter_support, 10.);
    assert_eq!(allocation.rehabilitation_programs, 5.);
    assert_eq!(allocation.total(), 50.);
    assert_eq!(allocation.entries()[1], ("Medical Aid", 15.));
}

#[test]
fn test_shares_sum_to_one() {
    let total: f64 = SECTOR_SHARES.iter().map(|(_, share)| share).sum();

    assert!((total - 1.).abs() < 1e-12);
}
