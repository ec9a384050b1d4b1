use kitchenhub_core::models::kitchen::{Kitchen, KitchenType};

/// The kitchens available for rent. Loaded once and never mutated.
#[derive(Debug, Clone)]
pub struct KitchenCatalog {
    kitchens: Vec<Kitchen>,
}

impl KitchenCatalog {
    pub fn new(kitchens: Vec<Kitchen>) -> Self {
        Self { kitchens }
    }

    /// Catalog with the four listed New York kitchens.
    pub fn seeded() -> Self {
        Self::new(seed_kitchens())
    }

    pub fn all(&self) -> &[Kitchen] {
        &self.kitchens
    }

    pub fn get(&self, id: &str) -> Option<&Kitchen> {
        self.kitchens.iter().find(|kitchen| kitchen.id == id)
    }

    /// Kitchen name for display, or an empty string when the id is unknown.
    pub fn name_of(&self, id: &str) -> &str {
        self.get(id).map(|kitchen| kitchen.name.as_str()).unwrap_or("")
    }
}

impl Default for KitchenCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn seed_kitchens() -> Vec<Kitchen> {
    vec![
        Kitchen {
            id: "1".to_string(),
            name: "Urban Chef Kitchen".to_string(),
            description: None,
            location: "Downtown, New York".to_string(),
            kitchen_type: KitchenType::Commercial,
            capacity: 8,
            price_per_hour: 75,
            min_hours: 2,
            rating: 4.8,
            cleanliness_rating: 5.0,
            reviews: 42,
            amenities: strings(&[
                "Commercial Oven",
                "Stand Mixer",
                "Walk-in Refrigerator",
                "Gas Range",
                "Dishwasher",
                "Prep Tables",
                "Storage Space",
                "Wifi",
                "Utensils & Cookware",
            ]),
            images: strings(&[
                "https://images.pexels.com/photos/2062426/pexels-photo-2062426.jpeg",
                "https://images.pexels.com/photos/2724749/pexels-photo-2724749.jpeg",
                "https://images.pexels.com/photos/3926135/pexels-photo-3926135.jpeg",
                "https://images.pexels.com/photos/5824883/pexels-photo-5824883.jpeg",
                "https://images.pexels.com/photos/6958527/pexels-photo-6958527.jpeg",
            ]),
        },
        Kitchen {
            id: "2".to_string(),
            name: "Bakery Studio".to_string(),
            description: None,
            location: "Brooklyn, New York".to_string(),
            kitchen_type: KitchenType::Bakery,
            capacity: 4,
            price_per_hour: 60,
            min_hours: 3,
            rating: 4.6,
            cleanliness_rating: 4.8,
            reviews: 27,
            amenities: strings(&[
                "Convection Oven",
                "Proofing Cabinet",
                "Stand Mixer",
                "Cooling Racks",
                "Sheeter",
                "Refrigerator",
                "Baking Tools",
                "Dishwasher",
            ]),
            images: strings(&[
                "https://images.pexels.com/photos/3218467/pexels-photo-3218467.jpeg",
                "https://images.pexels.com/photos/2180875/pexels-photo-2180875.jpeg",
                "https://images.pexels.com/photos/5435029/pexels-photo-5435029.jpeg",
                "https://images.pexels.com/photos/6291267/pexels-photo-6291267.jpeg",
                "https://images.pexels.com/photos/4873669/pexels-photo-4873669.jpeg",
            ]),
        },
        Kitchen {
            id: "3".to_string(),
            name: "Culinary Workspace".to_string(),
            description: None,
            location: "Queens, New York".to_string(),
            kitchen_type: KitchenType::Shared,
            capacity: 12,
            price_per_hour: 85,
            min_hours: 2,
            rating: 4.5,
            cleanliness_rating: 4.6,
            reviews: 35,
            amenities: strings(&[
                "Multiple Cooking Stations",
                "Commercial Ovens",
                "Deep Fryers",
                "Prep Area",
                "Blast Chiller",
                "Storage Space",
                "Dish Sanitizer",
                "Loading Dock",
                "Dry Storage",
            ]),
            images: strings(&[
                "https://images.pexels.com/photos/2544829/pexels-photo-2544829.jpeg",
                "https://images.pexels.com/photos/2253643/pexels-photo-2253643.jpeg",
                "https://images.pexels.com/photos/6210967/pexels-photo-6210967.jpeg",
                "https://images.pexels.com/photos/6306421/pexels-photo-6306421.jpeg",
                "https://images.pexels.com/photos/6210966/pexels-photo-6210966.jpeg",
            ]),
        },
        Kitchen {
            id: "4".to_string(),
            name: "Gourmet Test Kitchen".to_string(),
            description: None,
            location: "Manhattan, New York".to_string(),
            kitchen_type: KitchenType::Restaurant,
            capacity: 6,
            price_per_hour: 95,
            min_hours: 4,
            rating: 4.9,
            cleanliness_rating: 5.0,
            reviews: 18,
            amenities: strings(&[
                "Professional Range",
                "Sous Vide Equipment",
                "Salamander",
                "Wine Refrigerator",
                "Specialty Cookware",
                "Plating Area",
                "Camera Setup",
                "Lighting Equipment",
            ]),
            images: strings(&[
                "https://images.pexels.com/photos/2454533/pexels-photo-2454533.jpeg",
                "https://images.pexels.com/photos/4252137/pexels-photo-4252137.jpeg",
                "https://images.pexels.com/photos/3992132/pexels-photo-3992132.jpeg",
                "https://images.pexels.com/photos/262978/pexels-photo-262978.jpeg",
                "https://images.pexels.com/photos/3434523/pexels-photo-3434523.jpeg",
            ]),
        },
    ]
}
