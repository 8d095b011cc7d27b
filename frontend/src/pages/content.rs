pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub struct Attraction {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub struct Experience {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Sections in page order, with the nav label that links to each.
pub const NAV_SECTIONS: [(&str, &str); 6] = [
    ("hero", "Home"),
    ("about", "About"),
    ("attractions", "Attractions"),
    ("experiences", "Experiences"),
    ("register", "Register"),
    ("contact", "Contact"),
];

pub const STATS: [Stat; 4] = [
    Stat { number: "13", label: "States", icon: "🏛️" },
    Stat { number: "878", label: "Islands", icon: "🏝️" },
    Stat { number: "130M+", label: "Years Old Rainforest", icon: "🌳" },
    Stat { number: "32M+", label: "Friendly People", icon: "👥" },
];

pub const ATTRACTIONS: [Attraction; 6] = [
    Attraction {
        title: "Petronas Twin Towers",
        description: "The iconic 88-story twin skyscrapers dominating Kuala Lumpur's skyline, offering breathtaking views and world-class shopping experiences.",
        image: "https://images.unsplash.com/photo-1596422846543-75c6fc197f07?w=800&q=80",
    },
    Attraction {
        title: "Langkawi Islands",
        description: "A tropical paradise with pristine beaches, crystal-clear waters, and lush rainforests. Perfect for relaxation and adventure.",
        image: "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=800&q=80",
    },
    Attraction {
        title: "Batu Caves",
        description: "A limestone hill with ancient caves and cave temples, featuring the iconic 140-foot golden statue of Lord Murugan and 272 colorful steps.",
        image: "https://images.unsplash.com/photo-1508062878650-88b52897f298?w=800&q=80",
    },
    Attraction {
        title: "George Town, Penang",
        description: "UNESCO World Heritage site known for its well-preserved colonial architecture, vibrant street art, and legendary street food scene.",
        image: "https://images.unsplash.com/photo-1605649487212-47bdab064df7?w=800&q=80",
    },
    Attraction {
        title: "Cameron Highlands",
        description: "Malaysia's largest hill station offering cool climate, sprawling tea plantations, strawberry farms, and stunning mountain scenery.",
        image: "https://images.unsplash.com/photo-1563789031959-4c02bcb41319?w=800&q=80",
    },
    Attraction {
        title: "Malacca City",
        description: "Historic city rich in cultural heritage, featuring Dutch colonial buildings, ancient temples, and a fascinating blend of Malay, Chinese, and European influences.",
        image: "https://images.unsplash.com/photo-1551918120-9739cb430c6d?w=800&q=80",
    },
];

pub const EXPERIENCES: [Experience; 6] = [
    Experience {
        icon: "🍜",
        title: "Culinary Paradise",
        description: "Savor the incredible fusion of Malay, Chinese, Indian, and Peranakan cuisines. From street food to fine dining, Malaysia is a food lover's dream destination.",
    },
    Experience {
        icon: "🏝️",
        title: "Tropical Islands",
        description: "Explore over 800 islands with pristine beaches, world-class diving spots, and luxurious resorts. From Langkawi to Perhentian Islands, paradise awaits.",
    },
    Experience {
        icon: "🌳",
        title: "Rainforest Adventures",
        description: "Trek through some of the world's oldest rainforests, home to orangutans, tigers, and exotic wildlife. Experience nature at its most magnificent.",
    },
    Experience {
        icon: "🕌",
        title: "Cultural Mosaic",
        description: "Immerse yourself in a harmonious blend of cultures. Visit mosques, temples, churches, and experience festivals that celebrate Malaysia's diversity.",
    },
    Experience {
        icon: "🏙️",
        title: "Modern Marvels",
        description: "Marvel at futuristic architecture in Kuala Lumpur, shop in mega malls, and experience the perfect blend of tradition and modernity.",
    },
    Experience {
        icon: "🎭",
        title: "Arts & Heritage",
        description: "Discover traditional crafts, vibrant street art, museums, and cultural performances that showcase Malaysia's rich artistic heritage.",
    },
];
