use crate::models::{Feature, Program, Showcase, Stat, Testimonial};

/// Backgrounds cycled by the hero slideshow.
pub const HERO_BACKGROUNDS: [&str; 5] = [
    "https://images.unsplash.com/photo-1523050854058-8df90110c9f1?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1427504494785-3a9ca7044f45?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1509062522246-3755977927d7?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1577896851231-70ef18881754?w=1920&h=1080&fit=crop",
];

pub const HERO_PHOTOS: [Showcase; 3] = [
    Showcase { src: "https://images.unsplash.com/photo-1613896527026-f195d5c818ed?w=400&h=300&fit=crop", alt: "African students learning", caption: "" },
    Showcase { src: "https://images.unsplash.com/photo-1594608661623-aa0bd3a69799?w=350&h=250&fit=crop", alt: "Classroom", caption: "" },
    Showcase { src: "https://images.unsplash.com/photo-1588072432836-e10032774350?w=300&h=200&fit=crop", alt: "Happy African students", caption: "" },
];

pub const STATS: [Stat; 4] = [
    Stat { number: "500+", label: "Students" },
    Stat { number: "35+", label: "Teachers" },
    Stat { number: "20+", label: "Years" },
    Stat { number: "98%", label: "Success Rate" },
];

pub const FACILITIES: [Feature; 4] = [
    Feature { icon: "📚", title: "Modern Library", description: "State-of-the-art library with thousands of books and digital resources" },
    Feature { icon: "💻", title: "Computer Labs", description: "Fully equipped computer labs with the latest technology" },
    Feature { icon: "🎨", title: "Creative Arts", description: "Dedicated spaces for music, art, and creative expression" },
    Feature { icon: "⚽", title: "Sports Facilities", description: "Playgrounds, courts, and fields for physical development" },
];

pub const CAMPUS_PREVIEW: [Showcase; 4] = [
    Showcase { src: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=600&h=400&fit=crop", alt: "Library", caption: "📚 Our Library" },
    Showcase { src: "https://images.unsplash.com/photo-1584697964358-3e14ca57658b?w=600&h=400&fit=crop", alt: "African students at computer", caption: "💻 Computer Lab" },
    Showcase { src: "https://images.unsplash.com/photo-1609220136736-443140cffec6?w=600&h=400&fit=crop", alt: "African children playing", caption: "🎢 Playground" },
    Showcase { src: "https://images.unsplash.com/photo-1532094349884-543bc11b234d?w=600&h=400&fit=crop", alt: "Science Lab", caption: "🔬 Science Lab" },
];

pub const ABOUT_PHOTO: &str = "https://images.unsplash.com/photo-1577896851231-70ef18881754?w=500&h=600&fit=crop";

pub const ABOUT_SUMMARY: &str = "Delight International School is committed to nurturing young minds through holistic education that combines academic excellence with moral and social development.";

pub const ABOUT_CHECKLIST: [&str; 4] = [
    "Experienced and caring teachers",
    "Small class sizes for personalized attention",
    "Modern facilities and resources",
    "Safe and nurturing environment",
];

pub const PROGRAMS: [Program; 3] = [
    Program {
        title: "Early Years",
        ages: "Ages 2-5",
        summary: "Play-based learning that nurtures curiosity and builds strong foundations.",
        image_url: Some("https://images.unsplash.com/photo-1597892657493-6847b9640bac?w=400&h=250&fit=crop"),
    },
    Program {
        title: "Primary School",
        ages: "Ages 6-11",
        summary: "Comprehensive curriculum developing literacy, numeracy, and critical thinking.",
        image_url: Some("https://images.unsplash.com/photo-1613896527026-f195d5c818ed?w=400&h=250&fit=crop"),
    },
    Program {
        title: "Junior High School",
        ages: "Ages 12-15",
        summary: "Preparing students for higher education with advanced academics.",
        image_url: Some("https://images.unsplash.com/photo-1588072432836-e10032774350?w=400&h=250&fit=crop"),
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial { quote: "Delight International School has transformed my child's approach to learning!", author: "Mrs. Adwoa Mensah", role: "Parent" },
    Testimonial { quote: "The best decision we made was enrolling our kids here. Excellent environment!", author: "Mr. Kwame Asante", role: "Parent" },
    Testimonial { quote: "I love my school! The teachers make learning fun and I've made so many friends.", author: "Ama, Age 10", role: "Student" },
];
