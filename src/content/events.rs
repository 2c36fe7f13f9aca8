use crate::models::EventEntry;

pub const EVENTS: [EventEntry; 5] = [
    EventEntry {
        id: 1,
        title: "Annual Sports Day",
        date: "2026-02-15",
        description: "Join us for a day of excitement as our students compete in various sporting activities.",
        location: "School Grounds",
        image_url: Some("https://images.unsplash.com/photo-1609220136736-443140cffec6?w=600&h=400&fit=crop"),
    },
    EventEntry {
        id: 2,
        title: "Science Fair Exhibition",
        date: "2026-03-05",
        description: "Showcase of innovative projects by our young scientists demonstrating creativity and scientific thinking.",
        location: "School Auditorium",
        image_url: Some("https://images.unsplash.com/photo-1532094349884-543bc11b234d?w=600&h=400&fit=crop"),
    },
    EventEntry {
        id: 3,
        title: "Cultural Festival",
        date: "2026-04-10",
        description: "Celebrate diversity through music, dance, food, and cultural performances from around the world.",
        location: "School Grounds",
        image_url: Some("https://images.unsplash.com/photo-1613896527026-f195d5c818ed?w=600&h=400&fit=crop"),
    },
    EventEntry {
        id: 4,
        title: "Parent-Teacher Conference",
        date: "2026-04-20",
        description: "Meet with teachers to discuss student progress and academic development.",
        location: "School Campus",
        image_url: Some("https://images.unsplash.com/photo-1577896851231-70ef18881754?w=600&h=400&fit=crop"),
    },
    EventEntry {
        id: 5,
        title: "Graduation Ceremony",
        date: "2026-05-30",
        description: "Celebrating the achievements of our graduating class as they move forward to new horizons.",
        location: "School Auditorium",
        image_url: Some("https://images.unsplash.com/photo-1523050854058-8df90110c9f1?w=600&h=400&fit=crop"),
    },
];
