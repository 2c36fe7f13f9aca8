use crate::models::{CardVariant, ContentCard};

pub const WHO_WE_ARE: &str = "Delight International School is a modern learning institution dedicated to providing holistic education that nurtures the mind, body, and spirit. We believe that every child is unique and capable of achieving greatness when guided with care, patience, and purpose.";

pub const MISSION: &str = "To provide holistic education (academic, social, and spiritual) to underprivileged members of society, empowering them to realize their full potential, become positive role models, and uplift others along the way.";

pub const VISION: &str = "To utilize available resources to achieve our mission while expanding our infrastructure to cover all levels of education (basic, junior high, senior high, and tertiary) by the grace of God, in pursuit of this vision.";

pub const CORE_VALUES: [ContentCard; 6] = [
    ContentCard::new("Excellence", "We pursue the highest standards in academics and character, inspiring students to be their best selves.", CardVariant::Wine),
    ContentCard::new("Discipline", "We instill self-control and respect, ensuring a learning environment that promotes focus and growth.", CardVariant::Wine),
    ContentCard::new("Integrity", "Honesty and accountability are at the heart of everything we do.", CardVariant::Wine),
    ContentCard::new("Creativity", "We encourage innovative thinking and problem-solving in all aspects of learning.", CardVariant::Wine),
    ContentCard::new("Teamwork", "We believe in collaboration and community, nurturing unity among students, staff, and families.", CardVariant::Wine),
    ContentCard::new("Leadership", "Developing confidence and responsibility in students by encouraging initiative, decision-making and positive influence, preparing them to lead with integrity in school and in the wider community.", CardVariant::Wine),
];

pub const LEARNING_AREAS: [ContentCard; 9] = [
    ContentCard::new("Mathematics", "Building strong numerical reasoning, logical thinking, and problem-solving skills across all grade levels.", CardVariant::Wine),
    ContentCard::new("English Language", "Enhancing communication through reading, writing, grammar, and comprehension activities.", CardVariant::Wine),
    ContentCard::new("Science", "Encouraging curiosity through practical experiments, environmental awareness, and scientific exploration.", CardVariant::Wine),
    ContentCard::new("ICT (Information & Communication Technology)", "Preparing students for the digital world with coding, computing, and safe technology practices.", CardVariant::Wine),
    ContentCard::new("Social Studies", "Fostering global awareness, civic responsibility, and appreciation for culture and history.", CardVariant::Wine),
    ContentCard::new("Creative Arts", "Developing imagination and self-expression through art, music, and drama.", CardVariant::Wine),
    ContentCard::new("Music", "Developing musical skills, rhythm, and musical appreciation through singing, instrumental practice, listening activities, and performance.", CardVariant::Wine),
    ContentCard::new("Religious & Moral Education", "Instilling values such as honesty, kindness, and respect for diversity.", CardVariant::Wine),
    ContentCard::new("Physical Education", "Promoting fitness, teamwork, and discipline through structured sports and activities.", CardVariant::Wine),
];
