use crate::models::{CardVariant, ContentCard};

pub const SUBJECTS: [ContentCard; 8] = [
    ContentCard::new("Mathematics", "Building strong numerical reasoning, logical thinking, and problem-solving skills across all grade levels.", CardVariant::Gold),
    ContentCard::new("English Language", "Enhancing communication through reading, writing, grammar, and comprehension activities.", CardVariant::Gold),
    ContentCard::new("Science", "Encouraging curiosity through practical experiments, environmental awareness, and scientific exploration.", CardVariant::Gold),
    ContentCard::new("ICT (Information & Communication Technology)", "Preparing students for the digital world with coding, computing, and safe technology practices.", CardVariant::Gold),
    ContentCard::new("Social Studies", "Fostering global awareness, civic responsibility, and appreciation for culture and history.", CardVariant::Gold),
    ContentCard::new("Creative Arts", "Developing imagination and self-expression through art, music, and drama.", CardVariant::Gold),
    ContentCard::new("Religious & Moral Education", "Instilling values such as honesty, kindness, and respect for diversity.", CardVariant::Gold),
    ContentCard::new("Physical Education", "Promoting fitness, teamwork, and discipline through structured sports and activities.", CardVariant::Gold),
];
