use crate::models::{CardVariant, ContentCard, Program};

pub const STEPS: [ContentCard; 4] = [
    ContentCard::new("Step 1: Inquiry", "Contact our admissions office or visit the school to learn more about our programs, fees, and enrollment details.", CardVariant::Blue),
    ContentCard::new("Step 2: Application", "Complete and submit the admission form along with the required documents listed below.", CardVariant::Blue),
    ContentCard::new("Step 3: Entrance Assessment", "Prospective students may be invited for an assessment or interview based on their grade level.", CardVariant::Blue),
    ContentCard::new("Step 4: Admission Decision", "Once the evaluation is complete, successful applicants will receive an admission offer and details for registration.", CardVariant::Blue),
];

pub const ENTRY_PROGRAMS: [Program; 3] = [
    Program { title: "Early Years", ages: "Ages 2–5", summary: "Play-based learning", image_url: None },
    Program { title: "Primary", ages: "Ages 6–11", summary: "Literacy & numeracy foundations", image_url: None },
    Program { title: "Junior High", ages: "Ages 12–15", summary: "Critical thinking & pathways", image_url: None },
];

pub const REQUIREMENTS: [&str; 5] = [
    "Copy of birth certificate",
    "One recent passport-size photograph",
    "Previous school report (if applicable)",
    "Ghana Card Number of parents",
    "Residential and digital Address",
];
