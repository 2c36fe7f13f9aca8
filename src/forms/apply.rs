use serde::{Deserialize, Serialize};

use super::{compose_body, mailto_uri};
use crate::content::SCHOOL_EMAIL;

pub const APPLICATION_SUBJECT: &str = "New Student Application";

pub const GENDERS: [(&str, &str); 2] = [("male", "Male"), ("female", "Female")];
pub const GRADE_OPTIONS: [(&str, &str); 4] = [
    ("Nursery", "Nursery"),
    ("Kindergarten", "Kindergarten"),
    ("Primary", "Primary"),
    ("JHS", "JHS"),
];

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ApplyField {
    FullName,
    DateOfBirth,
    Gender,
    Grade,
    ParentName,
    ParentContact,
    Address,
}

impl ApplyField {
    /// Order of the lines in the application email.
    pub const ALL: [ApplyField; 7] = [
        Self::FullName,
        Self::DateOfBirth,
        Self::Gender,
        Self::Grade,
        Self::ParentName,
        Self::ParentContact,
        Self::Address,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::DateOfBirth => "Date of Birth",
            Self::Gender => "Gender",
            Self::Grade => "Applying for Grade",
            Self::ParentName => "Parent/Guardian Name",
            Self::ParentContact => "Parent Contact",
            Self::Address => "Residential Address",
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ApplyForm {
    pub full_name: String,
    pub dob: String,
    pub gender: String,
    pub grade: String,
    pub parent_name: String,
    pub parent_contact: String,
    pub address: String,
}

impl ApplyForm {
    pub fn get(&self, field: ApplyField) -> &str {
        match field {
            ApplyField::FullName => &self.full_name,
            ApplyField::DateOfBirth => &self.dob,
            ApplyField::Gender => &self.gender,
            ApplyField::Grade => &self.grade,
            ApplyField::ParentName => &self.parent_name,
            ApplyField::ParentContact => &self.parent_contact,
            ApplyField::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: ApplyField, value: String) {
        let slot = match field {
            ApplyField::FullName => &mut self.full_name,
            ApplyField::DateOfBirth => &mut self.dob,
            ApplyField::Gender => &mut self.gender,
            ApplyField::Grade => &mut self.grade,
            ApplyField::ParentName => &mut self.parent_name,
            ApplyField::ParentContact => &mut self.parent_contact,
            ApplyField::Address => &mut self.address,
        };
        *slot = value;
    }

    pub fn is_complete(&self) -> bool {
        ApplyField::ALL
            .iter()
            .all(|field| !self.get(*field).trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn body(&self) -> String {
        let lines: Vec<(&str, &str)> = ApplyField::ALL
            .iter()
            .map(|field| (field.label(), self.get(*field)))
            .collect();
        compose_body(&lines)
    }

    pub fn mailto(&self) -> String {
        mailto_uri(SCHOOL_EMAIL, APPLICATION_SUBJECT, &self.body())
    }

    /// Consumes a complete application: returns its mailto URI and resets every field.
    /// An incomplete form is left untouched.
    pub fn take_submission(&mut self) -> Option<String> {
        if !self.is_complete() {
            return None;
        }
        let uri = self.mailto();
        self.clear();
        Some(uri)
    }
}
