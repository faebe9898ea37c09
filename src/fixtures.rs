//! Spring term sample data shared by unit tests.

use chrono::{NaiveTime, Weekday};

use crate::models::{
    AcademicLevel, Catalog, ContactInfo, Offering, Program, SessionType, Student, StudentStatus,
    Subject,
};

pub(crate) fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub(crate) fn programs() -> Vec<Program> {
    vec![
        Program::new("cs", 132)
            .with_name("Computer Science")
            .with_duration("4 Years"),
        Program::new("eng", 160)
            .with_name("Engineering")
            .with_duration("5 Years"),
    ]
}

/// cs101 ← cs102 ← cs201 chain, plus a standalone math101.
pub(crate) fn subjects() -> Vec<Subject> {
    vec![
        Subject::new("cs101", "cs", 3)
            .with_code("CS101")
            .with_name("Intro to Programming"),
        Subject::new("cs102", "cs", 3)
            .with_code("CS102")
            .with_name("Data Structures")
            .with_prerequisite("cs101"),
        Subject::new("cs201", "cs", 3)
            .with_code("CS201")
            .with_name("Database Systems")
            .with_prerequisite("cs102"),
        Subject::new("math101", "eng", 4)
            .with_code("MTH101")
            .with_name("Calculus I"),
    ]
}

pub(crate) fn offerings() -> Vec<Offering> {
    vec![
        Offering::new("1", "cs101", SessionType::Lecture, Weekday::Mon, at(9, 0))
            .with_code("L-101")
            .with_instructor("Dr. Sarah Ahmed")
            .with_room("Hall A")
            .with_capacity(50)
            .with_enrolled(45),
        Offering::new("2", "cs102", SessionType::Tutorial, Weekday::Mon, at(11, 0))
            .with_code("T-102")
            .with_instructor("Eng. Mona Ali")
            .with_room("Lab 2")
            .with_capacity(25)
            .with_enrolled(20),
        Offering::new("3", "cs201", SessionType::Lab, Weekday::Wed, at(9, 0))
            .with_code("LB-201")
            .with_instructor("Eng. Mona Ali")
            .with_room("Lab 4")
            .with_capacity(20)
            .with_enrolled(15),
        Offering::new("4", "math101", SessionType::Lecture, Weekday::Tue, at(10, 0))
            .with_code("L-M1")
            .with_instructor("Dr. Zaki")
            .with_room("Hall C")
            .with_capacity(60)
            .with_enrolled(58),
    ]
}

pub(crate) fn catalog() -> Catalog {
    Catalog::new(programs(), subjects(), offerings()).unwrap()
}

/// Enrolled in cs101 and cs102.
pub(crate) fn omar() -> Student {
    Student::new("2024001", "cs")
        .with_name("Omar Khaled")
        .with_gpa(3.82)
        .with_fees_paid(true)
        .with_contact(
            ContactInfo::phone("01012345678")
                .with_email("omar.k@univ.edu")
                .with_address("Cairo, Egypt"),
        )
        .with_enrolled("cs101")
        .with_enrolled("cs102")
        .with_rank(12)
}

/// Graduated, nothing enrolled.
pub(crate) fn laila() -> Student {
    Student::new("2024002", "cs")
        .with_name("Laila Hassan")
        .with_level(AcademicLevel::Alumni)
        .with_status(StudentStatus::Graduated)
        .with_gpa(3.5)
        .with_fees_paid(true)
        .with_contact(ContactInfo::phone("01212345678"))
}

/// On probation with unpaid fees.
pub(crate) fn ziad() -> Student {
    Student::new("2024003", "eng")
        .with_name("Ziad Amer")
        .with_status(StudentStatus::Probation)
        .with_gpa(1.9)
        .with_fees_paid(false)
        .with_contact(ContactInfo::phone("01199887766"))
        .with_enrolled("math101")
}

pub(crate) fn students() -> Vec<Student> {
    vec![omar(), laila(), ziad()]
}
