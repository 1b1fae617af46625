//! Demo directory loaded at startup.

use chrono::{DateTime, NaiveDate, Utc};
use newwork_core::{AppError, AppResult};
use newwork_domain::{
    AbsenceRequest, AbsenceStatus, EmergencyContact, EmployeeProfile, Feedback, Role,
    WorkHistoryEntry,
};

/// Seeded employees and feedback.
pub struct DevDirectory {
    pub profiles: Vec<EmployeeProfile>,
    pub feedback: Vec<Feedback>,
}

pub fn directory() -> AppResult<DevDirectory> {
    Ok(DevDirectory {
        profiles: profiles()?,
        feedback: feedback()?,
    })
}

fn profiles() -> AppResult<Vec<EmployeeProfile>> {
    Ok(vec![
        EmployeeProfile {
            id: "1".to_owned(),
            first_name: "Sarah".to_owned(),
            last_name: "Johnson".to_owned(),
            email: "manager@newwork.com".to_owned(),
            role: Role::Manager,
            position: "Senior HR Manager".to_owned(),
            department: "Human Resources".to_owned(),
            profile_image: None,
            bio: "Experienced HR professional with 8+ years in talent management and employee development.".to_owned(),
            skills: strings(&[
                "Talent Management",
                "Employee Relations",
                "HR Strategy",
                "Performance Management",
            ]),
            phone: "+1-555-0123".to_owned(),
            salary: 85_000,
            start_date: date("2020-03-15")?,
            employee_number: "EMP001".to_owned(),
            address: "123 Business Ave, Tech City, TC 12345".to_owned(),
            emergency_contact: contact("David Johnson", "+1-555-0124", "Spouse"),
            work_history: Vec::new(),
            absence_requests: Vec::new(),
            performance_rating: Some(4.5),
            certifications: strings(&["HR specialist"]),
        },
        EmployeeProfile {
            id: "2".to_owned(),
            first_name: "Michael".to_owned(),
            last_name: "Chen".to_owned(),
            email: "employee@newwork.com".to_owned(),
            role: Role::Employee,
            position: "Software Engineer".to_owned(),
            department: "Engineering".to_owned(),
            profile_image: None,
            bio: "Full-stack developer passionate about clean code and user experience.".to_owned(),
            skills: strings(&["React", "Node.js", "TypeScript", "Python", "AWS"]),
            phone: "+1-555-0125".to_owned(),
            salary: 75_000,
            start_date: date("2021-06-10")?,
            employee_number: "EMP002".to_owned(),
            address: "456 Tech Street, Innovation City, IC 67890".to_owned(),
            emergency_contact: contact("Lisa Chen", "+1-555-0126", "Sister"),
            work_history: history(&[
                ("Google", "Senior Engineer", "2015-2018"),
                ("Microsoft", "Software Engineer", "2012-2015"),
            ]),
            absence_requests: vec![
                absence(
                    "1",
                    ("2024-02-15", "2024-02-16"),
                    "Personal day",
                    AbsenceStatus::Approved,
                    ("2024-01-20T09:00:00Z", "2024-01-21T14:30:00Z"),
                )?,
                absence(
                    "2",
                    ("2024-03-10", "2024-03-12"),
                    "Vacation - Family trip",
                    AbsenceStatus::Pending,
                    ("2024-02-15T10:30:00Z", "2024-02-15T10:30:00Z"),
                )?,
            ],
            performance_rating: None,
            certifications: Vec::new(),
        },
        EmployeeProfile {
            id: "3".to_owned(),
            first_name: "Emily".to_owned(),
            last_name: "Davis".to_owned(),
            email: "coworker@newwork.com".to_owned(),
            role: Role::Coworker,
            position: "Product Designer".to_owned(),
            department: "Design".to_owned(),
            profile_image: None,
            bio: "Creative designer focused on user-centered design and accessibility.".to_owned(),
            skills: strings(&[
                "UI/UX Design",
                "Figma",
                "Prototyping",
                "User Research",
                "Accessibility",
            ]),
            phone: "+1-555-0127".to_owned(),
            salary: 70_000,
            start_date: date("2022-01-20")?,
            employee_number: "EMP003".to_owned(),
            address: "789 Design Lane, Creative City, CC 11111".to_owned(),
            emergency_contact: contact("Robert Davis", "+1-555-0128", "Father"),
            work_history: Vec::new(),
            absence_requests: vec![absence(
                "3",
                ("2024-02-20", "2024-02-20"),
                "Sick leave",
                AbsenceStatus::Approved,
                ("2024-02-19T08:00:00Z", "2024-02-19T09:15:00Z"),
            )?],
            performance_rating: None,
            certifications: Vec::new(),
        },
        EmployeeProfile {
            id: "4".to_owned(),
            first_name: "John".to_owned(),
            last_name: "Smith".to_owned(),
            email: "john.smith@newwork.com".to_owned(),
            role: Role::Manager,
            position: "Engineering Manager".to_owned(),
            department: "Engineering".to_owned(),
            profile_image: None,
            bio: "Experienced engineering leader with 10+ years managing high-performing development teams.".to_owned(),
            skills: strings(&[
                "Team Leadership",
                "Agile Management",
                "System Architecture",
                "Python",
                "AWS",
            ]),
            phone: "+1-555-0101".to_owned(),
            salary: 120_000,
            start_date: date("2019-01-15")?,
            employee_number: "EMP004".to_owned(),
            address: "123 Tech Drive, Silicon Valley, CA 94025".to_owned(),
            emergency_contact: contact("Jennifer Smith", "+1-555-0102", "Spouse"),
            work_history: history(&[
                ("Google", "Senior Engineer", "2015-2018"),
                ("Microsoft", "Software Engineer", "2012-2015"),
            ]),
            absence_requests: Vec::new(),
            performance_rating: Some(4.8),
            certifications: strings(&["AWS Solutions Architect", "PMP", "CSM"]),
        },
        EmployeeProfile {
            id: "5".to_owned(),
            first_name: "Lisa".to_owned(),
            last_name: "Rodriguez".to_owned(),
            email: "lisa.rodriguez@newwork.com".to_owned(),
            role: Role::Manager,
            position: "HR Manager".to_owned(),
            department: "Human Resources".to_owned(),
            profile_image: None,
            bio: "Strategic HR leader with expertise in talent acquisition and employee development.".to_owned(),
            skills: strings(&[
                "Talent Management",
                "Employee Relations",
                "HR Strategy",
                "Performance Management",
            ]),
            phone: "+1-555-0107".to_owned(),
            salary: 110_000,
            start_date: date("2018-09-01")?,
            employee_number: "EMP005".to_owned(),
            address: "321 HR Avenue, Business District, CA 90212".to_owned(),
            emergency_contact: contact("Carlos Rodriguez", "+1-555-0108", "Spouse"),
            work_history: history(&[("Salesforce", "HR Specialist", "2016-2018")]),
            absence_requests: vec![absence(
                "4",
                ("2024-04-01", "2024-04-05"),
                "Vacation - Spring break",
                AbsenceStatus::Pending,
                ("2024-02-01T11:00:00Z", "2024-02-01T11:00:00Z"),
            )?],
            performance_rating: Some(4.7),
            certifications: strings(&["SHRM-CP", "PHR"]),
        },
        EmployeeProfile {
            id: "6".to_owned(),
            first_name: "David".to_owned(),
            last_name: "Kim".to_owned(),
            email: "david.kim@newwork.com".to_owned(),
            role: Role::Employee,
            position: "Sales Representative".to_owned(),
            department: "Sales".to_owned(),
            profile_image: None,
            bio: "Results-driven sales professional with a track record of exceeding targets.".to_owned(),
            skills: strings(&[
                "B2B Sales",
                "CRM Systems",
                "Negotiation",
                "Client Relations",
                "Sales Strategy",
            ]),
            phone: "+1-555-0109".to_owned(),
            salary: 75_000,
            start_date: date("2022-01-15")?,
            employee_number: "EMP006".to_owned(),
            address: "654 Sales Street, Commerce City, CA 90213".to_owned(),
            emergency_contact: contact("Grace Kim", "+1-555-0110", "Spouse"),
            work_history: history(&[("Oracle", "Account Executive", "2020-2022")]),
            absence_requests: vec![absence(
                "5",
                ("2024-05-15", "2024-05-17"),
                "Vacation - Long weekend trip",
                AbsenceStatus::Pending,
                ("2024-03-01T14:20:00Z", "2024-03-01T14:20:00Z"),
            )?],
            performance_rating: Some(4.3),
            certifications: strings(&["Salesforce Sales", "HubSpot Sales"]),
        },
        EmployeeProfile {
            id: "7".to_owned(),
            first_name: "Emma".to_owned(),
            last_name: "Thompson".to_owned(),
            email: "emma.thompson@newwork.com".to_owned(),
            role: Role::Employee,
            position: "Marketing Specialist".to_owned(),
            department: "Marketing".to_owned(),
            profile_image: None,
            bio: "Creative marketer with expertise in digital campaigns and brand development.".to_owned(),
            skills: strings(&[
                "Digital Marketing",
                "Social Media",
                "Content Creation",
                "Analytics",
                "Brand Strategy",
            ]),
            phone: "+1-555-0111".to_owned(),
            salary: 70_000,
            start_date: date("2022-03-01")?,
            employee_number: "EMP007".to_owned(),
            address: "987 Marketing Blvd, Creative District, CA 90214".to_owned(),
            emergency_contact: contact("James Thompson", "+1-555-0112", "Spouse"),
            work_history: history(&[("Meta", "Marketing Coordinator", "2020-2022")]),
            absence_requests: vec![
                absence(
                    "6",
                    ("2024-04-20", "2024-04-20"),
                    "Sick leave - Doctor appointment",
                    AbsenceStatus::Approved,
                    ("2024-04-19T08:30:00Z", "2024-04-19T10:15:00Z"),
                )?,
                absence(
                    "7",
                    ("2024-06-10", "2024-06-14"),
                    "Vacation - Summer break",
                    AbsenceStatus::Pending,
                    ("2024-02-28T16:45:00Z", "2024-02-28T16:45:00Z"),
                )?,
            ],
            performance_rating: Some(4.2),
            certifications: strings(&["Google Ads", "Facebook Blueprint", "HubSpot Marketing"]),
        },
        EmployeeProfile {
            id: "8".to_owned(),
            first_name: "Alex".to_owned(),
            last_name: "Patel".to_owned(),
            email: "alex.patel@newwork.com".to_owned(),
            role: Role::Employee,
            position: "Junior Developer".to_owned(),
            department: "Engineering".to_owned(),
            profile_image: None,
            bio: "Eager junior developer with strong foundation in modern web technologies.".to_owned(),
            skills: strings(&["JavaScript", "React", "HTML/CSS", "Git", "REST APIs"]),
            phone: "+1-555-0113".to_owned(),
            salary: 65_000,
            start_date: date("2023-06-01")?,
            employee_number: "EMP008".to_owned(),
            address: "147 Dev Lane, Tech Hub, CA 90215".to_owned(),
            emergency_contact: contact("Priya Patel", "+1-555-0114", "Sister"),
            work_history: Vec::new(),
            absence_requests: vec![absence(
                "8",
                ("2024-03-25", "2024-03-29"),
                "Vacation - Spring break",
                AbsenceStatus::Rejected,
                ("2024-02-15T11:00:00Z", "2024-02-16T09:30:00Z"),
            )?],
            performance_rating: Some(4.0),
            certifications: strings(&["React Developer", "JavaScript Fundamentals"]),
        },
    ])
}

fn feedback() -> AppResult<Vec<Feedback>> {
    Ok(vec![
        enhanced_feedback(
            ("f1", "1", "2"),
            "Great teamwork on the project! You always communicate clearly and meet deadlines.",
            "I appreciate your exceptional teamwork on the project. Your clear communication and consistent ability to meet deadlines have been invaluable to our success.",
            "2024-01-15T10:30:00Z",
        )?,
        enhanced_feedback(
            ("f2", "2", "1"),
            "You could improve your time management skills. Sometimes meetings run over.",
            "I have noticed opportunities to enhance your time management skills. Meetings occasionally run over schedule, and developing more structured time allocation could benefit both you and the team.",
            "2024-01-14T14:20:00Z",
        )?,
        enhanced_feedback(
            ("f3", "3", "2"),
            "Your technical skills are amazing! Love working with you.",
            "Your technical expertise is truly impressive! I thoroughly enjoy collaborating with you and appreciate the valuable insights you bring to our projects.",
            "2024-01-13T09:15:00Z",
        )?,
        enhanced_feedback(
            ("f4", "4", "2"),
            "You need to improve your communication with the team.",
            "I've observed opportunities to enhance your team communication. Clear and consistent communication is essential for our collaborative success, and I believe we can work together to strengthen this aspect of your performance.",
            "2024-01-12T16:30:00Z",
        )?,
        enhanced_feedback(
            ("f5", "5", "3"),
            "Excellent sales performance this quarter. Keep up the great work!",
            "Your sales performance this quarter has been exceptional. Your dedication and strategic approach have significantly contributed to our team's success. Keep up the outstanding work!",
            "2024-01-10T11:45:00Z",
        )?,
    ])
}

/// `(id, from, to)` keeps the call sites readable.
fn enhanced_feedback(
    (id, from_user_id, to_user_id): (&str, &str, &str),
    content: &str,
    enhanced_content: &str,
    created_at: &str,
) -> AppResult<Feedback> {
    let created_at = instant(created_at)?;
    Ok(Feedback {
        id: id.to_owned(),
        from_user_id: from_user_id.to_owned(),
        to_user_id: to_user_id.to_owned(),
        content: content.to_owned(),
        enhanced_content: Some(enhanced_content.to_owned()),
        is_enhanced: true,
        created_at,
        updated_at: created_at,
    })
}

fn absence(
    id: &str,
    (start_date, end_date): (&str, &str),
    reason: &str,
    status: AbsenceStatus,
    (created_at, updated_at): (&str, &str),
) -> AppResult<AbsenceRequest> {
    Ok(AbsenceRequest {
        id: id.to_owned(),
        start_date: date(start_date)?,
        end_date: date(end_date)?,
        reason: reason.to_owned(),
        status,
        created_at: instant(created_at)?,
        updated_at: instant(updated_at)?,
    })
}

fn contact(name: &str, phone: &str, relationship: &str) -> Option<EmergencyContact> {
    Some(EmergencyContact {
        name: name.to_owned(),
        phone: phone.to_owned(),
        relationship: relationship.to_owned(),
    })
}

fn history(entries: &[(&str, &str, &str)]) -> Vec<WorkHistoryEntry> {
    entries
        .iter()
        .map(|(company, position, duration)| WorkHistoryEntry {
            company: (*company).to_owned(),
            position: (*position).to_owned(),
            duration: (*duration).to_owned(),
        })
        .collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|error| AppError::Internal(format!("invalid seed date '{value}': {error}")))
}

fn instant(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|error| AppError::Internal(format!("invalid seed timestamp '{value}': {error}")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use newwork_domain::Role;

    use super::directory;

    #[test]
    fn seed_parses_and_ids_are_unique() {
        let seed = directory().unwrap_or_else(|_| unreachable!());
        assert_eq!(seed.profiles.len(), 8);
        assert_eq!(seed.feedback.len(), 5);

        let absence_ids: HashSet<&str> = seed
            .profiles
            .iter()
            .flat_map(|profile| profile.absence_requests.iter())
            .map(|request| request.id.as_str())
            .collect();
        assert_eq!(absence_ids.len(), 8);
    }

    #[test]
    fn demo_accounts_cover_every_role() {
        let seed = directory().unwrap_or_else(|_| unreachable!());
        let role_of = |email: &str| {
            seed.profiles
                .iter()
                .find(|profile| profile.email == email)
                .map(|profile| profile.role)
        };

        assert_eq!(role_of("manager@newwork.com"), Some(Role::Manager));
        assert_eq!(role_of("employee@newwork.com"), Some(Role::Employee));
        assert_eq!(role_of("coworker@newwork.com"), Some(Role::Coworker));
    }

    #[test]
    fn seeded_feedback_targets_existing_profiles() {
        let seed = directory().unwrap_or_else(|_| unreachable!());
        for item in &seed.feedback {
            assert!(seed.profiles.iter().any(|profile| profile.id == item.to_user_id));
            assert!(item.is_enhanced);
        }
    }
}
