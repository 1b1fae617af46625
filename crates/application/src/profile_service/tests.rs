use std::sync::Arc;

use newwork_core::AppError;
use newwork_domain::{
    Permission, PermissionSet, ProfileFilter, ProfileUpdate, ProfileView, Role, SalaryChange,
    UserIdentity,
};

use super::ProfileService;
use crate::test_support::{
    FakeFeedbackRepository, FakeProfileRepository, emily, identity_for, john, michael,
};

fn service() -> ProfileService {
    ProfileService::new(
        Arc::new(FakeProfileRepository::seeded()),
        Arc::new(FakeFeedbackRepository::seeded()),
    )
}

#[tokio::test]
async fn manager_reads_full_profile_with_salary() {
    let lookup = service()
        .get_profile(&identity_for(&john()), "2")
        .await
        .unwrap_or_else(|_| unreachable!());

    assert!(matches!(lookup.view, ProfileView::Full(profile) if profile.salary == 75_000));
    assert_eq!(lookup.feedback_count, 3);
}

#[tokio::test]
async fn coworker_reads_public_projection() {
    let lookup = service()
        .get_profile(&identity_for(&emily()), "2")
        .await
        .unwrap_or_else(|_| unreachable!());

    assert!(matches!(lookup.view, ProfileView::Public(profile) if profile.department == "Engineering"));
}

#[tokio::test]
async fn missing_profile_is_not_found_before_access_check() {
    let nobody = UserIdentity::with_permissions(
        "99",
        "nobody@newwork.com",
        "No",
        "Body",
        Role::Employee,
        PermissionSet::empty(),
    );

    assert!(matches!(
        service().get_profile(&nobody, "999").await,
        Err(AppError::NotFound(message)) if message == "Profile not found"
    ));
    assert!(matches!(
        service().get_profile(&nobody, "2").await,
        Err(AppError::Forbidden { message, .. }) if message == "Access denied"
    ));
}

#[tokio::test]
async fn employee_edits_own_bio_but_not_salary() {
    let service = service();
    let caller = identity_for(&michael());

    let updated = service
        .update_profile(
            &caller,
            "2",
            ProfileUpdate {
                bio: Some("Rustacean".to_owned()),
                ..ProfileUpdate::default()
            },
        )
        .await;
    assert!(matches!(updated, Ok(profile) if profile.bio == "Rustacean"));

    let salary = service
        .update_profile(
            &caller,
            "2",
            ProfileUpdate {
                salary: Some(SalaryChange::Amount(99_999)),
                ..ProfileUpdate::default()
            },
        )
        .await;
    assert!(matches!(
        salary,
        Err(AppError::Forbidden { message, required })
            if message == "Insufficient permissions to edit salary"
                && required == vec![Permission::ProfileEditSalary.as_str().to_owned()]
    ));

    let stored = service
        .get_profile(&identity_for(&john()), "2")
        .await
        .unwrap_or_else(|_| unreachable!());
    assert!(matches!(stored.view, ProfileView::Full(profile) if profile.salary == 75_000));
}

#[tokio::test]
async fn edit_checks_run_before_existence_check() {
    let service = service();

    assert!(matches!(
        service
            .update_profile(&identity_for(&michael()), "999", ProfileUpdate::default())
            .await,
        Err(AppError::Forbidden { message, .. }) if message == "Access denied"
    ));
    assert!(matches!(
        service
            .update_profile(&identity_for(&john()), "999", ProfileUpdate::default())
            .await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn manager_sets_salary() {
    let updated = service()
        .update_profile(
            &identity_for(&john()),
            "3",
            ProfileUpdate {
                salary: Some(SalaryChange::Amount(81_000)),
                ..ProfileUpdate::default()
            },
        )
        .await;
    assert!(matches!(updated, Ok(profile) if profile.salary == 81_000));
}

#[tokio::test]
async fn list_all_filters_and_counts_feedback() {
    let filter = ProfileFilter {
        search: None,
        department: Some("Engineering".to_owned()),
    };
    let entries = service()
        .list_all(&identity_for(&john()), &filter)
        .await
        .unwrap_or_default();

    let rows: Vec<(String, usize)> = entries
        .into_iter()
        .map(|entry| (entry.profile.id, entry.feedback_count))
        .collect();
    assert_eq!(rows, vec![("2".to_owned(), 3), ("4".to_owned(), 0)]);
}

#[tokio::test]
async fn list_all_requires_read_all() {
    assert!(matches!(
        service()
            .list_all(&identity_for(&michael()), &ProfileFilter::default())
            .await,
        Err(AppError::Forbidden { .. })
    ));
}

#[tokio::test]
async fn browse_marks_current_user_and_rejects_managers() {
    let service = service();

    let entries = service
        .browse(&identity_for(&michael()), &ProfileFilter::default())
        .await
        .unwrap_or_default();
    assert_eq!(entries.len(), 4);
    assert_eq!(
        entries
            .iter()
            .filter(|entry| entry.is_current_user)
            .map(|entry| entry.profile.id.as_str())
            .collect::<Vec<_>>(),
        vec!["2"]
    );

    assert!(matches!(
        service
            .browse(&identity_for(&john()), &ProfileFilter::default())
            .await,
        Err(AppError::Validation(message)) if message == "Use /list/all endpoint for full access"
    ));
}

#[tokio::test]
async fn departments_are_distinct_in_first_seen_order() {
    let departments = service()
        .departments(&identity_for(&john()))
        .await
        .unwrap_or_default();
    assert_eq!(departments, vec!["Human Resources", "Engineering", "Design"]);
}
