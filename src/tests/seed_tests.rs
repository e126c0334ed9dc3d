use crate::seed::{generate_tasks, generate_users, SeedOptions};

#[test]
fn default_options_match_the_historical_counts() {
    let opts = SeedOptions::default();
    assert_eq!(opts.users, 10);
    assert_eq!(opts.tasks, 30);
}

#[test]
fn generates_requested_number_of_users() {
    let users = generate_users(10);
    assert_eq!(users.len(), 10);

    for user in &users {
        assert!(!user.fullname.is_empty());
        assert!(user.email.contains('@'));
    }
}

#[test]
fn generates_no_users_for_zero_count() {
    assert!(generate_users(0).is_empty());
}

#[test]
fn generated_tasks_only_reference_known_ids() {
    let status_ids = vec![1, 2, 3];
    let user_ids = vec![7, 8, 9, 10];

    let tasks = generate_tasks(30, &status_ids, &user_ids);
    assert_eq!(tasks.len(), 30);

    for task in &tasks {
        assert!(status_ids.contains(&task.status_id));
        assert!(user_ids.contains(&task.user_id));
        assert!(!task.title.is_empty());
        assert!(!task.description.is_empty());
    }
}

#[test]
fn single_candidate_ids_are_always_used() {
    let tasks = generate_tasks(5, &[42], &[314]);

    for task in &tasks {
        assert_eq!(task.status_id, 42);
        assert_eq!(task.user_id, 314);
    }
}
