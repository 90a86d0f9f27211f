use std::collections::HashSet;
use std::thread;

use career_intake::advisor::Topic;
use career_intake::storage::models::{NewAiQuery, NewDeveloperApplication, NewResume, NewUser};
use career_intake::storage::{Database, DatabaseError};
use chrono::{Datelike, Utc};

fn test_db() -> (tempfile::TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("data")).unwrap();
    (dir, db)
}

fn sample_resume(name: &str) -> NewResume {
    NewResume {
        full_name: name.to_string(),
        email: "applicant@example.com".to_string(),
        phone: Some("+1 555 0100".to_string()),
        desired_position: None,
        file_name: "cv.pdf".to_string(),
        file_size: "120KB".to_string(),
        additional_info: None,
    }
}

fn sample_application(name: &str) -> NewDeveloperApplication {
    NewDeveloperApplication {
        full_name: name.to_string(),
        email: "dev@example.com".to_string(),
        experience: "8+".to_string(),
        tech_stack: vec!["Rust".to_string(), "Go".to_string()],
        github_profile: Some("https://github.com/example".to_string()),
        portfolio_website: None,
        motivation: "Shipping reliable systems".to_string(),
    }
}

fn sample_user(username: &str, password: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: password.to_string(),
    }
}

// ============================================================================
// Resumes
// ============================================================================

#[test]
fn test_create_and_list_resumes() {
    let (_dir, db) = test_db();

    let first = db.create_resume(sample_resume("First")).unwrap();
    let second = db.create_resume(sample_resume("Second")).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.phone.as_deref(), Some("+1 555 0100"));
    assert_eq!(first.desired_position, None);

    let all = db.get_all_resumes().unwrap();
    assert_eq!(all, vec![first, second]);
}

#[test]
fn test_empty_tables_list_nothing() {
    let (_dir, db) = test_db();
    assert!(db.get_all_resumes().unwrap().is_empty());
    assert!(db.get_all_developer_applications().unwrap().is_empty());
    assert!(db.get_all_ai_queries().unwrap().is_empty());
}

#[test]
fn test_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let created = {
        let db = Database::open(dir.path().join("data")).unwrap();
        db.create_resume(sample_resume("Persistent")).unwrap()
    };

    let db = Database::open(dir.path().join("data")).unwrap();
    assert_eq!(db.get_all_resumes().unwrap(), vec![created]);
}

// ============================================================================
// Developer applications
// ============================================================================

#[test]
fn test_queue_numbers_follow_submission_order() {
    let (_dir, db) = test_db();
    let year = Utc::now().year();

    let created: Vec<_> = (1..=12)
        .map(|i| {
            db.create_developer_application(sample_application(&format!("Dev {i}")))
                .unwrap()
        })
        .collect();

    assert_eq!(created[0].queue_number, format!("DEV-{year}-001"));
    assert_eq!(created[6].queue_number, format!("DEV-{year}-007"));
    assert_eq!(created[11].queue_number, format!("DEV-{year}-012"));

    let listed = db.get_all_developer_applications().unwrap();
    assert_eq!(listed, created);
}

#[test]
fn test_queue_numbers_continue_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let year = Utc::now().year();
    {
        let db = Database::open(dir.path().join("data")).unwrap();
        db.create_developer_application(sample_application("Before"))
            .unwrap();
    }

    let db = Database::open(dir.path().join("data")).unwrap();
    let app = db
        .create_developer_application(sample_application("After"))
        .unwrap();
    assert_eq!(app.queue_number, format!("DEV-{year}-002"));
}

#[test]
fn test_concurrent_applications_never_share_a_queue_number() {
    let (_dir, db) = test_db();

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let db = db.clone();
            thread::spawn(move || {
                (0..10)
                    .map(|i| {
                        db.create_developer_application(sample_application(&format!(
                            "Thread {t} #{i}"
                        )))
                        .unwrap()
                        .queue_number
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut numbers = HashSet::new();
    for handle in handles {
        for number in handle.join().unwrap() {
            assert!(numbers.insert(number.clone()), "duplicate {number}");
        }
    }
    assert_eq!(numbers.len(), 80);
    assert_eq!(db.get_all_developer_applications().unwrap().len(), 80);
}

// ============================================================================
// AI queries
// ============================================================================

#[test]
fn test_create_and_list_ai_queries() {
    let (_dir, db) = test_db();

    let q = db
        .create_ai_query(NewAiQuery {
            query: "resume help".to_string(),
            response: Topic::classify("resume help").template().to_string(),
        })
        .unwrap();

    assert!(q.response.contains("Resume Analysis"));
    assert_eq!(db.get_all_ai_queries().unwrap(), vec![q]);
}

// ============================================================================
// Users
// ============================================================================

#[test]
fn test_create_user_hashes_password() {
    let (_dir, db) = test_db();

    let user = db.create_user(sample_user("ada", "correct horse")).unwrap();
    assert_ne!(user.password_hash, "correct horse");
    assert!(user.password_hash.starts_with("pbkdf2-sha256$"));

    let by_id = db.get_user(&user.id).unwrap().expect("user should exist");
    assert_eq!(by_id, user);

    let by_name = db
        .get_user_by_username("ada")
        .unwrap()
        .expect("user should exist");
    assert_eq!(by_name.id, user.id);
}

#[test]
fn test_duplicate_username_rejected() {
    let (_dir, db) = test_db();
    db.create_user(sample_user("grace", "one")).unwrap();

    let err = db.create_user(sample_user("grace", "two")).unwrap_err();
    assert!(matches!(err, DatabaseError::UsernameTaken(ref name) if name == "grace"));
}

#[test]
fn test_verify_credentials() {
    let (_dir, db) = test_db();
    db.create_user(sample_user("linus", "s3cret")).unwrap();

    assert!(db.verify_credentials("linus", "s3cret").unwrap().is_some());
    assert!(db.verify_credentials("linus", "wrong").unwrap().is_none());
    assert!(db.verify_credentials("nobody", "s3cret").unwrap().is_none());
}

#[test]
fn test_get_user_not_found() {
    let (_dir, db) = test_db();
    assert!(db.get_user("nonexistent").unwrap().is_none());
    assert!(db.get_user_by_username("nobody").unwrap().is_none());
}
