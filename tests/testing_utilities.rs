//! Using the testing helpers against effect-based services.

use tributary::effect::prelude::*;
use tributary::testing::{CallCounter, MockEnv};
use tributary::{assert_failure, assert_failure_eq, assert_success};

#[derive(Debug, Clone, PartialEq)]
struct User {
    email: String,
    age: u32,
}

struct Database {
    users: Vec<User>,
}

struct Config {
    min_age: u32,
}

type Env = (((), Config), Database);

fn test_env(users: Vec<User>) -> Env {
    MockEnv::new()
        .with(|| Config { min_age: 18 })
        .with(|| Database { users })
        .build()
}

fn find_by_email(email: &str) -> impl Effect<Output = User, Error = String, Env = Env> {
    let email = email.to_string();
    from_fn(move |(_, db): &Env| {
        db.users
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| format!("no user with email {}", email))
    })
}

fn check_adult(user: User) -> impl Effect<Output = User, Error = String, Env = Env> {
    asks::<_, String, _, _>(|((_, cfg), _): &Env| cfg.min_age).and_then_result(move |min| {
        if user.age >= min {
            Ok(user.clone())
        } else {
            Err(format!("{} is under {}", user.email, min))
        }
    })
}

fn ada() -> User {
    User {
        email: "ada@example.com".to_string(),
        age: 36,
    }
}

#[tokio::test]
async fn finds_user_in_mock_database() {
    let env = test_env(vec![ada()]);
    let user = assert_success!(find_by_email("ada@example.com").run(&env).await);
    assert_eq!(user, ada());
}

#[tokio::test]
async fn reports_missing_user() {
    let env = test_env(Vec::new());
    assert_failure_eq!(
        find_by_email("nobody@example.com").run(&env).await,
        "no user with email nobody@example.com".to_string()
    );
}

#[tokio::test]
async fn rejects_minor_using_config_from_env() {
    let minor = User {
        email: "kid@example.com".to_string(),
        age: 12,
    };
    let env = test_env(vec![minor]);

    let effect = find_by_email("kid@example.com").and_then(check_adult);
    let err = assert_failure!(effect.run(&env).await);
    assert!(err.contains("under 18"));
}

#[tokio::test]
async fn call_counter_tracks_side_effects_across_runs() {
    let env = test_env(vec![ada()]);
    let audits = CallCounter::new();
    let a = audits.clone();

    let effect = find_by_email("ada@example.com").and_then_first(move |_| {
        let a = a.clone();
        from_io(move || {
            a.hit();
        })
    });

    assert_success!(effect.run(&env).await);
    assert_success!(effect.run(&env).await);
    assert_eq!(audits.count(), 2);
}

#[tokio::test]
async fn call_counter_stays_zero_when_step_is_skipped() {
    let env = test_env(Vec::new());
    let audits = CallCounter::new();
    let a = audits.clone();

    let effect = find_by_email("ada@example.com").and_then(move |user| {
        a.hit();
        succeed(user)
    });

    assert_failure!(effect.run(&env).await);
    assert_eq!(audits.count(), 0);
}

#[test]
#[should_panic(expected = "Expected Success")]
fn assert_success_panics_on_failure() {
    let outcome: Result<i32, String> = Err("boom".to_string());
    assert_success!(outcome);
}

#[test]
#[should_panic(expected = "Expected Failure")]
fn assert_failure_panics_on_success() {
    let outcome: Result<i32, String> = Ok(1);
    assert_failure!(outcome);
}
