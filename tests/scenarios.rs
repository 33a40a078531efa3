//! End-to-end pipelines mixing readers, concurrency, validation and
//! error context.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tributary::effect::prelude::*;
use tributary::testing::CallCounter;
use tributary::{assert_failure, assert_failure_eq, assert_success, ContextError};

#[derive(Debug, Clone, PartialEq)]
enum AppError {
    NotFound(u32),
    Invalid(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(id) => write!(f, "user {} not found", id),
            AppError::Invalid(msg) => write!(f, "invalid: {}", msg),
        }
    }
}

struct Db {
    users: HashMap<u32, String>,
}

struct AppEnv {
    db: Db,
    greeting: String,
    default_port: u16,
}

fn test_env() -> AppEnv {
    let mut users = HashMap::new();
    users.insert(1, "ada".to_string());
    users.insert(2, "grace".to_string());
    users.insert(3, "edsger".to_string());
    AppEnv {
        db: Db { users },
        greeting: "hello".to_string(),
        default_port: 8080,
    }
}

fn find_user(id: u32) -> impl Effect<Output = String, Error = AppError, Env = Db> {
    from_fn(move |db: &Db| db.users.get(&id).cloned().ok_or(AppError::NotFound(id)))
}

fn find_user_slowly(id: u32, delay_ms: u64) -> impl Effect<Output = String, Error = AppError, Env = Db> {
    from_async(move |db: &Db| {
        let found = db.users.get(&id).cloned().ok_or(AppError::NotFound(id));
        async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            found
        }
    })
}

fn greet(id: u32) -> impl Effect<Output = String, Error = AppError, Env = AppEnv> {
    local(|env: &AppEnv| Db { users: env.db.users.clone() }, find_user(id))
        .and_then(|name| asks(move |env: &AppEnv| format!("{}, {}", env.greeting, name)))
}

#[tokio::test]
async fn greeting_reads_database_and_environment() {
    let env = test_env();
    assert_eq!(greet(1).run(&env).await, Ok("hello, ada".to_string()));
    assert_failure_eq!(greet(9).run(&env).await, AppError::NotFound(9));
}

#[tokio::test]
async fn missing_user_carries_context_trail() {
    let env = test_env();
    let effect = greet(42)
        .context("looking up user 42")
        .context_chain("rendering welcome page");

    let err: ContextError<AppError> = assert_failure!(effect.run(&env).await);
    assert_eq!(err.inner(), &AppError::NotFound(42));
    assert_eq!(
        err.to_string(),
        "Error: user 42 not found\n  -> looking up user 42\n  -> rendering welcome page"
    );
    assert_eq!(
        err.context_trail(),
        &["looking up user 42", "rendering welcome page"]
    );
}

#[tokio::test]
async fn port_falls_back_to_environment_default() {
    let env = test_env();
    let from_flag = from_option::<u16, _, AppEnv, _>(None, || AppError::Invalid("no --port".into()));
    let port = from_flag.alt(|| asks::<_, AppError, _, _>(|env: &AppEnv| env.default_port));

    assert_eq!(port.run(&env).await, Ok(8080));
}

#[tokio::test]
async fn profile_page_gathers_users_concurrently_in_order() {
    let env = test_env();
    let start = Instant::now();

    let page = traverse(vec![(3, 60), (1, 60), (2, 60)], |(id, delay)| {
        find_user_slowly(id, delay)
    })
    .map(|names| names.join(","));

    assert_eq!(page.run(&env.db).await, Ok("edsger,ada,grace".to_string()));
    assert!(start.elapsed() < Duration::from_millis(150));
}

#[tokio::test]
async fn lookup_report_fails_on_first_missing_id_in_input_order() {
    let env = test_env();
    let lookups = traverse(vec![(1, 40), (7, 40), (8, 0)], |(id, delay)| {
        find_user_slowly(id, delay)
    });

    assert_failure_eq!(lookups.run(&env.db).await, AppError::NotFound(7));
}

#[tokio::test]
async fn sequential_migration_stops_at_first_failure() {
    let applied = CallCounter::new();
    let a = applied.clone();

    let migrations = traverse_seq(vec!["create", "bad", "index"], move |step: &'static str| {
        a.hit();
        from_predicate::<_, _, (), _, _>(
            step,
            |s| *s != "bad",
            |s| AppError::Invalid(format!("migration {} failed", s)),
        )
    });

    assert_failure_eq!(
        migrations.run(&()).await,
        AppError::Invalid("migration bad failed".to_string())
    );
    assert_eq!(applied.count(), 2);
}

#[derive(Debug, PartialEq)]
struct Signup {
    name: String,
    age: u8,
    email: String,
}

impl From<(String, u8, String)> for Signup {
    fn from((name, age, email): (String, u8, String)) -> Self {
        Signup { name, age, email }
    }
}

type Errors = Vec<String>;

fn check_name(name: &str) -> impl Effect<Output = String, Error = Errors, Env = ()> {
    from_predicate(
        name.to_string(),
        |n| !n.is_empty(),
        |_| vec!["name is empty".to_string()],
    )
}

fn check_age(age: u8) -> impl Effect<Output = u8, Error = Errors, Env = ()> {
    from_predicate(age, |a| *a >= 18, |a| vec![format!("age {} is under 18", a)])
}

fn check_email(email: &str) -> impl Effect<Output = String, Error = Errors, Env = ()> {
    from_predicate(
        email.to_string(),
        |e| e.contains('@'),
        |e| vec![format!("{} is not an email", e)],
    )
}

fn signup(name: &str, age: u8, email: &str) -> impl Effect<Output = Signup, Error = Errors, Env = ()> {
    let v: Validation<fn(Errors, Errors) -> Errors> = Validation::semigroup();
    v.zip(v.zip(check_name(name), check_age(age)), check_email(email))
        .map(|((name, age), email)| Signup::from((name, age, email)))
}

#[tokio::test]
async fn signup_reports_every_invalid_field() {
    let errors = assert_failure!(signup("", 12, "nobody").run(&()).await);
    assert_eq!(
        errors,
        vec![
            "name is empty".to_string(),
            "age 12 is under 18".to_string(),
            "nobody is not an email".to_string(),
        ]
    );
}

#[tokio::test]
async fn signup_succeeds_when_all_fields_valid() {
    let form = assert_success!(signup("ada", 36, "ada@example.com").run(&()).await);
    assert_eq!(
        form,
        Signup {
            name: "ada".to_string(),
            age: 36,
            email: "ada@example.com".to_string(),
        }
    );
}

#[tokio::test]
async fn fail_fast_signup_reports_only_the_first_field() {
    let effect = check_name("")
        .zip(check_age(12))
        .attach(check_email("nobody"));

    assert_failure_eq!(effect.run(&()).await, vec!["name is empty".to_string()]);
}

#[tokio::test]
async fn signup_record_built_step_by_step() {
    let effect = begin::<Errors, ()>()
        .bind(|_| check_name("ada"))
        .attach(check_age(36))
        .bind(|(name, _)| check_email(&format!("{}@example.com", name)))
        .finish::<Signup>();

    let form = assert_success!(effect.run(&()).await);
    assert_eq!(form.email, "ada@example.com");
}

#[tokio::test]
async fn unknown_user_defaults_to_guest() {
    let env = test_env();
    let effect = find_user(99).get_or_else(|_| succeed("guest".to_string()));

    assert_eq!(effect.run_infallible(&env.db).await, "guest");
}

#[tokio::test]
async fn heterogeneous_lookups_share_one_boxed_type() {
    let env = test_env();
    let effects: Vec<BoxedEffect<String, AppError, Db>> = vec![
        find_user(1).boxed(),
        succeed::<_, AppError, Db>("static".to_string()).boxed(),
        asks::<_, AppError, _, _>(|db: &Db| db.users.len().to_string()).boxed(),
    ];

    assert_eq!(
        sequence(effects).run(&env.db).await,
        Ok(vec!["ada".to_string(), "static".to_string(), "3".to_string()])
    );
}

#[tokio::test]
async fn pipeline_runs_again_with_fresh_side_effects() {
    let env = test_env();
    let lookups = CallCounter::new();
    let l = lookups.clone();

    let effect = from_io::<_, AppError, Db, _>(move || l.hit())
        .and_then(|_| find_user(2));

    assert_eq!(effect.run(&env.db).await, Ok("grace".to_string()));
    assert_eq!(effect.run(&env.db).await, Ok("grace".to_string()));
    assert_eq!(lookups.count(), 2);
}
