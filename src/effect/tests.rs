//! Tests for the Effect trait and its combinators.

use std::convert::Infallible;
use std::time::{Duration, Instant};

use crate::effect::prelude::*;
use crate::testing::CallCounter;

#[derive(Debug)]
struct Env {
    n: i32,
    name: &'static str,
}

const ENV: Env = Env { n: 21, name: "svc" };

// Constructor tests
#[tokio::test]
async fn test_succeed_returns_value() {
    let effect = succeed::<_, String, ()>(42);
    assert_eq!(effect.run(&()).await, Ok(42));
}

#[tokio::test]
async fn test_fail_returns_error() {
    let effect = fail::<i32, _, ()>("error".to_string());
    assert_eq!(effect.run(&()).await, Err("error".to_string()));
}

#[tokio::test]
async fn test_task_constructors() {
    let ok = from_task::<_, String, (), _, _>(|| async { 1 });
    let err = fail_task::<i32, _, (), _, _>(|| async { "late".to_string() });
    let res = from_task_result::<_, String, (), _, _>(|| async { Ok(3) });
    assert_eq!(ok.run(&()).await, Ok(1));
    assert_eq!(err.run(&()).await, Err("late".to_string()));
    assert_eq!(res.run(&()).await, Ok(3));
}

#[tokio::test]
async fn test_reader_constructors() {
    let read = from_reader::<_, String, Env, _>(|env| env.n);
    let fail_read = fail_reader::<i32, _, Env, _>(|env| format!("{} down", env.name));
    let async_read = from_async_reader::<_, String, Env, _, _>(|env| {
        let n = env.n;
        async move { n + 1 }
    });
    let async_fail = fail_async_reader::<i32, _, Env, _, _>(|env| {
        let name = env.name;
        async move { name.len() }
    });

    assert_eq!(read.run(&ENV).await, Ok(21));
    assert_eq!(fail_read.run(&ENV).await, Err("svc down".to_string()));
    assert_eq!(async_read.run(&ENV).await, Ok(22));
    assert_eq!(async_fail.run(&ENV).await, Err(3));
}

#[tokio::test]
async fn test_ask_clones_environment() {
    #[derive(Clone, Debug, PartialEq)]
    struct Cfg {
        port: u16,
    }
    let effect = ask::<String, Cfg>().map(|cfg| cfg.port);
    assert_eq!(effect.run(&Cfg { port: 8080 }).await, Ok(8080));
}

#[tokio::test]
async fn test_from_option_and_predicate() {
    let present = from_option::<_, String, (), _>(Some(1), || "absent".to_string());
    let absent = from_option::<i32, _, (), _>(None, || "absent".to_string());
    assert_eq!(present.run(&()).await, Ok(1));
    assert_eq!(absent.run(&()).await, Err("absent".to_string()));

    let adult = from_predicate::<_, _, (), _, _>(30, |age: &u32| *age >= 18, |age| age);
    let minor = from_predicate::<_, _, (), _, _>(12, |age: &u32| *age >= 18, |age| age);
    assert_eq!(adult.run(&()).await, Ok(30));
    assert_eq!(minor.run(&()).await, Err(12));
}

#[tokio::test]
async fn test_from_refinement_hands_value_to_on_false() {
    let effect = from_refinement::<_, _, _, (), _, _>(
        -1i64,
        |n| u8::try_from(n).map_err(|_| n),
        |n| format!("{} does not fit", n),
    );
    assert_eq!(effect.run(&()).await, Err("-1 does not fit".to_string()));
}

#[tokio::test]
async fn test_io_constructors_run_every_time() {
    let counter = CallCounter::new();
    let c = counter.clone();
    let effect = from_io::<_, String, (), _>(move || c.hit());
    assert_eq!(effect.run(&()).await, Ok(0));
    assert_eq!(effect.run(&()).await, Ok(1));

    let failing = fail_io::<(), _, (), _>(|| "io");
    assert_eq!(failing.run(&()).await, Err("io"));
}

#[tokio::test]
async fn test_construction_does_no_work() {
    let counter = CallCounter::new();
    let c = counter.clone();
    let _effect = from_io::<_, String, (), _>(move || c.hit()).map(|n| n + 1);
    assert_eq!(counter.count(), 0);
}

// Functor / bifunctor
#[tokio::test]
async fn test_map_skips_failure() {
    let counter = CallCounter::new();
    let c = counter.clone();
    let effect = fail::<i32, _, ()>("error".to_string()).map(move |x| {
        c.hit();
        x * 2
    });
    assert_eq!(effect.run(&()).await, Err("error".to_string()));
    assert_eq!(counter.count(), 0);
}

#[tokio::test]
async fn test_functor_laws() {
    let f = |x: i32| x + 1;
    let g = |x: i32| x * 3;

    let identity = succeed::<_, String, ()>(7).map(|x| x);
    assert_eq!(identity.run(&()).await, Ok(7));

    let composed = succeed::<_, String, ()>(7).map(move |x| g(f(x)));
    let chained = succeed::<_, String, ()>(7).map(f).map(g);
    assert_eq!(composed.run(&()).await, chained.run(&()).await);
}

#[tokio::test]
async fn test_map_err_preserves_success() {
    let effect = succeed::<_, &str, ()>(42).map_err(|e| format!("wrapped: {}", e));
    assert_eq!(effect.run(&()).await, Ok(42));
}

#[tokio::test]
async fn test_bimap_calls_exactly_one_side() {
    let err_calls = CallCounter::new();
    let ok_calls = CallCounter::new();
    let (e, o) = (err_calls.clone(), ok_calls.clone());
    let effect = succeed::<_, i32, ()>(1).bimap(
        move |x| {
            e.hit();
            x
        },
        move |x| {
            o.hit();
            x
        },
    );
    assert_eq!(effect.run(&()).await, Ok(1));
    assert_eq!((err_calls.count(), ok_calls.count()), (0, 1));
}

#[tokio::test]
async fn test_swap_twice_is_identity() {
    let effect = succeed::<_, &str, ()>(1).swap();
    assert_eq!(effect.run(&()).await, Err(1));
    assert_eq!(effect.swap().run(&()).await, Ok(1));
}

// Monad
#[tokio::test]
async fn test_reader_and_then_scenario() {
    let effect = asks::<_, String, Env, _>(|env| env.n).and_then(|x| succeed(x * 2));
    assert_eq!(effect.run(&ENV).await, Ok(42));
}

#[tokio::test]
async fn test_and_then_is_fail_fast() {
    let counter = CallCounter::new();
    let c = counter.clone();
    let effect = fail::<i32, _, ()>("stop".to_string()).and_then(move |x| {
        c.hit();
        succeed(x)
    });
    assert_eq!(effect.run(&()).await, Err("stop".to_string()));
    assert_eq!(counter.count(), 0);
}

#[tokio::test]
async fn test_monad_laws() {
    let f = |x: i32| succeed::<_, String, Env>(x + 1);
    let g = |x: i32| asks::<_, String, Env, _>(move |env| x * env.n);

    // left identity
    let left = succeed::<_, String, Env>(2).and_then(f);
    assert_eq!(left.run(&ENV).await, f(2).run(&ENV).await);

    // right identity
    let m = asks::<_, String, Env, _>(|env| env.n);
    let right = asks::<_, String, Env, _>(|env| env.n).and_then(succeed);
    assert_eq!(right.run(&ENV).await, m.run(&ENV).await);

    // associativity
    let nested_left = succeed::<_, String, Env>(2).and_then(f).and_then(g);
    let nested_right = succeed::<_, String, Env>(2).and_then(move |x| f(x).and_then(g));
    assert_eq!(nested_left.run(&ENV).await, nested_right.run(&ENV).await);
}

#[tokio::test]
async fn test_flatten() {
    let nested = succeed::<_, String, ()>(fail::<i32, _, ()>("inner".to_string()));
    assert_eq!(nested.flatten().run(&()).await, Err("inner".to_string()));
}

#[tokio::test]
async fn test_and_then_first_keeps_value_and_runs_follow_up() {
    let counter = CallCounter::new();
    let c = counter.clone();
    let effect = succeed::<_, String, ()>(5).and_then_first(move |_| {
        let c = c.clone();
        from_io(move || c.hit())
    });
    assert_eq!(effect.run(&()).await, Ok(5));
    assert_eq!(counter.count(), 1);
}

#[tokio::test]
async fn test_and_then_result_and_async() {
    let parsed = succeed::<_, String, ()>("x1")
        .and_then_result(|s| s.parse::<i32>().map_err(|_| format!("bad: {}", s)));
    assert_eq!(parsed.run(&()).await, Err("bad: x1".to_string()));

    let doubled = succeed::<_, String, ()>(4).and_then_async(|n| async move { Ok(n * 2) });
    assert_eq!(doubled.run(&()).await, Ok(8));
}

// Applicative
#[tokio::test]
async fn test_ap_runs_success_branch_despite_failure() {
    let counter = CallCounter::new();
    let c = counter.clone();
    let func = fail::<fn(usize) -> usize, _, ()>("no function".to_string());
    let arg = from_io(move || c.hit());
    assert_eq!(func.ap(arg).run(&()).await, Err("no function".to_string()));
    assert_eq!(counter.count(), 1);
}

#[tokio::test]
async fn test_ap_both_failures_keep_left() {
    let func = fail::<fn(i32) -> i32, _, ()>("left");
    let arg = fail::<i32, _, ()>("right");
    assert_eq!(func.ap(arg).run(&()).await, Err("left"));
}

#[tokio::test]
async fn test_zip_runs_branches_concurrently() {
    let slow = |n: i32| {
        from_task::<_, String, (), _, _>(move || async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            n
        })
    };
    let start = Instant::now();
    assert_eq!(slow(1).zip(slow(2)).run(&()).await, Ok((1, 2)));
    assert!(start.elapsed() < Duration::from_millis(95));
}

#[tokio::test]
async fn test_ap_first_and_second() {
    let a = succeed::<_, String, ()>(1);
    let b = succeed::<_, String, ()>("b");
    assert_eq!(a.ap_first(b).run(&()).await, Ok(1));

    let a = succeed::<_, String, ()>(1);
    let b = succeed::<_, String, ()>("b");
    assert_eq!(a.ap_second(b).run(&()).await, Ok("b"));
}

#[tokio::test]
async fn test_validation_scenario() {
    let v = Validation::semigroup();
    let effect = v.ap(
        fail::<fn(i32) -> i32, _, ()>(vec!["e1"]),
        fail::<i32, _, ()>(vec!["e2"]),
    );
    assert_eq!(effect.run(&()).await, Err(vec!["e1", "e2"]));
}

// Alternative
#[tokio::test]
async fn test_alt_is_lazy_on_success() {
    let counter = CallCounter::new();
    let c = counter.clone();
    let effect = succeed::<_, String, ()>(1).alt(move || {
        c.hit();
        succeed::<_, String, ()>(2)
    });
    assert_eq!(effect.run(&()).await, Ok(1));
    assert_eq!(counter.count(), 0);
}

#[tokio::test]
async fn test_alt_sees_same_environment() {
    let effect = fail::<i32, _, Env>("nope").alt(|| asks::<_, String, Env, _>(|env| env.n));
    assert_eq!(effect.run(&ENV).await, Ok(21));
}

#[tokio::test]
async fn test_or_else_sees_error() {
    let effect = fail::<usize, _, ()>("abc").or_else(|e: &str| succeed::<_, String, ()>(e.len()));
    assert_eq!(effect.run(&()).await, Ok(3));
}

#[tokio::test]
async fn test_filter_or_else() {
    let kept = succeed::<_, String, ()>(20).filter_or_else(|n| *n > 10, |n| n.to_string());
    assert_eq!(kept.run(&()).await, Ok(20));
}

// Elimination
#[tokio::test]
async fn test_fold_dispatches_once() {
    let counter = CallCounter::new();
    let c = counter.clone();
    let source = from_io::<_, String, (), _>(move || c.hit());
    let effect = source.fold(
        |e| succeed::<_, Infallible, ()>(format!("err {}", e)),
        |n| succeed(format!("ok {}", n)),
    );
    assert_eq!(effect.run_infallible(&()).await, "ok 0");
    assert_eq!(counter.count(), 1);
}

#[tokio::test]
async fn test_get_or_else_reads_environment() {
    let effect = fail::<i32, _, Env>("missing").get_or_else(|_| asks(|env: &Env| env.n));
    assert_eq!(effect.run_infallible(&ENV).await, 21);
}

#[tokio::test]
async fn test_local_derives_environment() {
    let inner = asks::<_, String, i32, _>(|n| n * 2);
    let effect = inner.local(|env: &Env| env.n);
    assert_eq!(effect.run(&ENV).await, Ok(42));
}

// Structured accumulation
#[derive(Debug, PartialEq)]
struct Greeting {
    name: &'static str,
    n: i32,
    text: String,
}

impl From<(&'static str, i32, String)> for Greeting {
    fn from((name, n, text): (&'static str, i32, String)) -> Self {
        Greeting { name, n, text }
    }
}

#[tokio::test]
async fn test_bind_attach_finish() {
    let effect = asks::<_, String, Env, _>(|env| env.name)
        .tupled()
        .attach(asks(|env: &Env| env.n))
        .bind(|&(name, n)| succeed(format!("{} #{}", name, n)))
        .finish::<Greeting>();

    assert_eq!(
        effect.run(&ENV).await,
        Ok(Greeting {
            name: "svc",
            n: 21,
            text: "svc #21".to_string()
        })
    );
}

#[tokio::test]
async fn test_begin_is_empty_accumulation() {
    assert_eq!(begin::<String, ()>().run(&()).await, Ok(()));
    let one = begin::<String, ()>().attach(succeed(1));
    assert_eq!(one.run(&()).await, Ok((1,)));
}

#[tokio::test]
async fn test_bind_stops_at_failure() {
    let counter = CallCounter::new();
    let c = counter.clone();
    let effect = begin::<String, ()>()
        .bind(|_| fail::<i32, _, ()>("first".to_string()))
        .bind(move |_| {
            c.hit();
            succeed(2)
        });
    assert_eq!(effect.run(&()).await, Err("first".to_string()));
    assert_eq!(counter.count(), 0);
}

#[tokio::test]
async fn test_attach_runs_concurrently_with_accumulation() {
    let counter = CallCounter::new();
    let c = counter.clone();
    let effect = fail::<i32, _, ()>("acc failed".to_string())
        .tupled()
        .attach(from_io(move || c.hit()));
    assert_eq!(effect.run(&()).await, Err("acc failed".to_string()));
    assert_eq!(counter.count(), 1);
}

// Re-running
#[tokio::test]
async fn test_rerun_repeats_the_work() {
    let counter = CallCounter::new();
    let c = counter.clone();
    let effect = from_task::<_, String, (), _, _>(move || {
        let c = c.clone();
        async move { c.hit() }
    })
    .zip(succeed(0))
    .and_then(|(n, _)| succeed(n * 10));

    assert_eq!(effect.run(&()).await, Ok(0));
    assert_eq!(effect.run(&()).await, Ok(10));
    assert_eq!(counter.count(), 2);
}

#[tokio::test]
async fn test_boxed_effects_in_match_arms() {
    fn pick(fast: bool) -> BoxedEffect<&'static str, String, ()> {
        if fast {
            succeed("cache").boxed()
        } else {
            from_task(|| async { "db" }).boxed()
        }
    }
    assert_eq!(pick(true).run(&()).await, Ok("cache"));
    assert_eq!(pick(false).run(&()).await, Ok("db"));
}
