//! Inline results run a callable in place of a receiver.

use flexdispatch::{Dispatch, Dispatcher};
use std::sync::LazyLock;

type Args = Vec<String>;

#[test]
fn test_inline() {
    let greet = Dispatcher::named("greet", |args: &Args| match args.len() {
        1 => Dispatcher::inline(|args: Args| format!("Hello, {}!", args[0])),
        2 => Dispatch::Token("message"),
        _ => Dispatch::Undetermined,
    });

    assert_eq!(greet.call(vec!["Bob".to_string()]).unwrap(), "Hello, Bob!");
}

#[test]
fn test_inline_wins_over_matching_receiver() {
    let dispatcher = Dispatcher::named("double", |n: &i64| {
        if *n < 0 { Dispatch::inline(|n: i64| n * -2) } else { Dispatch::Token("positive") }
    });
    dispatcher.map("positive", |n: i64| n * 2).unwrap();

    assert_eq!(dispatcher.call(-4).unwrap(), 8);
    assert_eq!(dispatcher.call(4).unwrap(), 8);
}

static FIB: LazyLock<Dispatcher<u64, u64, ()>> = LazyLock::new(|| {
    Dispatcher::named("fib", |n: &u64| match *n {
        0 => Dispatch::Static(0),
        1 | 2 => Dispatch::Static(1),
        _ => Dispatch::inline(|n: u64| fib(n - 1) + fib(n - 2)),
    })
});

fn fib(n: u64) -> u64 {
    FIB.call(n).expect("fib always resolves")
}

#[test]
fn test_inline_recursion() {
    assert_eq!(fib(6), 8);
    assert_eq!(fib(20), 6765);
    assert_eq!(FIB.receiver_count(), 0);
}
