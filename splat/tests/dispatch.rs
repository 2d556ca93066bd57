//! Callbacks of differing arity driven through one generic dispatch path.

use splat::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Delivers one event payload to every handler registered for it, in registration order.
struct Dispatcher<Args> {
    handlers: Vec<Box<dyn FnMut(Args) -> String>>,
}

impl<Args: Clone + 'static> Dispatcher<Args> {
    fn new() -> Self {
        Dispatcher {
            handlers: Vec::new(),
        }
    }

    fn register<F>(&mut self, handler: F)
    where
        F: ApplyMut<Args, Output = String> + 'static,
    {
        self.handlers
            .push(Box::new(forward_apply(handler).into_fn_mut::<Args>()));
    }

    fn emit(&mut self, args: Args) -> Vec<String> {
        self.handlers
            .iter_mut()
            .map(|handler| handler(args.clone()))
            .collect()
    }
}

/// Run a callback and collapse a single result to a bare value.
fn run<F, Args>(callback: F, args: Args) -> <F::Output as Unwrap>::Output
where
    F: ApplyOnce<Args>,
    F::Output: Unwrap,
{
    unwrap(forward_apply(callback).call_once(args))
}

fn call_twice<Args, F>(callback: &ForwardApply<F>, args: Args) -> (F::Output, F::Output)
where
    Args: Clone,
    F: Apply<Args>,
{
    (callback.call(args.clone()), callback.call(args))
}

#[test]
fn handlers_receive_spread_payload() {
    let mut joined = Dispatcher::<(String, u32)>::new();
    joined.register(|user: String, id: u32| format!("{} joined as #{}", user, id));

    let mut greeted = 0;
    joined.register(move |user: String, _id: u32| {
        greeted += 1;
        format!("hello {} ({} so far)", user, greeted)
    });

    assert_eq!(
        joined.emit(("ada".to_string(), 1)),
        ["ada joined as #1", "hello ada (1 so far)"]
    );
    assert_eq!(
        joined.emit(("grace".to_string(), 2)),
        ["grace joined as #2", "hello grace (2 so far)"]
    );
}

#[test]
fn dispatchers_of_every_shape_share_one_implementation() {
    let mut ticks = Dispatcher::<()>::new();
    ticks.register(|| "tick".to_string());
    assert_eq!(ticks.emit(()), ["tick"]);

    let mut moved = Dispatcher::<(i32, i32, char)>::new();
    moved.register(|x: i32, y: i32, key: char| format!("{}@{},{}", key, x, y));
    assert_eq!(moved.emit((3, -1, 'w')), ["w@3,-1"]);
}

#[test]
fn single_results_are_collapsed() {
    assert_eq!(run(|a: i32| (a * 2,), (4,)), 8);
    assert_eq!(run(|a: i32, b: i32| (b, a), (1, 2)), (2, 1));
    assert_eq!(run(|| (), ()), ());

    let name = String::from("splat");
    let owned: String = run(move |suffix: &str| (name + suffix,), ("!",));
    assert_eq!(owned, "splat!");
}

#[test]
fn shared_calls_are_repeatable_in_generic_code() {
    let pick = forward_apply(|a: u8, b: u8, c: u8| a.max(b).max(c));
    assert_eq!(call_twice(&pick, (3, 9, 4)), (9, 9));

    let nothing = forward_apply(|| "none");
    assert_eq!(call_twice(&nothing, ()), ("none", "none"));

    let words = (String::from("a"), String::from("bc"));
    let lengths = forward_apply(|x: &String, y: &String| x.len() + y.len());
    assert_eq!(call_twice(&lengths, &words), (3, 3));
}

#[test]
fn callbacks_update_borrowed_state() {
    struct Stats {
        hits: u32,
        log: Vec<String>,
    }

    let record = forward_apply(|hits: &mut u32, log: &mut Vec<String>, what: &str| {
        *hits += 1;
        log.push(what.to_string());
    });

    let mut stats = Stats {
        hits: 0,
        log: Vec::new(),
    };
    record.call((&mut stats.hits, &mut stats.log, "first"));
    record.call((&mut stats.hits, &mut stats.log, "second"));
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.log, ["first", "second"]);

    let mut counters = (0_u32, 10_u32);
    let bump = forward_apply(|low: &mut u32, high: &mut u32| {
        *low += 1;
        *high -= 1;
    });
    bump.call(&mut counters);
    bump.call(&mut counters);
    assert_eq!(counters, (2, 8));
}

#[test]
fn table_of_function_pointers() {
    fn add(a: i64, b: i64) -> i64 {
        a + b
    }
    fn sub(a: i64, b: i64) -> i64 {
        a - b
    }
    fn mul(a: i64, b: i64) -> i64 {
        a * b
    }

    let table: [ForwardApply<fn(i64, i64) -> i64>; 3] = [
        forward_apply(add as fn(i64, i64) -> i64),
        forward_apply(sub),
        forward_apply(mul),
    ];
    let results: Vec<i64> = table.iter().map(|op| op.call((6, 3))).collect();
    assert_eq!(results, [9, 3, 18]);

    let copy = table[2];
    assert_eq!(copy.call((7, 6)), 42);
}

#[test]
fn shared_handler_sees_every_call() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = {
        let seen = Rc::clone(&seen);
        forward_apply(move |tag: &'static str, value: f64| seen.borrow_mut().push((tag, value)))
    };

    let readings = [("temp", 21.5), ("humidity", 0.4)];
    readings.iter().copied().for_each(sink.as_fn::<(&str, f64)>());
    assert_eq!(*seen.borrow(), [("temp", 21.5), ("humidity", 0.4)]);
}
