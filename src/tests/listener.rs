use super::{Listeners, Subscription};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn test_listeners_run_in_registration_order() {
    let listeners = Listeners::<Vec<&'static str>>::new();
    let _first = listeners.listen(|log| log.push("first"));
    let _second = listeners.listen(|log| log.push("second"));

    let mut log = Vec::new();
    listeners.emit(&mut log);
    assert_eq!(log, vec!["first", "second"]);
}

#[test]
fn test_dropping_subscription_deregisters() {
    let listeners = Listeners::<u32>::new();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let sub = listeners.listen(move |_| counter.set(counter.get() + 1));

    listeners.emit(&mut 1);
    assert_eq!(listeners.len(), 1);
    drop(sub);
    listeners.emit(&mut 2);

    assert_eq!(calls.get(), 1);
    assert!(listeners.is_empty());
}

#[test]
fn test_listener_dropped_mid_delivery_is_skipped() {
    let listeners = Listeners::<u32>::new();
    let later: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let later_calls = Rc::new(Cell::new(0));

    let slot = Rc::clone(&later);
    let _dropper = listeners.listen(move |_| {
        slot.borrow_mut().take();
    });
    let counter = Rc::clone(&later_calls);
    *later.borrow_mut() = Some(listeners.listen(move |_| counter.set(counter.get() + 1)));

    listeners.emit(&mut 0);
    assert_eq!(later_calls.get(), 0);
    assert_eq!(listeners.len(), 1);
}

#[test]
fn test_subscription_outliving_listeners_is_harmless() {
    let listeners = Listeners::<u32>::new();
    let sub = listeners.listen(|_| {});
    drop(listeners);
    sub.release();
}
