use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn recording(run_once: bool) -> (LayoutObserver, Rc<RefCell<Vec<f32>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let callback = move |bounds: LayoutBounds| sink.borrow_mut().push(bounds.height);
    let observer = if run_once {
        LayoutObserver::run_once(callback)
    } else {
        LayoutObserver::new(callback)
    };
    (observer, seen)
}

#[test]
fn unchanged_height_is_skipped() {
    let (mut observer, seen) = recording(false);
    assert!(observer.on_layout(LayoutBounds::new(0.0, 0.0, 320.0, 400.0)));
    assert!(!observer.on_layout(LayoutBounds::new(0.0, 10.0, 360.0, 400.0)));
    assert!(observer.on_layout(LayoutBounds::new(0.0, 10.0, 360.0, 420.0)));
    assert_eq!(*seen.borrow(), vec![400.0, 420.0]);
    assert_eq!(observer.bounds().map(|b| b.height), Some(420.0));
}

#[test]
fn run_once_ignores_later_passes() {
    let (mut observer, seen) = recording(true);
    assert!(observer.on_layout(LayoutBounds::new(0.0, 0.0, 320.0, 400.0)));
    assert!(!observer.on_layout(LayoutBounds::new(0.0, 0.0, 320.0, 500.0)));
    assert_eq!(*seen.borrow(), vec![400.0]);
}
