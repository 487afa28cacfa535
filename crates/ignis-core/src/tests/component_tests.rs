use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::component::{sync_callback, ComponentSpec, Startup};
use crate::error::{Error, StartupError};

#[test]
fn test_spec_validates_in_order() {
    // name first
    let err = ComponentSpec::new("   ")
        .priority(1)
        .factory(|| Ok(Startup::Ready))
        .into_entry()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidComponent { .. }));

    // then priority
    let err = ComponentSpec::new("db")
        .factory(|| Ok(Startup::Ready))
        .into_entry()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidPriority { .. }));

    // then factory
    let err = ComponentSpec::new("db").priority(1).into_entry().unwrap_err();
    assert!(matches!(err, Error::InvalidComponentFactory { .. }));
}

#[test]
fn test_valid_spec_becomes_entry() {
    let entry = ComponentSpec::new("db")
        .priority(4)
        .factory(|| Ok(Startup::Ready))
        .into_entry()
        .expect("complete spec should validate");

    assert_eq!(entry.name(), "db");
    assert_eq!(entry.priority(), 4);
}

#[test]
fn test_entry_factory_is_consumed_once() {
    let mut entry = ComponentSpec::new("db")
        .priority(1)
        .factory(|| Ok(Startup::Ready))
        .into_entry()
        .unwrap();

    assert!(entry.take_factory().is_some());
    assert!(entry.take_factory().is_none(), "Factory slot is single-use");
}

#[test]
fn test_startup_debug_variants() {
    assert_eq!(format!("{:?}", Startup::Ready), "Ready");

    let pending = Startup::pending(async { Ok::<(), StartupError>(()) });
    assert_eq!(format!("{:?}", pending), "Pending");
}

#[test]
fn test_spec_debug_hides_factory() {
    let spec = ComponentSpec::new("db").priority(2);
    let rendered = format!("{:?}", spec);

    assert!(rendered.contains("\"db\""));
    assert!(rendered.contains("has_factory: false"));
}

#[tokio::test]
async fn test_sync_callback_adapter_runs_closure() {
    let hit = Arc::new(AtomicBool::new(false));
    let hit_clone = Arc::clone(&hit);

    let callback = sync_callback(move || hit_clone.store(true, Ordering::SeqCst));
    callback().await;

    assert!(hit.load(Ordering::SeqCst));
}
