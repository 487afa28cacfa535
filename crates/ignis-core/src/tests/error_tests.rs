use std::error::Error as StdError;
use std::io;

use crate::error::Error;

#[test]
fn test_codes_are_stable_per_category() {
    assert_eq!(
        Error::InvalidComponent {
            reason: "component name is empty".to_string()
        }
        .code(),
        100
    );
    assert_eq!(
        Error::InvalidPriority {
            name: "db".to_string()
        }
        .code(),
        101
    );
    assert_eq!(
        Error::InvalidComponentFactory {
            name: "db".to_string()
        }
        .code(),
        102
    );
    assert_eq!(Error::InvalidCallback.code(), 200);
    assert_eq!(Error::AlreadyInstantiated.code(), 300);
    assert_eq!(
        Error::StartupFailed {
            component: "db".to_string(),
            source: "bind failed".into()
        }
        .code(),
        301
    );
}

#[test]
fn test_validation_messages() {
    let err = Error::InvalidComponent {
        reason: "component name is empty".to_string(),
    };
    assert!(err.to_string().contains("invalid component given"));

    let err = Error::InvalidPriority {
        name: "db".to_string(),
    };
    assert!(err.to_string().contains("invalid priority given"));
    assert!(err.to_string().contains("'db'"));

    let err = Error::InvalidComponentFactory {
        name: "db".to_string(),
    };
    assert!(err.to_string().contains("invalid component factory given"));

    assert!(Error::InvalidCallback
        .to_string()
        .contains("invalid callback given"));
}

#[test]
fn test_startup_failed_preserves_source() {
    let io_err = io::Error::new(io::ErrorKind::AddrInUse, "port busy");
    let err = Error::StartupFailed {
        component: "listener".to_string(),
        source: Box::new(io_err),
    };

    assert!(err.to_string().contains("'listener'"));
    assert!(err.to_string().contains("port busy"));
    assert!(err.source().is_some(), "source should be chained");
}
