use vigil_core::VigilConfig;
use vigil_engine::runtime;

#[test]
fn runtime_initializes_once() {
    assert!(runtime::get().is_err());
    assert!(!runtime::is_initialized());

    let engine = runtime::initialize(VigilConfig::default()).unwrap();
    assert!(runtime::is_initialized());
    assert!(runtime::initialize(VigilConfig::default()).is_err());

    let shared = runtime::get().unwrap();
    shared.validate_phone("5551234567");
    assert_eq!(engine.history().len(), 1);
}
