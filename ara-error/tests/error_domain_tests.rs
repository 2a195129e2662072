//! Tests for error domain identity

use std::collections::HashSet;

use ara_error::{core_error_domain, CodeType, CoreErrorDomain, ErrorCode, ErrorDomain, IdType};

struct VendorDomain;

static VENDOR_DOMAIN: VendorDomain = VendorDomain;

impl ErrorDomain for VendorDomain {
    fn id(&self) -> IdType {
        0x8000_0000_0000_0014
    }

    fn name(&self) -> &'static str {
        "Vendor"
    }

    fn message(&self, code: CodeType) -> &'static str {
        if code == 1 { "vendor failure" } else { "unknown vendor error" }
    }

    #[cfg(feature = "exceptions")]
    fn throw_as_exception(&self, error_code: &ErrorCode) -> ! {
        ara_error::raise(ara_error::Exception::new(*error_code))
    }
}

struct SensorDomain;

static SENSOR_DOMAIN: SensorDomain = SensorDomain;

impl ErrorDomain for SensorDomain {
    fn id(&self) -> IdType {
        0x0000_0000_0000_4711
    }

    fn name(&self) -> &'static str {
        "Sensor"
    }

    fn message(&self, _code: CodeType) -> &'static str {
        "sensor failure"
    }

    #[cfg(feature = "exceptions")]
    fn throw_as_exception(&self, error_code: &ErrorCode) -> ! {
        ara_error::raise(ara_error::Exception::new(*error_code))
    }
}

#[test]
fn test_domains_with_same_id_are_equal() {
    let vendor: &dyn ErrorDomain = &VENDOR_DOMAIN;
    assert_eq!(vendor, core_error_domain());
    assert_ne!(vendor.name(), core_error_domain().name());
}

#[test]
fn test_domains_with_different_ids_are_not_equal() {
    let sensor: &dyn ErrorDomain = &SENSOR_DOMAIN;
    assert_ne!(sensor, core_error_domain());
    assert_eq!(sensor.id(), 0x4711);
}

#[test]
fn test_core_domain_id_and_name() {
    let domain = CoreErrorDomain::instance();
    assert_eq!(domain.id(), 0x8000_0000_0000_0014);
    assert_eq!(CoreErrorDomain::ID, domain.id());
    assert_eq!(domain.name(), "Core");
}

#[test]
fn test_domain_hash_follows_id() {
    let vendor: &dyn ErrorDomain = &VENDOR_DOMAIN;
    let sensor: &dyn ErrorDomain = &SENSOR_DOMAIN;

    let mut seen: HashSet<&dyn ErrorDomain> = HashSet::new();
    assert!(seen.insert(core_error_domain()));
    assert!(!seen.insert(vendor));
    assert!(seen.insert(sensor));
    assert_eq!(seen.len(), 2);
}

#[test]
fn test_domain_display_is_name() {
    let sensor: &dyn ErrorDomain = &SENSOR_DOMAIN;
    assert_eq!(sensor.to_string(), "Sensor");
}

#[test]
fn test_codes_from_equal_domains_compare_equal() {
    let vendor = ErrorCode::new(22, &VENDOR_DOMAIN);
    let core = ErrorCode::new(22, core_error_domain());
    assert_eq!(vendor, core);
    assert_eq!(vendor.description(), "unknown vendor error");
    assert_eq!(core.description(), "an invalid argument was passed to a function");
}

#[test]
fn test_domains_are_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| core_error_domain().id()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), CoreErrorDomain::ID);
    }
}
