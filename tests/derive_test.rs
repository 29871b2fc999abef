//! Tests for `#[derive(Selectable)]` and `available!`.

use std::fmt::Debug;

use tola_branch::platform::{Availability, FixedProbe, MinimumVersion, Platform, Version};
use tola_branch::prelude::*;

#[derive(Debug, PartialEq, Selectable)]
enum Chrome {
    Glass,
    Flat,
}

#[derive(Debug, PartialEq, Selectable)]
struct Inset<T> {
    edge: T,
}

#[derive(Debug, PartialEq, Selectable)]
struct Labeled<'a, T>
where
    T: Debug,
{
    label: &'a str,
    value: T,
}

// =============================================================================
// #[derive(Selectable)]
// =============================================================================

#[test]
fn test_derive_on_enum() {
    assert_eq!(Chrome::select_if(true, Chrome::Glass, Chrome::Flat), Chrome::Glass);
    assert_eq!(Chrome::select_unless(true, Chrome::Glass, Chrome::Flat), Chrome::Flat);
}

#[test]
fn test_derive_with_generics() {
    let inset = Inset::select_if(false, Inset { edge: 4u8 }, Inset { edge: 12u8 });
    assert_eq!(inset, Inset { edge: 12 });
}

#[test]
fn test_derive_with_lifetime_and_where_clause() {
    let picked = Labeled::select_resolved(|| Labeled { label: "count", value: 3 });
    assert_eq!(picked.label, "count");
    assert_eq!(picked.value, 3);
}

fn pick<T: Selectable>(flag: bool, a: T, b: T) -> T {
    T::select_if(flag, a, b)
}

#[test]
fn test_derived_type_in_generic_context() {
    assert_eq!(pick(false, Chrome::Glass, Chrome::Flat), Chrome::Flat);
}

// =============================================================================
// available!
// =============================================================================

#[test]
fn test_available_expands_requirements() {
    let glass = available!(ios 17, macos 14.2);
    assert_eq!(
        glass.requirements(),
        &[
            MinimumVersion::new(Platform::Ios, 17),
            MinimumVersion::at(Platform::MacOs, Version::new(14, 2)),
        ]
    );
    assert!(!glass.allows_others());
}

#[test]
fn test_available_matches_hand_built() {
    const HAND: Availability<'static> =
        Availability::new(&[MinimumVersion::new(Platform::Android, 14)], true);
    let generated = available!(android 14, *);
    assert_eq!(generated, HAND);
}

#[test]
fn test_available_evaluates_against_probe() {
    let glass = available!(ios 17, macos 14, *);
    assert!(glass.evaluate_with(&FixedProbe::new(Platform::Ios, Version::new(17, 0))));
    assert!(!glass.evaluate_with(&FixedProbe::new(Platform::Ios, Version::new(16, 4))));
    assert!(!glass.evaluate_with(&FixedProbe::new(Platform::MacOs, Version::new(13, 6))));
    assert!(glass.evaluate_with(&FixedProbe::new(Platform::Windows, Version::new(10, 0))));
    assert!(!glass.evaluate_with(&FixedProbe::unknown()));
}

#[test]
fn test_available_as_condition() {
    // Evaluated against the real host; only the shape of the result is known.
    let chrome = Chrome::select_if(available!(visionos 1, *), Chrome::Glass, Chrome::Flat);
    if Platform::current().is_none() {
        assert_eq!(chrome, Chrome::Flat);
    }
}
