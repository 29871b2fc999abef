//! Tests for static value selection (free functions and `Selectable`).

use std::cell::Cell;

use tola_branch::prelude::*;
use tola_branch::{impl_selectable, select_if, select_resolved, select_unless};

#[derive(Debug, Clone, PartialEq)]
enum Material {
    Glass,
    Matte,
    Plain,
}

impl Selectable for Material {}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Radius(f32);

impl_selectable!(Radius);

// =============================================================================
// select_if / select_unless
// =============================================================================

#[test]
fn test_select_if_literals() {
    assert_eq!(select_if(true, "A", "B"), "A");
    assert_eq!(select_if(false, "A", "B"), "B");
}

#[test]
fn test_select_unless_literals() {
    assert_eq!(select_unless(true, 1, 2), 2);
    assert_eq!(select_unless(false, 1, 2), 1);
}

#[test]
fn test_select_matches_if_expression() {
    for c in [true, false] {
        assert_eq!(select_if(c, 10, 20), if c { 10 } else { 20 });
        assert_eq!(select_unless(c, 10, 20), select_if(!c, 10, 20));
        assert_eq!(select_unless(c, 10, 20), select_if(Not(c), 10, 20));
    }
}

#[test]
fn test_closure_condition_runs_once() {
    let calls = Cell::new(0);
    let cond = || {
        calls.set(calls.get() + 1);
        true
    };
    assert_eq!(select_if(cond, 'x', 'y'), 'x');
    assert_eq!(calls.get(), 1);

    let cond = || {
        calls.set(calls.get() + 1);
        true
    };
    assert_eq!(select_unless(cond, 'x', 'y'), 'y');
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_not_is_involutive() {
    assert!(Not(Not(true)).evaluate());
    assert!(!Not(Not(false)).evaluate());
    assert!(Not(|| false).evaluate());
}

// =============================================================================
// select_resolved
// =============================================================================

#[test]
fn test_select_resolved_runs_resolver_once() {
    let calls = Cell::new(0);
    let tier = |major: u32| {
        select_resolved(|| {
            calls.set(calls.get() + 1);
            if major >= 17 {
                Material::Glass
            } else if major >= 15 {
                Material::Matte
            } else {
                Material::Plain
            }
        })
    };

    assert_eq!(tier(18), Material::Glass);
    assert_eq!(tier(15), Material::Matte);
    assert_eq!(tier(12), Material::Plain);
    assert_eq!(calls.get(), 3);
}

#[test]
#[should_panic(expected = "resolver failed")]
fn test_resolver_panic_propagates() {
    let _: Material = select_resolved(|| panic!("resolver failed"));
}

#[test]
#[should_panic(expected = "condition failed")]
fn test_condition_panic_propagates() {
    let _ = select_if(|| -> bool { panic!("condition failed") }, 1, 2);
}

// =============================================================================
// Selectable (marker opt-in)
// =============================================================================

#[test]
fn test_marker_impl_gains_selection() {
    assert_eq!(
        Material::select_if(true, Material::Glass, Material::Plain),
        Material::Glass
    );
    assert_eq!(
        Material::select_unless(true, Material::Glass, Material::Plain),
        Material::Plain
    );
    assert_eq!(Material::select_resolved(|| Material::Matte), Material::Matte);
}

#[test]
fn test_impl_selectable_macro() {
    assert_eq!(Radius::select_if(false, Radius(20.0), Radius(8.0)), Radius(8.0));
}

#[test]
fn test_std_types_are_selectable() {
    assert_eq!(u32::select_if(true, 1, 2), 1);
    assert_eq!(<&str>::select_unless(false, "on", "off"), "on");
    assert_eq!(String::select_if(false, "a".into(), "b".into()), "b");
    assert_eq!(Option::<u8>::select_if(true, None, Some(3)), None);
    assert_eq!(Vec::<i32>::select_resolved(|| vec![1, 2]), vec![1, 2]);
    assert_eq!(<[u8; 2]>::select_if(true, [1, 2], [3, 4]), [1, 2]);
}

#[test]
fn test_selection_moves_without_cloning() {
    // Non-Clone values are moved through; the unselected one is dropped.
    struct Token(&'static str);
    impl Selectable for Token {}

    let picked = Token::select_if(false, Token("primary"), Token("fallback"));
    assert_eq!(picked.0, "fallback");
}
