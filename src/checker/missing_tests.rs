use super::*;
use crate::checker::FindingKind;
use crate::declaration::Position;

const POS: Position = Position::new(7, 1);

fn decl(name: &str, kind: DeclKind) -> Declaration {
    Declaration::new(name, kind, POS)
}

fn doc(lines: &[&str]) -> Comment {
    Comment::new(Position::new(6, 1), lines.iter().copied())
}

fn all_policies() -> Vec<Policy> {
    let mut policies = Vec::new();
    for bits in 0u8..32 {
        policies.push(
            Policy::new()
                .with_comment_exported_funcs(bits & 1 != 0)
                .with_comment_all_exported_funcs(bits & 2 != 0)
                .with_comment_interfaces(bits & 4 != 0)
                .with_comment_structs(bits & 8 != 0)
                .with_comment_tests(bits & 16 != 0),
        );
    }
    policies
}

#[test]
fn commented_predicate() {
    assert!(!is_commented(None));
    assert!(is_commented(Some(&doc(&["// Foo does X."]))));
    assert!(is_commented(Some(&doc(&["//"]))));
    assert!(!is_commented(Some(&doc(&["//nolint:lll"]))));
}

#[test]
fn commented_declarations_never_reported() {
    let kinds = [
        DeclKind::FreeFunction,
        DeclKind::ReceiverFunction,
        DeclKind::InterfaceMethod,
        DeclKind::Struct,
        DeclKind::Interface,
    ];
    for policy in all_policies() {
        for kind in kinds {
            for lines in [vec!["// Foo does X."], vec!["// Wrong word."], vec!["//"]] {
                let d = decl("Foo", kind).with_doc(doc(&lines));
                assert!(check_missing(&d, &policy).is_none(), "{kind:?} {policy:?}");
            }
        }
    }
}

#[test]
fn unexported_never_reported() {
    for policy in all_policies() {
        assert!(check_missing(&decl("foo", DeclKind::FreeFunction), &policy).is_none());
        assert!(check_missing(&decl("foo", DeclKind::Struct), &policy).is_none());
        assert!(check_missing(&decl("foo", DeclKind::Interface), &policy).is_none());
    }
}

#[test]
fn default_policy_reports_nothing() {
    let policy = Policy::new();
    for kind in [DeclKind::FreeFunction, DeclKind::Struct, DeclKind::Interface] {
        assert!(check_missing(&decl("Foo", kind), &policy).is_none());
    }
}

#[test]
fn all_exported_reports_functions() {
    let policy = Policy::new().with_comment_all_exported_funcs(true);
    let finding = check_missing(&decl("Foo", DeclKind::FreeFunction), &policy).unwrap();

    assert_eq!(finding.kind, FindingKind::MissingComment);
    assert_eq!(finding.position, POS);
    assert_eq!(finding.message, "exported element 'Foo' should be commented");
}

#[test]
fn all_exported_ignores_receiver_visibility() {
    let policy = Policy::new().with_comment_all_exported_funcs(true);
    let d = decl("Run", DeclKind::ReceiverFunction).with_receiver_exported(false);
    assert!(check_missing(&d, &policy).is_some());
}

#[test]
fn exported_requires_exported_receiver() {
    let policy = Policy::new().with_comment_exported_funcs(true);

    let public = decl("Run", DeclKind::ReceiverFunction).with_receiver_exported(true);
    assert!(check_missing(&public, &policy).is_some());

    let private = decl("Run", DeclKind::ReceiverFunction).with_receiver_exported(false);
    assert!(check_missing(&private, &policy).is_none());
}

#[test]
fn exported_covers_free_functions() {
    let policy = Policy::new().with_comment_exported_funcs(true);
    assert!(check_missing(&decl("Foo", DeclKind::FreeFunction), &policy).is_some());
}

#[test]
fn function_switches_do_not_cover_types() {
    let policy = Policy::new()
        .with_comment_exported_funcs(true)
        .with_comment_all_exported_funcs(true);
    assert!(check_missing(&decl("Foo", DeclKind::Struct), &policy).is_none());
    assert!(check_missing(&decl("Foo", DeclKind::Interface), &policy).is_none());
}

#[test]
fn type_switches() {
    let structs = Policy::new().with_comment_structs(true);
    assert!(check_missing(&decl("Foo", DeclKind::Struct), &structs).is_some());
    assert!(check_missing(&decl("Foo", DeclKind::Interface), &structs).is_none());
    assert!(check_missing(&decl("Foo", DeclKind::FreeFunction), &structs).is_none());

    let interfaces = Policy::new().with_comment_interfaces(true);
    assert!(check_missing(&decl("Foo", DeclKind::Interface), &interfaces).is_some());
    assert!(check_missing(&decl("Foo", DeclKind::Struct), &interfaces).is_none());
}

#[test]
fn test_elements_exempt_by_default() {
    let policy = Policy::new()
        .with_comment_exported_funcs(true)
        .with_comment_all_exported_funcs(true);
    let d = decl("TestBar", DeclKind::FreeFunction).with_test_element(true);
    assert!(check_missing(&d, &policy).is_none());
}

#[test]
fn comment_tests_lifts_exemption() {
    let policy = Policy::new()
        .with_comment_all_exported_funcs(true)
        .with_comment_tests(true);
    let d = decl("TestBar", DeclKind::FreeFunction).with_test_element(true);
    assert!(check_missing(&d, &policy).is_some());
}

#[test]
fn comment_tests_alone_enables_nothing() {
    let policy = Policy::new().with_comment_tests(true);
    let d = decl("TestBar", DeclKind::FreeFunction).with_test_element(true);
    assert!(check_missing(&d, &policy).is_none());
}

#[test]
fn directive_only_comment_counts_as_missing() {
    let policy = Policy::new().with_comment_all_exported_funcs(true);
    let d = decl("FreeFunc", DeclKind::FreeFunction).with_doc(doc(&["//nolint:commentmimic"]));
    let finding = check_missing(&d, &policy).unwrap();
    assert_eq!(finding.kind, FindingKind::MissingComment);
}
