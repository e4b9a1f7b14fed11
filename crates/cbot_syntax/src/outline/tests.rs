use super::*;
use crate::diagnostics::DiagnosticPolicy;
use crate::dump;

fn run(source: &str) -> Outline {
    run_with(source, &OutlineConfig::default())
}

fn run_with(source: &str, config: &OutlineConfig) -> Outline {
    outline(&dump::read(source).unwrap(), config)
}

fn codes(outline: &Outline) -> Vec<ErrorCode> {
    outline.diagnostics.iter().map(|d| d.code).collect()
}

fn names(outline: &Outline) -> Vec<&str> {
    outline.items.iter().map(OutlineItem::name).collect()
}

const ROBOT: &str = r#"
public class Robot extends Bot {
    int speed = 3 ;
    private static float range ;
    void run ( ) { move ( speed ) ; this . turn ( 90 ) ; }
}
void main ( ) { Robot r = new Robot ( ) ; r . run ( ) ; }
"#;

#[test]
fn test_outline_program() {
    let result = run(ROBOT);
    assert!(result.is_ok());
    insta::assert_snapshot!(result.to_string(), @r"
    public class Robot extends Bot
      field int speed
      private static field float range
      method void run()
        call move
        call .turn
    function void main()
      call Robot
      call .run
    ");
}

#[test]
fn test_class_item_details() {
    let result = run(ROBOT);
    let robot = result.find("Robot").unwrap();

    assert!(robot.is_class());
    assert_eq!(robot.modifiers.protection, ProtectionLevel::Public);
    let ItemKind::Class { extends, members, .. } = &robot.kind else {
        panic!("expected a class, got {:?}", robot.kind);
    };
    assert_eq!(extends.as_deref(), Some("Bot"));
    assert_eq!(members.len(), 3);
    assert_eq!(members[1].name, "range");
    assert!(members[1].modifiers.is_static);
    assert_eq!(members[1].kind, MemberKind::Field { ty: "float".to_string() });
}

#[test]
fn test_modifiers_listed_in_canonical_order() {
    let result = run("synchronized static private void f ( ) { }");
    let modifiers = result.items[0].modifiers;

    assert_eq!(
        modifiers.keywords().collect::<Vec<_>>(),
        vec![KeywordId::Private, KeywordId::Static, KeywordId::Synchronized]
    );
    assert_eq!(modifiers.to_string(), "private static synchronized ");
    assert_eq!(Modifiers::default().keywords().count(), 0);
}

#[test]
fn test_item_body_covers_braces() {
    let tokens = dump::read("void f ( ) { x ; }").unwrap();
    let result = outline(&tokens, &OutlineConfig::default());
    let body = result.items[0].body.clone();

    assert_eq!(body, 4..8);
    assert_eq!(tokens.tokens()[body.start].text, "{");
    assert_eq!(tokens.tokens()[body.end - 1].text, "}");
}

#[test]
fn test_item_span_starts_at_modifiers() {
    let source = "static void f ( ) { }";
    let result = run(source);
    assert_eq!(result.items[0].span, Span::new(0, source.len()));
}

#[test]
fn test_signature_with_owner_and_params() {
    let result = run("extern void object :: Patrol ( float dist , int n , x ) { }");
    let ItemKind::Function { signature, .. } = &result.items[0].kind else {
        panic!("expected a function");
    };

    assert!(result.items[0].modifiers.is_extern);
    assert_eq!(signature.return_type.as_deref(), Some("void"));
    assert_eq!(signature.owner.as_deref(), Some("object"));
    assert_eq!(signature.name, "Patrol");
    assert_eq!(
        signature.params,
        vec![
            Param { ty: Some("float".to_string()), name: "dist".to_string() },
            Param { ty: Some("int".to_string()), name: "n".to_string() },
            Param { ty: None, name: "x".to_string() },
        ]
    );
    assert_eq!(signature.to_string(), "void object::Patrol(float dist, int n, x)");
}

// ============================================================================
// Diagnostics and recovery
// ============================================================================

#[test]
fn test_broken_header_recovers_at_next_declaration() {
    let result = run("void broken ( int a { } class Ok { } void fine ( ) { }");

    assert_eq!(names(&result), vec!["Ok", "fine"]);
    assert_eq!(codes(&result), vec![ErrorCode::ClosePar]);
    assert_eq!(result.diagnostics[0].token_index, 5);
    assert_eq!(result.diagnostics[0].found, "`{`");
    assert!(
        result
            .to_string()
            .ends_with("error[E5001] closing parenthesis missing (found `{`) at 20..21\n")
    );
}

#[test]
fn test_unclosed_block_points_at_opening_brace() {
    let result = run("class A { void f ( ) {");

    assert!(result.items.is_empty());
    assert_eq!(codes(&result), vec![ErrorCode::CloseBlock]);
    assert_eq!(result.diagnostics[0].token_index, 2);
}

#[test]
fn test_missing_function_name() {
    let result = run("extern ( ) { } void ok ( ) { }");

    assert_eq!(codes(&result), vec![ErrorCode::NoFunc]);
    assert_eq!(result.diagnostics[0].token_index, 1);
    assert_eq!(names(&result), vec!["ok"]);
}

#[test]
fn test_missing_class_name() {
    let result = run("class { } class B { }");

    assert_eq!(codes(&result), vec![ErrorCode::NoClassName]);
    assert_eq!(result.diagnostics[0].found, "`{`");
    assert_eq!(names(&result), vec!["B"]);
}

#[test]
fn test_function_header_without_body() {
    let result = run("foo ( ) ;");

    assert_eq!(codes(&result), vec![ErrorCode::OpenBlock]);
    assert_eq!(result.diagnostics[0].found, "`;`");
}

#[test]
fn test_garbage_recovery_skips_to_next_block() {
    // Recovery resynchronizes on the first `{`, which swallows `A`.
    let result = run("x ; class A { } class B { }");

    assert_eq!(codes(&result), vec![ErrorCode::NoDeclaration]);
    assert_eq!(result.diagnostics[0].token_index, 0);
    assert_eq!(names(&result), vec!["B"]);
}

#[test]
fn test_no_recover_stops_at_first_error() {
    let config = OutlineConfig::new().with_recover(false);
    let result = run_with("x { } class B { }", &config);

    assert_eq!(codes(&result), vec![ErrorCode::NoDeclaration]);
    assert!(result.items.is_empty());
}

#[test]
fn test_max_errors_caps_diagnostics() {
    let source = "x { } y { } z { }";
    assert_eq!(run(source).diagnostics.len(), 3);

    let config = OutlineConfig::new().with_max_errors(2);
    assert_eq!(run_with(source, &config).diagnostics.len(), 2);
}

#[test]
fn test_terminates_on_stray_closers() {
    let result = run("} } ) (");
    assert_eq!(codes(&result), vec![ErrorCode::NoDeclaration]);
    assert!(result.items.is_empty());
}

#[test]
fn test_empty_stream() {
    let result = run("");
    assert_eq!(result, Outline::default());
    assert_eq!(result.into_result(), Ok(Vec::new()));
}

#[test]
fn test_into_result_returns_diagnostics() {
    let err = run("{ }").into_result().unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(err[0].code, ErrorCode::NoDeclaration);
}

// ============================================================================
// Class members
// ============================================================================

#[test]
fn test_member_without_name_is_skipped() {
    let result = run("class A { = 3 ; void g ( ) { } }");

    assert_eq!(codes(&result), vec![ErrorCode::NoVar]);
    assert_eq!(result.diagnostics[0].token_index, 3);
    let ItemKind::Class { members, .. } = &result.items[0].kind else {
        panic!("expected a class");
    };
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].name, "g");
}

#[test]
fn test_field_without_type() {
    for source in ["class A { int = 3 ; }", "class A { speed ; }"] {
        let result = run(source);
        assert_eq!(codes(&result), vec![ErrorCode::NoType], "{source}");
        assert_eq!(result.diagnostics[0].token_index, 3, "{source}");
        let ItemKind::Class { members, .. } = &result.items[0].kind else {
            panic!("expected a class");
        };
        assert!(members.is_empty(), "{source}");
    }
}

#[test]
fn test_no_recover_stops_member_scan() {
    let source = "class A { = 1 ; = 2 ; int ok ; } class B { }";
    assert_eq!(codes(&run(source)), vec![ErrorCode::NoVar, ErrorCode::NoVar]);

    let config = OutlineConfig::new().with_recover(false);
    let result = run_with(source, &config);
    assert_eq!(codes(&result), vec![ErrorCode::NoVar]);
    assert_eq!(names(&result), vec!["A"]);
}

#[test]
fn test_field_without_terminator() {
    let result = run("class A { int x }");

    assert_eq!(codes(&result), vec![ErrorCode::NoTerminator]);
    assert_eq!(result.diagnostics[0].found, "`}`");
    assert_eq!(names(&result), vec!["A"]);
}

#[test]
fn test_field_initializer_with_nested_block() {
    let result = run("class A { int [ ] xs = { 1 , 2 } ; }");
    let ItemKind::Class { members, .. } = &result.items[0].kind else {
        panic!("expected a class");
    };
    assert!(result.is_ok());
    assert_eq!(members[0].name, "xs");
    assert_eq!(members[0].kind, MemberKind::Field { ty: "int".to_string() });
}

#[test]
fn test_scan_members_and_calls_can_be_disabled() {
    let config = OutlineConfig::new().with_scan_members(false).with_collect_calls(false);
    let result = run_with(ROBOT, &config);

    insta::assert_snapshot!(result.to_string(), @r"
    public class Robot extends Bot
    function void main()
    ");
}

#[test]
fn test_policy_is_applied_per_declaration() {
    let config = OutlineConfig::new().with_policy(DiagnosticPolicy::FirstWins);
    let result = run_with("class { } class { }", &config);
    assert_eq!(codes(&result), vec![ErrorCode::NoClassName, ErrorCode::NoClassName]);
}
