use sgql_syntax::{
    collect_fragments, parse, print, tokenize, Definition, LexErrorKind, OperationType,
    ParseError, Selection, Source, Span, TokenKind, Type, Value, VisitError,
};

const KITCHEN_SINK: &str = r#"
# A document mixing every kind of definition.
query HeroQuery($episode: Episode = JEDI, $first: Int!) @live {
  hero(episode: $episode) {
    id
    name
    ...HeroDetails
    ... on Droid { primaryFunction }
    friends(first: $first) @include(if: true) {
      edges { node { name } }
    }
  }
}

mutation CreateReview($review: ReviewInput!) {
  createReview(review: $review) { stars commentary }
}

subscription OnReview {
  reviewAdded { stars }
}

fragment HeroDetails on Character {
  appearsIn
  filters: search(where: { tags: ["a", "b"], limit: 10, ratio: 0.5, raw: """x""" })
}

"""
The root query.
"""
type Query {
  hero(episode: Episode): Character
}

enum Episode { NEWHOPE EMPIRE JEDI }
"#;

fn operation_pairs(text: &str) -> Vec<(Option<String>, OperationType)> {
    let document = parse(&Source::new(text)).unwrap();
    let mut pairs: Vec<_> = document
        .operations()
        .map(|op| (op.name().map(str::to_string), op.operation))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.as_str().cmp(b.1.as_str())));
    pairs
}

#[test]
fn reprinting_preserves_operation_names_and_types() {
    let printed = print(&parse(&Source::new(KITCHEN_SINK)).unwrap());
    assert_eq!(operation_pairs(KITCHEN_SINK), operation_pairs(&printed));
    assert_eq!(operation_pairs(&printed).len(), 3);
}

#[test]
fn reprinting_anonymous_operations() {
    let text = "{ a } query { b } mutation { c }";
    let printed = print(&parse(&Source::new(text)).unwrap());
    assert_eq!(operation_pairs(text), operation_pairs(&printed));
}

#[test]
fn reprinting_is_structurally_stable() {
    let once = print(&parse(&Source::new(KITCHEN_SINK)).unwrap());
    let twice = print(&parse(&Source::new(&once)).unwrap());
    assert_eq!(once, twice);
}

#[test]
fn int_and_float_tokens() {
    let source = Source::new("123");
    let tokens = tokenize(&source).unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].span, Span::new(0, 3));
    assert_eq!(tokens[1].kind, TokenKind::Eof);

    let source = Source::new("1.5e10");
    let tokens = tokenize(&source).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Float);
    assert_eq!(tokens[0].span, Span::new(0, 6));

    let source = Source::new("1.");
    let error = tokenize(&source).unwrap_err();
    assert!(matches!(error.kind, LexErrorKind::MalformedNumber(_)));
}

#[test]
fn anonymous_query_shorthand() {
    let document = parse(&Source::new("{ a }")).unwrap();
    assert_eq!(document.definitions.len(), 1);
    let Definition::Operation(op) = &document.definitions[0] else {
        panic!("expected an operation");
    };
    assert_eq!(op.operation, OperationType::Query);
    assert!(op.name.is_none());
    assert_eq!(op.selection_set.selections.len(), 1);
    assert!(matches!(
        &op.selection_set.selections[0],
        Selection::Field(field) if field.name.as_str() == "a" && field.alias.is_none()
    ));
}

#[test]
fn duplicate_fragments_fail_during_visit() {
    let document = parse(&Source::new(
        "{ ...F } fragment F on T { a } fragment F on T { b }",
    ))
    .unwrap();
    let error = collect_fragments(&document).unwrap_err();
    assert!(matches!(error, VisitError::DuplicateFragment { ref name, .. } if name == "F"));
}

#[test]
fn variables_and_arguments() {
    let document = parse(&Source::new("query Foo($x: Int = 5) { field(arg: $x) }")).unwrap();
    let op = document.operations().next().unwrap();
    assert_eq!(op.name(), Some("Foo"));

    let [var] = op.variable_definitions.as_slice() else {
        panic!("expected one variable definition");
    };
    assert_eq!(var.variable.name.as_str(), "x");
    assert!(matches!(&var.ty, Type::Named(named) if named.name.as_str() == "Int"));
    let Some(Value::Int(default)) = &var.default_value else {
        panic!("expected an int default");
    };
    assert_eq!(default.as_i64(), Some(5));

    let Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field");
    };
    let [arg] = field.arguments.as_slice() else {
        panic!("expected one argument");
    };
    assert_eq!(arg.name.as_str(), "arg");
    assert!(matches!(&arg.value, Value::Variable(v) if v.name.as_str() == "x"));
}

#[test]
fn empty_documents_have_no_definitions() {
    for text in ["", "   \n\t", "# comment\n# another", "\u{FEFF}"] {
        let document = parse(&Source::new(text)).unwrap();
        assert!(document.definitions.is_empty(), "input {text:?}");
    }
}

#[test]
fn unterminated_string_reports_opening_quote() {
    let error = parse(&Source::new("\"abc")).unwrap_err();
    let ParseError::Lex { error, .. } = &error else {
        panic!("expected a lex error, got {error:?}");
    };
    assert_eq!(error.kind, LexErrorKind::UnterminatedString);
    assert_eq!(error.offset, 0);
}

#[test]
fn errors_render_with_line_and_column() {
    let text = "query {\n  a\n  b(\n}";
    let error = parse(&Source::new(text)).unwrap_err();
    assert_eq!(error.to_string(), "4:1: expected Name, found \"}\"");
}

#[test]
fn documents_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Source>();
    assert_send_sync::<sgql_syntax::Document>();
    assert_send_sync::<ParseError>();
}
