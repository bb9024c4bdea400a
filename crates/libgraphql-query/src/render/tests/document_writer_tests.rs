use crate::DirectiveAnnotation;
use crate::operation::OperationBuilder;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::operation::SelectionSetBuildError;
use crate::operation::SelectionSetBuilder;
use crate::operation::Variable;
use crate::render::DocumentParts;
use crate::render::RenderOptions;
use crate::render::render_document;
use indexmap::IndexMap;

fn leaf_selections(names: &[&str]) -> Vec<Selection> {
    let mut builder = SelectionSetBuilder::new();
    builder.fields(names.iter().copied());
    builder.selections().to_vec()
}

#[test]
fn header_lists_variables_and_directives() {
    let root = leaf_selections(&["id"]);
    let variables = IndexMap::from([
        ("first".to_string(), Variable::new("Int").with_default_value("10")),
        ("query".to_string(), Variable::new("String!")),
    ]);
    let directives = vec![DirectiveAnnotation::new("cached").arg("ttl", 60)];

    let rendered = render_document(&DocumentParts {
        directives: &directives,
        fragments: &IndexMap::new(),
        kind: OperationKind::Query,
        name: Some("Search"),
        root_selections: &root,
        sub_operations: &[],
        variables: &variables,
    }, &RenderOptions::default());

    assert_eq!(
        rendered,
        "query Search($first: Int = 10, $query: String!) @cached(ttl: 60) { id }",
    );
}

#[test]
fn empty_operation_renders_empty_block() {
    let parts = DocumentParts {
        directives: &[],
        fragments: &IndexMap::new(),
        kind: OperationKind::Mutation,
        name: None,
        root_selections: &[],
        sub_operations: &[],
        variables: &IndexMap::new(),
    };

    assert_eq!(render_document(&parts, &RenderOptions::compact()), "mutation { }");
    assert_eq!(render_document(&parts, &RenderOptions::pretty()), "mutation {\n}");
}

#[test]
fn fragments_follow_the_operation_in_declaration_order() -> Result<(), SelectionSetBuildError> {
    let mut query = OperationBuilder::query();
    query
        .fields(["id"])
        .fragment("B", "Shop", |shop| {
            shop.fields(["b"]);
            Ok(())
        })?
        .fragment("A", "Shop", |shop| {
            shop.fields(["a"]);
            Ok(())
        })?;
    let operation = query.into_operation();

    let parts = DocumentParts {
        directives: &[],
        fragments: operation.fragments(),
        kind: OperationKind::Query,
        name: None,
        root_selections: operation.selection_set().selections(),
        sub_operations: &[],
        variables: &IndexMap::new(),
    };

    assert_eq!(
        render_document(&parts, &RenderOptions::compact()),
        "query { id }\nfragment B on Shop { b }\nfragment A on Shop { a }",
    );
    assert_eq!(
        render_document(&parts, &RenderOptions::pretty()),
        "query {\n  id\n}\nfragment B on Shop {\n  b\n}\nfragment A on Shop {\n  a\n}",
    );

    Ok(())
}
