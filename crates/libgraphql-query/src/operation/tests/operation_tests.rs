use crate::operation::FragmentSpread;
use crate::operation::InlineFragment;
use crate::operation::OperationBuilder;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::SelectionSetBuildError;
use crate::operation::SelectionSetBuilder;
use crate::render::RenderOptions;

#[test]
fn builder_made_operations_validate() -> Result<(), SelectionSetBuildError> {
    let mut query = OperationBuilder::query();
    query
        .use_fragment("ShopFields")?
        .inline_fragment("Shop", |shop| {
            shop.fields(["id"]);
            Ok(())
        })?
        .fragment("ShopFields", "Shop", |shop| {
            shop.fields(["name"]);
            Ok(())
        })?;

    assert_eq!(query.into_operation().validate(), Ok(()));

    Ok(())
}

#[test]
fn hand_built_blank_spread_fails_validation() {
    let mut query = OperationBuilder::query();
    query.add_selection(Selection::FragmentSpread(FragmentSpread::new(" ", vec![])));

    assert_eq!(
        query.into_operation().validate(),
        Err(vec![SelectionSetBuildError::EmptyFragmentName]),
    );
}

#[test]
fn validation_reports_every_nested_problem() -> Result<(), SelectionSetBuildError> {
    let blank_inline = Selection::InlineFragment(InlineFragment::new(
        "",
        vec![],
        SelectionSet {
            selections: vec![
                Selection::FragmentSpread(FragmentSpread::new("", vec![])),
            ],
        },
    ));

    let mut query = OperationBuilder::query();
    query.object("shop", |shop| {
        shop.add_selection(blank_inline);
        Ok(())
    })?;

    assert_eq!(
        query.into_operation().validate(),
        Err(vec![
            SelectionSetBuildError::EmptyTypeCondition {
                type_condition: String::new(),
            },
            SelectionSetBuildError::EmptyFragmentName,
        ]),
    );

    Ok(())
}

#[test]
fn hand_built_spread_with_directives_renders() {
    let mut query = OperationBuilder::query();
    query.add_selection(Selection::FragmentSpread(FragmentSpread::new(
        "ShopFields",
        vec![crate::DirectiveAnnotation::new("include").arg("if", "$withShop")],
    )));

    assert_eq!(
        query.to_operation().to_graphql_string(&RenderOptions::default()),
        "query { ...ShopFields @include(if: $withShop) }",
    );
}

#[test]
fn hand_built_inline_fragment_with_directives_renders() {
    let mut image = SelectionSetBuilder::new();
    image.fields(["url"]);

    let mut query = OperationBuilder::query();
    query.add_selection(Selection::InlineFragment(InlineFragment::new(
        "Image",
        vec![crate::DirectiveAnnotation::new("include").arg("if", "$x")],
        image.build(),
    )));
    let operation = query.into_operation();

    assert_eq!(operation.validate(), Ok(()));
    assert_eq!(
        operation.to_graphql_string(&RenderOptions::compact()),
        "query { ... on Image @include(if: $x) { url } }",
    );
    assert_eq!(
        operation.to_graphql_string(&RenderOptions::pretty()),
        "query {\n  ... on Image @include(if: $x) {\n    url\n  }\n}",
    );
}
