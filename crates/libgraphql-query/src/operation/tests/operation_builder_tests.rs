use crate::DirectiveAnnotation;
use crate::operation::FieldSpec;
use crate::operation::Operation;
use crate::operation::OperationBuilder;
use crate::operation::OperationKind;
use crate::operation::SelectionSetBuildError;
use crate::operation::Variable;
use crate::render::RenderOptions;
use crate::Value;
use rayon::prelude::*;

type Result<T> = std::result::Result<T, SelectionSetBuildError>;

fn collection_query() -> Result<OperationBuilder> {
    let mut query = OperationBuilder::query();
    query
        .name("GetCollection")
        .operation_directive(DirectiveAnnotation::new("country").arg("code", "FR"))
        .variables([
            ("productsCount", Variable::new("Int!")),
            ("imageFormat", Variable::new("String!").with_default_value("JPG")),
        ])
        .fields([
            FieldSpec::new("id"),
            FieldSpec::new(("description", "aliasDescription")),
            FieldSpec::new("price")
                .directive("inCurrency", Value::object([("currency", "EUR")])),
        ])
        .object("image", |image| {
            image.fields([
                FieldSpec::new("alt"),
                FieldSpec::new("url").arg("format", "$imageFormat"),
            ]);
            Ok(())
        })?
        .object(("feedback", "aliasFeedback"), |feedback| {
            feedback.fields(["rating", "comment"]);
            Ok(())
        })?
        .connection(
            FieldSpec::new("products").arg("first", "$productsCount"),
            |products| {
                products.nodes(|node| {
                    node.use_fragment("ProductFragment")?;
                    Ok(())
                })?;
                Ok(())
            },
        )?
        .fragment("ProductFragment", "Product", |fragment| {
            fragment
                .fields(["title"])
                .connection(
                    FieldSpec::new("media").arg("first", "$productsCount"),
                    |media| {
                        media.nodes(|node| {
                            node.fields(["alt"])
                                .inline_fragment("Image", |image| {
                                    image.fields(["width", "height"]);
                                    Ok(())
                                })?
                                .inline_fragment("Model3d", |model| {
                                    model.fields(["boundingBox"]);
                                    Ok(())
                                })?;
                            Ok(())
                        })?;
                        Ok(())
                    },
                )?;
            Ok(())
        })?;
    Ok(query)
}

#[test]
fn renders_single_sub_operation_query() -> Result<()> {
    let mut query = OperationBuilder::query();
    query
        .name("GetThing")
        .variables([("id", "ID!")])
        .operation(FieldSpec::new("thing").arg("id", "$id"), |thing| {
            thing.fields(["id", "handle"]);
            Ok(())
        })?;

    assert_eq!(query.build(&RenderOptions::pretty()), "\
query GetThing($id: ID!) {
  thing(id: $id) {
    id
    handle
  }
}");

    Ok(())
}

#[test]
fn renders_collection_query_with_fragments() -> Result<()> {
    let query = collection_query()?;

    assert_eq!(query.build(&RenderOptions::pretty()), "\
query GetCollection($productsCount: Int!, $imageFormat: String! = JPG) @country(code: \"FR\") {
  id
  aliasDescription: description
  price @inCurrency(currency: \"EUR\")
  image {
    alt
    url(format: $imageFormat)
  }
  aliasFeedback: feedback {
    rating
    comment
  }
  products(first: $productsCount) {
    nodes {
      ...ProductFragment
    }
    pageInfo {
      hasNextPage
      hasPreviousPage
      startCursor
      endCursor
    }
  }
}
fragment ProductFragment on Product {
  title
  media(first: $productsCount) {
    nodes {
      alt
      ... on Image {
        width
        height
      }
      ... on Model3d {
        boundingBox
      }
    }
    pageInfo {
      hasNextPage
      hasPreviousPage
      startCursor
      endCursor
    }
  }
}");

    Ok(())
}

#[test]
fn renders_nested_mutation_payload() -> Result<()> {
    let mut mutation = OperationBuilder::mutation();
    mutation
        .name("CreateMetaobject")
        .variables([("metaobject", "CreateMetaobjectInput!")])
        .operation(
            FieldSpec::new("metaobjectCreate").arg("metaobject", "$metaobject"),
            |payload| {
                payload
                    .object("metaobject", |metaobject| {
                        metaobject
                            .fields(["handle"])
                            .object(
                                FieldSpec::new(("field", "season")).arg("key", "season"),
                                |season| {
                                    season.fields(["value"]);
                                    Ok(())
                                },
                            )?;
                        Ok(())
                    })?
                    .object("userErrors", |user_errors| {
                        user_errors.fields(["field", "message", "code"]);
                        Ok(())
                    })?;
                Ok(())
            },
        )?;

    assert_eq!(mutation.build(&RenderOptions::pretty()), "\
mutation CreateMetaobject($metaobject: CreateMetaobjectInput!) {
  metaobjectCreate(metaobject: $metaobject) {
    metaobject {
      handle
      season: field(key: \"season\") {
        value
      }
    }
    userErrors {
      field
      message
      code
    }
  }
}");

    Ok(())
}

#[test]
fn batches_multiple_sub_operations_in_call_order() -> Result<()> {
    let mut mutation = OperationBuilder::mutation();
    mutation
        .name("UpdateData")
        .variables([
            ("product", "CreateProductInput!"),
            ("variant", "CreateVariantInput"),
        ])
        .operation(FieldSpec::new("productCreate").arg("product", "$product"), |payload| {
            payload.object("product", |product| {
                product.fields(["id"]);
                Ok(())
            })?;
            Ok(())
        })?
        .operation(
            FieldSpec::new(("variantCreate", "aliasVariantCreate")).arg("variant", "$variant"),
            |payload| {
                payload.object("variant", |variant| {
                    variant.fields(["id"]);
                    Ok(())
                })?;
                Ok(())
            },
        )?;

    assert_eq!(
        mutation.build(&RenderOptions::default()),
        "mutation UpdateData($product: CreateProductInput!, $variant: CreateVariantInput) { \
        productCreate(product: $product) { product { id } } \
        aliasVariantCreate: variantCreate(variant: $variant) { variant { id } } }",
    );

    Ok(())
}

#[test]
fn root_selections_render_before_sub_operations() -> Result<()> {
    let mut query = OperationBuilder::query();
    query
        .operation("viewer", |viewer| {
            viewer.fields(["id"]);
            Ok(())
        })?
        .fields(["apiVersion"]);

    assert_eq!(
        query.build(&RenderOptions::default()),
        "query { apiVersion viewer { id } }",
    );

    Ok(())
}

#[test]
fn build_is_repeatable() -> Result<()> {
    let query = collection_query()?;

    for options in [RenderOptions::compact(), RenderOptions::pretty()] {
        assert_eq!(query.build(&options), query.build(&options));
    }

    Ok(())
}

#[test]
fn variables_call_replaces_the_whole_set() {
    let mut query = OperationBuilder::query();
    query
        .variables([("first", "Int"), ("after", "String")])
        .variables([("last", "Int")])
        .fields(["id"]);

    assert_eq!(query.build(&RenderOptions::default()), "query($last: Int) { id }");
}

#[test]
fn later_fragment_definition_replaces_earlier() -> Result<()> {
    let mut query = OperationBuilder::query();
    query
        .use_fragment("Fields")?
        .fragment("Fields", "Shop", |shop| {
            shop.fields(["id"]);
            Ok(())
        })?
        .fragment("Other", "Shop", |shop| {
            shop.fields(["url"]);
            Ok(())
        })?
        .fragment("Fields", "Shop", |shop| {
            shop.fields(["name"]);
            Ok(())
        })?;

    assert_eq!(
        query.build(&RenderOptions::default()),
        "query { ...Fields }\nfragment Fields on Shop { name }\nfragment Other on Shop { url }",
    );

    Ok(())
}

#[test]
fn blank_fragment_definitions_are_rejected() {
    let mut query = OperationBuilder::query();

    assert_eq!(
        query.fragment("", "Shop", |_| Ok(())).map(|_| ()),
        Err(SelectionSetBuildError::EmptyFragmentName),
    );
    assert_eq!(
        query.fragment("ShopFields", "  ", |_| Ok(())).map(|_| ()),
        Err(SelectionSetBuildError::EmptyTypeCondition {
            type_condition: "  ".to_string(),
        }),
    );
    assert!(query.to_operation().fragments().is_empty());
}

#[test]
fn operation_directives_accumulate() {
    let mut query = OperationBuilder::query();
    query
        .name("Cached")
        .operation_directive(DirectiveAnnotation::new("cached").arg("ttl", 60))
        .operation_directive(DirectiveAnnotation::new("live"))
        .fields(["id"]);

    assert_eq!(
        query.build(&RenderOptions::default()),
        "query Cached @cached(ttl: 60) @live { id }",
    );
}

#[test]
fn empty_name_is_omitted_from_the_header() {
    let mut query = OperationBuilder::subscription();
    query.name("").fields(["ping"]);

    assert_eq!(query.build(&RenderOptions::default()), "subscription { ping }");
}

#[test]
fn custom_indent_unit_is_repeated_per_level() -> Result<()> {
    let mut query = OperationBuilder::query();
    query.object("shop", |shop| {
        shop.fields(["name"]);
        Ok(())
    })?;

    assert_eq!(
        query.build(&RenderOptions::pretty().with_indent("\t")),
        "query {\n\tshop {\n\t\tname\n\t}\n}",
    );

    Ok(())
}

#[test]
fn snapshot_renders_like_the_builder() -> Result<()> {
    let query = collection_query()?;
    let operation = query.to_operation();

    assert_eq!(operation.kind(), OperationKind::Query);
    assert_eq!(operation.name(), Some("GetCollection"));
    assert_eq!(operation.variables().len(), 2);
    assert_eq!(operation.directives().len(), 1);
    assert_eq!(operation.fragments().len(), 1);
    for options in [RenderOptions::compact(), RenderOptions::pretty()] {
        assert_eq!(operation.to_graphql_string(&options), query.build(&options));
    }
    assert_eq!(query.clone().into_operation(), operation);

    Ok(())
}

#[test]
fn operation_builder_shorthand_matches_new() {
    assert_eq!(Operation::builder(OperationKind::Mutation), OperationBuilder::mutation());
    assert_eq!(OperationBuilder::new(OperationKind::Query), OperationBuilder::query());
}

#[test]
fn rendered_documents_parse_as_graphql() -> Result<()> {
    let query = collection_query()?;

    for options in [RenderOptions::compact(), RenderOptions::pretty()] {
        let rendered = query.build(&options);
        let parsed = graphql_parser::parse_query::<String>(&rendered);
        assert!(parsed.is_ok(), "failed to parse:\n{rendered}\n{parsed:?}");
    }

    Ok(())
}

#[test]
fn operation_renders_identically_across_threads() -> Result<()> {
    let operation = collection_query()?.into_operation();
    let options = RenderOptions::pretty();
    let expected = operation.to_graphql_string(&options);

    let rendered: Vec<String> =
        (0..32)
            .into_par_iter()
            .map(|_| operation.to_graphql_string(&options))
            .collect();

    assert!(rendered.iter().all(|text| text == &expected));

    Ok(())
}
