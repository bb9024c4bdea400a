use crate::DirectiveAnnotation;
use crate::operation::ConnectionBuilder;
use crate::operation::FieldSpec;
use crate::operation::Fragment;
use crate::operation::ObjectSelection;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::operation::SelectionSetBuildError;
use crate::operation::SelectionSetBuilder;
use crate::operation::SelectionSetBuilderTrait;
use crate::operation::Variable;
use crate::render::DocumentParts;
use crate::render::RenderOptions;
use indexmap::IndexMap;
use inherent::inherent;

type Result<T> = std::result::Result<T, SelectionSetBuildError>;

/// Builds one GraphQL operation (plus the fragment definitions it uses) and
/// renders it with [`build`](Self::build).
///
/// Root field selections are added through the
/// [`SelectionSetBuilderTrait`] surface. Named sub-operations added with
/// [`operation`](Self::operation) render after them, which allows batching
/// several mutations or queries in one document.
///
/// ```
/// use libgraphql_query::operation::FieldSpec;
/// use libgraphql_query::operation::OperationBuilder;
/// use libgraphql_query::render::RenderOptions;
///
/// # fn main() -> Result<(), libgraphql_query::operation::SelectionSetBuildError> {
/// let mut mutation = OperationBuilder::mutation();
/// mutation
///     .name("UpdateData")
///     .variables([("product", "CreateProductInput!")])
///     .operation(FieldSpec::new("productCreate").arg("product", "$product"), |payload| {
///         payload.object("product", |product| {
///             product.fields(["id"]);
///             Ok(())
///         })?;
///         Ok(())
///     })?;
///
/// assert_eq!(
///     mutation.build(&RenderOptions::default()),
///     "mutation UpdateData($product: CreateProductInput!) { \
///     productCreate(product: $product) { product { id } } }",
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct OperationBuilder {
    directives: Vec<DirectiveAnnotation>,
    fragments: IndexMap<String, Fragment>,
    name: Option<String>,
    operation_kind: OperationKind,
    selection_set_builder: SelectionSetBuilder,
    sub_operations: Vec<Selection>,
    variables: IndexMap<String, Variable>,
}
impl OperationBuilder {
    pub fn new(operation_kind: OperationKind) -> Self {
        Self {
            directives: vec![],
            fragments: IndexMap::new(),
            name: None,
            operation_kind,
            selection_set_builder: SelectionSetBuilder::new(),
            sub_operations: vec![],
            variables: IndexMap::new(),
        }
    }

    pub fn mutation() -> Self {
        Self::new(OperationKind::Mutation)
    }

    pub fn query() -> Self {
        Self::new(OperationKind::Query)
    }

    pub fn subscription() -> Self {
        Self::new(OperationKind::Subscription)
    }

    /// Render the operation header, the root selections followed by the
    /// named sub-operations, and every declared fragment.
    ///
    /// This only reads the builder: calling it repeatedly yields identical
    /// text.
    pub fn build(&self, options: &RenderOptions) -> String {
        crate::render::render_document(&DocumentParts {
            directives: &self.directives,
            fragments: &self.fragments,
            kind: self.operation_kind,
            name: self.name.as_deref(),
            root_selections: self.selection_set_builder.selections(),
            sub_operations: &self.sub_operations,
            variables: &self.variables,
        }, options)
    }

    /// Declare the fragment `name` on `type_condition`. Declaring the same
    /// name again replaces the earlier definition.
    pub fn fragment<TCallback>(
        &mut self,
        name: &str,
        type_condition: &str,
        callback: TCallback,
    ) -> Result<&mut Self>
    where
        TCallback: FnOnce(&mut SelectionSetBuilder) -> Result<()>,
    {
        if name.trim().is_empty() {
            return Err(SelectionSetBuildError::EmptyFragmentName);
        }
        if type_condition.trim().is_empty() {
            return Err(SelectionSetBuildError::EmptyTypeCondition {
                type_condition: type_condition.to_string(),
            });
        }

        let fragment = Fragment {
            name: name.to_string(),
            selection_set: SelectionSetBuilder::build_nested(callback)?,
            type_condition: type_condition.to_string(),
        };
        if self.fragments.insert(name.to_string(), fragment).is_some() {
            log::debug!("Replacing the earlier definition of fragment `{name}`.");
        }
        Ok(self)
    }

    /// Consume this [`OperationBuilder`] to produce an [`Operation`].
    pub fn into_operation(self) -> Operation {
        Operation {
            directives: self.directives,
            fragments: self.fragments,
            kind: self.operation_kind,
            name: self.name,
            selection_set: self.selection_set_builder.build(),
            sub_operations: self.sub_operations,
            variables: self.variables,
        }
    }

    /// Set (or replace) the operation name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Add a named sub-operation: a top-level field with its own arguments
    /// and selections that renders after the root selections.
    pub fn operation<TField, TCallback>(
        &mut self,
        field: TField,
        callback: TCallback,
    ) -> Result<&mut Self>
    where
        TField: Into<FieldSpec>,
        TCallback: FnOnce(&mut SelectionSetBuilder) -> Result<()>,
    {
        let spec = field.into();
        let selection_set = SelectionSetBuilder::build_nested(callback)?;
        self.sub_operations.push(Selection::Object(ObjectSelection::from_spec(
            spec,
            selection_set,
        )));
        Ok(self)
    }

    /// Add an operation-level [`DirectiveAnnotation`] after any previously
    /// added ones.
    pub fn operation_directive(&mut self, annot: DirectiveAnnotation) -> &mut Self {
        self.directives.push(annot);
        self
    }

    /// An [`Operation`] snapshot of everything added so far.
    pub fn to_operation(&self) -> Operation {
        self.clone().into_operation()
    }

    /// Replace the whole set of variable definitions. Each value is a
    /// [`Variable`] or anything convertible into one, such as a bare type
    /// string like `"Int!"`.
    pub fn variables<TEntries, TName, TVariable>(&mut self, variables: TEntries) -> &mut Self
    where
        TEntries: IntoIterator<Item = (TName, TVariable)>,
        TName: Into<String>,
        TVariable: Into<Variable>,
    {
        self.variables =
            variables.into_iter()
                .map(|(name, variable)| (name.into(), variable.into()))
                .collect();
        self
    }
}

#[inherent]
impl SelectionSetBuilderTrait for OperationBuilder {
    pub fn add_selection(&mut self, selection: Selection) -> &mut Self {
        self.selection_set_builder.add_selection(selection);
        self
    }

    pub fn connection<TField, TCallback>(
        &mut self,
        field: TField,
        callback: TCallback,
    ) -> Result<&mut Self>
    where
        TField: Into<FieldSpec>,
        TCallback: FnOnce(&mut ConnectionBuilder) -> Result<()>,
    {
        self.selection_set_builder.connection(field, callback)?;
        Ok(self)
    }

    pub fn fields<TSpecs, TSpec>(&mut self, specs: TSpecs) -> &mut Self
    where
        TSpecs: IntoIterator<Item = TSpec>,
        TSpec: Into<FieldSpec>,
    {
        self.selection_set_builder.fields(specs);
        self
    }

    pub fn inline_fragment<TCallback>(
        &mut self,
        type_condition: &str,
        callback: TCallback,
    ) -> Result<&mut Self>
    where
        TCallback: FnOnce(&mut SelectionSetBuilder) -> Result<()>,
    {
        self.selection_set_builder.inline_fragment(type_condition, callback)?;
        Ok(self)
    }

    pub fn object<TField, TCallback>(
        &mut self,
        field: TField,
        callback: TCallback,
    ) -> Result<&mut Self>
    where
        TField: Into<FieldSpec>,
        TCallback: FnOnce(&mut SelectionSetBuilder) -> Result<()>,
    {
        self.selection_set_builder.object(field, callback)?;
        Ok(self)
    }

    pub fn selections(&self) -> &[Selection] {
        self.selection_set_builder.selections()
    }

    pub fn use_fragment(&mut self, fragment_name: &str) -> Result<&mut Self> {
        self.selection_set_builder.use_fragment(fragment_name)?;
        Ok(self)
    }
}
