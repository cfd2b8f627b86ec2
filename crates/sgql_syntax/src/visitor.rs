//! Tree visitor.
//!
//! [`visit`] runs in two passes. The first collects every fragment definition
//! into a [`FragmentRegistry`], failing on unnamed or duplicate fragments. The
//! second walks a copy of the document depth-first, handing each node by value
//! to the matching `begin_*` hook before its children and `end_*` hook after.
//! Hooks return the node to keep, so a visitor can rewrite the tree or simply
//! observe it. The input document is never modified.
//!
//! Type system definitions are not descended into; they pass through
//! [`Visitor::begin_type_system_definition`] as a whole.

use crate::ast::*;
use crate::error::VisitError;
use rustc_hash::FxHashMap;

/// Fragment definitions of a document, by name.
#[derive(Debug, Default)]
pub struct FragmentRegistry<'d> {
    fragments: FxHashMap<&'d str, &'d FragmentDefinition>,
}

impl<'d> FragmentRegistry<'d> {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'d FragmentDefinition> {
        self.fragments.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fragments.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Collects the fragment definitions of a document.
///
/// # Errors
///
/// Returns [`VisitError::MissingFragmentName`] for a fragment with an empty
/// name and [`VisitError::DuplicateFragment`] when a name is defined twice.
pub fn collect_fragments(document: &Document) -> Result<FragmentRegistry<'_>, VisitError> {
    let mut registry = FragmentRegistry::default();

    for fragment in document.fragments() {
        let name = fragment.name();
        if name.is_empty() {
            return Err(VisitError::MissingFragmentName {
                span: fragment.span,
            });
        }
        if let Some(first) = registry.fragments.insert(name, fragment) {
            return Err(VisitError::DuplicateFragment {
                name: name.to_string(),
                first: first.span,
                second: fragment.span,
            });
        }
    }

    Ok(registry)
}

/// Read-only state shared with every hook during a walk.
#[derive(Debug)]
pub struct VisitContext<'d> {
    fragments: FragmentRegistry<'d>,
}

impl<'d> VisitContext<'d> {
    /// Looks up a fragment definition of the visited document by name.
    #[must_use]
    pub fn fragment(&self, name: &str) -> Option<&'d FragmentDefinition> {
        self.fragments.get(name)
    }

    #[must_use]
    pub fn fragments(&self) -> &FragmentRegistry<'d> {
        &self.fragments
    }
}

macro_rules! hooks {
    ($($node:ty => $begin:ident, $end:ident;)*) => {
        $(
            fn $begin(&mut self, node: $node, _cx: &VisitContext<'_>) -> $node {
                node
            }

            fn $end(&mut self, node: $node, _cx: &VisitContext<'_>) -> $node {
                node
            }
        )*
    };
}

/// Hooks called during [`visit`]. Every hook defaults to returning its node
/// unchanged.
pub trait Visitor {
    hooks! {
        Document => begin_document, end_document;
        OperationDefinition => begin_operation_definition, end_operation_definition;
        FragmentDefinition => begin_fragment_definition, end_fragment_definition;
        VariableDefinition => begin_variable_definition, end_variable_definition;
        Variable => begin_variable, end_variable;
        SelectionSet => begin_selection_set, end_selection_set;
        FieldSelection => begin_field, end_field;
        FragmentSpread => begin_fragment_spread, end_fragment_spread;
        InlineFragment => begin_inline_fragment, end_inline_fragment;
        Argument => begin_argument, end_argument;
        Directive => begin_directive, end_directive;
        Name => begin_name, end_name;
        IntValue => begin_int_value, end_int_value;
        FloatValue => begin_float_value, end_float_value;
        StringValue => begin_string_value, end_string_value;
        BooleanValue => begin_boolean_value, end_boolean_value;
        NullValue => begin_null_value, end_null_value;
        EnumValue => begin_enum_value, end_enum_value;
        ListValue => begin_list_value, end_list_value;
        ObjectValue => begin_object_value, end_object_value;
        ObjectField => begin_object_field, end_object_field;
        NamedType => begin_named_type, end_named_type;
        ListType => begin_list_type, end_list_type;
        NonNullType => begin_non_null_type, end_non_null_type;
    }

    /// Receives schema, type, directive and extension definitions.
    fn begin_type_system_definition(
        &mut self,
        node: Definition,
        _cx: &VisitContext<'_>,
    ) -> Definition {
        node
    }
}

/// Walks `document` with `visitor` and returns the rewritten copy.
///
/// # Errors
///
/// Fails before any hook runs if fragment collection fails.
pub fn visit<V: Visitor + ?Sized>(
    document: &Document,
    visitor: &mut V,
) -> Result<Document, VisitError> {
    let fragments = collect_fragments(document)?;
    tracing::trace!(fragments = fragments.len(), "collected fragments");

    let cx = VisitContext { fragments };
    Ok(walk_document(visitor, document.clone(), &cx))
}

fn walk_all<V: Visitor + ?Sized, T>(
    v: &mut V,
    items: Vec<T>,
    cx: &VisitContext<'_>,
    walk: fn(&mut V, T, &VisitContext<'_>) -> T,
) -> Vec<T> {
    items.into_iter().map(|item| walk(v, item, cx)).collect()
}

fn walk_document<V: Visitor + ?Sized>(
    v: &mut V,
    node: Document,
    cx: &VisitContext<'_>,
) -> Document {
    let mut node = v.begin_document(node, cx);
    node.definitions = walk_all(v, node.definitions, cx, walk_definition);
    v.end_document(node, cx)
}

fn walk_definition<V: Visitor + ?Sized>(
    v: &mut V,
    node: Definition,
    cx: &VisitContext<'_>,
) -> Definition {
    match node {
        Definition::Operation(op) => Definition::Operation(walk_operation_definition(v, op, cx)),
        Definition::Fragment(frag) => Definition::Fragment(walk_fragment_definition(v, frag, cx)),
        Definition::Schema(_)
        | Definition::Type(_)
        | Definition::Directive(_)
        | Definition::Extension(_) => v.begin_type_system_definition(node, cx),
    }
}

fn walk_operation_definition<V: Visitor + ?Sized>(
    v: &mut V,
    node: OperationDefinition,
    cx: &VisitContext<'_>,
) -> OperationDefinition {
    let mut node = v.begin_operation_definition(node, cx);
    node.name = node.name.map(|name| walk_name(v, name, cx));
    node.variable_definitions =
        walk_all(v, node.variable_definitions, cx, walk_variable_definition);
    node.directives = walk_all(v, node.directives, cx, walk_directive);
    node.selection_set = walk_selection_set(v, node.selection_set, cx);
    v.end_operation_definition(node, cx)
}

fn walk_fragment_definition<V: Visitor + ?Sized>(
    v: &mut V,
    node: FragmentDefinition,
    cx: &VisitContext<'_>,
) -> FragmentDefinition {
    let mut node = v.begin_fragment_definition(node, cx);
    node.type_condition = walk_named_type(v, node.type_condition, cx);
    node.name = walk_name(v, node.name, cx);
    node.directives = walk_all(v, node.directives, cx, walk_directive);
    node.selection_set = walk_selection_set(v, node.selection_set, cx);
    v.end_fragment_definition(node, cx)
}

fn walk_variable_definition<V: Visitor + ?Sized>(
    v: &mut V,
    node: VariableDefinition,
    cx: &VisitContext<'_>,
) -> VariableDefinition {
    let mut node = v.begin_variable_definition(node, cx);
    node.variable = walk_variable(v, node.variable, cx);
    node.ty = walk_type(v, node.ty, cx);
    node.default_value = node.default_value.map(|value| walk_value(v, value, cx));
    node.directives = walk_all(v, node.directives, cx, walk_directive);
    v.end_variable_definition(node, cx)
}

fn walk_variable<V: Visitor + ?Sized>(
    v: &mut V,
    node: Variable,
    cx: &VisitContext<'_>,
) -> Variable {
    let mut node = v.begin_variable(node, cx);
    node.name = walk_name(v, node.name, cx);
    v.end_variable(node, cx)
}

fn walk_selection_set<V: Visitor + ?Sized>(
    v: &mut V,
    node: SelectionSet,
    cx: &VisitContext<'_>,
) -> SelectionSet {
    let mut node = v.begin_selection_set(node, cx);
    node.selections = walk_all(v, node.selections, cx, walk_selection);
    v.end_selection_set(node, cx)
}

fn walk_selection<V: Visitor + ?Sized>(
    v: &mut V,
    node: Selection,
    cx: &VisitContext<'_>,
) -> Selection {
    match node {
        Selection::Field(field) => Selection::Field(walk_field(v, field, cx)),
        Selection::FragmentSpread(spread) => {
            Selection::FragmentSpread(walk_fragment_spread(v, spread, cx))
        }
        Selection::InlineFragment(inline) => {
            Selection::InlineFragment(walk_inline_fragment(v, inline, cx))
        }
    }
}

fn walk_field<V: Visitor + ?Sized>(
    v: &mut V,
    node: FieldSelection,
    cx: &VisitContext<'_>,
) -> FieldSelection {
    let mut node = v.begin_field(node, cx);
    node.name = walk_name(v, node.name, cx);
    node.alias = node.alias.map(|alias| walk_name(v, alias, cx));
    node.arguments = walk_all(v, node.arguments, cx, walk_argument);
    node.selection_set = node
        .selection_set
        .map(|set| walk_selection_set(v, set, cx));
    node.directives = walk_all(v, node.directives, cx, walk_directive);
    v.end_field(node, cx)
}

fn walk_fragment_spread<V: Visitor + ?Sized>(
    v: &mut V,
    node: FragmentSpread,
    cx: &VisitContext<'_>,
) -> FragmentSpread {
    let mut node = v.begin_fragment_spread(node, cx);
    node.name = walk_name(v, node.name, cx);
    node.directives = walk_all(v, node.directives, cx, walk_directive);
    v.end_fragment_spread(node, cx)
}

fn walk_inline_fragment<V: Visitor + ?Sized>(
    v: &mut V,
    node: InlineFragment,
    cx: &VisitContext<'_>,
) -> InlineFragment {
    let mut node = v.begin_inline_fragment(node, cx);
    node.type_condition = node
        .type_condition
        .map(|ty| walk_named_type(v, ty, cx));
    node.directives = walk_all(v, node.directives, cx, walk_directive);
    node.selection_set = walk_selection_set(v, node.selection_set, cx);
    v.end_inline_fragment(node, cx)
}

fn walk_argument<V: Visitor + ?Sized>(
    v: &mut V,
    node: Argument,
    cx: &VisitContext<'_>,
) -> Argument {
    let mut node = v.begin_argument(node, cx);
    node.name = walk_name(v, node.name, cx);
    node.value = walk_value(v, node.value, cx);
    v.end_argument(node, cx)
}

fn walk_directive<V: Visitor + ?Sized>(
    v: &mut V,
    node: Directive,
    cx: &VisitContext<'_>,
) -> Directive {
    let mut node = v.begin_directive(node, cx);
    node.name = walk_name(v, node.name, cx);
    node.arguments = walk_all(v, node.arguments, cx, walk_argument);
    v.end_directive(node, cx)
}

fn walk_name<V: Visitor + ?Sized>(v: &mut V, node: Name, cx: &VisitContext<'_>) -> Name {
    let node = v.begin_name(node, cx);
    v.end_name(node, cx)
}

fn walk_value<V: Visitor + ?Sized>(v: &mut V, node: Value, cx: &VisitContext<'_>) -> Value {
    match node {
        Value::Variable(var) => Value::Variable(walk_variable(v, var, cx)),
        Value::Int(int) => {
            let int = v.begin_int_value(int, cx);
            Value::Int(v.end_int_value(int, cx))
        }
        Value::Float(float) => {
            let float = v.begin_float_value(float, cx);
            Value::Float(v.end_float_value(float, cx))
        }
        Value::String(string) => {
            let string = v.begin_string_value(string, cx);
            Value::String(v.end_string_value(string, cx))
        }
        Value::Boolean(boolean) => {
            let boolean = v.begin_boolean_value(boolean, cx);
            Value::Boolean(v.end_boolean_value(boolean, cx))
        }
        Value::Null(null) => {
            let null = v.begin_null_value(null, cx);
            Value::Null(v.end_null_value(null, cx))
        }
        Value::Enum(e) => {
            let e = v.begin_enum_value(e, cx);
            Value::Enum(v.end_enum_value(e, cx))
        }
        Value::List(list) => {
            let mut list = v.begin_list_value(list, cx);
            list.values = walk_all(v, list.values, cx, walk_value);
            Value::List(v.end_list_value(list, cx))
        }
        Value::Object(object) => {
            let mut object = v.begin_object_value(object, cx);
            object.fields = walk_all(v, object.fields, cx, walk_object_field);
            Value::Object(v.end_object_value(object, cx))
        }
    }
}

fn walk_object_field<V: Visitor + ?Sized>(
    v: &mut V,
    node: ObjectField,
    cx: &VisitContext<'_>,
) -> ObjectField {
    let mut node = v.begin_object_field(node, cx);
    node.name = walk_name(v, node.name, cx);
    node.value = walk_value(v, node.value, cx);
    v.end_object_field(node, cx)
}

fn walk_type<V: Visitor + ?Sized>(v: &mut V, node: Type, cx: &VisitContext<'_>) -> Type {
    match node {
        Type::Named(named) => Type::Named(walk_named_type(v, named, cx)),
        Type::List(list) => {
            let mut list = v.begin_list_type(list, cx);
            list.ty = Box::new(walk_type(v, *list.ty, cx));
            Type::List(v.end_list_type(list, cx))
        }
        Type::NonNull(non_null) => {
            let mut non_null = v.begin_non_null_type(non_null, cx);
            non_null.ty = Box::new(walk_type(v, *non_null.ty, cx));
            Type::NonNull(v.end_non_null_type(non_null, cx))
        }
    }
}

fn walk_named_type<V: Visitor + ?Sized>(
    v: &mut V,
    node: NamedType,
    cx: &VisitContext<'_>,
) -> NamedType {
    let mut node = v.begin_named_type(node, cx);
    node.name = walk_name(v, node.name, cx);
    v.end_named_type(node, cx)
}
