//! Abstract Syntax Tree types.
//!
//! Every node owns its data and carries the [`Span`] it was parsed from.
//! The enums are closed: consumers match them exhaustively.

use sgql_core::Span;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A complete document.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub span: Span,
}

impl Document {
    /// Returns the operation definitions in source order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            _ => None,
        })
    }

    /// Returns the fragment definitions in source order.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            _ => None,
        })
    }
}

/// A top-level definition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
    Schema(SchemaDefinition),
    Type(TypeDefinition),
    Directive(DirectiveDefinition),
    Extension(TypeExtension),
}

impl Definition {
    /// Returns true for operations and fragments.
    #[must_use]
    pub const fn is_executable(&self) -> bool {
        matches!(self, Self::Operation(_) | Self::Fragment(_))
    }
}

// =============================================================================
// Executable definitions
// =============================================================================

/// Type of operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }

    /// Parses an operation keyword.
    #[must_use]
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(Self::Query),
            "mutation" => Some(Self::Mutation),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation definition. A bare selection set is an anonymous query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OperationDefinition {
    pub operation: OperationType,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub span: Span,
}

impl OperationDefinition {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(Name::as_str)
    }
}

/// Fragment definition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FragmentDefinition {
    pub name: Name,
    pub type_condition: NamedType,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub span: Span,
}

impl FragmentDefinition {
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Variable definition in an operation header.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VariableDefinition {
    pub variable: Variable,
    pub ty: Type,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub span: Span,
}

/// `$name`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Variable {
    pub name: Name,
    pub span: Span,
}

/// Selection set. Never empty once parsed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub span: Span,
}

/// Selection in a selection set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Selection {
    Field(FieldSelection),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Field(f) => f.span,
            Self::FragmentSpread(f) => f.span,
            Self::InlineFragment(f) => f.span,
        }
    }
}

/// Field selection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FieldSelection {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Option<SelectionSet>,
    pub span: Span,
}

impl FieldSelection {
    /// Returns the alias if present, otherwise the field name.
    #[must_use]
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }
}

/// `...Name`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FragmentSpread {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub span: Span,
}

/// `... on Type { }` or `... { }`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct InlineFragment {
    pub type_condition: Option<NamedType>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub span: Span,
}

/// Argument.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub span: Span,
}

/// Directive usage.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub span: Span,
}

// =============================================================================
// Values
// =============================================================================

/// Input value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

impl Value {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Variable(v) => v.span,
            Self::Int(v) => v.span,
            Self::Float(v) => v.span,
            Self::String(v) => v.span,
            Self::Boolean(v) => v.span,
            Self::Null(v) => v.span,
            Self::Enum(v) => v.span,
            Self::List(v) => v.span,
            Self::Object(v) => v.span,
        }
    }

    /// Returns true if the value contains no variables.
    #[must_use]
    pub fn is_const(&self) -> bool {
        match self {
            Self::Variable(_) => false,
            Self::List(list) => list.values.iter().all(Self::is_const),
            Self::Object(object) => object.fields.iter().all(|f| f.value.is_const()),
            _ => true,
        }
    }
}

/// Integer literal, kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct IntValue {
    pub value: String,
    pub span: Span,
}

impl IntValue {
    /// Returns `None` if the literal does not fit in an `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.value.parse().ok()
    }
}

/// Float literal, kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FloatValue {
    pub value: String,
    pub span: Span,
}

impl FloatValue {
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.value.parse().ok()
    }
}

/// String literal with escapes resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StringValue {
    pub value: String,
    /// Written as a `"""` block string.
    pub block: bool,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BooleanValue {
    pub value: bool,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NullValue {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EnumValue {
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ListValue {
    pub values: Vec<Value>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    pub span: Span,
}

// =============================================================================
// Types
// =============================================================================

/// Type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Type {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
}

impl Type {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Named(t) => t.span,
            Self::List(t) => t.span,
            Self::NonNull(t) => t.span,
        }
    }

    /// Returns the named type at the core of list and non-null wrappers.
    #[must_use]
    pub fn innermost(&self) -> &NamedType {
        match self {
            Self::Named(named) => named,
            Self::List(list) => list.ty.innermost(),
            Self::NonNull(non_null) => non_null.ty.innermost(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NamedType {
    pub name: Name,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ListType {
    pub ty: Box<Type>,
    pub span: Span,
}

/// `T!`. The parser never nests a non-null directly in another.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NonNullType {
    pub ty: Box<Type>,
    pub span: Span,
}

// =============================================================================
// Type system definitions
// =============================================================================

/// Schema definition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SchemaDefinition {
    pub description: Option<StringValue>,
    pub directives: Vec<Directive>,
    pub operation_types: Vec<RootOperationTypeDefinition>,
    pub span: Span,
}

/// `query: Query` inside `schema { }`.
///
/// `operation` is `None` when the keyword is not an operation type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RootOperationTypeDefinition {
    pub operation: Option<OperationType>,
    pub keyword: Name,
    pub named_type: NamedType,
    pub span: Span,
}

/// Type definitions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum TypeDefinition {
    Scalar(ScalarTypeDefinition),
    Object(ObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Union(UnionTypeDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
}

impl TypeDefinition {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(def) => def.name.as_str(),
            Self::Object(def) => def.name.as_str(),
            Self::Interface(def) => def.name.as_str(),
            Self::Union(def) => def.name.as_str(),
            Self::Enum(def) => def.name.as_str(),
            Self::InputObject(def) => def.name.as_str(),
        }
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Scalar(def) => def.span,
            Self::Object(def) => def.span,
            Self::Interface(def) => def.span,
            Self::Union(def) => def.span,
            Self::Enum(def) => def.span,
            Self::InputObject(def) => def.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScalarTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ObjectTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct InterfaceTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct UnionTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub members: Vec<NamedType>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EnumTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub values: Vec<EnumValueDefinition>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EnumValueDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct InputObjectTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub fields: Vec<InputValueDefinition>,
    pub span: Span,
}

/// Field definition in an object or interface type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FieldDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub ty: Type,
    pub directives: Vec<Directive>,
    pub span: Span,
}

/// Argument definition or input object field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct InputValueDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub ty: Type,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub span: Span,
}

/// Directive definition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DirectiveDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
    pub span: Span,
}

/// Where a directive may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum DirectiveLocation {
    // Executable
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,

    // Type system
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "QUERY",
            Self::Mutation => "MUTATION",
            Self::Subscription => "SUBSCRIPTION",
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
            Self::Schema => "SCHEMA",
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::InputObject => "INPUT_OBJECT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    /// Parses a directive location from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "QUERY" => Some(Self::Query),
            "MUTATION" => Some(Self::Mutation),
            "SUBSCRIPTION" => Some(Self::Subscription),
            "FIELD" => Some(Self::Field),
            "FRAGMENT_DEFINITION" => Some(Self::FragmentDefinition),
            "FRAGMENT_SPREAD" => Some(Self::FragmentSpread),
            "INLINE_FRAGMENT" => Some(Self::InlineFragment),
            "VARIABLE_DEFINITION" => Some(Self::VariableDefinition),
            "SCHEMA" => Some(Self::Schema),
            "SCALAR" => Some(Self::Scalar),
            "OBJECT" => Some(Self::Object),
            "FIELD_DEFINITION" => Some(Self::FieldDefinition),
            "ARGUMENT_DEFINITION" => Some(Self::ArgumentDefinition),
            "INTERFACE" => Some(Self::Interface),
            "UNION" => Some(Self::Union),
            "ENUM" => Some(Self::Enum),
            "ENUM_VALUE" => Some(Self::EnumValue),
            "INPUT_OBJECT" => Some(Self::InputObject),
            "INPUT_FIELD_DEFINITION" => Some(Self::InputFieldDefinition),
            _ => None,
        }
    }
}

/// `extend` applied to a type definition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TypeExtension {
    pub definition: TypeDefinition,
    pub span: Span,
}

// =============================================================================
// Common
// =============================================================================

/// Name with location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Name {
    pub value: String,
    pub span: Span,
}

impl Name {
    pub fn new(value: impl Into<String>, span: Span) -> Self {
        Self {
            value: value.into(),
            span,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

// =============================================================================
// Node kinds
// =============================================================================

/// Discriminator for every node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum NodeKind {
    Name,
    Document,
    OperationDefinition,
    FragmentDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Field,
    FragmentSpread,
    InlineFragment,
    Argument,
    Directive,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    NamedType,
    ListType,
    NonNullType,
    SchemaDefinition,
    RootOperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    DirectiveDefinition,
    TypeExtension,
}

/// Common accessors shared by every node.
pub trait AstNode {
    fn kind(&self) -> NodeKind;
    fn span(&self) -> Span;
}

macro_rules! impl_ast_node {
    ($($ty:ident => $kind:ident),* $(,)?) => {
        $(
            impl AstNode for $ty {
                #[inline]
                fn kind(&self) -> NodeKind {
                    NodeKind::$kind
                }

                #[inline]
                fn span(&self) -> Span {
                    self.span
                }
            }
        )*
    };
}

impl_ast_node! {
    Name => Name,
    Document => Document,
    OperationDefinition => OperationDefinition,
    FragmentDefinition => FragmentDefinition,
    VariableDefinition => VariableDefinition,
    Variable => Variable,
    SelectionSet => SelectionSet,
    FieldSelection => Field,
    FragmentSpread => FragmentSpread,
    InlineFragment => InlineFragment,
    Argument => Argument,
    Directive => Directive,
    IntValue => IntValue,
    FloatValue => FloatValue,
    StringValue => StringValue,
    BooleanValue => BooleanValue,
    NullValue => NullValue,
    EnumValue => EnumValue,
    ListValue => ListValue,
    ObjectValue => ObjectValue,
    ObjectField => ObjectField,
    NamedType => NamedType,
    ListType => ListType,
    NonNullType => NonNullType,
    SchemaDefinition => SchemaDefinition,
    RootOperationTypeDefinition => RootOperationTypeDefinition,
    ScalarTypeDefinition => ScalarTypeDefinition,
    ObjectTypeDefinition => ObjectTypeDefinition,
    InterfaceTypeDefinition => InterfaceTypeDefinition,
    UnionTypeDefinition => UnionTypeDefinition,
    EnumTypeDefinition => EnumTypeDefinition,
    EnumValueDefinition => EnumValueDefinition,
    InputObjectTypeDefinition => InputObjectTypeDefinition,
    FieldDefinition => FieldDefinition,
    InputValueDefinition => InputValueDefinition,
    DirectiveDefinition => DirectiveDefinition,
    TypeExtension => TypeExtension,
}

impl AstNode for Definition {
    fn kind(&self) -> NodeKind {
        match self {
            Self::Operation(def) => def.kind(),
            Self::Fragment(def) => def.kind(),
            Self::Schema(def) => def.kind(),
            Self::Type(def) => def.kind(),
            Self::Directive(def) => def.kind(),
            Self::Extension(def) => def.kind(),
        }
    }

    fn span(&self) -> Span {
        match self {
            Self::Operation(def) => def.span,
            Self::Fragment(def) => def.span,
            Self::Schema(def) => def.span,
            Self::Type(def) => def.span(),
            Self::Directive(def) => def.span,
            Self::Extension(def) => def.span,
        }
    }
}

impl AstNode for TypeDefinition {
    fn kind(&self) -> NodeKind {
        match self {
            Self::Scalar(_) => NodeKind::ScalarTypeDefinition,
            Self::Object(_) => NodeKind::ObjectTypeDefinition,
            Self::Interface(_) => NodeKind::InterfaceTypeDefinition,
            Self::Union(_) => NodeKind::UnionTypeDefinition,
            Self::Enum(_) => NodeKind::EnumTypeDefinition,
            Self::InputObject(_) => NodeKind::InputObjectTypeDefinition,
        }
    }

    fn span(&self) -> Span {
        Self::span(self)
    }
}

impl AstNode for Selection {
    fn kind(&self) -> NodeKind {
        match self {
            Self::Field(_) => NodeKind::Field,
            Self::FragmentSpread(_) => NodeKind::FragmentSpread,
            Self::InlineFragment(_) => NodeKind::InlineFragment,
        }
    }

    fn span(&self) -> Span {
        Self::span(self)
    }
}

impl AstNode for Value {
    fn kind(&self) -> NodeKind {
        match self {
            Self::Variable(_) => NodeKind::Variable,
            Self::Int(_) => NodeKind::IntValue,
            Self::Float(_) => NodeKind::FloatValue,
            Self::String(_) => NodeKind::StringValue,
            Self::Boolean(_) => NodeKind::BooleanValue,
            Self::Null(_) => NodeKind::NullValue,
            Self::Enum(_) => NodeKind::EnumValue,
            Self::List(_) => NodeKind::ListValue,
            Self::Object(_) => NodeKind::ObjectValue,
        }
    }

    fn span(&self) -> Span {
        Self::span(self)
    }
}

impl AstNode for Type {
    fn kind(&self) -> NodeKind {
        match self {
            Self::Named(_) => NodeKind::NamedType,
            Self::List(_) => NodeKind::ListType,
            Self::NonNull(_) => NodeKind::NonNullType,
        }
    }

    fn span(&self) -> Span {
        Self::span(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(value: &str, start: u32) -> Name {
        Name::new(value, Span::new(start, start + value.len() as u32))
    }

    #[test]
    fn test_kind_follows_shape() {
        let value = Value::Int(IntValue {
            value: "7".to_string(),
            span: Span::new(0, 1),
        });
        assert_eq!(value.kind(), NodeKind::IntValue);

        let field = Selection::Field(FieldSelection {
            alias: None,
            name: name("a", 2),
            arguments: vec![],
            directives: vec![],
            selection_set: None,
            span: Span::new(2, 3),
        });
        assert_eq!(field.kind(), NodeKind::Field);
        assert_eq!(AstNode::span(&field), Span::new(2, 3));
    }

    #[test]
    fn test_response_key() {
        let mut field = FieldSelection {
            alias: None,
            name: name("hero", 0),
            arguments: vec![],
            directives: vec![],
            selection_set: None,
            span: Span::new(0, 4),
        };
        assert_eq!(field.response_key(), "hero");
        field.alias = Some(name("h", 0));
        assert_eq!(field.response_key(), "h");
    }

    #[test]
    fn test_value_is_const() {
        let variable = Value::Variable(Variable {
            name: name("x", 1),
            span: Span::new(0, 2),
        });
        let list = Value::List(ListValue {
            values: vec![variable.clone()],
            span: Span::new(0, 4),
        });
        assert!(!variable.is_const());
        assert!(!list.is_const());
        assert!(Value::Null(NullValue { span: Span::new(0, 4) }).is_const());
    }

    #[test]
    fn test_number_accessors() {
        let int = IntValue {
            value: "-12".to_string(),
            span: Span::new(0, 3),
        };
        assert_eq!(int.as_i64(), Some(-12));
        let huge = IntValue {
            value: "99999999999999999999".to_string(),
            span: Span::new(0, 20),
        };
        assert_eq!(huge.as_i64(), None);
        let float = FloatValue {
            value: "1.5e2".to_string(),
            span: Span::new(0, 5),
        };
        assert_eq!(float.as_f64(), Some(150.0));
    }

    #[test]
    fn test_innermost_type() {
        let named = NamedType {
            name: name("Int", 1),
            span: Span::new(1, 4),
        };
        let ty = Type::NonNull(NonNullType {
            ty: Box::new(Type::List(ListType {
                ty: Box::new(Type::Named(named.clone())),
                span: Span::new(0, 5),
            })),
            span: Span::new(0, 6),
        });
        assert_eq!(ty.innermost(), &named);
        assert_eq!(ty.kind(), NodeKind::NonNullType);
    }

    #[test]
    fn test_directive_location_names() {
        for location in [
            DirectiveLocation::Field,
            DirectiveLocation::InputFieldDefinition,
            DirectiveLocation::VariableDefinition,
        ] {
            assert_eq!(DirectiveLocation::parse(location.as_str()), Some(location));
        }
        assert_eq!(DirectiveLocation::parse("field"), None);
    }
}
