//! Recursive descent parser.
//!
//! The parser pulls tokens from the [`Lexer`] one at a time with a single
//! token of lookahead. Keywords are plain names compared by value, so `query`
//! or `type` remain usable as field and argument names. The first violated
//! expectation aborts the parse.

use crate::ast::*;
use crate::error::{LexError, ParseError};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use sgql_core::{Source, Span};

type PResult<T> = Result<T, ParseError>;

/// Names that start a definition. `implements` lists stop at these.
const DEFINITION_KEYWORDS: &[&str] = &[
    "query",
    "mutation",
    "subscription",
    "fragment",
    "schema",
    "scalar",
    "type",
    "interface",
    "union",
    "enum",
    "input",
    "directive",
    "extend",
];

/// Parses a source into a document.
///
/// # Errors
///
/// Returns the first lexical or syntactic error in the source.
pub fn parse(source: &Source) -> Result<Document, ParseError> {
    Parser::new(source).parse_document()
}

/// Parser over one [`Source`]. Single use.
pub struct Parser<'a> {
    source: &'a Source,
    lexer: Lexer<'a>,
    current: Token<'a>,
    /// End of the last consumed token.
    prev_end: u32,
}

impl<'a> Parser<'a> {
    /// Creates a new parser positioned before the first token.
    pub fn new(source: &'a Source) -> Self {
        Self {
            source,
            lexer: Lexer::new(source),
            current: Token::start_of_file(),
            prev_end: 0,
        }
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Returns true if at the given kind.
    #[inline]
    fn at(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    fn at_keyword(&self, keyword: &str) -> bool {
        self.current.is_keyword(keyword)
    }

    #[inline]
    fn start(&self) -> u32 {
        self.current.span.start
    }

    /// Span from `start` to the end of the last consumed token.
    #[inline]
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.prev_end.max(start))
    }

    /// Advances to the next token.
    fn advance(&mut self) -> PResult<()> {
        let next = self
            .lexer
            .next_token(&self.current)
            .map_err(|error| self.lex_error(error))?;
        self.prev_end = self.current.span.end;
        self.current = next;
        Ok(())
    }

    /// Expects a specific token kind.
    fn expect(&mut self, kind: TokenKind) -> PResult<()> {
        if self.at(kind) {
            self.advance()
        } else {
            Err(self.unexpected(kind.as_str()))
        }
    }

    /// Expects a name token spelled `keyword`.
    fn expect_keyword(&mut self, keyword: &str) -> PResult<()> {
        if self.at_keyword(keyword) {
            self.advance()
        } else {
            Err(self.unexpected(format!("\"{keyword}\"")))
        }
    }

    /// Consumes the token if it has the given kind.
    fn skip(&mut self, kind: TokenKind) -> PResult<bool> {
        if self.at(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::UnexpectedToken {
            expected: expected.into(),
            found: self.current.to_string(),
            span: self.current.span,
            position: self.source.locate(self.current.span.start),
        }
    }

    fn lex_error(&self, error: LexError) -> ParseError {
        ParseError::Lex {
            span: Span::empty(error.offset),
            position: self.source.locate(error.offset),
            error,
        }
    }

    /// `open item+ close`.
    fn many<T>(
        &mut self,
        open: TokenKind,
        mut item: impl FnMut(&mut Self) -> PResult<T>,
        close: TokenKind,
    ) -> PResult<Vec<T>> {
        self.expect(open)?;
        let mut items = vec![item(self)?];
        while !self.skip(close)? {
            items.push(item(self)?);
        }
        Ok(items)
    }

    /// `(open item+ close)?`.
    fn optional_many<T>(
        &mut self,
        open: TokenKind,
        item: impl FnMut(&mut Self) -> PResult<T>,
        close: TokenKind,
    ) -> PResult<Vec<T>> {
        if self.at(open) {
            self.many(open, item, close)
        } else {
            Ok(Vec::new())
        }
    }

    // =========================================================================
    // Document
    // =========================================================================

    /// Parses the whole source.
    pub fn parse_document(mut self) -> PResult<Document> {
        self.advance()?;

        let mut definitions = Vec::new();
        while !self.at(TokenKind::Eof) {
            definitions.push(self.parse_definition()?);
        }

        Ok(Document {
            definitions,
            span: Span::new(0, self.current.span.end),
        })
    }

    fn parse_definition(&mut self) -> PResult<Definition> {
        match self.current.kind {
            TokenKind::BraceL => Ok(Definition::Operation(self.parse_operation_definition()?)),
            TokenKind::String | TokenKind::BlockString => {
                let description = self.parse_description()?;
                self.parse_type_system_definition(description)
            }
            TokenKind::Name => match self.current.value() {
                "query" | "mutation" | "subscription" => {
                    Ok(Definition::Operation(self.parse_operation_definition()?))
                }
                "fragment" => Ok(Definition::Fragment(self.parse_fragment_definition()?)),
                "extend" => Ok(Definition::Extension(self.parse_type_extension()?)),
                _ => self.parse_type_system_definition(None),
            },
            _ => Err(self.unexpected("definition")),
        }
    }

    // =========================================================================
    // Operations and fragments
    // =========================================================================

    fn parse_operation_definition(&mut self) -> PResult<OperationDefinition> {
        let start = self.start();

        if self.at(TokenKind::BraceL) {
            let selection_set = self.parse_selection_set()?;
            return Ok(OperationDefinition {
                operation: OperationType::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
                span: self.span_from(start),
            });
        }

        let operation = self.parse_operation_type()?;
        let name = if self.at(TokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.optional_many(
            TokenKind::ParenL,
            Self::parse_variable_definition,
            TokenKind::ParenR,
        )?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;

        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    fn parse_operation_type(&mut self) -> PResult<OperationType> {
        let operation = if self.at(TokenKind::Name) {
            OperationType::parse(self.current.value())
        } else {
            None
        };
        match operation {
            Some(operation) => {
                self.advance()?;
                Ok(operation)
            }
            None => Err(self.unexpected("\"query\", \"mutation\" or \"subscription\"")),
        }
    }

    fn parse_variable_definition(&mut self) -> PResult<VariableDefinition> {
        let start = self.start();
        let variable = self.parse_variable()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type()?;
        let default_value = if self.skip(TokenKind::Equals)? {
            Some(self.parse_value(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;

        Ok(VariableDefinition {
            variable,
            ty,
            default_value,
            directives,
            span: self.span_from(start),
        })
    }

    fn parse_variable(&mut self) -> PResult<Variable> {
        let start = self.start();
        self.expect(TokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(Variable {
            name,
            span: self.span_from(start),
        })
    }

    fn parse_fragment_definition(&mut self) -> PResult<FragmentDefinition> {
        let start = self.start();
        self.expect_keyword("fragment")?;

        if self.at_keyword("on") {
            return Err(self.unexpected("fragment name"));
        }
        let name = self.parse_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;

        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    fn parse_selection_set(&mut self) -> PResult<SelectionSet> {
        let start = self.start();
        let selections = self.many(TokenKind::BraceL, Self::parse_selection, TokenKind::BraceR)?;
        Ok(SelectionSet {
            selections,
            span: self.span_from(start),
        })
    }

    fn parse_selection(&mut self) -> PResult<Selection> {
        if self.at(TokenKind::Spread) {
            self.parse_fragment()
        } else {
            Ok(Selection::Field(self.parse_field()?))
        }
    }

    /// `...Name` or `... on Type { }` or `... @dir { }`.
    fn parse_fragment(&mut self) -> PResult<Selection> {
        let start = self.start();
        self.expect(TokenKind::Spread)?;

        let has_type_condition = self.at_keyword("on");
        if !has_type_condition && self.at(TokenKind::Name) {
            let name = self.parse_name()?;
            let directives = self.parse_directives(false)?;
            return Ok(Selection::FragmentSpread(FragmentSpread {
                name,
                directives,
                span: self.span_from(start),
            }));
        }

        let type_condition = if has_type_condition {
            self.advance()?;
            Some(self.parse_named_type()?)
        } else {
            None
        };
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;

        Ok(Selection::InlineFragment(InlineFragment {
            type_condition,
            directives,
            selection_set,
            span: self.span_from(start),
        }))
    }

    fn parse_field(&mut self) -> PResult<FieldSelection> {
        let start = self.start();

        let first = self.parse_name()?;
        let (alias, name) = if self.skip(TokenKind::Colon)? {
            (Some(first), self.parse_name()?)
        } else {
            (None, first)
        };

        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set = if self.at(TokenKind::BraceL) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(FieldSelection {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    fn parse_arguments(&mut self, is_const: bool) -> PResult<Vec<Argument>> {
        self.optional_many(
            TokenKind::ParenL,
            |p| p.parse_argument(is_const),
            TokenKind::ParenR,
        )
    }

    fn parse_argument(&mut self, is_const: bool) -> PResult<Argument> {
        let start = self.start();
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value(is_const)?;
        Ok(Argument {
            name,
            value,
            span: self.span_from(start),
        })
    }

    fn parse_directives(&mut self, is_const: bool) -> PResult<Vec<Directive>> {
        let mut directives = Vec::new();
        while self.at(TokenKind::At) {
            directives.push(self.parse_directive(is_const)?);
        }
        Ok(directives)
    }

    fn parse_directive(&mut self, is_const: bool) -> PResult<Directive> {
        let start = self.start();
        self.expect(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments(is_const)?;
        Ok(Directive {
            name,
            arguments,
            span: self.span_from(start),
        })
    }

    // =========================================================================
    // Values and types
    // =========================================================================

    /// Parses a value. Variables are rejected when `is_const` is set.
    fn parse_value(&mut self, is_const: bool) -> PResult<Value> {
        let start = self.start();
        let span = self.current.span;

        let value = match self.current.kind {
            TokenKind::BracketL => {
                self.advance()?;
                let mut values = Vec::new();
                while !self.skip(TokenKind::BracketR)? {
                    values.push(self.parse_value(is_const)?);
                }
                return Ok(Value::List(ListValue {
                    values,
                    span: self.span_from(start),
                }));
            }
            TokenKind::BraceL => {
                self.advance()?;
                let mut fields = Vec::new();
                while !self.skip(TokenKind::BraceR)? {
                    fields.push(self.parse_object_field(is_const)?);
                }
                return Ok(Value::Object(ObjectValue {
                    fields,
                    span: self.span_from(start),
                }));
            }
            TokenKind::Dollar if !is_const => return Ok(Value::Variable(self.parse_variable()?)),
            TokenKind::String | TokenKind::BlockString => {
                return Ok(Value::String(self.parse_string_literal()?));
            }
            TokenKind::Int => Value::Int(IntValue {
                value: self.current.value().to_string(),
                span,
            }),
            TokenKind::Float => Value::Float(FloatValue {
                value: self.current.value().to_string(),
                span,
            }),
            TokenKind::Name => match self.current.value() {
                "true" => Value::Boolean(BooleanValue { value: true, span }),
                "false" => Value::Boolean(BooleanValue { value: false, span }),
                "null" => Value::Null(NullValue { span }),
                other => Value::Enum(EnumValue {
                    value: other.to_string(),
                    span,
                }),
            },
            _ if is_const => return Err(self.unexpected("constant value")),
            _ => return Err(self.unexpected("value")),
        };

        self.advance()?;
        Ok(value)
    }

    fn parse_object_field(&mut self, is_const: bool) -> PResult<ObjectField> {
        let start = self.start();
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value(is_const)?;
        Ok(ObjectField {
            name,
            value,
            span: self.span_from(start),
        })
    }

    fn parse_string_literal(&mut self) -> PResult<StringValue> {
        let block = match self.current.kind {
            TokenKind::String => false,
            TokenKind::BlockString => true,
            _ => return Err(self.unexpected("String")),
        };
        let value = StringValue {
            value: self.current.value().to_string(),
            block,
            span: self.current.span,
        };
        self.advance()?;
        Ok(value)
    }

    /// `Name`, `[Type]` or `Type!`.
    fn parse_type(&mut self) -> PResult<Type> {
        let start = self.start();

        let ty = if self.skip(TokenKind::BracketL)? {
            let inner = self.parse_type()?;
            self.expect(TokenKind::BracketR)?;
            Type::List(ListType {
                ty: Box::new(inner),
                span: self.span_from(start),
            })
        } else {
            Type::Named(self.parse_named_type()?)
        };

        if self.skip(TokenKind::Bang)? {
            return Ok(Type::NonNull(NonNullType {
                ty: Box::new(ty),
                span: self.span_from(start),
            }));
        }
        Ok(ty)
    }

    fn parse_named_type(&mut self) -> PResult<NamedType> {
        let name = self.parse_name()?;
        Ok(NamedType {
            span: name.span,
            name,
        })
    }

    fn parse_name(&mut self) -> PResult<Name> {
        if !self.at(TokenKind::Name) {
            return Err(self.unexpected("Name"));
        }
        let name = Name::new(self.current.value(), self.current.span);
        self.advance()?;
        Ok(name)
    }

    // =========================================================================
    // Type system
    // =========================================================================

    fn parse_description(&mut self) -> PResult<Option<StringValue>> {
        if self.at(TokenKind::String) || self.at(TokenKind::BlockString) {
            Ok(Some(self.parse_string_literal()?))
        } else {
            Ok(None)
        }
    }

    fn parse_type_system_definition(
        &mut self,
        description: Option<StringValue>,
    ) -> PResult<Definition> {
        let start = description
            .as_ref()
            .map_or_else(|| self.start(), |d| d.span.start);

        if self.at_keyword("schema") {
            return Ok(Definition::Schema(
                self.parse_schema_definition(start, description)?,
            ));
        }
        if self.at_keyword("directive") {
            return Ok(Definition::Directive(
                self.parse_directive_definition(start, description)?,
            ));
        }
        Ok(Definition::Type(self.parse_type_definition(start, description)?))
    }

    fn parse_type_definition(
        &mut self,
        start: u32,
        description: Option<StringValue>,
    ) -> PResult<TypeDefinition> {
        if !self.at(TokenKind::Name) {
            return Err(self.unexpected("definition"));
        }
        match self.current.value() {
            "scalar" => self.parse_scalar_type(start, description),
            "type" => self.parse_object_type(start, description),
            "interface" => self.parse_interface_type(start, description),
            "union" => self.parse_union_type(start, description),
            "enum" => self.parse_enum_type(start, description),
            "input" => self.parse_input_object_type(start, description),
            _ => Err(self.unexpected("definition")),
        }
    }

    fn parse_type_extension(&mut self) -> PResult<TypeExtension> {
        let start = self.start();
        self.expect_keyword("extend")?;
        let inner_start = self.start();
        let definition = self.parse_type_definition(inner_start, None)?;
        Ok(TypeExtension {
            definition,
            span: self.span_from(start),
        })
    }

    fn parse_schema_definition(
        &mut self,
        start: u32,
        description: Option<StringValue>,
    ) -> PResult<SchemaDefinition> {
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        let operation_types = self.many(
            TokenKind::BraceL,
            Self::parse_root_operation_type,
            TokenKind::BraceR,
        )?;

        Ok(SchemaDefinition {
            description,
            directives,
            operation_types,
            span: self.span_from(start),
        })
    }

    fn parse_root_operation_type(&mut self) -> PResult<RootOperationTypeDefinition> {
        let start = self.start();
        let keyword = self.parse_name()?;
        let operation = OperationType::parse(keyword.as_str());
        if operation.is_none() {
            tracing::warn!(
                keyword = %keyword,
                offset = keyword.span.start,
                "unknown root operation type in schema definition"
            );
        }
        self.expect(TokenKind::Colon)?;
        let named_type = self.parse_named_type()?;

        Ok(RootOperationTypeDefinition {
            operation,
            keyword,
            named_type,
            span: self.span_from(start),
        })
    }

    fn parse_scalar_type(
        &mut self,
        start: u32,
        description: Option<StringValue>,
    ) -> PResult<TypeDefinition> {
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;

        Ok(TypeDefinition::Scalar(ScalarTypeDefinition {
            description,
            name,
            directives,
            span: self.span_from(start),
        }))
    }

    fn parse_object_type(
        &mut self,
        start: u32,
        description: Option<StringValue>,
    ) -> PResult<TypeDefinition> {
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;

        Ok(TypeDefinition::Object(ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            span: self.span_from(start),
        }))
    }

    fn parse_interface_type(
        &mut self,
        start: u32,
        description: Option<StringValue>,
    ) -> PResult<TypeDefinition> {
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;

        Ok(TypeDefinition::Interface(InterfaceTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            span: self.span_from(start),
        }))
    }

    /// `implements A B C`. Commas are insignificant, so `A, B` works too.
    fn parse_implements(&mut self) -> PResult<Vec<NamedType>> {
        let mut interfaces = Vec::new();
        if !self.at_keyword("implements") {
            return Ok(interfaces);
        }
        self.advance()?;

        interfaces.push(self.parse_named_type()?);
        while self.at(TokenKind::Name) && !DEFINITION_KEYWORDS.contains(&self.current.value()) {
            interfaces.push(self.parse_named_type()?);
        }
        Ok(interfaces)
    }

    fn parse_union_type(
        &mut self,
        start: u32,
        description: Option<StringValue>,
    ) -> PResult<TypeDefinition> {
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;

        let mut members = Vec::new();
        if self.skip(TokenKind::Equals)? {
            self.skip(TokenKind::Pipe)?;
            members.push(self.parse_named_type()?);
            while self.skip(TokenKind::Pipe)? {
                members.push(self.parse_named_type()?);
            }
        }

        Ok(TypeDefinition::Union(UnionTypeDefinition {
            description,
            name,
            directives,
            members,
            span: self.span_from(start),
        }))
    }

    fn parse_enum_type(
        &mut self,
        start: u32,
        description: Option<StringValue>,
    ) -> PResult<TypeDefinition> {
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let values = self.optional_many(
            TokenKind::BraceL,
            Self::parse_enum_value_definition,
            TokenKind::BraceR,
        )?;

        Ok(TypeDefinition::Enum(EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            span: self.span_from(start),
        }))
    }

    fn parse_enum_value_definition(&mut self) -> PResult<EnumValueDefinition> {
        let description = self.parse_description()?;
        let start = description
            .as_ref()
            .map_or_else(|| self.start(), |d| d.span.start);

        if matches!(self.current.value(), "true" | "false" | "null") {
            return Err(self.unexpected("enum value name"));
        }
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;

        Ok(EnumValueDefinition {
            description,
            name,
            directives,
            span: self.span_from(start),
        })
    }

    fn parse_input_object_type(
        &mut self,
        start: u32,
        description: Option<StringValue>,
    ) -> PResult<TypeDefinition> {
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.optional_many(
            TokenKind::BraceL,
            Self::parse_input_value_definition,
            TokenKind::BraceR,
        )?;

        Ok(TypeDefinition::InputObject(InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            span: self.span_from(start),
        }))
    }

    fn parse_fields_definition(&mut self) -> PResult<Vec<FieldDefinition>> {
        self.optional_many(
            TokenKind::BraceL,
            Self::parse_field_definition,
            TokenKind::BraceR,
        )
    }

    fn parse_field_definition(&mut self) -> PResult<FieldDefinition> {
        let description = self.parse_description()?;
        let start = description
            .as_ref()
            .map_or_else(|| self.start(), |d| d.span.start);

        let name = self.parse_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type()?;
        let directives = self.parse_directives(true)?;

        Ok(FieldDefinition {
            description,
            name,
            arguments,
            ty,
            directives,
            span: self.span_from(start),
        })
    }

    fn parse_arguments_definition(&mut self) -> PResult<Vec<InputValueDefinition>> {
        self.optional_many(
            TokenKind::ParenL,
            Self::parse_input_value_definition,
            TokenKind::ParenR,
        )
    }

    fn parse_input_value_definition(&mut self) -> PResult<InputValueDefinition> {
        let description = self.parse_description()?;
        let start = description
            .as_ref()
            .map_or_else(|| self.start(), |d| d.span.start);

        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type()?;
        let default_value = if self.skip(TokenKind::Equals)? {
            Some(self.parse_value(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;

        Ok(InputValueDefinition {
            description,
            name,
            ty,
            default_value,
            directives,
            span: self.span_from(start),
        })
    }

    fn parse_directive_definition(
        &mut self,
        start: u32,
        description: Option<StringValue>,
    ) -> PResult<DirectiveDefinition> {
        self.expect_keyword("directive")?;
        self.expect(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments_definition()?;

        let repeatable = self.at_keyword("repeatable");
        if repeatable {
            self.advance()?;
        }

        self.expect_keyword("on")?;
        self.skip(TokenKind::Pipe)?;
        let mut locations = vec![self.parse_directive_location()?];
        while self.skip(TokenKind::Pipe)? {
            locations.push(self.parse_directive_location()?);
        }

        Ok(DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
            span: self.span_from(start),
        })
    }

    fn parse_directive_location(&mut self) -> PResult<DirectiveLocation> {
        let location = if self.at(TokenKind::Name) {
            DirectiveLocation::parse(self.current.value())
        } else {
            None
        };
        match location {
            Some(location) => {
                self.advance()?;
                Ok(location)
            }
            None => Err(self.unexpected("directive location")),
        }
    }
}
