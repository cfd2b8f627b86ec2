//! Canonical printing of documents.
//!
//! The output parses back to a document with the same structure. Spans are
//! not preserved.

use crate::ast::*;

/// Printing options.
#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// Number of spaces for indentation.
    pub indent_size: usize,
    /// Use tabs instead of spaces.
    pub use_tabs: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent_size: 2,
            use_tabs: false,
        }
    }
}

/// Document printer.
pub struct Printer {
    options: PrintOptions,
    output: String,
    indent: usize,
}

impl Printer {
    /// Creates a new printer.
    #[must_use]
    pub fn new(options: PrintOptions) -> Self {
        Self {
            options,
            output: String::new(),
            indent: 0,
        }
    }

    /// Prints a document. Non-empty output ends with a newline.
    pub fn print(&mut self, document: &Document) -> String {
        self.output.clear();
        self.indent = 0;

        for (i, def) in document.definitions.iter().enumerate() {
            if i > 0 {
                self.output.push_str("\n\n");
            }
            self.print_definition(def);
        }
        if !document.definitions.is_empty() {
            self.output.push('\n');
        }

        std::mem::take(&mut self.output)
    }

    fn print_definition(&mut self, def: &Definition) {
        match def {
            Definition::Operation(op) => self.print_operation(op),
            Definition::Fragment(frag) => self.print_fragment(frag),
            Definition::Schema(schema) => self.print_schema(schema),
            Definition::Type(ty) => self.print_type_definition(ty),
            Definition::Directive(dir) => self.print_directive_definition(dir),
            Definition::Extension(ext) => {
                self.output.push_str("extend ");
                self.print_type_definition(&ext.definition);
            }
        }
    }

    // =========================================================================
    // Executable definitions
    // =========================================================================

    fn print_operation(&mut self, op: &OperationDefinition) {
        let shorthand = op.operation == OperationType::Query
            && op.name.is_none()
            && op.variable_definitions.is_empty()
            && op.directives.is_empty();

        if !shorthand {
            self.output.push_str(op.operation.as_str());
            if let Some(name) = &op.name {
                self.output.push(' ');
                self.output.push_str(name.as_str());
            }
            if !op.variable_definitions.is_empty() {
                self.output.push('(');
                for (i, var) in op.variable_definitions.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.print_variable_definition(var);
                }
                self.output.push(')');
            }
            self.print_directives(&op.directives);
            self.output.push(' ');
        }

        self.print_selection_set(&op.selection_set);
    }

    fn print_variable_definition(&mut self, var: &VariableDefinition) {
        self.output.push('$');
        self.output.push_str(var.variable.name.as_str());
        self.output.push_str(": ");
        self.print_type(&var.ty);
        if let Some(default) = &var.default_value {
            self.output.push_str(" = ");
            self.print_value(default);
        }
        self.print_directives(&var.directives);
    }

    fn print_fragment(&mut self, frag: &FragmentDefinition) {
        self.output.push_str("fragment ");
        self.output.push_str(frag.name.as_str());
        self.output.push_str(" on ");
        self.output.push_str(frag.type_condition.name.as_str());
        self.print_directives(&frag.directives);
        self.output.push(' ');
        self.print_selection_set(&frag.selection_set);
    }

    fn print_selection_set(&mut self, set: &SelectionSet) {
        self.output.push_str("{\n");
        self.indent += 1;
        for selection in &set.selections {
            self.push_indent();
            self.print_selection(selection);
            self.output.push('\n');
        }
        self.indent -= 1;
        self.push_indent();
        self.output.push('}');
    }

    fn print_selection(&mut self, selection: &Selection) {
        match selection {
            Selection::Field(field) => {
                if let Some(alias) = &field.alias {
                    self.output.push_str(alias.as_str());
                    self.output.push_str(": ");
                }
                self.output.push_str(field.name.as_str());
                self.print_arguments(&field.arguments);
                self.print_directives(&field.directives);
                if let Some(set) = &field.selection_set {
                    self.output.push(' ');
                    self.print_selection_set(set);
                }
            }
            Selection::FragmentSpread(spread) => {
                self.output.push_str("...");
                self.output.push_str(spread.name.as_str());
                self.print_directives(&spread.directives);
            }
            Selection::InlineFragment(inline) => {
                self.output.push_str("...");
                if let Some(ty) = &inline.type_condition {
                    self.output.push_str(" on ");
                    self.output.push_str(ty.name.as_str());
                }
                self.print_directives(&inline.directives);
                self.output.push(' ');
                self.print_selection_set(&inline.selection_set);
            }
        }
    }

    fn print_arguments(&mut self, arguments: &[Argument]) {
        if arguments.is_empty() {
            return;
        }
        self.output.push('(');
        for (i, arg) in arguments.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.output.push_str(arg.name.as_str());
            self.output.push_str(": ");
            self.print_value(&arg.value);
        }
        self.output.push(')');
    }

    fn print_directives(&mut self, directives: &[Directive]) {
        for dir in directives {
            self.output.push_str(" @");
            self.output.push_str(dir.name.as_str());
            self.print_arguments(&dir.arguments);
        }
    }

    // =========================================================================
    // Values and types
    // =========================================================================

    fn print_value(&mut self, value: &Value) {
        match value {
            Value::Variable(var) => {
                self.output.push('$');
                self.output.push_str(var.name.as_str());
            }
            Value::Int(int) => self.output.push_str(&int.value),
            Value::Float(float) => self.output.push_str(&float.value),
            Value::String(string) => self.print_string(string),
            Value::Boolean(b) => {
                self.output.push_str(if b.value { "true" } else { "false" });
            }
            Value::Null(_) => self.output.push_str("null"),
            Value::Enum(e) => self.output.push_str(&e.value),
            Value::List(list) => {
                self.output.push('[');
                for (i, item) in list.values.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.print_value(item);
                }
                self.output.push(']');
            }
            Value::Object(object) => {
                self.output.push('{');
                for (i, field) in object.fields.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.output.push_str(field.name.as_str());
                    self.output.push_str(": ");
                    self.print_value(&field.value);
                }
                self.output.push('}');
            }
        }
    }

    fn print_type(&mut self, ty: &Type) {
        match ty {
            Type::Named(named) => self.output.push_str(named.name.as_str()),
            Type::List(list) => {
                self.output.push('[');
                self.print_type(&list.ty);
                self.output.push(']');
            }
            Type::NonNull(non_null) => {
                self.print_type(&non_null.ty);
                self.output.push('!');
            }
        }
    }

    /// Prints a string value, as a block string when it was written as one
    /// and the block form reproduces it.
    fn print_string(&mut self, string: &StringValue) {
        if !string.block {
            push_quoted(&mut self.output, &string.value);
            return;
        }

        let value = &string.value;
        if !value.contains(['\n', '\r'])
            && !is_blank(value)
            && !value.ends_with(['"', '\\'])
        {
            self.output.push_str("\"\"\"");
            self.output.push_str(&value.replace("\"\"\"", "\\\"\"\""));
            self.output.push_str("\"\"\"");
        } else if fits_multiline_block(value) {
            self.output.push_str("\"\"\"\n");
            for line in value.split('\n') {
                if !line.is_empty() {
                    self.push_indent();
                    self.output.push_str(&line.replace("\"\"\"", "\\\"\"\""));
                }
                self.output.push('\n');
            }
            self.push_indent();
            self.output.push_str("\"\"\"");
        } else {
            push_quoted(&mut self.output, value);
        }
    }

    // =========================================================================
    // Type system
    // =========================================================================

    fn print_description(&mut self, description: Option<&StringValue>) {
        if let Some(desc) = description {
            self.print_string(desc);
            self.output.push('\n');
            self.push_indent();
        }
    }

    fn print_schema(&mut self, schema: &SchemaDefinition) {
        self.print_description(schema.description.as_ref());
        self.output.push_str("schema");
        self.print_directives(&schema.directives);
        self.output.push_str(" {\n");
        self.indent += 1;
        for op in &schema.operation_types {
            self.push_indent();
            self.output.push_str(op.keyword.as_str());
            self.output.push_str(": ");
            self.output.push_str(op.named_type.name.as_str());
            self.output.push('\n');
        }
        self.indent -= 1;
        self.output.push('}');
    }

    fn print_type_definition(&mut self, def: &TypeDefinition) {
        match def {
            TypeDefinition::Scalar(scalar) => {
                self.print_description(scalar.description.as_ref());
                self.output.push_str("scalar ");
                self.output.push_str(scalar.name.as_str());
                self.print_directives(&scalar.directives);
            }
            TypeDefinition::Object(object) => {
                self.print_description(object.description.as_ref());
                self.output.push_str("type ");
                self.output.push_str(object.name.as_str());
                self.print_implements(&object.interfaces);
                self.print_directives(&object.directives);
                self.print_fields(&object.fields);
            }
            TypeDefinition::Interface(iface) => {
                self.print_description(iface.description.as_ref());
                self.output.push_str("interface ");
                self.output.push_str(iface.name.as_str());
                self.print_implements(&iface.interfaces);
                self.print_directives(&iface.directives);
                self.print_fields(&iface.fields);
            }
            TypeDefinition::Union(union) => {
                self.print_description(union.description.as_ref());
                self.output.push_str("union ");
                self.output.push_str(union.name.as_str());
                self.print_directives(&union.directives);
                for (i, member) in union.members.iter().enumerate() {
                    self.output.push_str(if i == 0 { " = " } else { " | " });
                    self.output.push_str(member.name.as_str());
                }
            }
            TypeDefinition::Enum(e) => {
                self.print_description(e.description.as_ref());
                self.output.push_str("enum ");
                self.output.push_str(e.name.as_str());
                self.print_directives(&e.directives);
                self.print_block(&e.values, |printer, value| {
                    printer.print_description(value.description.as_ref());
                    printer.output.push_str(value.name.as_str());
                    printer.print_directives(&value.directives);
                });
            }
            TypeDefinition::InputObject(input) => {
                self.print_description(input.description.as_ref());
                self.output.push_str("input ");
                self.output.push_str(input.name.as_str());
                self.print_directives(&input.directives);
                self.print_block(&input.fields, Self::print_input_value_definition);
            }
        }
    }

    fn print_implements(&mut self, interfaces: &[NamedType]) {
        if interfaces.is_empty() {
            return;
        }
        self.output.push_str(" implements");
        for iface in interfaces {
            self.output.push(' ');
            self.output.push_str(iface.name.as_str());
        }
    }

    fn print_fields(&mut self, fields: &[FieldDefinition]) {
        self.print_block(fields, |printer, field| {
            printer.print_description(field.description.as_ref());
            printer.output.push_str(field.name.as_str());
            printer.print_arguments_definition(&field.arguments);
            printer.output.push_str(": ");
            printer.print_type(&field.ty);
            printer.print_directives(&field.directives);
        });
    }

    /// ` {` items `}`, or nothing for an empty body.
    fn print_block<T>(&mut self, items: &[T], mut print_item: impl FnMut(&mut Self, &T)) {
        if items.is_empty() {
            return;
        }
        self.output.push_str(" {\n");
        self.indent += 1;
        for item in items {
            self.push_indent();
            print_item(self, item);
            self.output.push('\n');
        }
        self.indent -= 1;
        self.push_indent();
        self.output.push('}');
    }

    fn print_arguments_definition(&mut self, arguments: &[InputValueDefinition]) {
        if arguments.is_empty() {
            return;
        }

        if arguments.iter().any(|arg| arg.description.is_some()) {
            self.output.push_str("(\n");
            self.indent += 1;
            for arg in arguments {
                self.push_indent();
                self.print_input_value_definition(arg);
                self.output.push('\n');
            }
            self.indent -= 1;
            self.push_indent();
            self.output.push(')');
            return;
        }

        self.output.push('(');
        for (i, arg) in arguments.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.print_input_value_definition(arg);
        }
        self.output.push(')');
    }

    fn print_input_value_definition(&mut self, input: &InputValueDefinition) {
        self.print_description(input.description.as_ref());
        self.output.push_str(input.name.as_str());
        self.output.push_str(": ");
        self.print_type(&input.ty);
        if let Some(default) = &input.default_value {
            self.output.push_str(" = ");
            self.print_value(default);
        }
        self.print_directives(&input.directives);
    }

    fn print_directive_definition(&mut self, def: &DirectiveDefinition) {
        self.print_description(def.description.as_ref());
        self.output.push_str("directive @");
        self.output.push_str(def.name.as_str());
        self.print_arguments_definition(&def.arguments);
        if def.repeatable {
            self.output.push_str(" repeatable");
        }
        self.output.push_str(" on ");
        for (i, location) in def.locations.iter().enumerate() {
            if i > 0 {
                self.output.push_str(" | ");
            }
            self.output.push_str(location.as_str());
        }
    }

    fn push_indent(&mut self) {
        if self.options.use_tabs {
            for _ in 0..self.indent {
                self.output.push('\t');
            }
        } else {
            for _ in 0..(self.indent * self.options.indent_size) {
                self.output.push(' ');
            }
        }
    }
}

fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| matches!(b, b' ' | b'\t'))
}

/// Whether the indented `"""` form dedents back to `value`.
fn fits_multiline_block(value: &str) -> bool {
    if value.contains('\r') {
        return false;
    }
    let lines: Vec<&str> = value.split('\n').collect();
    let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
        return false;
    };
    if is_blank(first) || is_blank(last) {
        return false;
    }
    lines
        .iter()
        .filter(|line| !is_blank(line))
        .any(|line| !line.starts_with([' ', '\t']))
}

/// Writes `value` as a quoted string with escapes.
fn push_quoted(output: &mut String, value: &str) {
    output.push('"');
    for c in value.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            '\u{0008}' => output.push_str("\\b"),
            '\u{000C}' => output.push_str("\\f"),
            c if u32::from(c) < 0x20 => {
                output.push_str(&format!("\\u{:04X}", u32::from(c)));
            }
            c => output.push(c),
        }
    }
    output.push('"');
}

/// Prints a document with default options.
#[must_use]
pub fn print(document: &Document) -> String {
    Printer::new(PrintOptions::default()).print(document)
}

/// Prints a document with custom options.
#[must_use]
pub fn print_with_options(document: &Document, options: PrintOptions) -> String {
    Printer::new(options).print(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use sgql_core::Source;

    fn reprint(text: &str) -> String {
        let source = Source::new(text);
        print(&parse(&source).unwrap())
    }

    /// Printing is a fixed point after one pass.
    fn assert_stable(text: &str) {
        let once = reprint(text);
        let twice = reprint(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_print_operations() {
        let output = reprint(
            "query Hero($episode: Episode = JEDI, $withFriends: Boolean!) @live { hero(episode: $episode) { name, ...on Droid { primaryFunction } friends @include(if: $withFriends) { ...FriendFields } } }",
        );
        insta::assert_snapshot!(output.trim_end(), @r###"
        query Hero($episode: Episode = JEDI, $withFriends: Boolean!) @live {
          hero(episode: $episode) {
            name
            ... on Droid {
              primaryFunction
            }
            friends @include(if: $withFriends) {
              ...FriendFields
            }
          }
        }
        "###);
    }

    #[test]
    fn test_print_shorthand_query() {
        assert_eq!(reprint("{a}"), "{\n  a\n}\n");
        assert_eq!(reprint("query { a }"), "{\n  a\n}\n");
        assert_eq!(reprint("query Q { a }"), "query Q {\n  a\n}\n");
    }

    #[test]
    fn test_print_empty_document() {
        assert_eq!(reprint("# nothing here"), "");
    }

    #[test]
    fn test_print_values() {
        let output = reprint(
            r#"{ f(a: [1, 2.5, "q\"uote\n", null, true, RED], b: {x: $v, y: {z: []}}) }"#,
        );
        assert_eq!(
            output,
            "{\n  f(a: [1, 2.5, \"q\\\"uote\\n\", null, true, RED], b: {x: $v, y: {z: []}})\n}\n"
        );
    }

    #[test]
    fn test_print_type_system() {
        let output = reprint(
            r#"
            schema { query: Query }
            "An entity" interface Node { id: ID! }
            type User implements Node @key(fields: "id") {
              id: ID!
              posts(first: Int = 10): [Post!]!
            }
            union Result = | User | Error
            enum Role { ADMIN USER }
            input Filter { role: Role = USER }
            scalar Date
            directive @key(fields: String!) repeatable on OBJECT | INTERFACE
            extend type User { age: Int }
            "#,
        );
        insta::assert_snapshot!(output.trim_end(), @r###"
        schema {
          query: Query
        }

        "An entity"
        interface Node {
          id: ID!
        }

        type User implements Node @key(fields: "id") {
          id: ID!
          posts(first: Int = 10): [Post!]!
        }

        union Result = User | Error

        enum Role {
          ADMIN
          USER
        }

        input Filter {
          role: Role = USER
        }

        scalar Date

        directive @key(fields: String!) repeatable on OBJECT | INTERFACE

        extend type User {
          age: Int
        }
        "###);
    }

    #[test]
    fn test_print_block_strings() {
        let output = reprint("\"\"\"\n  Multi\n    line\n\"\"\"\ntype T { f(\"arg doc\" a: Int): Int }");
        assert_eq!(
            output,
            "\"\"\"\nMulti\n  line\n\"\"\"\ntype T {\n  f(\n    \"arg doc\"\n    a: Int\n  ): Int\n}\n"
        );
        assert_stable(&output);
    }

    #[test]
    fn test_print_is_stable() {
        assert_stable("query Q($a: [Int!] = [1]) { a: b(c: {d: \"e\"}) @x { ... @y { z } } }");
        assert_stable("fragment F on T @d { a ...G }");
        assert_stable(r#"{ f(s: """  leading space""", t: """has \""" inside""", u: "\u0001") }"#);
        assert_stable("type T { \"\"\"\n  indented\n  doc \"\"\"\n  f: Int }");
    }

    #[test]
    fn test_block_string_ending_in_backslash() {
        let text = "{ f(s: \"\"\"\na\\\n\"\"\") }";
        let once = reprint(text);
        let document = parse(&Source::new(&once)).unwrap();
        let Some(Definition::Operation(op)) = document.definitions.first() else {
            panic!("expected an operation");
        };
        let Selection::Field(field) = &op.selection_set.selections[0] else {
            panic!("expected a field");
        };
        let Value::String(string) = &field.arguments[0].value else {
            panic!("expected a string");
        };
        assert_eq!(string.value, "a\\");
        assert_stable(text);
    }

    #[test]
    fn test_print_with_tabs() {
        let source = Source::new("{ a { b } }");
        let document = parse(&source).unwrap();
        let output = print_with_options(
            &document,
            PrintOptions {
                indent_size: 4,
                use_tabs: true,
            },
        );
        assert_eq!(output, "{\n\ta {\n\t\tb\n\t}\n}\n");
    }
}
