use crate::schema::SchemaBuildError;

/// Represents the annotated type for a [`Field`](crate::types::Field) or an
/// [`InputValue`](crate::types::InputValue).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// A nullable list whose elements are annotated by `inner`.
    pub fn list(inner: impl Into<TypeAnnotation>) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type_annotation: Box::new(inner.into()),
            nullable: true,
        })
    }

    /// A nullable reference to the type named `type_name`.
    pub fn named(type_name: impl Into<String>) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable: true,
            type_name: type_name.into(),
        })
    }

    /// Returns this annotation marked as non-nullable.
    pub fn non_null(self) -> Self {
        match self {
            Self::List(annot) => Self::List(ListTypeAnnotation {
                nullable: false,
                ..annot
            }),
            Self::Named(annot) => Self::Named(NamedTypeAnnotation {
                nullable: false,
                ..annot
            }),
        }
    }

    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { inner_type_annotation, .. })
                => inner_type_annotation.innermost_named_type_annotation(),
            TypeAnnotation::Named(named_annot)
                => named_annot,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            TypeAnnotation::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }

    /// Convert this annotation into the recursive `graphql_parser` form, where
    /// non-null wraps the inner type rather than being a flag on it.
    pub(crate) fn to_gp(&self) -> graphql_parser::schema::Type<'static, String> {
        use graphql_parser::schema::Type as GpType;
        let (inner, nullable) = match self {
            Self::Named(annot) => (
                GpType::NamedType(annot.type_name.clone()),
                annot.nullable,
            ),
            Self::List(annot) => (
                GpType::ListType(Box::new(annot.inner_type_annotation.to_gp())),
                annot.nullable,
            ),
        };
        if nullable {
            inner
        } else {
            GpType::NonNullType(Box::new(inner))
        }
    }
}
impl std::str::FromStr for TypeAnnotation {
    type Err = SchemaBuildError;

    /// Parses SDL type-reference notation such as `String`, `[ID!]` or
    /// `[[Int]!]!`.
    fn from_str(annotation: &str) -> Result<Self, Self::Err> {
        let invalid = || SchemaBuildError::InvalidTypeAnnotation {
            annotation: annotation.to_string(),
        };

        let mut parser = TypeAnnotationParser {
            chars: annotation.trim().chars().peekable(),
        };
        let parsed = parser.parse().ok_or_else(invalid)?;
        if parser.chars.next().is_some() {
            return Err(invalid());
        }
        Ok(parsed)
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
/// A nullable reference to the type named by the string. SDL notation such as
/// `[ID!]` is not interpreted here; use [`str::parse`] for that.
impl std::convert::From<&str> for TypeAnnotation {
    fn from(type_name: &str) -> Self {
        Self::named(type_name)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}

/// A list-of-`T` [`TypeAnnotation`].
#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub(super) inner_type_annotation: Box<TypeAnnotation>,
    pub(super) nullable: bool,
}
impl ListTypeAnnotation {
    /// The [`TypeAnnotation`] of the list's elements.
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_annotation
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}

/// A [`TypeAnnotation`] naming a single type.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(super) nullable: bool,
    pub(super) type_name: String,
}
impl NamedTypeAnnotation {
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// The name of the referenced type.
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}

struct TypeAnnotationParser<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}
impl TypeAnnotationParser<'_> {
    fn parse(&mut self) -> Option<TypeAnnotation> {
        self.skip_whitespace();
        let annotation =
            if self.chars.peek() == Some(&'[') {
                self.chars.next();
                let inner = self.parse()?;
                self.skip_whitespace();
                if self.chars.next() != Some(']') {
                    return None;
                }
                TypeAnnotation::list(inner)
            } else {
                let mut name = String::new();
                while let Some(&c) = self.chars.peek() {
                    if c == '_' || c.is_ascii_alphanumeric() {
                        name.push(c);
                        self.chars.next();
                    } else {
                        break;
                    }
                }
                if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
                    return None;
                }
                TypeAnnotation::named(name)
            };

        self.skip_whitespace();
        if self.chars.peek() == Some(&'!') {
            self.chars.next();
            Some(annotation.non_null())
        } else {
            Some(annotation)
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.chars.next();
        }
    }
}
