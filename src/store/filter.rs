//! Composable boolean filters rendered to the store's formula syntax.
//!
//! Field names are wrapped in `{}`, string literals in single quotes with
//! quote doubling. Blank checks compare against `BLANK()`.

/// A boolean filter expression over named fields.
#[derive(Debug, Clone)]
pub enum Filter {
    Eq(&'static str, String),
    NotEq(&'static str, String),
    Blank(&'static str),
    NotBlank(&'static str),
    And(Vec<Filter>),
    Or(Vec<Filter>),
}

impl Filter {
    /// Equality against any displayable value.
    pub fn eq(field: &'static str, value: impl Into<String>) -> Filter {
        Filter::Eq(field, value.into())
    }

    /// Render the expression as a store formula string.
    pub fn to_formula(&self) -> String {
        match self {
            Filter::Eq(field, value) => format!("{{{field}}} = '{}'", escape(value)),
            Filter::NotEq(field, value) => format!("{{{field}}} != '{}'", escape(value)),
            Filter::Blank(field) => format!("{{{field}}} = BLANK()"),
            Filter::NotBlank(field) => format!("{{{field}}} != BLANK()"),
            Filter::And(parts) => combine("AND", parts),
            Filter::Or(parts) => combine("OR", parts),
        }
    }
}

fn combine(op: &str, parts: &[Filter]) -> String {
    match parts {
        [] => "TRUE()".to_string(),
        [single] => single.to_formula(),
        many => {
            let inner: Vec<String> = many.iter().map(Filter::to_formula).collect();
            format!("{op}({})", inner.join(", "))
        }
    }
}

fn escape(value: &str) -> String {
    value.replace('\'', "''")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort key applied server-side by the store.
#[derive(Debug, Clone)]
pub struct Sort {
    pub field: &'static str,
    pub direction: SortDirection,
}

impl Sort {
    pub fn desc(field: &'static str) -> Sort {
        Sort {
            field,
            direction: SortDirection::Desc,
        }
    }

    pub fn asc(field: &'static str) -> Sort {
        Sort {
            field,
            direction: SortDirection::Asc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_equality_and_blank_checks() {
        assert_eq!(
            Filter::eq("Stage", "🆕 New").to_formula(),
            "{Stage} = '🆕 New'"
        );
        assert_eq!(Filter::NotBlank("Stage").to_formula(), "{Stage} != BLANK()");
        assert_eq!(Filter::Blank("Close Date").to_formula(), "{Close Date} = BLANK()");
    }

    #[test]
    fn renders_nested_boolean_expressions() {
        let f = Filter::And(vec![
            Filter::NotBlank("Stage"),
            Filter::Or(vec![
                Filter::eq("Response Type", "⭐ Shortlist"),
                Filter::eq("Response Type", "🎙 Interview"),
            ]),
        ]);
        assert_eq!(
            f.to_formula(),
            "AND({Stage} != BLANK(), OR({Response Type} = '⭐ Shortlist', {Response Type} = '🎙 Interview'))"
        );
    }

    #[test]
    fn single_element_groups_collapse() {
        let f = Filter::And(vec![Filter::NotBlank("Stage")]);
        assert_eq!(f.to_formula(), "{Stage} != BLANK()");
        assert_eq!(Filter::Or(vec![]).to_formula(), "TRUE()");
    }

    #[test]
    fn escapes_single_quotes_in_values() {
        assert_eq!(
            Filter::eq("Client", "O'Brien & Co").to_formula(),
            "{Client} = 'O''Brien & Co'"
        );
    }
}
