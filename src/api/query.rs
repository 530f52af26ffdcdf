//! PostgREST Query Builder
//!
//! Builds the query string for `/rest/v1/<table>` calls. Filters follow the
//! PostgREST syntax (`column=op.value`); values are percent-encoded.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left readable in keys and values. PostgREST needs the
/// operator punctuation (`.`, `,`, `(`, `)`, `*`, `:`) as-is.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'*')
    .remove(b',')
    .remove(b'(')
    .remove(b')')
    .remove(b':')
    .remove(b'!');

/// A table read or filter, built fluently
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: String,
    params: Vec<(String, String)>,
}

impl Query {
    pub fn table(name: &str) -> Self {
        Self {
            table: name.to_string(),
            params: Vec::new(),
        }
    }

    fn param(mut self, key: &str, value: String) -> Self {
        self.params.push((key.to_string(), value));
        self
    }

    /// Columns and embedded resources, e.g. `*,restaurant:restaurants(name)`
    pub fn select(self, columns: &str) -> Self {
        self.param("select", columns.to_string())
    }

    pub fn eq(self, column: &str, value: impl std::fmt::Display) -> Self {
        self.param(column, format!("eq.{}", value))
    }

    /// Case-insensitive substring match
    pub fn ilike(self, column: &str, needle: &str) -> Self {
        self.param(column, format!("ilike.*{}*", needle))
    }

    pub fn in_list<I, S>(self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.param(column, format!("in.({})", joined))
    }

    pub fn order(self, column: &str, ascending: bool) -> Self {
        let dir = if ascending { "asc" } else { "desc" };
        self.param("order", format!("{}.{}", column, dir))
    }

    pub fn limit(self, count: usize) -> Self {
        self.param("limit", count.to_string())
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, QUERY_VALUE),
                    utf8_percent_encode(v, QUERY_VALUE)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_order() {
        let q = Query::table("restaurants").select("*").order("name", true);
        assert_eq!(q.table_name(), "restaurants");
        assert_eq!(q.to_query_string(), "select=*&order=name.asc");
    }

    #[test]
    fn test_filters_are_encoded() {
        let q = Query::table("restaurants")
            .ilike("name", "pizza hut")
            .eq("cuisine_type", "Italian");
        assert_eq!(
            q.to_query_string(),
            "name=ilike.*pizza%20hut*&cuisine_type=eq.Italian"
        );
    }

    #[test]
    fn test_reserved_characters_in_values() {
        let q = Query::table("restaurants").ilike("name", "A&B=C");
        assert_eq!(q.to_query_string(), "name=ilike.*A%26B%3DC*");
    }

    #[test]
    fn test_in_list_and_embed() {
        let q = Query::table("orders")
            .select("*,restaurant:restaurants(name,address,phone)")
            .in_list("status", ["confirmed", "picked_up"])
            .order("created_at", false)
            .limit(10);
        assert_eq!(
            q.to_query_string(),
            "select=*,restaurant:restaurants(name,address,phone)&status=in.(confirmed,picked_up)&order=created_at.desc&limit=10"
        );
    }
}
