//! Builder for IGDB's query language (Apicalypse).
//!
//! A body is a sequence of `;`-terminated statements, e.g.
//! `fields id,name; search "celeste";` or `fields name; where id = (1,2);`.

use super::types::IgdbId;

const THUMBNAIL_SEGMENT: &str = "t_thumb";
const ORIGINAL_SEGMENT: &str = "t_original";

#[derive(Debug, Clone, Default)]
pub struct QueryBody {
    fields: Vec<String>,
    search: Option<String>,
    conditions: Vec<String>,
}

impl QueryBody {
    pub fn fields(fields: &[&str]) -> Self {
        Self {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn search(mut self, term: &str) -> Self {
        self.search = Some(term.to_string());
        self
    }

    /// Add a `where` condition; several are joined with `&`.
    pub fn filter(mut self, condition: impl Into<String>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    pub fn build(&self) -> String {
        let mut body = format!("fields {};", self.fields.join(","));

        if let Some(term) = &self.search {
            body.push_str(&format!(" search \"{}\";", escape(term)));
        }

        if !self.conditions.is_empty() {
            body.push_str(&format!(" where {};", self.conditions.join(" & ")));
        }

        body
    }
}

fn escape(term: &str) -> String {
    term.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render ids in the set-membership syntax: a single id stays bare,
/// several become `(a,b,c)`. Returns `None` for an empty list.
pub fn id_filter(ids: &[IgdbId]) -> Option<String> {
    match ids {
        [] => None,
        [id] => Some(id.to_string()),
        ids => Some(format!(
            "({})",
            ids.iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",")
        )),
    }
}

/// Point an image URL at the full-size rendition and give it a scheme.
///
/// IGDB hands out protocol-relative thumbnail URLs such as
/// `//images.igdb.com/igdb/image/upload/t_thumb/abc.jpg`.
pub fn original_image_url(url: &str) -> String {
    let resized = url.replacen(THUMBNAIL_SEGMENT, ORIGINAL_SEGMENT, 1);
    if resized.starts_with("//") {
        format!("https:{resized}")
    } else {
        resized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_and_search() {
        let body = QueryBody::fields(&["id", "first_release_date", "name"])
            .search("Celeste")
            .build();
        assert_eq!(body, r#"fields id,first_release_date,name; search "Celeste";"#);
    }

    #[test]
    fn test_search_term_is_escaped() {
        let body = QueryBody::fields(&["id"]).search(r#"The "Best" \ Game"#).build();
        assert_eq!(body, r#"fields id; search "The \"Best\" \\ Game";"#);
    }

    #[test]
    fn test_conditions_are_joined() {
        let body = QueryBody::fields(&["id", "name"])
            .filter("id = (1,2)")
            .filter("version_parent = null")
            .filter("parent_game = null")
            .build();
        assert_eq!(
            body,
            "fields id,name; where id = (1,2) & version_parent = null & parent_game = null;"
        );
    }

    #[test]
    fn test_id_filter_shapes() {
        assert_eq!(id_filter(&[]), None);
        assert_eq!(id_filter(&[42]).as_deref(), Some("42"));
        assert_eq!(id_filter(&[1, 2, 3]).as_deref(), Some("(1,2,3)"));
    }

    #[test]
    fn test_original_image_url() {
        assert_eq!(
            original_image_url("//images.igdb.com/igdb/image/upload/t_thumb/co1tnw.jpg"),
            "https://images.igdb.com/igdb/image/upload/t_original/co1tnw.jpg"
        );
        assert_eq!(
            original_image_url("https://images.igdb.com/igdb/image/upload/t_thumb/ar5l8.jpg"),
            "https://images.igdb.com/igdb/image/upload/t_original/ar5l8.jpg"
        );
    }
}
