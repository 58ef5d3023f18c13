//! Content type definitions.
//!
//! Plain configuration data describing the document types the site edits.
//! Built once at startup and shared read-only.

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    String,
    Text,
    Number,
    Boolean,
    Date,
    Slug,
    Image,
    File,
    RichText,
    Reference,
    Array,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub read_only: bool,
    /// Referenced document types, for `reference` fields.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<&'static str>,
}

impl FieldDef {
    fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            read_only: false,
            to: Vec::new(),
        }
    }

    fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    fn to(mut self, types: &[&'static str]) -> Self {
        self.to = types.to_vec();
        self
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentType {
    pub name: &'static str,
    pub singleton: bool,
    pub fields: Vec<FieldDef>,
}

impl ContentType {
    fn document(name: &'static str, fields: Vec<FieldDef>) -> Self {
        Self {
            name,
            singleton: false,
            fields,
        }
    }

    fn singleton(name: &'static str, fields: Vec<FieldDef>) -> Self {
        Self {
            name,
            singleton: true,
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SchemaRegistry {
    types: Vec<ContentType>,
}

impl SchemaRegistry {
    pub fn builtin() -> Self {
        use FieldType::*;

        let titled = || {
            vec![
                FieldDef::new("title", String),
                FieldDef::new("slug", Slug),
                FieldDef::new("description", Text),
            ]
        };

        let mut blog = titled();
        blog.extend([
            FieldDef::new("authors", Array).to(&["author"]),
            FieldDef::new("publishedAt", Date),
            FieldDef::new("image", Image),
            FieldDef::new("richText", RichText),
        ]);

        let mut page = titled();
        page.push(FieldDef::new("image", Image));

        let types = vec![
            ContentType::document("blog", blog),
            ContentType::document("page", page),
            ContentType::document(
                "faq",
                vec![
                    FieldDef::new("title", String),
                    FieldDef::new("richText", RichText),
                ],
            ),
            ContentType::document(
                "author",
                vec![
                    FieldDef::new("name", String),
                    FieldDef::new("position", String),
                    FieldDef::new("image", Image),
                    FieldDef::new("bio", Text),
                ],
            ),
            ContentType::document(
                "product",
                vec![
                    FieldDef::new("name", String).read_only(),
                    FieldDef::new("created_at", String).read_only(),
                    FieldDef::new("updated_at", String).read_only(),
                    FieldDef::new("id", Number).read_only(),
                ],
            ),
            ContentType::document(
                "scorm",
                vec![
                    FieldDef::new("file", File),
                    FieldDef::new("title", String),
                    FieldDef::new("body", RichText),
                ],
            ),
            ContentType::document(
                "productPage",
                vec![
                    FieldDef::new("product", Reference).to(&["product"]),
                    FieldDef::new("description", RichText),
                ],
            ),
            ContentType::singleton("homePage", titled()),
            ContentType::singleton("blogIndex", titled()),
            ContentType::singleton(
                "settings",
                vec![
                    FieldDef::new("siteTitle", String),
                    FieldDef::new("siteDescription", Text),
                    FieldDef::new("logo", Image),
                ],
            ),
            ContentType::singleton(
                "footer",
                vec![
                    FieldDef::new("label", String),
                    FieldDef::new("subtitle", Text),
                    FieldDef::new("columns", Array),
                ],
            ),
            ContentType::singleton(
                "navbar",
                vec![
                    FieldDef::new("label", String),
                    FieldDef::new("columns", Array),
                ],
            ),
        ];

        Self { types }
    }

    pub fn get(&self, name: &str) -> Option<&ContentType> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Content keys of `content` that `type_name` does not declare.
    /// Empty for unknown types.
    pub fn undeclared_fields<'a>(&self, type_name: &str, content: &'a Map<String, Value>) -> Vec<&'a str> {
        let Some(ty) = self.get(type_name) else {
            return Vec::new();
        };
        content
            .keys()
            .filter(|key| !key.starts_with('_') && ty.field(key).is_none())
            .map(String::as_str)
            .collect()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_fields_are_read_only() {
        let registry = SchemaRegistry::builtin();
        let product = registry.get("product").unwrap();

        assert!(!product.singleton);
        assert_eq!(product.fields.len(), 4);
        assert!(product.fields.iter().all(|f| f.read_only));
        assert_eq!(product.field("id").unwrap().field_type, FieldType::Number);
    }

    #[test]
    fn product_page_references_product() {
        let registry = SchemaRegistry::builtin();
        let page = registry.get("productPage").unwrap();
        assert_eq!(page.field("product").unwrap().to, vec!["product"]);
    }

    #[test]
    fn site_wide_types_are_singletons() {
        let registry = SchemaRegistry::builtin();
        for name in ["homePage", "blogIndex", "settings", "footer", "navbar"] {
            assert!(registry.get(name).unwrap().singleton, "{name}");
        }
        assert!(!registry.get("blog").unwrap().singleton);
    }

    #[test]
    fn reports_undeclared_fields() {
        let registry = SchemaRegistry::builtin();
        let record = json!({"_id": "x", "id": 1, "name": "Lamp", "price": 10});
        let extra = registry.undeclared_fields("product", record.as_object().unwrap());
        assert_eq!(extra, vec!["price"]);
        assert!(registry
            .undeclared_fields("unknown", record.as_object().unwrap())
            .is_empty());
    }

    #[test]
    fn serializes_as_configuration() {
        let registry = SchemaRegistry::builtin();
        let value = serde_json::to_value(registry.get("productPage").unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "productPage",
                "singleton": false,
                "fields": [
                    {"name": "product", "type": "reference", "to": ["product"]},
                    {"name": "description", "type": "richText"}
                ]
            })
        );
    }
}
