use heck::{ToSnakeCase, ToUpperCamelCase};

/// A model name, stored as its lowercase word parts so that `BlogPost`,
/// `blog_post` and `blogPost` compare equal.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let parts = src
            .to_snake_case()
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
        Self { parts }
    }

    pub fn upper_camel_case(&self) -> String {
        self.snake_case().to_upper_camel_case()
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }
}

impl From<&str> for Name {
    fn from(src: &str) -> Self {
        Self::new(src)
    }
}
