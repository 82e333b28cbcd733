//! Rendering a compiled template for a list of items

use std::fmt::{Display, Write};
use std::sync::Arc;

use super::template::Renderer;

/// A renderer driven by a sequence of items.
///
/// The count is the number of items. With a join separator the items' display
/// texts, joined by it, are passed as argument `[0]`; without one no argument
/// is passed.
#[derive(Debug, Clone)]
pub struct ListRenderer {
    renderer: Renderer,
    join: Option<Arc<str>>,
}

impl ListRenderer {
    pub fn new(renderer: Renderer, join: Option<&str>) -> Self {
        Self {
            renderer,
            join: join.map(Arc::from),
        }
    }

    /// Render for a list of items
    pub fn render<T: Display>(&self, items: &[T]) -> String {
        let count = items.len();
        match &self.join {
            Some(separator) => {
                let joined = join_items(items, separator);
                self.renderer.render(count, &[joined])
            }
            None => self.renderer.render_count(count),
        }
    }

    /// Convert into a plain closure
    pub fn into_fn<T: Display>(self) -> impl Fn(&[T]) -> String + Clone + Send + Sync {
        move |items: &[T]| self.render(items)
    }

    /// The underlying count renderer
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn join(&self) -> Option<&str> {
        self.join.as_deref()
    }
}

fn join_items<T: Display>(items: &[T], separator: &str) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        // Writing into a String cannot fail
        let _ = write!(out, "{}", item);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompileOptions;
    use crate::parser::parse;

    fn list(source: &str, join: Option<&str>) -> ListRenderer {
        let template = parse(source).expect("Should parse");
        ListRenderer::new(
            Renderer::new(source, template, &CompileOptions::default()),
            join,
        )
    }

    #[test]
    fn test_count_from_length() {
        let r = list("The user[|s] in this list [is|are] banned.", None);
        assert_eq!(r.render(&["John"]), "The user in this list is banned.");
        assert_eq!(
            r.render(&["John", "James"]),
            "The users in this list are banned."
        );
    }

    #[test]
    fn test_joined_argument() {
        let r = list("The following user[|s] [is|are] banned: [0]", Some(", "));
        assert_eq!(r.render(&["Bob"]), "The following user is banned: Bob");
        assert_eq!(
            r.render(&["Bob", "Josh"]),
            "The following users are banned: Bob, Josh"
        );
    }

    #[test]
    fn test_without_join_argument_is_missing() {
        let r = list("banned: [0]", None);
        assert_eq!(r.render(&["Bob"]), "banned: ");
    }

    #[test]
    fn test_higher_arguments_are_missing() {
        let r = list("[0]/[1]", Some("+"));
        assert_eq!(r.render(&[1, 2, 3]), "1+2+3/");
    }

    #[test]
    fn test_empty_list() {
        let r = list("[no item|items|nothing] [0]", Some(", "));
        assert_eq!(r.render::<&str>(&[]), "nothing ");
    }

    #[test]
    fn test_into_fn() {
        let f = list("[#] file[|s]", None).into_fn::<u32>();
        assert_eq!(f(&[7]), "1 file");
        assert_eq!(f(&[7, 8]), "2 files");
    }

    #[test]
    fn test_accessors() {
        let r = list("[#]", Some(" and "));
        assert_eq!(r.join(), Some(" and "));
        assert_eq!(r.renderer().source(), "[#]");
    }
}
