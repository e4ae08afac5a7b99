//! Template filters for `resume.html`.
//!
//! Both return markup that is already escaped, so call sites pipe the
//! result through `|safe`.

use super::links;
use std::fmt::Display;

/// `[label](url)` becomes an anchor; everything else is escaped.
pub fn inline<T: Display>(s: T) -> askama::Result<String> {
    Ok(links::inline(&s.to_string()))
}

/// Non-blank items through [`inline`], joined by `sep`.
pub fn join_links<'a, T, S>(items: impl IntoIterator<Item = &'a T>, sep: S) -> askama::Result<String>
where
    T: AsRef<str> + ?Sized + 'a,
    S: AsRef<str>,
{
    Ok(items
        .into_iter()
        .map(<T as AsRef<str>>::as_ref)
        .filter(|s| !s.trim().is_empty())
        .map(links::inline)
        .collect::<Vec<_>>()
        .join(sep.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::Text;

    #[test]
    fn test_inline_escapes() {
        assert_eq!(inline("a < b").unwrap(), "a &lt; b");
    }

    #[test]
    fn test_join_links_skips_blank() {
        let items = [Text::from("Berlin"), Text::from(" "), Text::from("[x](https://x.dev)")];
        assert_eq!(
            join_links(&items, " — ").unwrap(),
            r#"Berlin — <a href="https://x.dev">x</a>"#
        );
        assert_eq!(join_links(&[Text::from("")], ", ").unwrap(), "");
    }
}
