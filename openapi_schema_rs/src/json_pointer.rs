//! JSON Pointer paths (RFC 6901) into the generated schema document.
//!
//! Used to report where in the document an unsupported type would have been.

use std::borrow::Cow;

/// Escapes one reference token: `~` becomes `~0`, then `/` becomes `~1`.
fn escape(token: &str) -> Cow<'_, str> {
    if token.contains(['~', '/']) {
        Cow::Owned(token.replace('~', "~0").replace('/', "~1"))
    } else {
        Cow::Borrowed(token)
    }
}

/// Returns `parent` extended by one reference token.
#[must_use]
pub fn child(parent: &str, token: &str) -> String {
    let escaped: Cow<'_, str> = escape(token);
    let mut path: String = String::with_capacity(parent.len() + 1 + escaped.len());
    path.push_str(parent);
    path.push('/');
    path.push_str(&escaped);
    path
}
