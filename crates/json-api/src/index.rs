//! Landing page

use salvo::{prelude::*, writing::Text};

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Serves the static landing page.
#[handler]
pub(crate) async fn handler(res: &mut Response) {
    res.render(Text::Html(INDEX_HTML));
}
