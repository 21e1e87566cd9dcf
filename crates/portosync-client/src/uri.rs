//! Request URI assembly

use portosync_core::{Error, Result};
use url::Url;

/// Parse `base` and append `params` as a percent-encoded query string.
///
/// No parameters means no query at all (`.../holidays`, never
/// `.../holidays?`). A base that does not parse is a
/// [`Error::MalformedRequest`].
pub fn build_uri<I, K, V>(base: &str, params: I) -> Result<Url>
where
  I: IntoIterator<Item = (K, V)>,
  K: AsRef<str>,
  V: AsRef<str>,
{
  let mut url = Url::parse(base)
    .map_err(|source| Error::MalformedRequest { uri: base.to_string(), source })?;

  let mut params = params.into_iter().peekable();
  if params.peek().is_some() {
    let mut query = url.query_pairs_mut();
    for (name, value) in params {
      query.append_pair(name.as_ref(), value.as_ref());
    }
  }

  Ok(url)
}
